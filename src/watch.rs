use std::error::Error;
use std::path::Path;
use std::time::Duration;

use crossbeam_channel::unbounded;
use notify::{EventKind, RecursiveMode, Watcher};
use relief_raster::RasterFetcher;

use crate::cli::BuildArgs;
use crate::{config, export};

const SETTLE: Duration = Duration::from_millis(200);

/// Blocks forever, rebuilding and re-exporting each time `path` changes.
/// Build failures are logged and the previous output is left in place.
pub fn rebuild_on_change<F: RasterFetcher + ?Sized>(
    path: &Path,
    args: &BuildArgs,
    fetcher: &F,
) -> Result<(), Box<dyn Error>> {
    let (tx, rx) = unbounded::<()>();
    let mut watcher =
        notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                        let _ = tx.send(());
                    }
                    _ => {}
                }
            }
        })?;
    watcher.watch(path, RecursiveMode::NonRecursive)?;
    log::info!("watching {} for changes", path.display());

    while rx.recv().is_ok() {
        // editors tend to emit several events per save
        std::thread::sleep(SETTLE);
        while rx.try_recv().is_ok() {}

        log::info!("{} changed, rebuilding", path.display());
        let res = config::resolve(args).and_then(|opts| {
            let terrain = relief_runtime::build_terrain(&opts, fetcher)?;
            export::write_terrain(&terrain, &args.out)
        });
        if let Err(e) = res {
            log::error!("rebuild failed: {}", e);
        }
    }
    Ok(())
}
