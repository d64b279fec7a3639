mod cli;
mod config;
mod export;
mod logging;
mod watch;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use relief_raster::HttpFetcher;
use relief_tiles::locate_block;

use crate::cli::{BuildArgs, Cli, Command, LocateArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let res = match cli.command {
        Command::Build(args) => run_build(args),
        Command::Locate(args) => run_locate(args),
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_build(args: BuildArgs) -> Result<(), Box<dyn Error>> {
    logging::init(args.log_file.as_deref())?;
    if args.watch && args.config.is_none() {
        return Err("--watch needs --config".into());
    }
    let opts = config::resolve(&args)?;
    let fetcher = HttpFetcher::new()?;

    let terrain = relief_runtime::build_terrain(&opts, &fetcher)?;
    export::write_terrain(&terrain, &args.out)?;

    if let (true, Some(path)) = (args.watch, args.config.as_deref()) {
        watch::rebuild_on_change(path, &args, &fetcher)?;
    }
    Ok(())
}

fn run_locate(args: LocateArgs) -> Result<(), Box<dyn Error>> {
    let block = locate_block(args.lon, args.lat, args.zoom)?;
    println!("target {}", block.target());
    for (i, tile) in block.iter().enumerate() {
        println!("{i}: {tile}");
    }
    Ok(())
}
