use std::sync::Arc;
use std::thread::{self, JoinHandle};

use relief_raster::RasterFetcher;

use crate::error::TerrainError;
use crate::options::TerrainOptions;
use crate::pipeline::{Terrain, build_terrain};

/// Handle to a terrain build running on a background thread.
pub struct TerrainJob {
    handle: JoinHandle<Result<Terrain, TerrainError>>,
}

impl TerrainJob {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the single result of the build.
    pub fn join(self) -> Result<Terrain, TerrainError> {
        match self.handle.join() {
            Ok(res) => res,
            Err(_) => Err(TerrainError::JobPanicked),
        }
    }
}

pub fn spawn_build<F>(opts: TerrainOptions, fetcher: Arc<F>) -> TerrainJob
where
    F: RasterFetcher + ?Sized + 'static,
{
    let handle = thread::spawn(move || build_terrain(&opts, fetcher.as_ref()));
    TerrainJob { handle }
}
