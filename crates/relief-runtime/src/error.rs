use relief_raster::RasterError;
use relief_tiles::{ConfigError, Tile};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("invalid terrain configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("tile {tile}: {source}")]
    Tile { tile: Tile, source: RasterError },

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("terrain build job panicked")]
    JobPanicked,
}
