//! Terrain build pipeline: validation, concurrent raster acquisition, per-tile
//! meshing and assembly.
#![forbid(unsafe_code)]

mod acquire;
mod error;
mod fanout;
mod job;
mod options;
mod pipeline;

pub use acquire::{acquire_elevation, acquire_textures};
pub use error::TerrainError;
pub use job::{TerrainJob, spawn_build};
pub use options::TerrainOptions;
pub use pipeline::{BuildTimings, Terrain, build_terrain, load_terrain};
