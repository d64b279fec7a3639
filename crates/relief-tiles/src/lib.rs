//! Slippy-map tile addressing: locating the 2x2 block around a point and
//! building raster URLs for it.
#![forbid(unsafe_code)]

mod endpoints;
mod error;
mod locate;
mod tile;

pub use endpoints::TileEndpoints;
pub use error::ConfigError;
pub use locate::{MAX_LATITUDE, MAX_ZOOM, locate_block, validate_point};
pub use tile::{BLOCK_LEN, Tile, TileBlock};
