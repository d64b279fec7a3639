//! Raster acquisition and decoding: fetching tile images and turning them
//! into elevation grids and textures.
#![forbid(unsafe_code)]

mod decode;
mod error;
mod fetch;
mod grid;
mod range;

pub use decode::{
    Texture, decode_elevation, decode_raster, decode_texture, elevation_height, fetch_raster,
};
pub use error::RasterError;
pub use fetch::{HttpFetcher, RasterFetcher, redact_url};
pub use grid::ElevationGrid;
pub use range::ElevationRange;

pub use image::RgbaImage;
