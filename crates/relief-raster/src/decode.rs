use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::error::RasterError;
use crate::fetch::{RasterFetcher, redact_url};
use crate::grid::ElevationGrid;

/// Height in meters for one RGBA pixel of the elevation raster.
///
/// The channel sum is exact in integers; scaling and offset happen in `f64`
/// before the value is stored as `f32`.
#[inline]
pub fn elevation_height(r: u8, g: u8, b: u8, a: u8) -> f32 {
    let (r, g, b, a) = (u64::from(r), u64::from(g), u64::from(b), u64::from(a));
    let sum = r * a * a + g * a + b;
    (-10000.0 + sum as f64 * 0.1) as f32
}

pub fn decode_raster(bytes: &[u8]) -> Result<RgbaImage, RasterError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

pub fn fetch_raster<F: RasterFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<RgbaImage, RasterError> {
    let bytes = fetcher.fetch(url)?;
    let img = decode_raster(&bytes)?;
    log::debug!(
        "decoded {} as {}x{}",
        redact_url(url),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Decodes every pixel of a square `tile_size` raster into meters, row-major.
pub fn decode_elevation(img: &RgbaImage, tile_size: usize) -> Result<ElevationGrid, RasterError> {
    let (width, height) = img.dimensions();
    if width as usize != tile_size || height as usize != tile_size {
        return Err(RasterError::Dimensions {
            expected: tile_size,
            width,
            height,
        });
    }
    let samples = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            elevation_height(r, g, b, a)
        })
        .collect();
    ElevationGrid::new(tile_size, samples)
}

/// Satellite imagery used as a surface color map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub pixels: Vec<u8>,
}

impl Texture {
    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

pub fn decode_texture(img: RgbaImage, name: impl Into<String>) -> Texture {
    let (width, height) = img.dimensions();
    Texture {
        name: name.into(),
        width,
        height,
        pixels: img.into_raw(),
    }
}
