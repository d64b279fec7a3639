use std::f64::consts::PI;

use crate::error::ConfigError;
use crate::tile::{Tile, TileBlock};

/// Latitude limit of the Web Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;
pub const MAX_ZOOM: u8 = 22;

/// Rejects points and zoom levels that cannot address a tile block.
pub fn validate_point(longitude: f64, latitude: f64, zoom: u8) -> Result<(), ConfigError> {
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(ConfigError::InvalidLongitude(longitude));
    }
    if !latitude.is_finite() || latitude.abs() > MAX_LATITUDE {
        return Err(ConfigError::InvalidLatitude(latitude));
    }
    if zoom == 0 || zoom > MAX_ZOOM {
        return Err(ConfigError::InvalidZoom {
            zoom,
            max: MAX_ZOOM,
        });
    }
    Ok(())
}

impl Tile {
    /// Tile containing `(longitude, latitude)` at `zoom`.
    pub fn containing(longitude: f64, latitude: f64, zoom: u8) -> Result<Tile, ConfigError> {
        validate_point(longitude, latitude, zoom)?;
        let n = (1u64 << zoom) as f64;
        let sin = latitude.to_radians().sin();
        let mut x = n * (longitude / 360.0 + 0.5);
        let y = n * (0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI);
        // lon = 180 wraps around to column 0
        x %= n;
        if x < 0.0 {
            x += n;
        }
        let max = n - 1.0;
        let x = x.floor().clamp(0.0, max) as u32;
        let y = y.floor().clamp(0.0, max) as u32;
        Ok(Tile::new(x, y, zoom))
    }
}

/// 2x2 block of sibling tiles around the tile containing the point.
pub fn locate_block(longitude: f64, latitude: f64, zoom: u8) -> Result<TileBlock, ConfigError> {
    let target = Tile::containing(longitude, latitude, zoom)?;
    let block = TileBlock::around(target).ok_or(ConfigError::InvalidZoom {
        zoom,
        max: MAX_ZOOM,
    })?;
    log::debug!(
        "located tile {} (block origin {}, target index {})",
        target,
        block.origin(),
        block.target_index()
    );
    Ok(block)
}
