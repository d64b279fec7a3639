use relief_geom::Vec3;
use relief_tiles::{ConfigError, TileEndpoints, validate_point};
use serde::{Deserialize, Serialize};

/// Everything needed to build one terrain block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainOptions {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(default)]
    pub api_key: String,
    /// Pixel size of the fetched elevation rasters; also the tile's world size.
    #[serde(default = "default_tile_size")]
    pub tile_size: usize,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_scale")]
    pub vertical_scale: f32,
    #[serde(default = "default_scale")]
    pub horizontal_scale: f32,
    #[serde(default)]
    pub endpoints: TileEndpoints,
}

fn default_tile_size() -> usize {
    256
}
fn default_zoom() -> u8 {
    10
}
fn default_scale() -> f32 {
    1.0
}

impl TerrainOptions {
    pub fn new(longitude: f64, latitude: f64, api_key: impl Into<String>) -> Self {
        Self {
            longitude,
            latitude,
            api_key: api_key.into(),
            tile_size: default_tile_size(),
            zoom: default_zoom(),
            vertical_scale: default_scale(),
            horizontal_scale: default_scale(),
            endpoints: TileEndpoints::default(),
        }
    }

    /// Checks every option that can be checked without touching the network.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        validate_point(self.longitude, self.latitude, self.zoom)?;
        if self.tile_size < 2 {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        for (name, value) in [
            ("vertical", self.vertical_scale),
            ("horizontal", self.horizontal_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidScale { name, value });
            }
        }
        Ok(())
    }

    /// Group scale `(horizontal, vertical, horizontal)`.
    #[inline]
    pub fn group_scale(&self) -> Vec3 {
        Vec3::new(self.horizontal_scale, self.vertical_scale, self.horizontal_scale)
    }
}
