use thiserror::Error;

/// Invalid input detected before any raster is requested.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("an API key is required to request raster tiles")]
    MissingApiKey,

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("latitude {0} is outside the Web Mercator range [-85.0511, 85.0511]")]
    InvalidLatitude(f64),

    #[error("zoom {zoom} is outside [1, {max}]")]
    InvalidZoom { zoom: u8, max: u8 },

    #[error("tile size {0} is too small (need at least 2 pixels per side)")]
    InvalidTileSize(usize),

    #[error("{name} scale must be finite and positive, got {value}")]
    InvalidScale { name: &'static str, value: f32 },
}
