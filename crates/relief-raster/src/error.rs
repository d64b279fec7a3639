use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("raster could not be decoded: {0}")]
    Decode(String),

    #[error("expected a {expected}x{expected} raster, got {width}x{height}")]
    Dimensions {
        expected: usize,
        width: u32,
        height: u32,
    },
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Decode(e.to_string())
    }
}
