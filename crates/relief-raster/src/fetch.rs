use std::time::Duration;

use crate::error::RasterError;

/// Source of raw raster bytes for a URL.
pub trait RasterFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, RasterError>;
}

impl<T: RasterFetcher + ?Sized> RasterFetcher for &T {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, RasterError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher. Non-success statuses are errors.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, RasterError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, RasterError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RasterError::Fetch {
                url: String::new(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl RasterFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, RasterError> {
        let shown = redact_url(url);
        let fail = |e: reqwest::Error| RasterError::Fetch {
            url: shown.clone(),
            reason: e.without_url().to_string(),
        };
        let response = self.client.get(url).send().map_err(fail)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RasterError::Status {
                url: shown.clone(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().map_err(fail)?;
        log::debug!("fetched {} ({} bytes)", shown, bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Strips the query string so access tokens never reach logs or errors.
pub fn redact_url(url: &str) -> String {
    match url.split_once('?') {
        Some((path, _)) => format!("{path}?<redacted>"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_drops_query() {
        assert_eq!(
            redact_url("https://h/10/1/2.pngraw?access_token=secret"),
            "https://h/10/1/2.pngraw?<redacted>"
        );
        assert_eq!(redact_url("file:///tmp/a.png"), "file:///tmp/a.png");
    }
}
