//! Blocking HTTP downloads with polite pacing.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::geosphere::Metadata;

/// Synchronous downloader that writes responses to a save folder and
/// sleeps a random interval between requests so bulk retrievals do not
/// hammer the upstream servers.
#[derive(Debug)]
pub struct Downloader {
    client: reqwest::blocking::Client,
    savefolder: PathBuf,
    max_sleep: Duration,
}

impl Downloader {
    /// Creates a downloader saving into `savefolder`.
    pub fn new(savefolder: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            savefolder: savefolder.into(),
            max_sleep: Duration::from_secs(2),
        }
    }

    /// Sets the upper bound of the inter-request sleep.
    pub fn with_max_sleep(mut self, max_sleep: Duration) -> Self {
        self.max_sleep = max_sleep;
        self
    }

    /// The folder downloads are written into.
    pub fn savefolder(&self) -> &Path {
        &self.savefolder
    }

    /// Downloads `url` into `{savefolder}/{filename}`, creating the
    /// folder on first use. Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on transport failures,
    /// [`FetchError::Status`] on non-success responses, and
    /// [`FetchError::Io`] when the payload cannot be written.
    pub fn download(&self, url: &str, filename: &str) -> Result<PathBuf, FetchError> {
        fs::create_dir_all(&self.savefolder).map_err(|e| FetchError::Io {
            path: self.savefolder.clone(),
            reason: e.to_string(),
        })?;

        debug!(url, "requesting");
        let response = self.get_checked(url)?;
        let bytes = response.bytes().map_err(|e| FetchError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let path = self.savefolder.join(filename);
        fs::write(&path, &bytes).map_err(|e| FetchError::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), n_bytes = bytes.len(), "saved");

        self.pause();
        Ok(path)
    }

    /// Fetches and decodes a resource metadata document.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] / [`FetchError::Status`] for
    /// transport problems and [`FetchError::Json`] for undecodable
    /// payloads.
    pub fn fetch_metadata(&self, url: &str) -> Result<Metadata, FetchError> {
        let response = self.get_checked(url)?;
        let text = response.text().map_err(|e| FetchError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Metadata::from_json(&text)
    }

    fn get_checked(&self, url: &str) -> Result<reqwest::blocking::Response, FetchError> {
        let response = self.client.get(url).send().map_err(|e| FetchError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    fn pause(&self) {
        let max = self.max_sleep.as_secs_f64();
        if max <= 0.0 {
            return;
        }
        let secs = rand::rng().random_range(0.0..max);
        std::thread::sleep(Duration::from_secs_f64(secs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savefolder_is_recorded() {
        let d = Downloader::new("/tmp/boreas-test");
        assert_eq!(d.savefolder(), Path::new("/tmp/boreas-test"));
    }

    #[test]
    fn zero_sleep_returns_immediately() {
        let d = Downloader::new("/tmp/boreas-test").with_max_sleep(Duration::ZERO);
        let before = std::time::Instant::now();
        d.pause();
        assert!(before.elapsed() < Duration::from_millis(50));
    }
}
