use std::{error::Error, fmt::Display, io, sync::Arc};

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

mod catalog;
mod http;
pub use catalog::*;
pub use http::*;

#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status(StatusCode),
    Io(io::Error),
    InvalidSample(String),
    UnsupportedLocator(String),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(e) => e.fmt(f),
            Self::Status(status) => write!(f, "Upstream responded with {}", status),
            Self::Io(e) => e.fmt(f),
            Self::InvalidSample(identifier) => write!(f, "Invalid sample: {}", identifier),
            Self::UnsupportedLocator(locator) => write!(f, "Unsupported locator: {}", locator),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value)
    }
}

impl From<io::Error> for FetchError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Retrieves playlist text for a locator. Called once per import, no retry.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError>;
}

/// Lists the playlist identifiers available locally.
#[async_trait]
pub trait SampleCatalog: Send + Sync {
    async fn list_available(&self) -> Vec<String>;
}

/// Sends `http://` and `https://` locators upstream, treats anything that is
/// not a url as a sample identifier.
pub struct SourceFetcher {
    http: HttpFetcher,
    samples: Arc<DirectoryCatalog>,
}

impl SourceFetcher {
    pub fn new(http: HttpFetcher, samples: Arc<DirectoryCatalog>) -> Self {
        Self { http, samples }
    }
}

#[async_trait]
impl ContentFetcher for SourceFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        match Url::parse(locator) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.http.fetch(locator).await,
            Ok(_) => Err(FetchError::UnsupportedLocator(locator.to_owned())),
            Err(_) => self.samples.fetch(locator).await,
        }
    }
}
