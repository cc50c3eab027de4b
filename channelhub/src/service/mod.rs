use std::{error::Error, fmt::Display, sync::Arc};

use log::info;
use m3u_channels::{Channel, ParseError, Playlist};
use tokio::task::JoinError;

use crate::source::{ContentFetcher, FetchError, SampleCatalog};

#[derive(Debug)]
pub enum ImportError {
    Fetch(FetchError),
    Format(ParseError),
    Join(JoinError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "could not retrieve content: {}", e),
            Self::Format(e) => write!(f, "not a playlist: {}", e),
            Self::Join(e) => e.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::Join(e) => Some(e),
        }
    }
}

impl From<FetchError> for ImportError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

impl From<ParseError> for ImportError {
    fn from(value: ParseError) -> Self {
        Self::Format(value)
    }
}

impl From<JoinError> for ImportError {
    fn from(value: JoinError) -> Self {
        Self::Join(value)
    }
}

/// Parses on the blocking pool, large lists run to tens of thousands of lines.
pub async fn parse_playlist_async(content: String) -> Result<Playlist, ImportError> {
    Ok(tokio::task::spawn_blocking(move || m3u_channels::parse_playlist(&content)).await??)
}

pub struct PlaylistService {
    fetcher: Arc<dyn ContentFetcher>,
    catalog: Arc<dyn SampleCatalog>,
}

impl PlaylistService {
    pub fn new(fetcher: Arc<dyn ContentFetcher>, catalog: Arc<dyn SampleCatalog>) -> Self {
        Self { fetcher, catalog }
    }

    pub async fn fetch_playlist(&self, locator: &str) -> Result<Playlist, ImportError> {
        let content = self.fetcher.fetch(locator).await?;
        let playlist = parse_playlist_async(content).await?;

        info!(
            "Imported {} channels from {}",
            playlist.channels.len(),
            locator
        );
        Ok(playlist)
    }

    pub async fn fetch_and_parse(&self, locator: &str) -> Result<Vec<Channel>, ImportError> {
        Ok(self.fetch_playlist(locator).await?.channels)
    }

    pub async fn list_samples(&self) -> Vec<String> {
        self.catalog.list_available().await
    }
}
