use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use log::{debug, warn};

use crate::source::{ContentFetcher, FetchError, SampleCatalog};

const PLAYLIST_EXTENSIONS: [&str; 2] = ["m3u", "m3u8"];

fn is_playlist_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|x| x.to_str())
        .map(|x| {
            PLAYLIST_EXTENSIONS
                .iter()
                .any(|ext| x.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Playlists stored as plain files in one directory, addressed by file name.
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, identifier: &str) -> Result<PathBuf, FetchError> {
        // a bare file name, never a path out of the directory
        let is_bare_name = !identifier.is_empty()
            && identifier != ".."
            && !identifier.contains(['/', '\\']);

        if !is_bare_name || !is_playlist_file(identifier) {
            return Err(FetchError::InvalidSample(identifier.to_owned()));
        }

        Ok(self.root.join(identifier))
    }
}

#[async_trait]
impl SampleCatalog for DirectoryCatalog {
    async fn list_available(&self) -> Vec<String> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(v) => v,
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    debug!("Sample directory {} does not exist", self.root.display());
                } else {
                    warn!("Failed to read {}: {}", self.root.display(), e);
                }
                return Vec::new();
            }
        };

        let mut result = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(v)) => v,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read {}: {}", self.root.display(), e);
                    break;
                }
            };

            let is_file = entry.file_type().await.map(|x| x.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }

            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str()
                && is_playlist_file(name)
            {
                result.push(name.to_owned());
            }
        }

        result.sort();
        result
    }
}

#[async_trait]
impl ContentFetcher for DirectoryCatalog {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let path = self.resolve(locator)?;
        let bytes = tokio::fs::read(&path).await?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
