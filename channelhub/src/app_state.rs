use std::sync::Arc;

use anyhow::Result;

use crate::{
    Config,
    service::PlaylistService,
    source::{DirectoryCatalog, HttpFetcher, SourceFetcher, build_http_client},
};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub playlists: PlaylistService,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let http_fetcher = HttpFetcher::new(build_http_client(&config.http)?);

        let samples = Arc::new(DirectoryCatalog::new(&config.sample_dir));

        let playlists = PlaylistService::new(
            Arc::new(SourceFetcher::new(http_fetcher, samples.clone())),
            samples,
        );

        Ok(Self::with_service(config, playlists))
    }

    pub fn with_service(config: Config, playlists: PlaylistService) -> Self {
        Self {
            config: Arc::new(config),
            playlists,
        }
    }
}
