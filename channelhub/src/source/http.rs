use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Proxy};

use crate::{
    HttpConfig,
    source::{ContentFetcher, FetchError},
};

const DEFAULT_TIMEOUT: u64 = 30; // 30s

pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder =
        Client::builder().timeout(Duration::from_secs(config.timeout.unwrap_or(DEFAULT_TIMEOUT)));

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent)
    }

    if let Some(proxy) = &config.proxy {
        info!("With proxy: {}", proxy);
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    builder.build()
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", locator);
        let response = self.client.get(locator).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
