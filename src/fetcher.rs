use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::data_models::FetchedPage;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Outbound GET capability used by the handlers.
///
/// Implementations return whatever status the server answered with; deciding
/// whether that status is acceptable is left to the caller.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// reqwest-backed fetcher. Every request carries the configured `User-Agent`
/// and is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<HttpFetcher, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .timeout(timeout)
            .build()?;
        Ok(HttpFetcher { client })
    }

    pub fn from_config(config: &Config) -> Result<HttpFetcher, FetchError> {
        Self::new(&config.user_agent, config.fetch_timeout)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let res = self.client.get(parsed).send().await?;
        let status = res.status();
        let body = res.text().await?;
        log::debug!("fetched {url} ({status}, {} bytes)", body.len());
        Ok(FetchedPage::new(status, body))
    }
}
