//! Page retrieval
//!
//! The poller only depends on the [`Fetcher`] trait, so tests can script
//! responses without a network. [`HttpFetcher`] is the reqwest-backed
//! implementation used by the binary. No retries happen here; a failed
//! fetch simply ends the poll cycle.

pub mod errors;

pub use errors::{FetchError, FetchResult};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::ScrapeConfig;

/// Source of raw page text
pub trait Fetcher: Send + Sync {
    /// Fetch `source` and return its body as text
    fn fetch(&self, source: &str) -> impl Future<Output = FetchResult<String>> + Send;
}

impl<F: Fetcher> Fetcher for Arc<F> {
    fn fetch(&self, source: &str) -> impl Future<Output = FetchResult<String>> + Send {
        (**self).fetch(source)
    }
}

/// HTTP(S) fetcher over a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Option<Duration>,
    user_agent: String,
}

impl HttpFetcher {
    #[must_use]
    pub fn new(client: Client, timeout: Option<Duration>, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            timeout,
            user_agent: user_agent.into(),
        }
    }

    /// Build a fetcher from the timeout and user agent in `config`
    #[must_use]
    pub fn from_config(config: &ScrapeConfig) -> Self {
        Self::new(Client::new(), config.fetch_timeout(), config.user_agent())
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, source: &str) -> FetchResult<String> {
        let url = reqwest::Url::parse(source)
            .map_err(|_| FetchError::InvalidUrl(source.to_string()))?;

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "text/html,text/plain;q=0.9,*/*;q=0.8");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|source_err| FetchError::Transport {
            url: source.to_string(),
            source: source_err,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: source.to_string(),
            });
        }

        response.text().await.map_err(|source_err| FetchError::Body {
            url: source.to_string(),
            source: source_err,
        })
    }
}
