//! Builder for `ScrapeConfig` with validation at `build()` time

use crate::utils::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_LISTEN_ADDR, DEFAULT_POLL_INTERVAL, DEFAULT_SOURCE_URL,
    DEFAULT_THRESHOLD_MBPS, USER_AGENT,
};
use anyhow::{Context, Result, anyhow, bail};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

use super::types::ScrapeConfig;

/// Check that `source` is an absolute http(s) URL
///
/// # Errors
///
/// Returns an error if the URL does not parse or uses another scheme.
pub fn validate_source_url(source: &str) -> Result<Url> {
    let url = Url::parse(source).map_err(|e| anyhow!("Invalid source URL '{source}': {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("Unsupported URL scheme '{other}' in '{source}' (expected http or https)"),
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfigBuilder {
    source_url: String,
    threshold_mbps: f64,
    poll_interval: Duration,
    listen_addr: String,
    fetch_timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ScrapeConfigBuilder {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            threshold_mbps: DEFAULT_THRESHOLD_MBPS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            fetch_timeout: Some(DEFAULT_FETCH_TIMEOUT),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfigBuilder {
    #[must_use]
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    #[must_use]
    pub fn threshold_mbps(mut self, threshold: f64) -> Self {
        self.threshold_mbps = threshold;
        self
    }

    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }

    #[must_use]
    pub fn fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Validate and produce the config
    ///
    /// # Errors
    ///
    /// Fails on an invalid source URL, a negative or non-finite threshold,
    /// a zero poll interval or an unparseable listen address.
    pub fn build(self) -> Result<ScrapeConfig> {
        validate_source_url(&self.source_url)?;

        if !self.threshold_mbps.is_finite() || self.threshold_mbps < 0.0 {
            bail!(
                "Threshold must be a finite, non-negative Mbps value, got {}",
                self.threshold_mbps
            );
        }
        if self.poll_interval.is_zero() {
            bail!("Poll interval must be greater than zero");
        }
        if self.fetch_timeout.is_some_and(|t| t.is_zero()) {
            bail!("Fetch timeout must be greater than zero when set");
        }

        let listen_addr: SocketAddr = self
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address '{}'", self.listen_addr))?;

        Ok(ScrapeConfig {
            source_url: self.source_url,
            threshold_mbps: self.threshold_mbps,
            poll_interval: self.poll_interval,
            listen_addr,
            fetch_timeout: self.fetch_timeout,
            user_agent: self.user_agent,
        })
    }
}

impl ScrapeConfig {
    /// Start from the defaults in [`crate::utils::constants`]
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }
}
