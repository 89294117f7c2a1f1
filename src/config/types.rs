//! Core configuration type for the node poller
//!
//! `ScrapeConfig` is built through [`super::ScrapeConfigBuilder`], which
//! validates every field once so the poller and server can trust them.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Runtime configuration for polling, filtering and serving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Page polled every cycle.
    ///
    /// **INVARIANT:** absolute http(s) URL (checked in builder).
    pub(crate) source_url: String,

    /// Records must exceed this bandwidth (Mbps), strictly
    pub(crate) threshold_mbps: f64,

    /// Delay between the end of one poll and the start of the next
    pub(crate) poll_interval: Duration,

    pub(crate) listen_addr: SocketAddr,

    /// Per-request fetch timeout, `None` leaves the transport default
    pub(crate) fetch_timeout: Option<Duration>,

    pub(crate) user_agent: String,
}

impl ScrapeConfig {
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    #[must_use]
    pub fn threshold_mbps(&self) -> f64 {
        self.threshold_mbps
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
