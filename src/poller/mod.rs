//! Periodic fetch-and-filter loop
//!
//! One background task owns the poll cycle: fetch, filter, commit to the
//! [`SnapshotStore`], sleep, repeat. The sleep only starts once a cycle has
//! finished, so polls never overlap. Shutdown is observed both while sleeping
//! and while a fetch is in flight.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::bandwidth::filter_nodes;
use crate::config::ScrapeConfig;
use crate::fetcher::Fetcher;
use crate::snapshot::SnapshotStore;

/// What a single poll cycle committed
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Snapshot replaced with `count` records
    Updated { count: usize },
    /// Fetch failed; previous records kept, error recorded
    Failed { error: String },
}

/// Fetches the source page on a fixed interval and publishes the filtered nodes
pub struct Poller<F: Fetcher> {
    fetcher: F,
    store: Arc<SnapshotStore>,
    source_url: String,
    threshold_mbps: f64,
    interval: Duration,
}

impl<F: Fetcher> Poller<F> {
    pub fn new(fetcher: F, store: Arc<SnapshotStore>, config: &ScrapeConfig) -> Self {
        Self {
            fetcher,
            store,
            source_url: config.source_url().to_string(),
            threshold_mbps: config.threshold_mbps(),
            interval: config.poll_interval(),
        }
    }

    /// Run one fetch-and-filter cycle and commit its result
    pub async fn run_once(&self) -> PollOutcome {
        info!("Fetching node list from {}", self.source_url);

        let document = match self.fetcher.fetch(&self.source_url).await {
            Ok(body) => body,
            Err(e) => {
                let error = e.to_string();
                if e.is_remote() {
                    warn!("Failed to fetch node list: {error}");
                } else {
                    warn!("Source is misconfigured, fetch not attempted: {error}");
                }
                self.store.record_failure(Utc::now(), error.clone());
                return PollOutcome::Failed { error };
            }
        };

        let records = filter_nodes(&document, self.threshold_mbps);
        if records.is_empty() {
            info!("No node above {} Mbps", self.threshold_mbps);
        }
        for record in &records {
            info!("{}", record.text);
            debug!("  {} via {:?}", record.bandwidth, record.source);
        }

        let nodes: Vec<String> = records.into_iter().map(|r| r.text).collect();
        let count = nodes.len();
        self.store.record_success(nodes, Utc::now());
        info!("Poll complete: {count} node(s) above {} Mbps", self.threshold_mbps);

        PollOutcome::Updated { count }
    }

    /// Poll immediately, then once per interval until `shutdown` resolves
    pub async fn run<S>(self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = self.run_once() => {}
            }
            tokio::select! {
                () = &mut shutdown => break,
                () = tokio::time::sleep(self.interval) => {}
            }
        }
        info!("Poller stopped");
    }
}
