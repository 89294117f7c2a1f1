// nodescrape: relay bandwidth poller
//
// Polls the source page every 30 minutes, keeps the nodes whose bandwidth
// exceeds the threshold and serves them on GET /nodes.
//
// Usage:
//   nodescrape [SOURCE_URL]

use anyhow::{Result, bail};
use nodescrape::{ApiServer, ApiState, HttpFetcher, Poller, ScrapeConfig, SnapshotStore};
use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// At most one positional argument: the source URL
fn parse_source_arg(mut args: impl Iterator<Item = String>) -> Result<Option<String>> {
    let source = args.next();
    if let Some(extra) = args.next() {
        bail!("Unexpected argument '{extra}'\nUsage: nodescrape [SOURCE_URL]");
    }
    Ok(source)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix
async fn wait_for_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => tracing::info!("Received SIGINT, shutting down"),
                    _ = term.recv() => tracing::info!("Received SIGTERM, shutting down"),
                }
                return;
            }
            Err(e) => tracing::warn!("Cannot listen for SIGTERM: {e}"),
        }
    }
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received SIGINT, shutting down"),
        Err(e) => tracing::warn!("Cannot listen for Ctrl-C: {e}"),
    }
}

fn shutdown_signal(mut rx: watch::Receiver<bool>) -> impl Future<Output = ()> {
    async move {
        loop {
            if *rx.borrow_and_update() {
                break;
            }
            // A closed channel also means shutdown
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut builder = ScrapeConfig::builder();
    if let Some(source) = parse_source_arg(std::env::args().skip(1))? {
        builder = builder.source_url(source);
    }
    let config = builder.build()?;

    let store = Arc::new(SnapshotStore::new());
    let server = ApiServer::bind(
        config.listen_addr(),
        ApiState::new(Arc::clone(&store), config.threshold_mbps()),
    )
    .await?;
    let poller = Poller::new(HttpFetcher::from_config(&config), Arc::clone(&store), &config);

    let (stop_tx, stop_rx) = watch::channel(false);
    let poll_task = tokio::spawn(poller.run(shutdown_signal(stop_rx.clone())));
    let server_task = tokio::spawn(server.serve(shutdown_signal(stop_rx)));

    wait_for_signal().await;
    let _ = stop_tx.send(true);

    if let Err(e) = poll_task.await {
        tracing::warn!("Poller task ended abnormally: {e}");
    }
    match server_task.await {
        Ok(result) => result?,
        Err(e) => tracing::warn!("Server task ended abnormally: {e}"),
    }
    Ok(())
}
