//! Poll cycle behavior with a scripted fetcher

mod common;

use common::{ScriptedFetcher, create_result_page};
use nodescrape::{PollOutcome, Poller, ScrapeConfig, SnapshotStore};
use std::sync::Arc;
use std::time::Duration;

fn config() -> ScrapeConfig {
    ScrapeConfig::builder()
        .source_url("http://relay.test/list")
        .poll_interval(Duration::from_millis(20))
        .build()
        .expect("valid config")
}

#[tokio::test]
async fn test_successful_poll_commits_records() {
    let page = create_result_page(&[("1.1.1.1", "250M"), ("2.2.2.2", "150M"), ("3.3.3.3", "0.5G")]);
    let fetcher = ScriptedFetcher::new(vec![Some(&page)]);
    let store = Arc::new(SnapshotStore::new());
    let poller = Poller::new(fetcher, Arc::clone(&store), &config());

    assert_eq!(poller.run_once().await, PollOutcome::Updated { count: 2 });

    let snap = store.snapshot();
    assert_eq!(snap.nodes, vec!["1.1.1.1 带宽:250M", "3.3.3.3 带宽:0.5G"]);
    assert!(snap.updated_at.is_some());
    assert_eq!(snap.last_error, "");
}

#[tokio::test]
async fn test_failed_poll_keeps_previous_records() {
    let fetcher = ScriptedFetcher::new(vec![Some("a bw=300m\n"), None]);
    let store = Arc::new(SnapshotStore::new());
    let poller = Poller::new(fetcher, Arc::clone(&store), &config());

    poller.run_once().await;
    let first = store.snapshot();

    let outcome = poller.run_once().await;
    assert!(matches!(outcome, PollOutcome::Failed { .. }));

    let second = store.snapshot();
    assert_eq!(second.nodes, vec!["a bw=300m"]);
    assert!(second.has_error());
    assert!(second.last_error.contains("relay.test"));
    assert!(second.updated_at >= first.updated_at);
}

#[tokio::test]
async fn test_empty_result_is_a_success() {
    let fetcher = ScriptedFetcher::new(vec![Some("nothing here\n")]);
    let store = Arc::new(SnapshotStore::new());
    let poller = Poller::new(fetcher, Arc::clone(&store), &config());

    assert_eq!(poller.run_once().await, PollOutcome::Updated { count: 0 });
    let snap = store.snapshot();
    assert!(snap.nodes.is_empty());
    assert!(!snap.has_error());
}

#[tokio::test]
async fn test_run_polls_immediately_and_repeats_until_shutdown() {
    let fetcher = Arc::new(ScriptedFetcher::new(vec![
        Some("a 300m"),
        Some("b 400m"),
        Some("c 500m"),
        Some("d 600m"),
        Some("e 700m"),
    ]));
    let store = Arc::new(SnapshotStore::new());
    let poller = Poller::new(Arc::clone(&fetcher), Arc::clone(&store), &config());

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let task = tokio::spawn(poller.run(async move {
        let _ = rx.await;
    }));

    tokio::time::sleep(Duration::from_millis(70)).await;
    tx.send(()).expect("poller still running");
    tokio::time::timeout(Duration::from_secs(2), task)
        .await
        .expect("poller stops on shutdown")
        .expect("poller task does not panic");

    assert!(fetcher.calls() >= 2, "expected repeated polls, got {}", fetcher.calls());
    assert_eq!(store.snapshot().nodes.len(), 1);
}

#[tokio::test]
async fn test_ready_shutdown_stops_loop() {
    let fetcher = ScriptedFetcher::new(vec![Some("a 300m")]);
    let store = Arc::new(SnapshotStore::new());
    let poller = Poller::new(fetcher, store, &config());

    tokio::time::timeout(Duration::from_secs(2), poller.run(async {}))
        .await
        .expect("ready shutdown stops the loop");
}
