//! HttpFetcher against a local mock server

mod common;

use common::{create_error_mock, create_html_mock, create_result_page};
use mockito::Server;
use nodescrape::{FetchError, Fetcher, HttpFetcher, ScrapeConfig};
use std::time::Duration;

fn fetcher() -> HttpFetcher {
    let config = ScrapeConfig::builder()
        .fetch_timeout(Some(Duration::from_secs(5)))
        .build()
        .expect("valid config");
    HttpFetcher::from_config(&config)
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let mut server = Server::new_async().await;
    let page = create_result_page(&[("1.1.1.1", "250M")]);
    let mock = create_html_mock(&mut server, "/cloudflare.html", &page).await;

    let body = fetcher()
        .fetch(&format!("{}/cloudflare.html", server.url()))
        .await
        .expect("fetch succeeds");

    mock.assert_async().await;
    assert_eq!(body, page);
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_header("user-agent", mockito::Matcher::Regex("^nodescrape/".into()))
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    fetcher()
        .fetch(&format!("{}/", server.url()))
        .await
        .expect("fetch succeeds");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = create_error_mock(&mut server, "/down", 503).await;

    let err = fetcher()
        .fetch(&format!("{}/down", server.url()))
        .await
        .expect_err("503 must fail");

    match err {
        FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_sending() {
    let err = fetcher().fetch("not a url").await.expect_err("must fail");
    assert!(matches!(err, FetchError::InvalidUrl(_)));
    assert!(!err.is_remote());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = fetcher()
        .fetch(&format!("http://{addr}/"))
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, FetchError::Transport { .. }));
    assert!(err.is_remote());
}
