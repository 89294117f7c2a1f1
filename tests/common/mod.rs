//! Test utilities and helper functions for the nodescrape test suite

use mockito::{Mock, Server};
use nodescrape::fetcher::{FetchError, FetchResult, Fetcher};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One `<tr>` in the six-column layout: index, ip, three fillers, bandwidth
#[allow(dead_code)]
pub fn result_row(index: usize, ip: &str, bandwidth: &str) -> String {
    format!(
        "<tr><td>{index}</td><td>{ip}</td><td>HKG</td><td>12ms</td><td>0%</td><td>{bandwidth}</td></tr>"
    )
}

/// Page with the rows wrapped in `<div id="result"><table>...<tbody>`
#[allow(dead_code)]
pub fn create_result_page(rows: &[(&str, &str)]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (ip, bw))| result_row(i + 1, ip, bw))
        .collect::<Vec<_>>()
        .join("\n        ");
    format!(
        r#"<!DOCTYPE html>
<html lang="zh">
<head>
    <meta charset="UTF-8">
    <title>Cloudflare nodes</title>
</head>
<body>
    <table id="legend"><tbody><tr><td>not the result table</td></tr></tbody></table>
    <div id="result">
      <table class="table table-striped">
        <thead>
          <tr><th>#</th><th>IP</th><th>Line</th><th>Latency</th><th>Loss</th><th>Bandwidth</th></tr>
        </thead>
        <tbody>
        {body}
        </tbody>
      </table>
    </div>
</body>
</html>"#
    )
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Fetcher that replays scripted bodies; `None` entries fail with a bad URL error
#[allow(dead_code)]
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Option<String>>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedFetcher {
    pub fn new(responses: Vec<Option<&str>>) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|r| r.map(str::to_string))
                    .collect(),
            ),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, source: &str) -> FetchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .responses
            .lock()
            .expect("scripted fetcher lock")
            .pop_front()
            .flatten();
        next.ok_or_else(|| FetchError::InvalidUrl(source.to_string()))
    }
}
