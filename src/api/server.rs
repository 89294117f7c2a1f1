//! Minimal HTTP/1.1 server for the read API
//!
//! One request per connection, `Connection: close`. Only the request line is
//! interpreted; headers are read and discarded. `GET /nodes` answers with the
//! current snapshot as JSON, every other route or method is a 404.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use super::response::NodesResponse;
use crate::snapshot::SnapshotStore;
use crate::utils::NODES_ROUTE;

/// Upper bound for request line plus headers
pub const MAX_REQUEST_HEAD_BYTES: usize = 8 * 1024;

/// Time allowed for a client to send its request head
const REQUEST_HEAD_TIMEOUT: Duration = Duration::from_secs(10);

/// A fully rendered HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl HttpResponse {
    fn json(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type: "application/json; charset=utf-8",
            body,
        }
    }

    fn text(status: u16, reason: &'static str, body: &str) -> Self {
        Self {
            status,
            reason,
            content_type: "text/plain; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }

    fn not_found() -> Self {
        Self::text(404, "Not Found", "404 page not found\n")
    }

    fn bad_request() -> Self {
        Self::text(400, "Bad Request", "400 bad request\n")
    }

    fn internal_error() -> Self {
        Self::text(500, "Internal Server Error", "500 internal server error\n")
    }

    /// Serialize status line, headers and body
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason,
            self.content_type,
            self.body.len()
        );
        let mut out = Vec::with_capacity(head.len() + self.body.len());
        out.extend_from_slice(head.as_bytes());
        out.extend_from_slice(&self.body);
        out
    }
}

/// Shared, read-only view the handlers need
#[derive(Debug, Clone)]
pub struct ApiState {
    pub store: Arc<SnapshotStore>,
    pub threshold_mbps: f64,
}

impl ApiState {
    #[must_use]
    pub fn new(store: Arc<SnapshotStore>, threshold_mbps: f64) -> Self {
        Self {
            store,
            threshold_mbps,
        }
    }

    /// Current snapshot as the JSON response model
    #[must_use]
    pub fn nodes(&self) -> NodesResponse {
        NodesResponse::from_snapshot(self.store.snapshot(), self.threshold_mbps)
    }
}

/// Dispatch a parsed request line.
///
/// `request_line` is the first line of the request without its line ending.
#[must_use]
pub fn route(request_line: &str, state: &ApiState) -> HttpResponse {
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return HttpResponse::bad_request();
    };
    if !version.starts_with("HTTP/") || !target.starts_with('/') {
        return HttpResponse::bad_request();
    }

    let path = target.split(['?', '#']).next().unwrap_or(target);
    if method != "GET" || path != NODES_ROUTE {
        return HttpResponse::not_found();
    }

    match serde_json::to_vec(&state.nodes()) {
        Ok(mut body) => {
            body.push(b'\n');
            HttpResponse::json(body)
        }
        Err(e) => {
            warn!("Failed to serialize nodes response: {e}");
            HttpResponse::internal_error()
        }
    }
}

/// Read the request head and return its first line.
///
/// `Ok(None)` means the head was malformed, too large or never terminated.
async fn read_request_line(stream: &mut TcpStream) -> std::io::Result<Option<String>> {
    let mut reader = BufReader::new(stream).take(MAX_REQUEST_HEAD_BYTES as u64);
    let mut request_line = Vec::new();
    if reader.read_until(b'\n', &mut request_line).await? == 0 {
        return Ok(None);
    }

    let mut header = Vec::new();
    loop {
        header.clear();
        if reader.read_until(b'\n', &mut header).await? == 0 {
            // EOF or size limit before the blank line
            return Ok(None);
        }
        if header == b"\r\n" || header == b"\n" {
            break;
        }
    }

    // Non UTF-8 request line is malformed
    Ok(String::from_utf8(request_line)
        .ok()
        .map(|line| line.trim_end().to_string()))
}

async fn handle_connection(mut stream: TcpStream, peer: SocketAddr, state: ApiState) {
    let response = match tokio::time::timeout(REQUEST_HEAD_TIMEOUT, read_request_line(&mut stream)).await {
        Ok(Ok(Some(line))) => {
            debug!("{peer} {line}");
            route(&line, &state)
        }
        Ok(Ok(None)) => HttpResponse::bad_request(),
        Ok(Err(e)) => {
            debug!("Failed to read request from {peer}: {e}");
            return;
        }
        Err(_) => {
            debug!("Request head from {peer} timed out");
            HttpResponse::bad_request()
        }
    };

    if let Err(e) = stream.write_all(&response.to_bytes()).await {
        debug!("Failed to write response to {peer}: {e}");
        return;
    }
    let _ = stream.shutdown().await;
}

/// Read API listener
pub struct ApiServer {
    listener: TcpListener,
    state: ApiState,
}

impl ApiServer {
    /// Bind the listener; port 0 picks a free port
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn bind(addr: SocketAddr, state: ApiState) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind read API on {addr}"))?;
        Ok(Self { listener, state })
    }

    /// Address actually bound
    ///
    /// # Errors
    ///
    /// Propagates the OS error if the socket address cannot be queried.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("Failed to read listener address")
    }

    /// Accept connections until `shutdown` resolves
    ///
    /// # Errors
    ///
    /// Returns an error if the listener address cannot be read at startup.
    pub async fn serve<S>(self, shutdown: S) -> Result<()>
    where
        S: Future<Output = ()>,
    {
        info!("Read API listening on http://{}{NODES_ROUTE}", self.local_addr()?);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => break,
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        tokio::spawn(handle_connection(stream, peer, self.state.clone()));
                    }
                    Err(e) => warn!("Failed to accept connection: {e}"),
                },
            }
        }

        info!("Read API stopped");
        Ok(())
    }
}
