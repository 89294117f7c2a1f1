//! Shared configuration constants for nodescrape
//!
//! Default values used by the config builder and the binary, kept in one
//! place to avoid magic numbers.

use std::time::Duration;

/// Page polled when no source URL is given on the command line
pub const DEFAULT_SOURCE_URL: &str = "https://api.uouin.com/cloudflare.html";

/// Nodes must exceed this bandwidth (strictly) to be kept
pub const DEFAULT_THRESHOLD_MBPS: f64 = 200.0;

/// Delay between two poll cycles: 30 minutes
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Per-request timeout for the outbound fetch
///
/// Set to `None` in the config to fall back to the transport default.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Address the read API binds to
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// User agent sent with every fetch
pub const USER_AGENT: &str = concat!("nodescrape/", env!("CARGO_PKG_VERSION"));

/// Display prefix used when a table row is rendered as a record
pub const BANDWIDTH_LABEL: &str = "带宽";

/// Route served by the read API
pub const NODES_ROUTE: &str = "/nodes";
