//! Read API
//!
//! Serves the latest [`crate::snapshot::NodeSnapshot`] as JSON over a tiny
//! tokio-based HTTP/1.1 listener.

pub mod response;
pub mod server;

pub use response::NodesResponse;
pub use server::{ApiServer, ApiState, HttpResponse, MAX_REQUEST_HEAD_BYTES, route};
