//! JSON body returned by the read API

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::snapshot::NodeSnapshot;

/// `GET /nodes` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodesResponse {
    pub count: usize,
    pub threshold_m: f64,
    /// RFC 3339 timestamp of the last poll, `null` before the first one
    pub updated_at: Option<String>,
    pub last_error: String,
    pub nodes: Vec<String>,
}

impl NodesResponse {
    #[must_use]
    pub fn from_snapshot(snapshot: NodeSnapshot, threshold_mbps: f64) -> Self {
        Self {
            count: snapshot.nodes.len(),
            threshold_m: threshold_mbps,
            updated_at: snapshot
                .updated_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            last_error: snapshot.last_error,
            nodes: snapshot.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_from_snapshot_formats_timestamp() {
        let snapshot = NodeSnapshot {
            nodes: vec!["1.1.1.1 带宽:250M".into()],
            updated_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).single(),
            last_error: String::new(),
        };
        let body = NodesResponse::from_snapshot(snapshot, 200.0);
        assert_eq!(body.count, 1);
        assert_eq!(body.updated_at.as_deref(), Some("2026-01-02T03:04:05Z"));

        let json = serde_json::to_value(&body).expect("serializable");
        assert_eq!(json["threshold_m"], 200.0);
        assert_eq!(json["last_error"], "");
        assert_eq!(json["nodes"][0], "1.1.1.1 带宽:250M");
    }

    #[test]
    fn test_never_polled_has_null_timestamp() {
        let body = NodesResponse::from_snapshot(NodeSnapshot::default(), 50.0);
        let json = serde_json::to_value(&body).expect("serializable");
        assert!(json["updated_at"].is_null());
        assert_eq!(json["count"], 0);
    }
}
