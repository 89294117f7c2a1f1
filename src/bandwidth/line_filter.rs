//! Line-based fallback filter for free-text documents.

use super::extractor::extract_bandwidth_mbps;
use super::types::{FilterSource, NodeRecord};

/// Keep every non-empty line whose bandwidth strictly exceeds the threshold.
///
/// Lines are trimmed before extraction and kept in their trimmed form,
/// otherwise verbatim. Output order is input order.
#[must_use]
pub fn filter_lines(document: &str, threshold_mbps: f64) -> Vec<NodeRecord> {
    document
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let bandwidth = extract_bandwidth_mbps(line)?;
            bandwidth.exceeds(threshold_mbps).then(|| NodeRecord {
                text: line.to_string(),
                identifier: None,
                bandwidth,
                source: FilterSource::Lines,
            })
        })
        .collect()
}
