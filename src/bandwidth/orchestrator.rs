//! Chooses between the table path and the line fallback.

use super::line_filter::filter_lines;
use super::table_filter::filter_table_rows;
use super::types::NodeRecord;

/// Filter a fetched document.
///
/// Structured table rows are authoritative when any qualify. Otherwise the
/// whole document is re-read as free text. A table whose rows all fall at or
/// below the threshold also triggers the fallback, so rows from the same
/// document may come back through the line heuristic.
#[must_use]
pub fn filter_nodes(document: &str, threshold_mbps: f64) -> Vec<NodeRecord> {
    let rows = filter_table_rows(document, threshold_mbps);
    if !rows.is_empty() {
        return rows;
    }
    log::debug!("Table path produced no records, falling back to line scan");
    filter_lines(document, threshold_mbps)
}

/// [`filter_nodes`] reduced to the display strings kept in the snapshot
#[must_use]
pub fn filter_node_texts(document: &str, threshold_mbps: f64) -> Vec<String> {
    filter_nodes(document, threshold_mbps)
        .into_iter()
        .map(NodeRecord::into_text)
        .collect()
}
