//! Table-aware row filter.
//!
//! The result table is located with case-insensitive, dot-matches-newline
//! regex scans, not a DOM parse. Each scan takes the first matching block,
//! so nested tables or unclosed tags inside the target table can yield
//! wrong or missing rows. That fragility is accepted: behavior on partial
//! markup stays predictable and matches a plain text scan.
//!
//! Expected row shape (at least 6 `<td>` cells):
//!
//! | 1 | 2 | 3 | 4 | 5 | 6 |
//! |---|---|---|---|---|---|
//! | index | identifier | - | - | - | bandwidth |

use regex::Regex;
use std::sync::LazyLock;

use super::extractor::extract_bandwidth_mbps;
use super::html_text::cell_text;
use super::types::{FilterSource, NodeRecord};
use crate::utils::BANDWIDTH_LABEL;

/// Minimum number of cells for a row to be considered
pub const MIN_CELLS: usize = 6;

/// Zero-based position of the identifier cell
const IDENTIFIER_CELL: usize = 1;

/// Zero-based position of the bandwidth cell
const BANDWIDTH_CELL: usize = 5;

const RESULT_ANCHORS: [&str; 2] = [r#"id="result""#, "id='result'"];

// ============================================================================
// Static Patterns (compiled once at first use)
// ============================================================================

static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<table(?:\s[^>]*)?>(.*?)</table>")
        .expect("BUG: hardcoded table regex is statically valid")
});

static TBODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<tbody(?:\s[^>]*)?>(.*?)</tbody>")
        .expect("BUG: hardcoded tbody regex is statically valid")
});

static TR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<tr(?:\s[^>]*)?>(.*?)</tr>")
        .expect("BUG: hardcoded tr regex is statically valid")
});

static TD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<td(?:\s[^>]*)?>(.*?)</td>")
        .expect("BUG: hardcoded td regex is statically valid")
});

/// Slice of the document starting at the earliest result anchor, or the
/// whole document when no anchor is present
#[must_use]
pub fn result_region(document: &str) -> &str {
    RESULT_ANCHORS
        .iter()
        .filter_map(|anchor| document.find(anchor))
        .min()
        .map_or(document, |pos| &document[pos..])
}

/// Inner HTML of the first `<tbody>` of the first `<table>` in the region
fn first_tbody(region: &str) -> Option<&str> {
    let table = TABLE_RE.captures(region)?.get(1)?.as_str();
    let tbody = TBODY_RE.captures(table)?.get(1)?.as_str();
    Some(tbody)
}

/// Inner HTML of every `<td>` in the row, in document order
fn row_cells(row_html: &str) -> Vec<&str> {
    TD_RE
        .captures_iter(row_html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Turn one `<tr>` into a record if it carries an identifier and a bandwidth
/// strictly above the threshold
fn row_to_record(row_html: &str, threshold_mbps: f64) -> Option<NodeRecord> {
    let cells = row_cells(row_html);
    if cells.len() < MIN_CELLS {
        log::debug!("Skipping table row with {} cells", cells.len());
        return None;
    }

    let identifier = cell_text(cells[IDENTIFIER_CELL]);
    let bandwidth_text = cell_text(cells[BANDWIDTH_CELL]);
    if identifier.is_empty() || bandwidth_text.is_empty() {
        return None;
    }

    let bandwidth = extract_bandwidth_mbps(&bandwidth_text)?;
    if !bandwidth.exceeds(threshold_mbps) {
        return None;
    }

    Some(NodeRecord {
        text: format!("{identifier} {BANDWIDTH_LABEL}:{bandwidth_text}"),
        identifier: Some(identifier),
        bandwidth,
        source: FilterSource::Table,
    })
}

/// Filter the rows of the result table.
///
/// An empty vector means either that no usable table was found or that no
/// row qualified; callers cannot tell the two apart.
#[must_use]
pub fn filter_table_rows(document: &str, threshold_mbps: f64) -> Vec<NodeRecord> {
    let Some(tbody) = first_tbody(result_region(document)) else {
        log::debug!("No <table>/<tbody> found in result region");
        return Vec::new();
    };

    TR_RE
        .captures_iter(tbody)
        .filter_map(|caps| caps.get(1))
        .filter_map(|row| row_to_record(row.as_str(), threshold_mbps))
        .collect()
}
