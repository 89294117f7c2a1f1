//! Bandwidth extraction and filtering engine
//!
//! Pure, synchronous text mining over a fetched page. Nothing here holds
//! mutable state; the regex patterns are compiled once and shared read-only,
//! so every function is safe to call concurrently.
//!
//! Data flow: document → [`filter_nodes`] → table rows or lines →
//! [`extract_bandwidth_mbps`] → [`to_mbps`] → ordered records.

pub mod extractor;
pub mod html_text;
pub mod line_filter;
pub mod orchestrator;
pub mod table_filter;
pub mod types;
pub mod units;

pub use extractor::{extract_bandwidth_mbps, extract_keyword_form, extract_token_form};
pub use line_filter::filter_lines;
pub use orchestrator::{filter_node_texts, filter_nodes};
pub use table_filter::filter_table_rows;
pub use types::{FilterSource, NodeRecord};
pub use units::{BandwidthUnit, Mbps, to_mbps};
