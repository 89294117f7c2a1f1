//! Records produced by the filters.

use serde::Serialize;

use super::units::Mbps;

/// Which filtering path produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSource {
    /// Structured `<table>` rows under the result anchor
    Table,
    /// Newline-delimited free text
    Lines,
}

/// A candidate record that passed the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord {
    /// Display text: the verbatim line, or `<identifier> 带宽:<bandwidth cell>`
    pub text: String,
    /// Identifier column (column 2) when the record came from a table row
    pub identifier: Option<String>,
    /// Extracted bandwidth
    pub bandwidth: Mbps,
    pub source: FilterSource,
}

impl NodeRecord {
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}
