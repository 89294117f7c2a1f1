//! Bandwidth extraction from a single span of text.
//!
//! Source rows mix explicit labels (`带宽:250M`, `bandwidth=0.5G`) with bare
//! shorthand tokens (`250M`) separated by arbitrary punctuation. Extraction
//! runs two strategies in strict priority order:
//!
//! 1. **Keyword form**: a label from the synonym set followed by an optional
//!    `:`/`=` separator, a decimal number and a unit letter. First match wins.
//! 2. **Token form**: the span is split on whitespace, `,`, `|` and `;`; the
//!    first token that is entirely `<number><unit>[bps]` wins.

use regex::Regex;
use std::sync::LazyLock;

use super::units::{Mbps, to_mbps};

// ============================================================================
// Static Patterns (compiled once at first use)
// ============================================================================

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:带宽|bandwidth|bw)\s*[:=]?\s*([0-9]+(?:\.[0-9]+)?)\s*([mg])(?:bps)?")
        .expect("BUG: hardcoded keyword regex is statically valid")
});

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*([mg])(?:bps)?$")
        .expect("BUG: hardcoded token regex is statically valid")
});

static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s,|;]+").expect("BUG: hardcoded split regex is statically valid")
});

/// Extract the bandwidth of a line or cell, normalized to Mbps.
///
/// Returns `None` when neither the keyword form nor the token form matches.
/// The function is pure: the same span always yields the same result.
#[must_use]
pub fn extract_bandwidth_mbps(span: &str) -> Option<Mbps> {
    extract_keyword_form(span).or_else(|| extract_token_form(span))
}

/// Labeled form, e.g. `bw: 300 Mbps`
#[must_use]
pub fn extract_keyword_form(span: &str) -> Option<Mbps> {
    let caps = KEYWORD_RE.captures(span)?;
    to_mbps(&caps[1], &caps[2])
}

/// Bare shorthand form, e.g. `node|0.3g`
#[must_use]
pub fn extract_token_form(span: &str) -> Option<Mbps> {
    SPLIT_RE
        .split(span)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .find_map(|token| {
            let caps = TOKEN_RE.captures(token)?;
            to_mbps(&caps[1], &caps[2])
        })
}
