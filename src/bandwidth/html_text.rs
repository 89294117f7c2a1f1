//! Cell text cleanup for table rows.
//!
//! Tags are stripped with a regex and only six entities are decoded. Anything
//! else (numeric references, named entities beyond the fixed set) is left as
//! written.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("BUG: hardcoded tag regex is statically valid"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(nbsp|amp|lt|gt|#39|quot);")
        .expect("BUG: hardcoded entity regex is statically valid")
});

/// Remove every `<...>` tag from the fragment
#[must_use]
pub fn strip_tags(fragment: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(fragment, "")
}

/// Decode `&nbsp;`, `&amp;`, `&lt;`, `&gt;`, `&#39;` and `&quot;` in one pass
///
/// Single pass means `&amp;lt;` decodes to `&lt;`, not `<`.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY_RE.replace_all(text, |caps: &regex::Captures| match &caps[1] {
        "nbsp" => " ",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "#39" => "'",
        _ => "\"",
    })
}

/// Strip tags, decode the fixed entity set, then trim
#[must_use]
pub fn cell_text(cell_html: &str) -> String {
    let stripped = strip_tags(cell_html);
    decode_entities(&stripped).trim().to_string()
}
