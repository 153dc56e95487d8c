//! Lenient mapping of upstream suggestion objects onto destination drafts.
//!
//! Candidates are untyped JSON. Every candidate, however malformed, yields
//! exactly one [`DestinationDraft`]: missing or mistyped fields are defaulted,
//! over-long strings are truncated to the column limits, and every key other
//! than `name`, `description`, `country` and `city` is discarded.

use serde_json::Value;

/// Name given to a candidate with no usable `name` string.
pub const UNKNOWN_DESTINATION_NAME: &str = "Unknown destination";

/// Maximum length (in characters) of a destination name.
pub const NAME_MAX_LEN: usize = 120;
/// Maximum length (in characters) of a destination country or city.
pub const PLACE_MAX_LEN: usize = 80;

/// The persisted subset of an upstream suggestion, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationDraft {
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl DestinationDraft {
    /// Map one candidate value onto a draft. Never fails.
    ///
    /// Non-object candidates (strings, numbers, `null`, arrays) are treated
    /// as an object with no keys.
    pub fn from_candidate(candidate: &Value) -> Self {
        let text = |key: &str| candidate.get(key).and_then(Value::as_str);

        Self {
            name: text("name")
                .map(|s| truncate_chars(s, NAME_MAX_LEN))
                .unwrap_or_else(|| UNKNOWN_DESTINATION_NAME.to_string()),
            description: text("description").map(str::to_string),
            country: text("country").map(|s| truncate_chars(s, PLACE_MAX_LEN)),
            city: text("city").map(|s| truncate_chars(s, PLACE_MAX_LEN)),
        }
    }
}

/// Map every candidate, preserving order and count.
pub fn materialize_candidates(candidates: &[Value]) -> Vec<DestinationDraft> {
    candidates.iter().map(DestinationDraft::from_candidate).collect()
}

/// Keep at most `max` characters of `s`, respecting UTF-8 boundaries.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
