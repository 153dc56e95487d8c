//! Unwrapping of the provider response envelope.
//!
//! The generated text sits at `candidates[0].content.parts[*].text`. Nothing
//! about that path or the text inside it is guaranteed, so each stage
//! reports its own [`MalformedResponse`] variant:
//!
//! ```text
//! raw body ──JSON?──> envelope ──path?──> text ──JSON?──> value ──array?──> candidates
//!            Envelope             Envelope          Content            Shape
//! ```

use serde_json::Value;

use crate::error::MalformedResponse;

/// Run every stage on a raw response body.
pub fn parse_body(raw: &str) -> Result<Vec<Value>, MalformedResponse> {
    let envelope: Value = serde_json::from_str(raw).map_err(|_| MalformedResponse::Envelope {
        envelope: raw.to_string(),
    })?;
    let text = extract_text(&envelope)?;
    parse_candidates(&text)
}

/// Concatenate the text fragments of the first candidate's content, in order.
///
/// Parts without a string `text` field are skipped.
pub fn extract_text(envelope: &Value) -> Result<String, MalformedResponse> {
    let parts = envelope
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| MalformedResponse::Envelope {
            envelope: envelope.to_string(),
        })?;

    Ok(parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect())
}

/// Parse generated text as a JSON array. Element shapes are not checked.
pub fn parse_candidates(text: &str) -> Result<Vec<Value>, MalformedResponse> {
    let value: Value = serde_json::from_str(text).map_err(|_| MalformedResponse::Content {
        text: text.to_string(),
    })?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(MalformedResponse::Shape { value: other }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
