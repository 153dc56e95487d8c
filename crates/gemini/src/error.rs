//! Upstream failure taxonomy.

use serde_json::Value;

/// Why a generation call produced no candidates.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// No API key could be resolved. Raised before any network call.
    #[error("Gemini API key is not configured")]
    Configuration,

    /// Transport failure or non-2xx status. The underlying transport error
    /// is logged, never carried.
    #[error("Error calling Gemini API{}", status_suffix(.status))]
    UpstreamCallFailed {
        /// HTTP status, when the upstream answered at all.
        status: Option<u16>,
    },

    /// The upstream answered 2xx but the payload did not have the expected shape.
    #[error(transparent)]
    BadUpstreamResponse(#[from] MalformedResponse),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

/// The stage at which an upstream payload stopped matching expectations.
///
/// Each variant carries the raw payload of its stage for operator
/// debugging. The envelope never contains the API key.
#[derive(Debug, thiserror::Error)]
pub enum MalformedResponse {
    /// The body was not JSON, or the `candidates[0].content.parts` path is missing.
    #[error("Unexpected Gemini response format: {envelope}")]
    Envelope { envelope: String },

    /// The concatenated text parts are not valid JSON.
    #[error("Gemini response was not valid JSON: {text}")]
    Content { text: String },

    /// The text parsed as JSON, but not as an array.
    #[error("Gemini response JSON is not a list: {value}")]
    Shape { value: Value },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn call_failed_message_embeds_status_when_known() {
        let err = UpstreamError::UpstreamCallFailed { status: Some(503) };
        assert_eq!(err.to_string(), "Error calling Gemini API (HTTP 503)");

        let err = UpstreamError::UpstreamCallFailed { status: None };
        assert_eq!(err.to_string(), "Error calling Gemini API");
    }

    #[test]
    fn bad_response_message_carries_raw_payload() {
        let err = UpstreamError::from(MalformedResponse::Content {
            text: "[{\"name\": \"Ro".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Gemini response was not valid JSON: [{\"name\": \"Ro"
        );

        let err = UpstreamError::from(MalformedResponse::Shape {
            value: json!({"name": "Rome"}),
        });
        assert!(err.to_string().contains("not a list"));
        assert!(err.to_string().contains("Rome"));
    }
}
