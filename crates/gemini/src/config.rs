use std::fmt;
use std::time::Duration;

/// Base URL of the model-scoped REST API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Stable model alias, so deprecations of pinned versions do not break calls.
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
/// Upper bound on a single generation round-trip.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Sampling temperature: varied suggestions without losing the JSON format.
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Request header carrying the API key. Keys are never sent in the query
/// string or body.
pub const API_KEY_HEADER: &str = "x-goog-api-key";
/// MIME type requested for the generated text.
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Upstream client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    /// Application-settings API key. Takes precedence over the environment
    /// fallbacks in [`crate::credentials`].
    pub api_key: Option<String>,
    /// Base URL; the model and action are appended per call.
    pub api_base: String,
    /// Model name, e.g. `gemini-flash-latest`.
    pub model: String,
    /// Per-call timeout.
    pub timeout: Duration,
    /// Sampling temperature sent in `generationConfig`.
    pub temperature: f64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GeminiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                   |
    /// |----------------------------|-------------------------------------------|
    /// | `TRIPGENIE_GEMINI_API_KEY` | unset (see [`crate::credentials`])        |
    /// | `GEMINI_API_BASE`          | [`DEFAULT_API_BASE`]                      |
    /// | `GEMINI_MODEL`             | [`DEFAULT_MODEL`]                         |
    ///
    /// The timeout and temperature are fixed by the upstream contract.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let defaults = Self::default();
        Self {
            api_key: non_empty("TRIPGENIE_GEMINI_API_KEY"),
            api_base: non_empty("GEMINI_API_BASE").unwrap_or(defaults.api_base),
            model: non_empty("GEMINI_MODEL").unwrap_or(defaults.model),
            ..defaults
        }
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

// Hand-written so the key never reaches logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_model_scoped() {
        let config = GeminiConfig::default();
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-flash-latest:generateContent"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = GeminiConfig {
            api_base: "http://127.0.0.1:9999/models/".to_string(),
            model: "test-model".to_string(),
            ..GeminiConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9999/models/test-model:generateContent"
        );
    }

    #[test]
    fn defaults_match_upstream_contract() {
        let config = GeminiConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.temperature, 0.8);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = GeminiConfig {
            api_key: Some("super-secret".to_string()),
            ..GeminiConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
