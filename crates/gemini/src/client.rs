//! HTTP client for the `generateContent` endpoint.

use std::sync::Arc;

use serde_json::Value;
use tripgenie_core::generation::{build_prompt, GenerationParams};

use crate::config::{GeminiConfig, API_KEY_HEADER};
use crate::credentials::{resolve_api_key, CredentialSource, ProcessEnv};
use crate::envelope;
use crate::error::UpstreamError;
use crate::request::GenerateContentRequest;

/// Generates destination candidates via the upstream model.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    credentials: Arc<dyn CredentialSource>,
}

impl GeminiClient {
    /// Create a client whose key fallbacks come from the process environment.
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_credentials(config, Arc::new(ProcessEnv))
    }

    /// Create a client with an explicit credential source.
    pub fn with_credentials(config: GeminiConfig, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            credentials,
        }
    }

    /// Ask the model for destination suggestions and return the parsed
    /// JSON array, element shapes unchecked.
    ///
    /// The API key is resolved first; a missing key fails without any
    /// network I/O. Exactly one request is sent.
    pub async fn generate_candidates(
        &self,
        params: &GenerationParams,
    ) -> Result<Vec<Value>, UpstreamError> {
        let api_key = resolve_api_key(self.config.api_key.as_deref(), self.credentials.as_ref())?;

        let body =
            GenerateContentRequest::user_prompt(build_prompt(params), self.config.temperature);

        tracing::debug!(model = %self.config.model, "Calling generateContent");

        let response = self
            .http
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, api_key)
            .timeout(self.config.timeout)
            .json(&body)
            .send()
            .await
            .map_err(call_failed)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generateContent returned an error status");
            return Err(UpstreamError::UpstreamCallFailed {
                status: Some(status.as_u16()),
            });
        }

        let raw = response.text().await.map_err(call_failed)?;

        let candidates = envelope::parse_body(&raw).map_err(|err| {
            tracing::warn!(error = %err, "generateContent returned a malformed payload");
            UpstreamError::from(err)
        })?;

        tracing::debug!(count = candidates.len(), "Parsed destination candidates");
        Ok(candidates)
    }
}

/// Collapse a transport error into [`UpstreamError::UpstreamCallFailed`],
/// logging the detail server-side only.
fn call_failed(err: reqwest::Error) -> UpstreamError {
    let status = err.status().map(|s| s.as_u16());
    tracing::warn!(error = %err.without_url(), ?status, "generateContent call failed");
    UpstreamError::UpstreamCallFailed { status }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode, Uri};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    use super::*;
    use crate::error::MalformedResponse;

    /// What the stub upstream saw.
    #[derive(Debug, Clone)]
    struct Captured {
        path: String,
        query: Option<String>,
        api_key: Option<String>,
        body: Value,
    }

    #[derive(Clone)]
    struct Stub {
        status: StatusCode,
        body: String,
        captured: Arc<Mutex<Vec<Captured>>>,
    }

    async fn stub_handler(
        State(stub): State<Stub>,
        uri: Uri,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, String) {
        stub.captured.lock().unwrap().push(Captured {
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            api_key: headers
                .get(API_KEY_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });
        (stub.status, stub.body.clone())
    }

    /// Serve `body` with `status` on `127.0.0.1:0`; returns the config
    /// pointing at it and the capture log.
    async fn spawn_stub(status: StatusCode, body: String) -> (GeminiConfig, Arc<Mutex<Vec<Captured>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status,
            body,
            captured: Arc::clone(&captured),
        };
        let app = Router::new()
            .route("/models/{action}", post(stub_handler))
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (test_config(addr), captured)
    }

    fn test_config(addr: SocketAddr) -> GeminiConfig {
        GeminiConfig {
            api_key: Some("test-key".to_string()),
            api_base: format!("http://{addr}/models"),
            model: "gemini-test".to_string(),
            ..GeminiConfig::default()
        }
    }

    fn no_env() -> Arc<dyn CredentialSource> {
        Arc::new(HashMap::<String, String>::new())
    }

    fn params() -> GenerationParams {
        GenerationParams {
            budget: 1500.0,
            season: "spring".to_string(),
            interests: "museums,food".to_string(),
        }
    }

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        })
        .to_string()
    }

    const THREE: &str = r#"[
        {"name": "Porto", "country": "Portugal", "city": "Porto", "estimated_cost": 1200,
         "best_season": "spring", "matching_interests": ["food"], "description": "Port wine."},
        {"name": "Vienna", "country": "Austria", "city": "Vienna", "estimated_cost": 1400,
         "best_season": "spring", "matching_interests": ["museums"], "description": "Museums."},
        {"name": "Seville", "country": "Spain", "city": "Seville", "estimated_cost": 1100,
         "best_season": "spring", "matching_interests": ["food"], "description": "Tapas."}
    ]"#;

    #[tokio::test]
    async fn successful_call_returns_parsed_candidates() {
        let (config, captured) = spawn_stub(StatusCode::OK, envelope(THREE)).await;
        let client = GeminiClient::with_credentials(config, no_env());

        let candidates = client.generate_candidates(&params()).await.unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[1]["name"], "Vienna");
        assert_eq!(captured.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn request_uses_header_key_and_expected_body() {
        let (config, captured) = spawn_stub(StatusCode::OK, envelope("[]")).await;
        let client = GeminiClient::with_credentials(config, no_env());

        client.generate_candidates(&params()).await.unwrap();

        let seen = captured.lock().unwrap()[0].clone();
        assert_eq!(seen.path, "/models/gemini-test:generateContent");
        assert_eq!(seen.api_key.as_deref(), Some("test-key"));
        assert_eq!(seen.query, None);
        assert!(!seen.body.to_string().contains("test-key"));

        assert_eq!(seen.body["contents"][0]["role"], "user");
        let prompt = seen.body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Budget: 1500"));
        assert!(prompt.contains("Season: spring"));
        assert!(prompt.contains("Interests: museums,food"));
        assert_eq!(seen.body["generationConfig"]["temperature"], 0.8);
        assert_eq!(
            seen.body["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[tokio::test]
    async fn env_fallback_key_is_sent_when_settings_key_absent() {
        let (mut config, captured) = spawn_stub(StatusCode::OK, envelope("[]")).await;
        config.api_key = None;
        let env: HashMap<String, String> =
            [("GOOGLE_API_KEY".to_string(), "from-env".to_string())].into();
        let client = GeminiClient::with_credentials(config, Arc::new(env));

        client.generate_candidates(&params()).await.unwrap();
        assert_eq!(
            captured.lock().unwrap()[0].api_key.as_deref(),
            Some("from-env")
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let (mut config, captured) = spawn_stub(StatusCode::OK, envelope(THREE)).await;
        config.api_key = None;
        let client = GeminiClient::with_credentials(config, no_env());

        let err = client.generate_candidates(&params()).await.unwrap_err();
        assert_matches!(err, UpstreamError::Configuration);
        assert!(captured.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_2xx_status_is_call_failed_with_status() {
        let (config, _) = spawn_stub(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"message": "quota exhausted for key test-key"}}"#.to_string(),
        )
        .await;
        let client = GeminiClient::with_credentials(config, no_env());

        let err = client.generate_candidates(&params()).await.unwrap_err();
        assert_matches!(err, UpstreamError::UpstreamCallFailed { status: Some(429) });
        assert_eq!(err.to_string(), "Error calling Gemini API (HTTP 429)");
    }

    #[tokio::test]
    async fn connection_refused_is_call_failed_without_status() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GeminiClient::with_credentials(test_config(addr), no_env());
        let err = client.generate_candidates(&params()).await.unwrap_err();
        assert_matches!(err, UpstreamError::UpstreamCallFailed { status: None });
        assert_eq!(err.to_string(), "Error calling Gemini API");
    }

    #[tokio::test]
    async fn missing_text_path_is_bad_response_with_envelope() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string();
        let (config, _) = spawn_stub(StatusCode::OK, body).await;
        let client = GeminiClient::with_credentials(config, no_env());

        let err = client.generate_candidates(&params()).await.unwrap_err();
        assert_matches!(
            &err,
            UpstreamError::BadUpstreamResponse(MalformedResponse::Envelope { envelope })
                if envelope.contains("blockReason")
        );
    }

    #[tokio::test]
    async fn invalid_json_text_is_bad_response_with_text() {
        let (config, _) = spawn_stub(StatusCode::OK, envelope("[{\"name\": \"Por")).await;
        let client = GeminiClient::with_credentials(config, no_env());

        let err = client.generate_candidates(&params()).await.unwrap_err();
        assert_matches!(
            &err,
            UpstreamError::BadUpstreamResponse(MalformedResponse::Content { text })
                if text == "[{\"name\": \"Por"
        );
    }

    #[tokio::test]
    async fn object_text_is_bad_response_shape() {
        let (config, _) = spawn_stub(StatusCode::OK, envelope(r#"{"name": "Porto"}"#)).await;
        let client = GeminiClient::with_credentials(config, no_env());

        let err = client.generate_candidates(&params()).await.unwrap_err();
        assert_matches!(
            err,
            UpstreamError::BadUpstreamResponse(MalformedResponse::Shape { .. })
        );
    }
}
