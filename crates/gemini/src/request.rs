//! Wire format of a `generateContent` request.

use serde::Serialize;

use crate::config::RESPONSE_MIME_TYPE;

/// Body of `POST {model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub response_mime_type: String,
}

impl GenerateContentRequest {
    /// A single user-role turn carrying `prompt`, asking for JSON output.
    pub fn user_prompt(prompt: String, temperature: f64) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            },
        }
    }
}
