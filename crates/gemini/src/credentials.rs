//! API key resolution.
//!
//! The key is looked up, in order, in the application settings value and
//! then in [`API_KEY_ENV_VARS`]. Lookups go through a [`CredentialSource`]
//! so the chain can be exercised without touching the process environment.

use std::collections::HashMap;

use crate::error::UpstreamError;

/// Environment fallbacks consulted after the settings value, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// A read-only source of named configuration values.
pub trait CredentialSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl CredentialSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl CredentialSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Resolve the API key: `settings_value`, then each of [`API_KEY_ENV_VARS`].
///
/// Blank values are skipped. Returns [`UpstreamError::Configuration`] when
/// nothing resolves.
pub fn resolve_api_key(
    settings_value: Option<&str>,
    source: &dyn CredentialSource,
) -> Result<String, UpstreamError> {
    if let Some(key) = settings_value.filter(|k| !k.trim().is_empty()) {
        return Ok(key.to_string());
    }

    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| source.var(name))
        .find(|k| !k.trim().is_empty())
        .ok_or(UpstreamError::Configuration)
}
