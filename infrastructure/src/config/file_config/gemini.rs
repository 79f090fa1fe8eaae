//! Generation endpoint configuration from TOML (`[gemini]` section)

use super::ConfigValidationError;
use heartmend_domain::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiProviderConfig};
use serde::{Deserialize, Serialize};

/// Gemini endpoint configuration
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.0-flash"
/// api_key_env = "GEMINI_API_KEY"   # env var holding the key
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Base URL of the REST API
    pub base_url: String,
    /// Model used for every agent
    pub model: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl FileGeminiConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.api_key.is_none() && self.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        issues
    }

    /// Resolve into the provider config, reading the key from the process
    /// environment when no direct key is set.
    pub fn to_provider_config(&self) -> GeminiProviderConfig {
        self.to_provider_config_with(|name| std::env::var(name).ok())
    }

    /// Like [`Self::to_provider_config`] with an explicit variable lookup.
    ///
    /// A missing key resolves to an empty string; the endpoint reports it.
    pub fn to_provider_config_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> GeminiProviderConfig {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env))
            .unwrap_or_default();

        GeminiProviderConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_model(self.model.clone())
    }
}
