//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.). The credential is
//! resolved once by the configuration layer and handed to the client
//! constructor inside this struct.

/// Default endpoint root for the Gemini API
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Gemini generation endpoint configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiProviderConfig {
    /// API key sent as `x-goog-api-key`. May be empty; the endpoint rejects it.
    pub api_key: String,
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Model name used in `models/{model}:generateContent`.
    pub model: String,
}

impl GeminiProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for GeminiProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl std::fmt::Debug for GeminiProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.has_api_key() {
            "<set>"
        } else {
            "<empty>"
        };
        f.debug_struct("GeminiProviderConfig")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}
