//! Gemini model client
//!
//! Implements the `ModelClient` port with one `generateContent` POST per call.

use super::types::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use heartmend_application::{ModelClient, ModelClientError};
use heartmend_domain::{GeminiProviderConfig, ImageAttachment};
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-goog-api-key";

const USER_AGENT: &str = concat!("heartmend/", env!("CARGO_PKG_VERSION"));

/// `ModelClient` backed by the Gemini REST API
///
/// The credential and endpoint come from the [`GeminiProviderConfig`] given
/// at construction; nothing is read from the environment here. No request
/// timeout is configured.
pub struct GeminiModelClient {
    http: reqwest::Client,
    config: GeminiProviderConfig,
    endpoint: String,
}

impl GeminiModelClient {
    pub fn new(config: GeminiProviderConfig) -> Result<Self, ModelClientError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ModelClientError::Transport(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self::with_http_client(config, http))
    }

    /// Use a caller-provided reqwest client (shared pools, custom TLS, ...).
    pub fn with_http_client(config: GeminiProviderConfig, http: reqwest::Client) -> Self {
        let endpoint = config.generate_content_url();
        Self {
            http,
            config,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn describe_failure(status: StatusCode, body: &[u8]) -> String {
        let status_text = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        match ErrorResponse::message(body) {
            Some(message) => format!("{}: {}", status_text, message),
            None => status_text,
        }
    }
}

#[async_trait]
impl ModelClient for GeminiModelClient {
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<String, ModelClientError> {
        let request = GenerateContentRequest::new(system_instruction, user_text, image);
        let body = serde_json::to_vec(&request)
            .map_err(|e| ModelClientError::InvalidRequest(e.to_string()))?;

        debug!(
            model = %self.config.model,
            bytes = body.len(),
            has_image = image.is_some(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ModelClientError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| {
                ModelClientError::Transport(format!("Failed to read response body: {}", e))
            })?;

        if !status.is_success() {
            let description = Self::describe_failure(status, &bytes);
            warn!("generateContent returned {}", description);
            return Err(ModelClientError::Transport(description));
        }

        Ok(GenerateContentResponse::text_or_sentinel(&bytes))
    }
}
