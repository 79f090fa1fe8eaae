//! Model client port
//!
//! Defines the interface for calling the hosted generation endpoint.

use async_trait::async_trait;
use heartmend_domain::ImageAttachment;
use thiserror::Error;

/// Text returned when the endpoint answered but the envelope had no text
pub const NO_RESPONSE_RECEIVED: &str = "No response received";

/// Errors that can occur during a model call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelClientError {
    /// The call failed at the network or HTTP layer
    #[error("API call failed: {0}")]
    Transport(String),

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ModelClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ModelClientError::Transport(_))
    }
}

/// Client for the remote generation endpoint
///
/// Each call performs exactly one outbound request. There is no retry and no
/// caching. A response whose envelope lacks text is not an error: the adapter
/// returns [`NO_RESPONSE_RECEIVED`] instead.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Generate text for `user_text` under `system_instruction`, optionally
    /// with one inline image attachment.
    async fn generate(
        &self,
        system_instruction: &str,
        user_text: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<String, ModelClientError>;
}
