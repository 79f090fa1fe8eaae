//! Wire types for the Gemini `generateContent` API
//!
//! Request types are built by us and always complete. Response types make
//! every level optional so that an unexpected envelope decodes to "no text"
//! instead of failing.

use heartmend_application::NO_RESPONSE_RECEIVED;
use heartmend_domain::ImageAttachment;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ==================== Request ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub system_instruction: RequestContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    Text { text: String },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 payload without a data-URI prefix
    pub data: String,
}

impl GenerateContentRequest {
    /// One user turn: the text first, then the image if there is one.
    pub fn new(system_instruction: &str, user_text: &str, image: Option<&ImageAttachment>) -> Self {
        let mut parts = vec![RequestPart::Text {
            text: user_text.to_string(),
        }];

        if let Some(image) = image {
            parts.push(RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type().to_string(),
                    data: image.to_base64(),
                },
            });
        }

        Self {
            contents: vec![RequestContent { parts }],
            system_instruction: RequestContent {
                parts: vec![RequestPart::Text {
                    text: system_instruction.to_string(),
                }],
            },
        }
    }
}

// ==================== Response ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CandidateContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// First candidate's first text part, if present and non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Decode a success body and extract its text, falling back to
    /// [`NO_RESPONSE_RECEIVED`] for any shape we cannot use.
    pub fn text_or_sentinel(body: &[u8]) -> String {
        match serde_json::from_slice::<GenerateContentResponse>(body) {
            Ok(response) => match response.first_text() {
                Some(text) => text.to_string(),
                None => {
                    warn!("Response envelope had no candidate text");
                    NO_RESPONSE_RECEIVED.to_string()
                }
            },
            Err(e) => {
                warn!("Could not decode response envelope: {}", e);
                NO_RESPONSE_RECEIVED.to_string()
            }
        }
    }
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl ErrorResponse {
    /// The endpoint's own error message, if the body carries one.
    pub fn message(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorResponse>(body)
            .ok()?
            .error?
            .message
            .filter(|m| !m.trim().is_empty())
    }
}
