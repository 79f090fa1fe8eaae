//! Inline image attachments and data-URI helpers

use crate::core::error::DomainError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// MIME types accepted for screenshots
pub const SUPPORTED_IMAGE_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg"];

/// Check whether a MIME type is an accepted screenshot format.
pub fn is_supported_image_mime(mime_type: &str) -> bool {
    SUPPORTED_IMAGE_MIME_TYPES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(mime_type))
}

/// Encode raw bytes as standard (padded) Base64.
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Return the payload part of a data URI: everything after the first comma.
///
/// `"data:image/png;base64,Zm9v"` yields `Some("Zm9v")`. Returns `None` when
/// the input has no comma at all.
pub fn extract_base64_data(data_uri: &str) -> Option<&str> {
    data_uri.split_once(',').map(|(_, payload)| payload)
}

/// A binary image payload tagged with its MIME type (Value Object)
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    data: Vec<u8>,
    mime_type: String,
}

impl ImageAttachment {
    /// Create an attachment from already-decoded bytes.
    ///
    /// The MIME type is normalized to lowercase and must be PNG or JPEG.
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Result<Self, DomainError> {
        let mime_type = mime_type.into().trim().to_ascii_lowercase();
        if !is_supported_image_mime(&mime_type) {
            return Err(DomainError::UnsupportedImageType(mime_type));
        }
        Ok(Self { data, mime_type })
    }

    /// Decode a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(data_uri: &str) -> Result<Self, DomainError> {
        let Some((header, _)) = data_uri.split_once(',') else {
            return Err(DomainError::InvalidDataUri("missing ',' separator".into()));
        };
        let Some(mime_type) = header
            .strip_prefix("data:")
            .and_then(|rest| rest.strip_suffix(";base64"))
        else {
            let reason = format!("unexpected header '{}'", header);
            return Err(DomainError::InvalidDataUri(reason));
        };

        let payload = extract_base64_data(data_uri).unwrap_or_default();
        let data = BASE64
            .decode(payload)
            .map_err(|e| DomainError::InvalidDataUri(e.to_string()))?;

        Self::new(data, mime_type)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload as sent in an inline attachment.
    pub fn to_base64(&self) -> String {
        encode_base64(&self.data)
    }

    /// Render as a `data:` URI, the form browsers hand back from file uploads.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

impl std::fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}
