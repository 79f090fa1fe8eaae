//! UserInput value object

use super::image::ImageAttachment;
use crate::core::error::DomainError;

/// One user submission (Value Object)
///
/// Constructed once per submission and never mutated. The feelings text is
/// guaranteed to contain something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    feelings: String,
    image: Option<ImageAttachment>,
}

impl UserInput {
    /// Create a text-only submission.
    pub fn new(feelings: impl Into<String>) -> Result<Self, DomainError> {
        let feelings = feelings.into();
        if feelings.trim().is_empty() {
            return Err(DomainError::EmptyFeelings);
        }
        Ok(Self {
            feelings,
            image: None,
        })
    }

    /// Attach a screenshot to the submission.
    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    /// The free-text account, verbatim.
    pub fn feelings(&self) -> &str {
        &self.feelings
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
