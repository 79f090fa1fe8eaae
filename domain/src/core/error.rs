//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Feelings cannot be empty")]
    EmptyFeelings,

    #[error("Unsupported image type: {0} (expected PNG or JPEG)")]
    UnsupportedImageType(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Outcome for {0} has already been recorded")]
    OutcomeAlreadyRecorded(String),
}

impl DomainError {
    /// Check if this error was caused by the user's submission itself
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyFeelings
                | DomainError::UnsupportedImageType(_)
                | DomainError::InvalidDataUri(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feelings_display() {
        assert_eq!(
            DomainError::EmptyFeelings.to_string(),
            "Feelings cannot be empty"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(DomainError::EmptyFeelings.is_input_error());
        let unsupported = DomainError::UnsupportedImageType("image/gif".into());
        assert!(unsupported.is_input_error());
        let duplicate = DomainError::OutcomeAlreadyRecorded("Therapist Agent".into());
        assert!(!duplicate.is_input_error());
    }
}
