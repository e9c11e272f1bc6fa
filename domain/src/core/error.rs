//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unsupported image type: {0} (expected jpg, jpeg or png)")]
    UnsupportedImageType(String),

    #[error("{field} is too large: {actual} exceeds the limit of {limit}")]
    InputTooLarge {
        field: &'static str,
        actual: usize,
        limit: usize,
    },

    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

impl DomainError {
    /// Check if this error was raised by input filtering (as opposed to lookup)
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::UnsupportedImageType(_) | DomainError::InputTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_image_display() {
        let error = DomainError::UnsupportedImageType("gif".to_string());
        assert_eq!(
            error.to_string(),
            "Unsupported image type: gif (expected jpg, jpeg or png)"
        );
    }

    #[test]
    fn test_input_too_large_display() {
        let error = DomainError::InputTooLarge {
            field: "text",
            actual: 12,
            limit: 10,
        };
        assert_eq!(
            error.to_string(),
            "text is too large: 12 exceeds the limit of 10"
        );
    }

    #[test]
    fn test_is_input_rejection() {
        assert!(DomainError::UnsupportedImageType("bmp".into()).is_input_rejection());
        assert!(!DomainError::UnknownPanel("x".into()).is_input_rejection());
    }
}
