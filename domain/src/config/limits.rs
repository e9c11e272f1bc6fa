//! Optional size limits on user input.
//!
//! Inputs are unlimited unless configured. When a limit is set, oversized
//! input is rejected before any request is built.

use crate::core::error::DomainError;
use crate::image::ImageInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Maximum number of characters in a text submission
    pub max_text_chars: Option<usize>,
    /// Maximum size of an uploaded image in bytes
    pub max_image_bytes: Option<usize>,
}

impl InputLimits {
    /// No limits at all
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_text_chars(mut self, max: usize) -> Self {
        self.max_text_chars = Some(max);
        self
    }

    pub fn with_max_image_bytes(mut self, max: usize) -> Self {
        self.max_image_bytes = Some(max);
        self
    }

    /// Check a text submission against `max_text_chars`
    pub fn check_text(&self, text: &str) -> Result<(), DomainError> {
        let Some(limit) = self.max_text_chars else {
            return Ok(());
        };
        let actual = text.chars().count();
        if actual > limit {
            return Err(DomainError::InputTooLarge {
                field: "text",
                actual,
                limit,
            });
        }
        Ok(())
    }

    /// Check an image against `max_image_bytes`
    pub fn check_image(&self, image: &ImageInput) -> Result<(), DomainError> {
        self.check_image_len(image.len())
    }

    /// Check a raw byte length against `max_image_bytes`
    ///
    /// Lets loaders refuse an oversized file before reading it.
    pub fn check_image_len(&self, actual: usize) -> Result<(), DomainError> {
        match self.max_image_bytes {
            Some(limit) if actual > limit => Err(DomainError::InputTooLarge {
                field: "image",
                actual,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageFormat;

    #[test]
    fn test_unlimited_accepts_everything() {
        let limits = InputLimits::unlimited();
        assert!(limits.check_text(&"x".repeat(100_000)).is_ok());
        let image = ImageInput::new(ImageFormat::Png, vec![0; 4096]);
        assert!(limits.check_image(&image).is_ok());
    }

    #[test]
    fn test_text_limit_counts_chars_not_bytes() {
        let limits = InputLimits::unlimited().with_max_text_chars(3);
        assert!(limits.check_text("äöü").is_ok());
        let err = limits.check_text("äöüß").unwrap_err();
        assert_eq!(
            err,
            DomainError::InputTooLarge {
                field: "text",
                actual: 4,
                limit: 3
            }
        );
    }

    #[test]
    fn test_image_limit() {
        let limits = InputLimits::unlimited().with_max_image_bytes(10);
        let small = ImageInput::new(ImageFormat::Jpeg, vec![0; 10]);
        let large = ImageInput::new(ImageFormat::Jpeg, vec![0; 11]);
        assert!(limits.check_image(&small).is_ok());
        assert!(limits.check_image(&large).is_err());
    }
}
