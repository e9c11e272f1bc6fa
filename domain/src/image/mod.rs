//! Image input for the captioning panel.
//!
//! Only JPEG and PNG uploads are accepted. The type is decided from the file
//! extension, mirroring the upload control's filter, so an unsupported file
//! is refused before its bytes are read or sent anywhere.

use crate::core::error::DomainError;
use std::path::Path;

/// Accepted image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// File extensions offered by the upload filter
    pub const ACCEPTED_EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    /// Resolve a format from a file extension (case-insensitive, leading dot allowed)
    pub fn from_extension(ext: &str) -> Result<Self, DomainError> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            _ => Err(DomainError::UnsupportedImageType(ext)),
        }
    }

    /// Resolve a format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Err(DomainError::UnsupportedImageType(
                path.display().to_string(),
            )),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "JPEG"),
            ImageFormat::Png => write!(f, "PNG"),
        }
    }
}

/// An uploaded image ready to be sent with a captioning request
#[derive(Clone, PartialEq, Eq)]
pub struct ImageInput {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    /// Build from a file name and its contents, applying the upload filter
    pub fn from_path_and_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let format = ImageFormat::from_path(path)?;
        Ok(Self::new(format, bytes))
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Keep image bytes out of debug logs.
impl std::fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageInput")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_accepted_extensions() {
        assert_eq!(ImageFormat::from_extension("jpg"), Ok(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("JPEG"), Ok(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension(".png"), Ok(ImageFormat::Png));
    }

    #[test]
    fn test_rejected_extensions() {
        for ext in ["gif", "webp", "bmp", "txt", ""] {
            assert!(matches!(
                ImageFormat::from_extension(ext),
                Err(DomainError::UnsupportedImageType(_))
            ));
        }
    }

    #[test]
    fn test_from_path_without_extension() {
        let err = ImageFormat::from_path(&PathBuf::from("photo")).unwrap_err();
        assert_eq!(err, DomainError::UnsupportedImageType("photo".to_string()));
    }

    #[test]
    fn test_from_path_and_bytes() {
        let image =
            ImageInput::from_path_and_bytes(&PathBuf::from("sunset.PNG"), vec![1, 2, 3]).unwrap();
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.len(), 3);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let image = ImageInput::new(ImageFormat::Jpeg, vec![0xff; 64]);
        let debug = format!("{:?}", image);
        assert!(debug.contains("len: 64"));
        assert!(!debug.contains("255"));
    }
}
