//! Image upload port
//!
//! The captioning panel receives a path from the user; an [`ImageSource`]
//! turns it into an [`ImageInput`] after applying the upload filter.

use intelli_domain::{DomainError, ImageInput, InputLimits};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageLoadError {
    /// Rejected by the upload filter (type or size)
    #[error(transparent)]
    Rejected(#[from] DomainError),

    #[error("Failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image file is empty: {0}")]
    Empty(PathBuf),
}

/// Reads an uploaded image, rejecting unsupported types before any I/O.
pub trait ImageSource: Send + Sync {
    fn load(&self, path: &Path, limits: &InputLimits) -> Result<ImageInput, ImageLoadError>;
}
