//! Image file loading for the Image Captioning panel
//!
//! The extension is checked before the file is opened, and the size limit
//! before it is read, so rejected uploads never touch the file contents.

use intelli_application::{ImageLoadError, ImageSource};
use intelli_domain::{ImageFormat, ImageInput, InputLimits};
use std::path::Path;

/// Reads uploads from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageSource;

impl ImageSource for FsImageSource {
    fn load(&self, path: &Path, limits: &InputLimits) -> Result<ImageInput, ImageLoadError> {
        load_image(path, limits)
    }
}

/// Read an image upload from disk.
pub fn load_image(path: &Path, limits: &InputLimits) -> Result<ImageInput, ImageLoadError> {
    // Refuse unsupported types before touching the file.
    ImageFormat::from_path(path)?;

    let io_err = |source| ImageLoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let metadata = std::fs::metadata(path).map_err(io_err)?;
    let len = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    limits.check_image_len(len)?;

    let bytes = std::fs::read(path).map_err(io_err)?;
    if bytes.is_empty() {
        return Err(ImageLoadError::Empty(path.to_path_buf()));
    }
    let image = ImageInput::from_path_and_bytes(path, bytes)?;
    tracing::debug!(
        "Loaded {} image ({} bytes) from {}",
        image.format(),
        image.len(),
        path.display()
    );
    Ok(image)
}
