//! Screenshot loading

use heartmend_domain::{DomainError, ImageAttachment};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a screenshot
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("Could not read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Please upload a valid image file (PNG, JPG, or JPEG): {0}")]
    UnsupportedFile(PathBuf),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// MIME type for a screenshot path, judged by its extension.
pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Read a PNG/JPEG file into an attachment.
pub fn load_image(path: &Path) -> Result<ImageAttachment, ImageLoadError> {
    let Some(mime_type) = mime_type_for_path(path) else {
        return Err(ImageLoadError::UnsupportedFile(path.to_path_buf()));
    };

    let data = std::fs::read(path).map_err(|source| ImageLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ImageAttachment::new(data, mime_type)?)
}
