//! Image codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the boundary between the pipeline and the
//! codecs: `decode` a file into RGB pixels and `encode` RGB pixels to a file.
//! Each call opens, uses and releases its own file handle.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend). Tests use a mock that
//! records operations.

use image::RgbImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Quality setting for lossy encoding (1-100). Clamped on construction.
///
/// Only JPEG output uses it; PNG is always lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(100)
    }
}

/// Trait for image codec backends.
pub trait ImageBackend {
    /// Decode an image file into 8-bit RGB, upright according to any EXIF
    /// orientation tag. Alpha is dropped.
    fn decode(&self, path: &Path) -> Result<RgbImage, BackendError>;

    /// Encode `image` to `path`, choosing the format from the extension.
    /// An existing file is overwritten.
    fn encode(&self, image: &RgbImage, path: &Path, quality: Quality)
    -> Result<(), BackendError>;
}
