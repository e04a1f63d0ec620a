//! Input discovery.
//!
//! Stage 1 of the pipeline: list the image files directly under the input
//! folder. The scan is not recursive, so the default output folder
//! (`<input>/output`) is never picked up as input.
//!
//! Only `png`, `jpg` and `jpeg` files are kept; the extension match ignores
//! case (`c.JPG` is accepted). Raw directory-listing order differs between
//! platforms, so results are sorted by file name.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read input folder {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Input path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Whether a path has one of the accepted image extensions.
pub fn is_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

/// List candidate images in `dir` as absolute paths, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let io_err = |source: std::io::Error| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let root = fs::canonicalize(dir).map_err(io_err)?;
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(&root).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_candidate(&path) {
            images.push(path);
        }
    }
    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %root.display(), count = images.len(), "scanned input folder");
    Ok(images)
}
