//! The crop pipeline.
//!
//! Stage 2 and 3 of the tool: for each image found by [`scan`](crate::scan),
//! decode → analyze → crop → encode, one image at a time in listing order.
//! The next image starts only after the previous one is fully written.
//!
//! ## Output Structure
//!
//! ```text
//! photos/
//! ├── a.png
//! ├── c.JPG
//! └── output/            # default output folder
//!     ├── a.png          # same base name and extension as the source
//!     └── c.JPG
//! ```
//!
//! ## Failure Policy
//!
//! By default the first failing image aborts the run. With
//! [`ProcessOptions::keep_going`] the failure is reported through a
//! [`ProcessEvent::ImageFailed`] and the remaining images are still processed;
//! [`ProcessSummary::into_result`] turns any failures into an error at the end.
//!
//! Progress is reported through an optional channel so the caller decides how
//! (and whether) to print it.

use crate::border::{self, AnalysisError, BorderAnalysis};
use crate::config::Config;
use crate::imaging::{BackendError, ImageBackend, Quality, RustBackend};
use crate::scan::{self, ScanError};
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Cannot analyze {path}: {source}")]
    Analysis {
        path: PathBuf,
        source: AnalysisError,
    },
    #[error("Cannot create output folder {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{failed} of {total} images failed")]
    Failed { failed: usize, total: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Report per-image failures and continue instead of aborting.
    pub keep_going: bool,
    /// Analyze only; nothing is written.
    pub dry_run: bool,
}

/// Progress events emitted while processing.
#[derive(Debug, Clone)]
pub enum ProcessEvent {
    Started {
        input_dir: PathBuf,
        image_count: usize,
    },
    ImageCropped {
        source: PathBuf,
        /// `None` in dry runs.
        output: Option<PathBuf>,
        analysis: BorderAnalysis,
    },
    ImageFailed {
        source: PathBuf,
        error: String,
    },
}

#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub analysis: BorderAnalysis,
}

#[derive(Debug, Clone)]
pub struct FailedImage {
    pub source: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessSummary {
    pub processed: Vec<ProcessedImage>,
    pub failures: Vec<FailedImage>,
}

impl ProcessSummary {
    pub fn total(&self) -> usize {
        self.processed.len() + self.failures.len()
    }

    /// `Err(ProcessError::Failed)` if any image failed in a keep-going run.
    pub fn into_result(self) -> Result<Self, ProcessError> {
        if self.failures.is_empty() {
            Ok(self)
        } else {
            Err(ProcessError::Failed {
                failed: self.failures.len(),
                total: self.total(),
            })
        }
    }
}

/// Where the cropped copy of `source` is written:
/// `<output_dir>/<base name>.<extension>`.
pub fn output_path(output_dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match source.extension() {
        Some(ext) => output_dir.join(format!("{}.{}", stem, ext.to_string_lossy())),
        None => output_dir.join(stem),
    }
}

pub fn process(
    config: &Config,
    options: ProcessOptions,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessSummary, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, config, options, events)
}

/// Process images using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    config: &Config,
    options: ProcessOptions,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessSummary, ProcessError> {
    let emit = |event: ProcessEvent| {
        if let Some(tx) = &events {
            tx.send(event).ok();
        }
    };

    let images = scan::list_images(&config.input_dir)?;
    emit(ProcessEvent::Started {
        input_dir: config.input_dir.clone(),
        image_count: images.len(),
    });

    let mut summary = ProcessSummary::default();
    for source in images {
        match crop_image(backend, &source, config, options.dry_run) {
            Ok(processed) => {
                emit(ProcessEvent::ImageCropped {
                    source: processed.source.clone(),
                    output: processed.output.clone(),
                    analysis: processed.analysis,
                });
                summary.processed.push(processed);
            }
            Err(err) if options.keep_going => {
                tracing::warn!(path = %source.display(), error = %err, "skipping image");
                let error = err.to_string();
                emit(ProcessEvent::ImageFailed {
                    source: source.clone(),
                    error: error.clone(),
                });
                summary.failures.push(FailedImage { source, error });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(summary)
}

fn crop_image(
    backend: &impl ImageBackend,
    source: &Path,
    config: &Config,
    dry_run: bool,
) -> Result<ProcessedImage, ProcessError> {
    let _span = tracing::info_span!("image", path = %source.display()).entered();

    let decoded = backend.decode(source)?;
    let trimmed =
        border::trim(decoded, &config.analysis).map_err(|source_err| ProcessError::Analysis {
            path: source.to_path_buf(),
            source: source_err,
        })?;

    let output = if dry_run {
        None
    } else {
        let path = output_path(&config.output_dir, source);
        let quality = Quality::new(config.jpeg_quality);
        write_image(backend, &trimmed.image, &path, quality)?;
        Some(path)
    };

    Ok(ProcessedImage {
        source: source.to_path_buf(),
        output,
        analysis: trimmed.analysis,
    })
}

/// Encode `image` to `path`, creating the parent folder if needed.
fn write_image(
    backend: &impl ImageBackend,
    image: &RgbImage,
    path: &Path,
    quality: Quality,
) -> Result<(), ProcessError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ProcessError::OutputDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    backend.encode(image, path, quality)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "wrote cropped image"
    );
    Ok(())
}
