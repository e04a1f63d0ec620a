//! CLI output formatting.
//!
//! Progress goes to stdout as plain lines; diagnostics go through `tracing`
//! to stderr. Each output has a `format_*` function (returns `Vec<String>`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O.
//!
//! # Output Format
//!
//! ## Crop
//!
//! ```text
//! Processing 2 images from: photos
//! Image cropped successfully: photos/a.png
//!     Size: 1920x1080 → 1920x800
//!     Crop: top/bottom 140px
//!     Output: photos/output/a.png
//! Image cropped successfully: photos/b.jpg
//!     Size: 800x600 → 800x600
//!     Crop: none
//!     Output: photos/output/b.jpg
//! All images processed successfully.
//! ```
//!
//! ## Scan
//!
//! ```text
//! Found 2 images in photos
//! 001 a.png
//! 002 b.jpg
//! ```

use crate::border::{BorderAnalysis, CropAxis, CropDecision};
use crate::process::{ProcessEvent, ProcessSummary};
use std::path::{Path, PathBuf};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Human description of the insets a decision removes.
///
/// ```text
/// none
/// top/bottom 2px
/// left/right 3px
/// top/bottom 2px, left/right 3px
/// ```
pub fn describe_decision(decision: &CropDecision) -> String {
    let rows = format!("top/bottom {}px", decision.vertical_inset);
    let cols = format!("left/right {}px", decision.horizontal_inset);
    match decision.axis {
        CropAxis::Untouched => "none".to_string(),
        CropAxis::Vertical => rows,
        CropAxis::Horizontal => cols,
        CropAxis::Both => format!("{rows}, {cols}"),
    }
}

fn analysis_lines(analysis: &BorderAnalysis) -> Vec<String> {
    let decision = &analysis.decision;
    vec![
        format!(
            "    Size: {}x{} → {}x{}",
            analysis.width, analysis.height, analysis.rect.width, analysis.rect.height
        ),
        format!(
            "    Border: vertical {}px, horizontal {}px",
            decision.vertical_candidate, decision.horizontal_candidate
        ),
        format!("    Crop: {}", describe_decision(decision)),
    ]
}

// ============================================================================
// Scan
// ============================================================================

pub fn format_scan_output(input_dir: &Path, images: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![format!(
        "Found {} images in {}",
        images.len(),
        input_dir.display()
    )];
    lines.extend(
        images
            .iter()
            .enumerate()
            .map(|(i, path)| format!("{} {}", format_index(i + 1), file_name(path))),
    );
    lines
}

pub fn print_scan_output(input_dir: &Path, images: &[PathBuf]) {
    for line in format_scan_output(input_dir, images) {
        println!("{}", line);
    }
}

// ============================================================================
// Crop / check progress
// ============================================================================

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started {
            input_dir,
            image_count,
        } => vec![format!(
            "Processing {} images from: {}",
            image_count,
            input_dir.display()
        )],
        ProcessEvent::ImageCropped {
            source,
            output,
            analysis,
        } => {
            let mut lines = Vec::new();
            match output {
                Some(output) => {
                    lines.push(format!("Image cropped successfully: {}", source.display()));
                    lines.extend(analysis_lines(analysis));
                    lines.push(format!("    Output: {}", output.display()));
                }
                None => {
                    lines.push(format!("Image analyzed: {}", source.display()));
                    lines.extend(analysis_lines(analysis));
                }
            }
            lines
        }
        ProcessEvent::ImageFailed { source, error } => vec![
            format!("Image failed: {}", source.display()),
            format!("    Error: {}", error),
        ],
    }
}

/// Closing line(s) of a run.
pub fn format_summary(summary: &ProcessSummary, dry_run: bool) -> Vec<String> {
    if !summary.failures.is_empty() {
        return vec![format!(
            "Processed {} of {} images, {} failed.",
            summary.processed.len(),
            summary.total(),
            summary.failures.len()
        )];
    }
    if dry_run {
        let cropping = summary
            .processed
            .iter()
            .filter(|p| !p.analysis.decision.is_noop())
            .count();
        vec![format!(
            "Check complete: {} of {} images have a border to remove.",
            cropping,
            summary.total()
        )]
    } else {
        vec!["All images processed successfully.".to_string()]
    }
}

pub fn print_summary(summary: &ProcessSummary, dry_run: bool) {
    for line in format_summary(summary, dry_run) {
        println!("{}", line);
    }
}

// ============================================================================
// Errors
// ============================================================================

/// The line printed to stderr when a run fails. Uses the error's `Display`
/// text, which names the offending path or config key.
pub fn format_error(error: &dyn std::error::Error) -> String {
    format!("Error: {}", error)
}
