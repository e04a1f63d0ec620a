//! Letterbox border detection. Pure computation, no I/O.
//!
//! | Step | Type / function |
//! |---|---|
//! | **Binarize** | [`BinaryGrid::from_image`] (mean of R,G,B above threshold) |
//! | **Measure** | [`measure_run`] over (axis, line, edge), collected in [`EdgeRuns`] |
//! | **Decide** | [`CropDecision::decide`] (candidate, inset, axis) |
//! | **Cut** | [`ColorGrid::into_cropped`] |
//!
//! Sample lines are the first, middle and last column (walked from top and
//! bottom) and the first, middle and last row (walked from left and right).
//! Borders are assumed axis-aligned and centered: the crop is always
//! symmetric on the axis it touches.

mod decision;
mod grid;
mod runs;

pub use decision::{CropAxis, CropDecision, CropRect, candidate, inset};
pub use grid::{AnalysisError, BinaryGrid, ColorGrid, Grids, is_bright};
pub use runs::{Axis, AxisRuns, Edge, EdgeRuns, LinePosition, LineRuns, measure_run, run_length};

use crate::config::AnalysisConfig;
use image::RgbImage;

/// Measurements and decision for one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderAnalysis {
    pub width: u32,
    pub height: u32,
    pub runs: EdgeRuns,
    pub decision: CropDecision,
    pub rect: CropRect,
}

/// Analyze a binarized image.
pub fn analyze(grid: &BinaryGrid, config: &AnalysisConfig) -> BorderAnalysis {
    let (width, height) = (grid.width(), grid.height());
    let runs = EdgeRuns::measure(grid);
    let decision = CropDecision::decide(&runs, width, height, config);
    BorderAnalysis {
        width,
        height,
        runs,
        decision,
        rect: decision.rect(width, height),
    }
}

/// A decoded image with its border removed.
#[derive(Debug, Clone)]
pub struct Trimmed {
    pub analysis: BorderAnalysis,
    pub image: RgbImage,
}

/// Detect and remove the border of a decoded image.
pub fn trim(image: RgbImage, config: &AnalysisConfig) -> Result<Trimmed, AnalysisError> {
    let grids = Grids::from_image(image, config.luminance_threshold)?;
    let analysis = analyze(&grids.binary, config);
    tracing::debug!(
        width = analysis.width,
        height = analysis.height,
        vertical = analysis.decision.vertical_candidate,
        horizontal = analysis.decision.horizontal_candidate,
        axis = ?analysis.decision.axis,
        "border decision"
    );
    Ok(Trimmed {
        analysis,
        image: grids.color.into_cropped(analysis.rect),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CropMode;
    use crate::test_helpers::{BLACK, WHITE, framed, solid};
    use image::Rgb;

    fn both_axes() -> AnalysisConfig {
        AnalysisConfig {
            crop_mode: CropMode::BothAxes,
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn uniform_white_image_is_untouched() {
        let image = solid(12, 9, WHITE);
        let trimmed = trim(image.clone(), &both_axes()).unwrap();
        assert!(trimmed.analysis.decision.is_noop());
        assert_eq!(trimmed.image, image);
    }

    #[test]
    fn uniform_black_image_is_untouched() {
        let image = solid(12, 9, BLACK);
        let trimmed = trim(image.clone(), &AnalysisConfig::default()).unwrap();
        assert!(trimmed.analysis.decision.is_noop());
        assert_eq!(trimmed.image, image);
    }

    #[test]
    fn equal_frame_yields_equal_candidates() {
        let image = framed(20, 16, 3, 3);
        let analysis = trim(image, &AnalysisConfig::default()).unwrap().analysis;
        assert_eq!(analysis.decision.vertical_candidate, 3);
        assert_eq!(analysis.decision.horizontal_candidate, 3);
        assert_eq!(analysis.decision.axis, CropAxis::Vertical);
        assert_eq!(analysis.decision.horizontal_inset, 0);
    }

    #[test]
    fn single_axis_crops_rows_of_ten_by_ten() {
        let trimmed = trim(framed(10, 10, 2, 2), &AnalysisConfig::default()).unwrap();
        assert_eq!(trimmed.image.dimensions(), (10, 6));
        // left and right border columns survive
        assert_eq!(trimmed.image.get_pixel(0, 0), &WHITE);
        assert_eq!(trimmed.image.get_pixel(9, 5), &WHITE);
    }

    #[test]
    fn both_axes_keeps_only_interior() {
        let source = framed(10, 10, 2, 2);
        let trimmed = trim(source.clone(), &both_axes()).unwrap();
        assert_eq!(trimmed.image.dimensions(), (6, 6));
        for (x, y, pixel) in trimmed.image.enumerate_pixels() {
            assert_eq!(pixel, source.get_pixel(x + 2, y + 2));
        }
    }

    #[test]
    fn letterbox_bars_are_removed() {
        // 4-row bars on top and bottom only, like a widescreen frame
        let source = framed(24, 16, 4, 0);
        let trimmed = trim(source.clone(), &AnalysisConfig::default()).unwrap();
        assert_eq!(trimmed.analysis.decision.axis, CropAxis::Vertical);
        assert_eq!(trimmed.image.dimensions(), (24, 8));
        assert_eq!(trimmed.image.get_pixel(0, 0), source.get_pixel(0, 4));
    }

    #[test]
    fn pillarbox_bars_are_removed() {
        let trimmed = trim(framed(24, 16, 0, 5), &AnalysisConfig::default()).unwrap();
        assert_eq!(trimmed.analysis.decision.axis, CropAxis::Horizontal);
        assert_eq!(trimmed.image.dimensions(), (14, 16));
    }

    #[test]
    fn dark_border_is_not_detected() {
        // runs count white cells only
        let mut image = solid(10, 10, BLACK);
        for y in 3..7 {
            for x in 3..7 {
                image.put_pixel(x, y, WHITE);
            }
        }
        let trimmed = trim(image, &AnalysisConfig::default()).unwrap();
        assert!(trimmed.analysis.decision.is_noop());
    }

    #[test]
    fn threshold_is_configurable() {
        let grey = Rgb([100, 100, 100]);
        let mut image = solid(10, 10, grey);
        for y in 2..8 {
            for x in 2..8 {
                image.put_pixel(x, y, BLACK);
            }
        }
        let default = trim(image.clone(), &both_axes()).unwrap();
        assert!(default.analysis.decision.is_noop());

        let config = AnalysisConfig {
            luminance_threshold: 50,
            ..both_axes()
        };
        let lowered = trim(image, &config).unwrap();
        assert_eq!(lowered.image.dimensions(), (6, 6));
    }

    #[test]
    fn empty_image_errors() {
        let result = trim(RgbImage::new(0, 0), &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::EmptyImage { .. })));
    }

    #[test]
    fn single_pixel_image_is_untouched() {
        let trimmed = trim(solid(1, 1, WHITE), &AnalysisConfig::default()).unwrap();
        assert_eq!(trimmed.image.dimensions(), (1, 1));
    }
}
