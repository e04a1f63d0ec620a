//! Crop decision.
//!
//! Turns the measured edge runs into symmetric insets:
//!
//! 1. **Candidate**: the shortest run on an axis. A candidate reaching
//!    `dimension / reject_divisor` is discarded (a uniform image rather than
//!    a bordered one).
//! 2. **Inset**: candidate plus `extra_inset`, only for non-zero candidates.
//!    An inset that would remove every row/column is discarded.
//! 3. **Axis**: in [`CropMode::SingleAxis`] only the axis with the larger
//!    inset is cropped, vertical on ties. [`CropMode::BothAxes`] crops both.

use super::runs::EdgeRuns;
use crate::config::{AnalysisConfig, CropMode};

/// Which axes a decision crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropAxis {
    Untouched,
    /// Rows removed from top and bottom.
    Vertical,
    /// Columns removed from left and right.
    Horizontal,
    Both,
}

/// Region of the original image that is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropDecision {
    /// Shortest vertical run after rejection.
    pub vertical_candidate: u32,
    /// Shortest horizontal run after rejection.
    pub horizontal_candidate: u32,
    /// Rows removed from each of top and bottom.
    pub vertical_inset: u32,
    /// Columns removed from each of left and right.
    pub horizontal_inset: u32,
    pub axis: CropAxis,
}

/// Candidate for one axis, or 0 when the run is too long to be a border.
pub fn candidate(run: u32, extent: u32, reject_divisor: u32) -> u32 {
    if u64::from(run) * u64::from(reject_divisor) >= u64::from(extent) {
        0
    } else {
        run
    }
}

/// Inset for one axis, keeping at least one row/column.
pub fn inset(candidate: u32, extra: u32, extent: u32) -> u32 {
    if candidate == 0 {
        return 0;
    }
    let inset = candidate.saturating_add(extra);
    if u64::from(inset) * 2 >= u64::from(extent) {
        0
    } else {
        inset
    }
}

impl CropDecision {
    /// Decide how to crop an image of `width`×`height` from its edge runs.
    pub fn decide(runs: &EdgeRuns, width: u32, height: u32, config: &AnalysisConfig) -> Self {
        let vertical_candidate = candidate(runs.vertical.min(), height, config.reject_divisor);
        let horizontal_candidate = candidate(runs.horizontal.min(), width, config.reject_divisor);
        let vertical = inset(vertical_candidate, config.extra_inset, height);
        let horizontal = inset(horizontal_candidate, config.extra_inset, width);

        let (vertical_inset, horizontal_inset, axis) = match config.crop_mode {
            CropMode::SingleAxis if vertical > 0 && vertical >= horizontal => {
                (vertical, 0, CropAxis::Vertical)
            }
            CropMode::SingleAxis if horizontal > 0 => (0, horizontal, CropAxis::Horizontal),
            CropMode::SingleAxis => (0, 0, CropAxis::Untouched),
            CropMode::BothAxes => {
                let axis = match (vertical > 0, horizontal > 0) {
                    (true, true) => CropAxis::Both,
                    (true, false) => CropAxis::Vertical,
                    (false, true) => CropAxis::Horizontal,
                    (false, false) => CropAxis::Untouched,
                };
                (vertical, horizontal, axis)
            }
        };

        Self {
            vertical_candidate,
            horizontal_candidate,
            vertical_inset,
            horizontal_inset,
            axis,
        }
    }

    /// The kept rectangle of a `width`×`height` image.
    pub fn rect(&self, width: u32, height: u32) -> CropRect {
        CropRect {
            x: self.horizontal_inset,
            y: self.vertical_inset,
            width: width - 2 * self.horizontal_inset,
            height: height - 2 * self.vertical_inset,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.axis == CropAxis::Untouched
    }
}
