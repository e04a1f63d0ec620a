//! Shared test utilities: synthetic images and on-disk fixtures.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let image = framed(10, 10, 2, 2);     // 2px white frame, dark interior
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_png(&tmp.path().join("a.png"), &image);
//! ```

use image::{Rgb, RgbImage};
use std::path::Path;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// An image filled with one color.
pub fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// White bars of `top_bottom` rows and `left_right` columns around a dark,
/// non-uniform interior.
///
/// Interior pixels vary by position but always binarize to black at the
/// default threshold, so cropped content can be checked pixel by pixel.
pub fn framed(width: u32, height: u32, top_bottom: u32, left_right: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let in_border = y < top_bottom
            || y >= height - top_bottom
            || x < left_right
            || x >= width - left_right;
        if in_border {
            WHITE
        } else {
            Rgb([(x * 7 % 90) as u8, (y * 5 % 90) as u8, 40])
        }
    })
}

/// Encode an image as PNG at `path`.
pub fn write_png(path: &Path, image: &RgbImage) {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}
