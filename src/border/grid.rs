//! Per-image pixel grids.
//!
//! A decoded image becomes two parallel grids with identical dimensions:
//! a [`BinaryGrid`] used only to detect borders, and a [`ColorGrid`] holding
//! the original RGB triplets that the crop is cut from.

use super::decision::CropRect;
use image::{Rgb, RgbImage};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Whether a pixel counts as white: mean of R, G, B strictly above `threshold`.
///
/// Compared as `R + G + B > 3 * threshold` so no rounding is involved.
#[inline]
pub fn is_bright(pixel: &Rgb<u8>, threshold: u8) -> bool {
    let [r, g, b] = pixel.0;
    u16::from(r) + u16::from(g) + u16::from(b) > 3 * u16::from(threshold)
}

/// Thresholded black/white view of an image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl BinaryGrid {
    /// Binarize an image. Zero-sized images are rejected.
    pub fn from_image(image: &RgbImage, threshold: u8) -> Result<Self, AnalysisError> {
        ensure_not_empty(image)?;
        let cells = image.pixels().map(|p| is_bright(p, threshold)).collect();
        Ok(Self {
            width: image.width(),
            height: image.height(),
            cells,
        })
    }

    /// Build a grid from rows of 0/1 values. Rows must have equal length.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        assert!(rows.iter().all(|r| r.len() as u32 == width), "ragged rows");
        let cells = rows.iter().flat_map(|r| r.iter().map(|&v| v == 1)).collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.cells[(y as usize) * (self.width as usize) + x as usize]
    }
}

/// The original RGB pixels of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    pixels: RgbImage,
}

impl ColorGrid {
    pub fn new(pixels: RgbImage) -> Result<Self, AnalysisError> {
        ensure_not_empty(&pixels)?;
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrowed view of a sub-rectangle.
    pub fn view(&self, rect: CropRect) -> image::SubImage<&RgbImage> {
        image::imageops::crop_imm(&self.pixels, rect.x, rect.y, rect.width, rect.height)
    }

    /// Copy a sub-rectangle into a new image of exactly its dimensions.
    ///
    /// A rectangle covering the whole grid hands back the buffer unchanged.
    pub fn into_cropped(self, rect: CropRect) -> RgbImage {
        if rect == CropRect::full(self.width(), self.height()) {
            return self.pixels;
        }
        self.view(rect).to_image()
    }
}

/// Both grids of one image, built in a single pass over its pixels.
#[derive(Debug, Clone)]
pub struct Grids {
    pub binary: BinaryGrid,
    pub color: ColorGrid,
}

impl Grids {
    pub fn from_image(image: RgbImage, threshold: u8) -> Result<Self, AnalysisError> {
        let binary = BinaryGrid::from_image(&image, threshold)?;
        let color = ColorGrid::new(image)?;
        Ok(Self { binary, color })
    }
}

fn ensure_not_empty(image: &RgbImage) -> Result<(), AnalysisError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(AnalysisError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_must_exceed_threshold() {
        assert!(!is_bright(&Rgb([128, 128, 128]), 128));
        assert!(is_bright(&Rgb([129, 128, 128]), 128));
        assert!(!is_bright(&Rgb([255, 0, 129]), 128));
        assert!(is_bright(&Rgb([255, 255, 255]), 128));
        assert!(!is_bright(&Rgb([0, 0, 0]), 128));
    }

    #[test]
    fn brightness_uses_channel_mean() {
        // mean 130, but no single channel would pass on its own
        assert!(is_bright(&Rgb([255, 135, 0]), 128));
        // mean 100 with one saturated channel
        assert!(!is_bright(&Rgb([255, 45, 0]), 128));
    }

    #[test]
    fn threshold_255_nothing_is_white() {
        assert!(!is_bright(&Rgb([255, 255, 255]), 255));
    }

    #[test]
    fn binarize_layout_is_row_major() {
        let mut image = RgbImage::new(3, 2);
        image.put_pixel(2, 0, Rgb([255, 255, 255]));
        image.put_pixel(0, 1, Rgb([200, 200, 200]));

        let grid = BinaryGrid::from_image(&image, 128).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.get(2, 0));
        assert!(grid.get(0, 1));
        assert!(!grid.get(0, 0));
        assert!(!grid.get(2, 1));
    }

    #[test]
    fn from_rows_matches_layout() {
        let grid = BinaryGrid::from_rows(&[&[1, 0], &[0, 1], &[1, 1]]);
        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert!(grid.get(0, 0));
        assert!(!grid.get(1, 0));
        assert!(grid.get(1, 1));
        assert!(grid.get(0, 2));
    }

    #[test]
    fn empty_image_fails_fast() {
        let result = BinaryGrid::from_image(&RgbImage::new(0, 5), 128);
        assert_eq!(
            result.unwrap_err(),
            AnalysisError::EmptyImage {
                width: 0,
                height: 5
            }
        );
        assert!(ColorGrid::new(RgbImage::new(4, 0)).is_err());
        assert!(Grids::from_image(RgbImage::new(0, 0), 128).is_err());
    }

    #[test]
    fn grids_share_dimensions() {
        let grids = Grids::from_image(RgbImage::new(7, 4), 128).unwrap();
        assert_eq!(grids.binary.width(), grids.color.width());
        assert_eq!(grids.binary.height(), grids.color.height());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        let grid = BinaryGrid::from_rows(&[&[1, 1]]);
        grid.get(2, 0);
    }

    #[test]
    fn crop_copies_exact_rectangle() {
        let image = RgbImage::from_fn(6, 4, |x, y| Rgb([x as u8, y as u8, 7]));
        let grid = ColorGrid::new(image).unwrap();

        let cropped = grid.into_cropped(CropRect {
            x: 1,
            y: 2,
            width: 4,
            height: 2,
        });
        assert_eq!(cropped.dimensions(), (4, 2));
        assert_eq!(cropped.get_pixel(0, 0), &Rgb([1, 2, 7]));
        assert_eq!(cropped.get_pixel(3, 1), &Rgb([4, 3, 7]));
    }

    #[test]
    fn full_crop_keeps_pixels() {
        let image = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 0]));
        let grid = ColorGrid::new(image.clone()).unwrap();
        let cropped = grid.into_cropped(CropRect::full(5, 3));
        assert_eq!(cropped, image);
    }
}
