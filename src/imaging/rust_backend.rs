//! Pure Rust codec backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image::ImageReader` with content sniffing, EXIF orientation applied, then `into_rgb8` |
//! | Encode PNG | `PngEncoder` through a `BufWriter<File>` |
//! | Encode JPEG | `JpegEncoder::new_with_quality` through a `BufWriter<File>` |
//! | Format choice | `ImageFormat::from_path` (extension, case-insensitive) |

use super::backend::{BackendError, ImageBackend, Quality};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Formats the backend writes. Anything else is rejected up front.
const WRITABLE_FORMATS: &[ImageFormat] = &[ImageFormat::Png, ImageFormat::Jpeg];

/// Backend using the `image` crate's pure Rust PNG and JPEG codecs.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BackendError + '_ {
    move |source| BackendError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<RgbImage, BackendError> {
        let decode_error = |e: image::ImageError| BackendError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        let mut decoder = ImageReader::open(path)
            .map_err(io_error(path))?
            .with_guessed_format()
            .map_err(io_error(path))?
            .into_decoder()
            .map_err(decode_error)?;
        // Borders are measured on the image as it is meant to be viewed.
        let orientation = decoder.orientation().map_err(decode_error)?;
        let mut image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
        image.apply_orientation(orientation);
        Ok(image.into_rgb8())
    }

    fn encode(
        &self,
        image: &RgbImage,
        path: &Path,
        quality: Quality,
    ) -> Result<(), BackendError> {
        let format = ImageFormat::from_path(path)
            .ok()
            .filter(|f| WRITABLE_FORMATS.contains(f))
            .ok_or_else(|| BackendError::UnsupportedFormat(path.to_path_buf()))?;

        let file = File::create(path).map_err(io_error(path))?;
        let mut writer = BufWriter::new(file);
        let encoded = match format {
            ImageFormat::Jpeg => image.write_with_encoder(JpegEncoder::new_with_quality(
                &mut writer,
                quality.value(),
            )),
            _ => image.write_with_encoder(PngEncoder::new(&mut writer)),
        };
        encoded.map_err(|e| BackendError::Encode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        writer.flush().map_err(io_error(path))
    }
}
