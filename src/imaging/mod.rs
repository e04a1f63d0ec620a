//! Image decode/encode in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` → decoder, EXIF orientation applied → `RgbImage` |
//! | **Encode** | `PngEncoder` / `JpegEncoder::new_with_quality` |
//!
//! The module is split into:
//! - **Backend**: [`ImageBackend`] trait + [`BackendError`] + [`Quality`]
//! - **RustBackend**: the `image` crate implementation

pub mod backend;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, Quality};
pub use rust_backend::RustBackend;
