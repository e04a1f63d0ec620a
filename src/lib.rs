//! # letterbox-trim
//!
//! Batch-removes uniform borders (letterboxing) from a folder of photos.
//! Each image is binarized, white runs are measured inward from its edges,
//! and a symmetric crop is written to an output folder.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      input/          →  [a.png, c.JPG, ...]   (non-recursive, by extension)
//! 2. Analyze   decoded pixels  →  CropDecision          (pure, no I/O)
//! 3. Write     cropped pixels  →  output/<name>.<ext>
//! ```
//!
//! Images are processed strictly one after another. Nothing is shared between
//! images: the grids built for one image are dropped once its copy is written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists candidate images (`png`, `jpg`, `jpeg`, any case) |
//! | [`border`] | Binarization, edge runs and the crop decision |
//! | [`imaging`] | Decode/encode boundary: [`imaging::ImageBackend`] + `image`-crate backend |
//! | [`process`] | Sequential decode → analyze → crop → write driver with progress events |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Border Detection
//!
//! A pixel is white when the mean of its channels is above 128. For each
//! axis, six runs are measured (first, middle and last line, from both ends)
//! and the shortest one is the border candidate. A candidate of at least half
//! the dimension means the image is uniform on that axis, not bordered, and is
//! ignored. By default only the axis with the larger border is cropped,
//! vertical on ties; `cropMode = "both-axes"` crops both.
//!
//! All of these are tunable in the `[analysis]` section of `config.toml`; see
//! [`config`].

pub mod border;
pub mod config;
pub mod imaging;
pub mod logging;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
