//! Configuration loading and validation.
//!
//! The tool reads a single `config.toml` (path overridable with `--config`).
//! It is loaded once at startup into a [`Config`] that is passed by reference
//! to the scanner, the analyzer and the writer.
//!
//! ## Configuration Options
//!
//! ```toml
//! inputFolderPath = "photos"          # Required (or pass --input)
//! outputFolderPath = "photos/output"  # Optional, defaults to <inputFolderPath>/output
//! jpegQuality = 100                   # JPEG encoder quality for cropped copies (1-100)
//!
//! [analysis]
//! luminanceThreshold = 128            # Mean of R,G,B strictly above this counts as white
//! rejectDivisor = 2                   # Runs >= dimension / divisor are not borders
//! extraInset = 0                      # Extra pixels trimmed beyond the measured run
//! cropMode = "single-axis"            # "single-axis" or "both-axes"
//!
//! [logging]
//! level = "warn"                      # tracing filter (RUST_LOG takes precedence)
//! ```
//!
//! Every key except `inputFolderPath` is optional. Unknown keys are rejected
//! to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Please provide the input folder path (inputFolderPath) in {0}")]
    MissingInputFolder(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// How many axes a single image may be cropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropMode {
    /// Crop only the axis with the larger border (vertical wins ties).
    #[default]
    SingleAxis,
    /// Crop each axis by its own border.
    BothAxes,
}

/// Border-detection tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// A pixel is white when the mean of its channels is strictly above this.
    pub luminance_threshold: u8,
    /// A candidate run is rejected when `run * reject_divisor >= dimension`.
    pub reject_divisor: u32,
    /// Pixels trimmed per side beyond the measured run, for non-zero runs only.
    pub extra_inset: u32,
    pub crop_mode: CropMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            luminance_threshold: 128,
            reject_divisor: 2,
            extra_inset: 0,
            crop_mode: CropMode::SingleAxis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Encoder quality for cropped JPEG copies unless `jpegQuality` says otherwise.
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// The config file as written on disk. Everything is optional here;
/// [`Config::resolve`] enforces what is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FileConfig {
    pub input_folder_path: Option<PathBuf>,
    pub output_folder_path: Option<PathBuf>,
    pub jpeg_quality: u8,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_folder_path: None,
            output_folder_path: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            analysis: AnalysisConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Command-line overrides applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub jpeg_quality: u8,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Merge overrides onto the file config, fill defaults and validate.
    ///
    /// `source` only names the config file in error messages.
    pub fn resolve(
        file: FileConfig,
        overrides: Overrides,
        source: &Path,
    ) -> Result<Config, ConfigError> {
        let input_dir = overrides
            .input
            .or(file.input_folder_path)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ConfigError::MissingInputFolder(source.to_path_buf()))?;
        let output_dir = overrides
            .output
            .or(file.output_folder_path)
            .unwrap_or_else(|| input_dir.join("output"));

        let config = Config {
            input_dir,
            output_dir,
            jpeg_quality: file.jpeg_quality,
            analysis: file.analysis,
            logging: file.logging,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.reject_divisor == 0 {
            return Err(ConfigError::Validation(
                "analysis.rejectDivisor must be at least 1".into(),
            ));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Validation(format!(
                "jpegQuality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

/// Read a config file.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML or unknown keys.
pub fn load_file_config(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let file: FileConfig = toml::from_str(&content)?;
    Ok(Some(file))
}

/// Load and resolve the configuration for a run.
pub fn load_config(path: &Path, overrides: Overrides) -> Result<Config, ConfigError> {
    let file = load_file_config(path)?.unwrap_or_default();
    Config::resolve(file, overrides, path)
}

/// A documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# letterbox-trim configuration

# Folder containing the images to crop (PNG, JPG, JPEG). Required.
inputFolderPath = "photos"

# Where cropped copies are written. Defaults to <inputFolderPath>/output.
# outputFolderPath = "photos/output"

# Encoder quality (1-100) for cropped JPEG copies. PNG output is lossless.
jpegQuality = 100

[analysis]
# A pixel counts as white when the mean of R, G and B is strictly above this.
luminanceThreshold = 128

# A border run of at least dimension / rejectDivisor is treated as a uniform
# image rather than a border, and nothing is cropped on that axis.
rejectDivisor = 2

# Extra pixels trimmed on each side beyond the measured border.
extraInset = 0

# "single-axis" crops only the axis with the larger border (vertical on ties).
# "both-axes" crops top/bottom and left/right independently.
cropMode = "single-axis"

[logging]
# tracing filter directive; the RUST_LOG environment variable takes precedence.
level = "warn"
"#
}
