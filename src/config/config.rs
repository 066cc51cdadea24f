//! # Configuration Module
//!
//! This module provides configuration structures and validation for conversion runs.
//! It is the common interface between the CLI and the conversion library.
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Range | Description |
//! |-----------|------|-------|-------------|
//! | `patterns` | `Vec<String>` | at least one | Glob patterns naming input images |
//! | `out_dir` | `Option<PathBuf>` | existing directory | Where `.svg` files go (default: next to input) |
//! | `rect_height` | `f64` | > 0 | Declared height of every rectangle |
//! | `edge_margin` | `f64` | >= 0 | Overlap added on each side of a run |
//! | `alpha_threshold` | `u16` | any | 16-bit alpha a pixel must exceed to be opaque |
//! | `keep_black` | `bool` | true/false | Emit pure-black runs instead of dropping them |
//!
//! ## Examples
//!
//! ```rust
//! use png2svg::config::config::ConvertConfig;
//!
//! let config = ConvertConfig::new(vec!["art/*.png".to_string()]);
//! assert!(config.validate().is_ok());
//!
//! let opts = config.to_encode_options();
//! assert!(opts.suppress_black);
//! ```

use std::path::{Path, PathBuf};

use svg_runs::EncodeOptions;
use svg_runs::options::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_EDGE_MARGIN, DEFAULT_RECT_HEIGHT};

use crate::error::{ConvertError, ConvertResult};

/// Configuration for one conversion run.
///
/// Geometry defaults match the historical output byte for byte; override them
/// only when the consumer of the SVG does not compare against older files.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Glob patterns, expanded independently and in order.
    pub patterns: Vec<String>,

    /// Directory receiving the `.svg` files.
    ///
    /// When `None`, each output is written next to its input.
    pub out_dir: Option<PathBuf>,

    /// Declared rectangle height. Must be finite and positive.
    pub rect_height: f64,

    /// Overlap added to each horizontal side of a run. Must be finite and non-negative.
    pub edge_margin: f64,

    /// 16-bit alpha value a pixel must strictly exceed to count as opaque.
    pub alpha_threshold: u16,

    /// Keep runs whose color quantizes to `#000000`.
    pub keep_black: bool,
}

impl Default for ConvertConfig {
    /// No patterns and the stock geometry (`1.1` high, `0.1` margin).
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            out_dir: None,
            rect_height: DEFAULT_RECT_HEIGHT,
            edge_margin: DEFAULT_EDGE_MARGIN,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            keep_black: false,
        }
    }
}

impl ConvertConfig {
    /// Creates a configuration for `patterns` with default geometry.
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            ..Self::default()
        }
    }

    /// Validates the configuration parameters.
    ///
    /// An empty pattern list is reported as a usage error, everything else as
    /// a validation error naming the field.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.patterns.is_empty() {
            return Err(ConvertError::usage(
                "you must provide one or more images to convert",
            ));
        }
        if !self.rect_height.is_finite() || self.rect_height <= 0.0 {
            return Err(ConvertError::validation(
                "rect_height",
                "must be a finite number greater than 0",
                self.rect_height.to_string(),
            ));
        }
        if !self.edge_margin.is_finite() || self.edge_margin < 0.0 {
            return Err(ConvertError::validation(
                "edge_margin",
                "must be a finite number of at least 0",
                self.edge_margin.to_string(),
            ));
        }
        if let Some(dir) = &self.out_dir {
            if !dir.is_dir() {
                return Err(ConvertError::validation(
                    "out_dir",
                    "must be an existing directory",
                    dir.display().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Convert to the encoder's options.
    pub fn to_encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            rect_height: self.rect_height,
            edge_margin: self.edge_margin,
            alpha_threshold: self.alpha_threshold,
            suppress_black: !self.keep_black,
        }
    }

    /// Where the SVG for `input` is written: same stem, `.svg` extension.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let sibling = input.with_extension("svg");
        match (&self.out_dir, sibling.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => sibling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert!(config.patterns.is_empty());
        assert_eq!(config.out_dir, None);
        assert_eq!(config.alpha_threshold, 1);
        assert!(!config.keep_black);
        assert_eq!(config.to_encode_options(), EncodeOptions::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ConvertConfig::default();

        // No patterns is a usage error
        assert_eq!(config.validate().unwrap_err().category(), "usage");
        config.patterns.push("*.png".to_string());
        assert!(config.validate().is_ok());

        // Invalid height
        config.rect_height = 0.0;
        assert_eq!(config.validate().unwrap_err().category(), "validation");
        config.rect_height = f64::NAN;
        assert!(config.validate().is_err());
        config.rect_height = 1.1; // Reset

        // Invalid margin
        config.edge_margin = -0.1;
        assert!(config.validate().is_err());
        config.edge_margin = 0.0;
        assert!(config.validate().is_ok());

        // Missing output directory
        config.out_dir = Some(PathBuf::from("/definitely/not/a/dir/png2svg"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_keep_black_disables_suppression() {
        let config = ConvertConfig {
            keep_black: true,
            ..ConvertConfig::new(vec!["a.png".into()])
        };
        assert!(!config.to_encode_options().suppress_black);
    }

    #[test]
    fn test_output_path_for() {
        let mut config = ConvertConfig::new(vec!["x".into()]);
        assert_eq!(
            config.output_path_for(Path::new("art/sprite.png")),
            PathBuf::from("art/sprite.svg")
        );
        assert_eq!(
            config.output_path_for(Path::new("noext")),
            PathBuf::from("noext.svg")
        );

        config.out_dir = Some(PathBuf::from("out"));
        assert_eq!(
            config.output_path_for(Path::new("art/sprite.png")),
            PathBuf::from("out/sprite.svg")
        );
    }
}
