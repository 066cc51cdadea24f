//! # png2svg
//!
//! Converts raster images into compact SVG documents built from one-pixel-high
//! rectangles, with repeated shapes emitted once and referenced afterwards.
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//! - `config`: run configuration and validation
//! - `error`: the fail-fast error type for the file pipeline
//! - `processing`: glob expansion, decoding, encoding and atomic output
//!
//! The encoding itself lives in the `svg-runs` workspace crate, re-exported here
//! as [`svg_runs`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use png2svg::config::ConvertConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConvertConfig::new(vec!["sprites/*.png".to_string()]);
//! png2svg::run(&config, |report| {
//!     println!("{} -> {}", report.input.display(), report.output.display());
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod processing;

pub use svg_runs;

/// Re-export error types for convenience
pub use error::{ConvertError, ConvertResult, ErrorContext};

pub use config::ConvertConfig;
pub use processing::{ConvertReport, convert_file, expand_pattern, render_file, run};
