//! # Processing Module
//!
//! This module contains the file conversion pipeline.

pub mod processing;

// Re-export commonly used types for convenience
pub use processing::{ConvertReport, convert_file, expand_pattern, render_file, run};
