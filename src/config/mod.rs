//! # Configuration Module
//!
//! This module provides the configuration structure for conversion runs.

pub mod config;

pub use config::ConvertConfig;
