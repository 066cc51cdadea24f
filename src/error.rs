//! # Conversion Error Handling
//!
//! Error types for the file-level conversion pipeline.
//!
//! ## Architecture
//!
//! - **ConvertError**: one variant per failure kind, each carrying an [`ErrorContext`]
//! - **ErrorContext**: free-form context plus an optional recovery suggestion
//! - **Error chaining**: I/O, glob and decoder errors are kept as `source()`
//!
//! ## Fail-fast
//!
//! Every error here is fatal to the whole batch. The encoder itself cannot fail
//! on a decoded grid, so all variants originate at the edges: arguments, globbing,
//! reading, decoding and writing.
//!
//! ## Usage
//!
//! ```rust
//! use png2svg::error::ConvertError;
//!
//! let error = ConvertError::no_matches("shots/*.png")
//!     .with_recovery_suggestion("check the pattern is relative to the working directory");
//! assert_eq!(error.category(), "no_matches");
//! ```

use std::{error::Error as StdError, fmt, path::PathBuf};

/// Metadata attached to every error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Additional context about the error
    pub context: Option<String>,
    /// Suggested recovery action
    pub recovery_suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Base error type for conversion runs.
#[derive(Debug)]
pub enum ConvertError {
    /// No input patterns were given
    Usage { reason: String, context: ErrorContext },
    /// A configuration value is out of range
    Validation {
        field: String,
        constraint: String,
        value: String,
        context: ErrorContext,
    },
    /// A pattern could not be parsed
    Glob {
        pattern: String,
        source: glob::PatternError,
        context: ErrorContext,
    },
    /// A pattern parsed but matched no files
    NoMatches { pattern: String, context: ErrorContext },
    /// Reading, mapping or writing a file failed
    Io {
        operation: String,
        path: Option<PathBuf>,
        source: std::io::Error,
        context: ErrorContext,
    },
    /// The raster decoder rejected a file
    Decode {
        path: PathBuf,
        source: image::ImageError,
        context: ErrorContext,
    },
}

/// Convenience alias used throughout the crate.
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    /// Create a usage error
    pub fn usage(reason: impl Into<String>) -> Self {
        Self::Usage {
            reason: reason.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a validation error
    pub fn validation(
        field: impl Into<String>,
        constraint: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            constraint: constraint.into(),
            value: value.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a glob pattern error
    pub fn glob(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::Glob {
            pattern: pattern.into(),
            source,
            context: ErrorContext::new(),
        }
    }

    /// Create an empty-match error
    pub fn no_matches(pattern: impl Into<String>) -> Self {
        Self::NoMatches {
            pattern: pattern.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: None,
            source,
            context: ErrorContext::new(),
        }
    }

    /// Create an I/O error tied to a file
    pub fn io_at(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path: Some(path.into()),
            source,
            context: ErrorContext::new(),
        }
    }

    /// Create a decode error
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
            context: ErrorContext::new(),
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_mut().context = Some(context.into());
        self
    }

    /// Add recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context_mut().recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Get the error context
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Usage { context, .. } => context,
            Self::Validation { context, .. } => context,
            Self::Glob { context, .. } => context,
            Self::NoMatches { context, .. } => context,
            Self::Io { context, .. } => context,
            Self::Decode { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::Usage { context, .. } => context,
            Self::Validation { context, .. } => context,
            Self::Glob { context, .. } => context,
            Self::NoMatches { context, .. } => context,
            Self::Io { context, .. } => context,
            Self::Decode { context, .. } => context,
        }
    }

    pub fn recovery_suggestion(&self) -> Option<&str> {
        self.context().recovery_suggestion.as_deref()
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage",
            Self::Validation { .. } => "validation",
            Self::Glob { .. } => "glob",
            Self::NoMatches { .. } => "no_matches",
            Self::Io { .. } => "io",
            Self::Decode { .. } => "decode",
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Usage { reason, .. } => write!(f, "Usage error: {}", reason),
            ConvertError::Validation {
                field,
                constraint,
                value,
                ..
            } => {
                write!(
                    f,
                    "Validation failed for '{}': {} (value: {})",
                    field, constraint, value
                )
            }
            ConvertError::Glob {
                pattern, source, ..
            } => {
                write!(f, "Invalid glob pattern '{}': {}", pattern, source)
            }
            ConvertError::NoMatches { pattern, .. } => {
                write!(f, "Pattern '{}' matched no files", pattern)
            }
            ConvertError::Io {
                operation,
                path,
                source,
                ..
            } => {
                if let Some(path) = path {
                    write!(
                        f,
                        "I/O error during {} on '{}': {}",
                        operation,
                        path.display(),
                        source
                    )
                } else {
                    write!(f, "I/O error during {}: {}", operation, source)
                }
            }
            ConvertError::Decode { path, source, .. } => {
                write!(f, "Failed to decode '{}': {}", path.display(), source)
            }
        }?;

        if let Some(context) = &self.context().context {
            write!(f, " ({})", context)?;
        }
        Ok(())
    }
}

impl StdError for ConvertError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Glob { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
