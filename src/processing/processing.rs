//! # File Conversion Pipeline
//!
//! Sequential, fail-fast conversion of raster files to SVG.
//!
//! ## Architecture
//!
//! Each input file goes through the same linear pipeline:
//! 1. **Map**: the file is memory-mapped read-only
//! 2. **Decode**: `image` sniffs the format and decodes to a pixel grid
//! 3. **Encode**: the grid is widened to 16-bit RGBA and handed to [`svg_runs::encode`]
//! 4. **Write**: the SVG goes to a temporary file in the destination directory,
//!    then is renamed over the target
//!
//! ## Ordering and Failure
//!
//! Patterns are expanded one at a time, in argument order. A pattern's files
//! are converted before the next pattern is expanded. The first error of any
//! kind stops the run; files converted before it are left in place.
//!
//! No state survives between files: every file gets its own encoder state.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use svg_runs::{EncodeOptions, EncodeStats};
use tempfile::NamedTempFile;

use crate::config::ConvertConfig;
use crate::error::{ConvertError, ConvertResult};

/// Outcome of converting one file.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Size of the written SVG in bytes.
    pub bytes: usize,
    pub stats: EncodeStats,
}

/// Expand one glob pattern into the files it names, in sorted order.
///
/// A pattern that parses but matches no regular files is an error.
pub fn expand_pattern(pattern: &str) -> ConvertResult<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| ConvertError::glob(pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            ConvertError::io_at("glob expansion", path, e.into_error())
                .with_context(format!("while expanding '{}'", pattern))
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(ConvertError::no_matches(pattern)
            .with_recovery_suggestion("quote the pattern or check the working directory"));
    }
    files.sort();
    tracing::debug!(pattern, count = files.len(), "expanded pattern");
    Ok(files)
}

/// Decode and encode `input` without writing anything.
pub fn render_file(input: &Path, opts: EncodeOptions) -> ConvertResult<svg_runs::Document> {
    let file = File::open(input).map_err(|e| ConvertError::io_at("open", input, e))?;

    // SAFETY: the mapping is read-only and dropped before this function returns.
    // Concurrent truncation by another process is outside what we guard against.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| ConvertError::io_at("map", input, e))?;

    let image = image::load_from_memory(&mmap).map_err(|e| ConvertError::decode(input, e))?;
    let grid = image.into_rgba16();

    Ok(svg_runs::encode(&grid, opts))
}

/// Convert a single file according to `config`.
pub fn convert_file(input: &Path, config: &ConvertConfig) -> ConvertResult<ConvertReport> {
    tracing::debug!(input = %input.display(), "converting");

    let document = render_file(input, config.to_encode_options())?;
    let svg = document.to_svg();
    let output = config.output_path_for(input);
    write_atomically(&output, svg.as_bytes())?;

    let stats = document.stats();
    if stats.suppressed_black > 0 {
        tracing::warn!(
            input = %input.display(),
            runs = stats.suppressed_black,
            "dropped pure-black runs; use dark grey or --keep-black to keep them"
        );
    }
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        bytes = svg.len(),
        inline = stats.inline,
        references = stats.references,
        definitions = stats.definitions,
        "converted"
    );

    Ok(ConvertReport {
        input: input.to_path_buf(),
        output,
        width: document.width,
        height: document.height,
        bytes: svg.len(),
        stats,
    })
}

/// Validate `config`, then convert every matched file in order.
///
/// `on_converted` runs after each file is written, so progress is visible even
/// when a later file fails.
pub fn run<F>(config: &ConvertConfig, mut on_converted: F) -> ConvertResult<Vec<ConvertReport>>
where
    F: FnMut(&ConvertReport),
{
    config.validate()?;

    let mut reports = Vec::new();
    for pattern in &config.patterns {
        for input in expand_pattern(pattern)? {
            let report = convert_file(&input, config)?;
            on_converted(&report);
            reports.push(report);
        }
    }
    Ok(reports)
}

fn write_atomically(target: &Path, contents: &[u8]) -> ConvertResult<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| ConvertError::io_at("create temp file", dir, e))?;
    tmp.write_all(contents)
        .map_err(|e| ConvertError::io_at("write", tmp.path(), e))?;
    tmp.persist(target)
        .map_err(|e| ConvertError::io_at("persist", target, e.error))?;
    Ok(())
}
