// SPDX-License-Identifier: MIT
//! # svg-runs: Scanline Run Encoding for Raster-to-SVG Conversion
//!
//! This crate turns a pixel grid into a compact SVG document. Horizontal runs of
//! identically-colored opaque pixels become rectangles, and rectangles sharing
//! a shape (width and color) are emitted once as a definition and referenced
//! afterwards.
//!
//! ## Pipeline
//!
//! Data flows one way, one image at a time:
//!
//! 1. [`scan::RunScanner`] walks the grid row-major and yields [`shape::Run`]s
//! 2. [`dedup::ShapeDeduplicator`] turns each run into an inline rectangle or a reference
//! 3. [`document::Document`] concatenates header, definitions, body and footer
//!
//! Colors pass through [`color::quantize`], which floors 16-bit channels to 8 bits.
//!
//! ## Key Components
//!
//! - [`color`]: wide pixel samples and 8-bit hex colors
//! - [`grid`]: the [`grid::PixelGrid`] seam, implemented for `image` RGBA buffers
//! - [`options`]: rectangle geometry and classification thresholds
//! - [`scan`]: run detection
//! - [`dedup`]: greedy shape memoization
//! - [`document`]: SVG assembly and encoding counters
//!
//! ## Usage Example
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use svg_runs::{encode, EncodeOptions};
//!
//! let img = RgbaImage::from_pixel(3, 1, Rgba([255, 0, 0, 255]));
//! let doc = encode(&img, EncodeOptions::default());
//! assert_eq!(
//!     doc.to_svg(),
//!     "<svg viewBox='0 0 3 1' xmlns='http://www.w3.org/2000/svg'><defs></defs>\
//!      <rect width='3.2' height='1.1' x='0' y='0' fill='#ff0000'></rect></svg>"
//! );
//! ```
//!
//! ## Cost
//!
//! Scanning is linear in pixel count. Deduplication is quadratic in run count
//! in the worst case, since lookups scan definitions and history in order.

pub mod color;
pub mod dedup;
pub mod document;
pub mod grid;
pub mod options;
pub mod scan;
pub mod shape;

pub use color::{quantize, Rgb8, WidePixel};
pub use dedup::ShapeDeduplicator;
pub use document::{Document, EncodeStats};
pub use grid::PixelGrid;
pub use options::EncodeOptions;
pub use scan::RunScanner;
pub use shape::{Definition, Element, Run, ShapeSignature};

/// Encode one image. All state is local to this call.
pub fn encode<G: PixelGrid + ?Sized>(grid: &G, opts: EncodeOptions) -> Document {
    let (width, height) = grid.dimensions();
    let mut scanner = RunScanner::new(grid, opts);
    let mut dedup = ShapeDeduplicator::new();

    let elements: Vec<Element> = scanner.by_ref().map(|run| dedup.classify(&run)).collect();
    let suppressed_black = scanner.suppressed();
    let definitions = dedup.into_definitions();

    tracing::debug!(
        width,
        height,
        elements = elements.len(),
        definitions = definitions.len(),
        suppressed_black,
        "encoded grid"
    );

    Document {
        width,
        height,
        definitions,
        elements,
        opts,
        suppressed_black,
    }
}

/// Shorthand for `encode(grid, opts).to_svg()`.
pub fn encode_svg<G: PixelGrid + ?Sized>(grid: &G, opts: EncodeOptions) -> String {
    encode(grid, opts).to_svg()
}
