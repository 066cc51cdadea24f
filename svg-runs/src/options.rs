// SPDX-License-Identifier: MIT
//! # Encoding Options
//!
//! Geometry and classification knobs for one encoding pass.
//!
//! ## Rectangle Geometry
//!
//! Every run becomes a rectangle one row tall. Anti-aliased renderers leave
//! hairline gaps between abutting rectangles, so each rectangle is widened by
//! `edge_margin` on both sides and drawn `rect_height` tall:
//!
//! - **Declared width**: `run length + 2 * edge_margin` (default `len + 0.2`)
//! - **Declared height**: `rect_height` (default `1.1`), independent of row pitch
//!
//! Both are written with one decimal place.
//!
//! ## Opacity and Black Runs
//!
//! A pixel is opaque when its 16-bit alpha exceeds `alpha_threshold`.
//! Runs whose color quantizes to pure black are dropped when `suppress_black`
//! is set. Some decoders report a phantom opaque black pixel right after a
//! transparent area, and existing output relies on those being skipped.

/// Default declared rectangle height in pixel units.
pub const DEFAULT_RECT_HEIGHT: f64 = 1.1;
/// Default overlap added to each horizontal side of a rectangle.
pub const DEFAULT_EDGE_MARGIN: f64 = 0.1;
/// Default 16-bit alpha value a pixel must exceed to count as opaque.
pub const DEFAULT_ALPHA_THRESHOLD: u16 = 1;

/// Parameters for a single encoding pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodeOptions {
    /// Declared height of every rectangle.
    pub rect_height: f64,
    /// Overlap added to the left and to the right of every run.
    pub edge_margin: f64,
    /// Alpha (16-bit) a pixel must strictly exceed to be opaque.
    pub alpha_threshold: u16,
    /// Drop runs whose quantized color is `#000000`.
    pub suppress_black: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            rect_height: DEFAULT_RECT_HEIGHT,
            edge_margin: DEFAULT_EDGE_MARGIN,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            suppress_black: true,
        }
    }
}

impl EncodeOptions {
    /// Declared width of a rectangle covering `run_len` pixels.
    #[inline]
    pub fn rect_width(&self, run_len: u32) -> f64 {
        f64::from(run_len) + 2.0 * self.edge_margin
    }
}
