// SPDX-License-Identifier: MIT
//! # Scanline Run Detection
//!
//! Walks a [`PixelGrid`] row-major and yields one [`Run`] per maximal stretch of
//! same-colored opaque pixels.
//!
//! ## Boundary Rules
//!
//! | Pixel       | Accumulation        | Action                         |
//! |-------------|---------------------|--------------------------------|
//! | opaque      | active, same color  | extend                         |
//! | opaque      | inactive or differs | flush, start new at this pixel |
//! | transparent | active              | flush, deactivate              |
//! | transparent | inactive            | nothing                        |
//!
//! End of row always flushes. Runs never cross rows.
//!
//! Flushing a black run with `suppress_black` set drops it and bumps
//! [`RunScanner::suppressed`] instead.

use crate::color::Rgb8;
use crate::grid::PixelGrid;
use crate::options::EncodeOptions;
use crate::shape::Run;

/// Iterator over the runs of a grid, in strict row-major order.
pub struct RunScanner<'a, G: PixelGrid + ?Sized> {
    grid: &'a G,
    opts: EncodeOptions,
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    current: Option<Run>,
    suppressed: usize,
}

impl<'a, G: PixelGrid + ?Sized> RunScanner<'a, G> {
    pub fn new(grid: &'a G, opts: EncodeOptions) -> Self {
        let (width, height) = grid.dimensions();
        Self {
            grid,
            opts,
            width,
            height,
            x: 0,
            y: 0,
            current: None,
            suppressed: 0,
        }
    }

    /// Number of black runs dropped so far.
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Feed one pixel; returns a run if this pixel closed one.
    fn step(&mut self, x: u32, y: u32) -> Option<Run> {
        let px = self.grid.sample(x, y);
        if !px.is_opaque(self.opts.alpha_threshold) {
            return self.flush();
        }

        let color = px.color();
        if let Some(run) = self.current.as_mut() {
            if run.color == color {
                run.len += 1;
                return None;
            }
        }

        let closed = self.flush();
        self.current = Some(Run { x, y, len: 1, color });
        closed
    }

    /// Deactivate the accumulation, yielding it unless it is suppressed.
    fn flush(&mut self) -> Option<Run> {
        let run = self.current.take()?;
        if self.opts.suppress_black && run.color == Rgb8::BLACK {
            self.suppressed += 1;
            tracing::trace!(x = run.x, y = run.y, len = run.len, "dropped black run");
            return None;
        }
        Some(run)
    }
}

impl<G: PixelGrid + ?Sized> Iterator for RunScanner<'_, G> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        while self.y < self.height {
            if self.x >= self.width {
                self.x = 0;
                self.y += 1;
                if let Some(run) = self.flush() {
                    return Some(run);
                }
                continue;
            }

            let (x, y) = (self.x, self.y);
            self.x += 1;
            if let Some(run) = self.step(x, y) {
                return Some(run);
            }
        }
        None
    }
}

/// Collect every run of `grid`.
pub fn scan_runs<G: PixelGrid + ?Sized>(grid: &G, opts: EncodeOptions) -> Vec<Run> {
    RunScanner::new(grid, opts).collect()
}
