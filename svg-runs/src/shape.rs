// SPDX-License-Identifier: MIT
//! # Runs, Shapes and Elements
//!
//! A [`Run`] is what the scanner finds. A [`ShapeSignature`] is a run with its
//! position dropped, the unit of deduplication. An [`Element`] is what ends up
//! in the document body.
//!
//! Signatures are built from fields, not by erasing `x`/`y` from rendered
//! text, so two runs share a signature exactly when length and color match.
//! Declared width and height are pure functions of the signature under fixed
//! [`EncodeOptions`], which keeps the two notions of equality identical.

use std::fmt::{self, Write};

use crate::color::Rgb8;
use crate::options::EncodeOptions;

/// A maximal horizontal sequence of same-colored opaque pixels in one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub x: u32,
    pub y: u32,
    /// Pixel count, always at least 1.
    pub len: u32,
    pub color: Rgb8,
}

impl Run {
    #[inline]
    pub fn signature(&self) -> ShapeSignature {
        ShapeSignature {
            len: self.len,
            color: self.color,
        }
    }
}

/// Position-free identity of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeSignature {
    pub len: u32,
    pub color: Rgb8,
}

impl ShapeSignature {
    /// `<rect width='..' height='..' fill='#rrggbb'></rect>`
    pub fn write_svg(&self, out: &mut impl Write, opts: &EncodeOptions) -> fmt::Result {
        write!(
            out,
            "<rect width='{:.1}' height='{:.1}' fill='#{}'></rect>",
            opts.rect_width(self.len),
            opts.rect_height,
            self.color
        )
    }
}

/// A shared, numbered shape. Created on the second sighting of its signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Definition {
    pub id: usize,
    pub signature: ShapeSignature,
}

impl Definition {
    /// `<g id='N'>..shape..</g>`
    pub fn write_svg(&self, out: &mut impl Write, opts: &EncodeOptions) -> fmt::Result {
        write!(out, "<g id='{}'>", self.id)?;
        self.signature.write_svg(out, opts)?;
        out.write_str("</g>")
    }
}

/// One body entry of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    /// First sighting of a shape, drawn in full.
    Inline(Run),
    /// Later sighting, drawn by pointing at a [`Definition`].
    Reference { id: usize, x: u32, y: u32 },
}

impl Element {
    pub fn write_svg(&self, out: &mut impl Write, opts: &EncodeOptions) -> fmt::Result {
        match self {
            Element::Inline(run) => write!(
                out,
                "<rect width='{:.1}' height='{:.1}' x='{}' y='{}' fill='#{}'></rect>",
                opts.rect_width(run.len),
                opts.rect_height,
                run.x,
                run.y,
                run.color
            ),
            Element::Reference { id, x, y } => {
                write!(out, "<use href='#{id}' x='{x}' y='{y}'></use>")
            }
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Element::Reference { .. })
    }
}
