// SPDX-License-Identifier: MIT
//! # Color Quantization
//!
//! Decoders hand us 16-bit channels. The output document only speaks 8-bit hex,
//! so every channel is floor-divided by 256 before formatting. Floor, not round:
//! existing output depends on the exact bytes.

use std::fmt;

/// One pixel sample at decoder precision (16 bits per channel).
///
/// Color channels are alpha-premultiplied, the same convention the grid
/// adapters in [`crate::grid`] produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidePixel {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl WidePixel {
    pub const TRANSPARENT: WidePixel = WidePixel {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// A pixel counts as opaque when its alpha strictly exceeds `threshold`.
    #[inline]
    pub fn is_opaque(&self, threshold: u16) -> bool {
        self.a > threshold
    }

    /// Quantized color of this sample, alpha ignored.
    #[inline]
    pub fn color(&self) -> Rgb8 {
        quantize(self.r, self.g, self.b)
    }
}

/// An 8-bit-per-channel color as it appears in `fill` attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }

    /// Six lowercase hex digits, no leading `#`.
    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Reduce a wide channel triple to 8 bits per channel by floor division.
#[inline]
pub fn quantize(r: u16, g: u16, b: u16) -> Rgb8 {
    Rgb8 {
        r: narrow(r),
        g: narrow(g),
        b: narrow(b),
    }
}

#[inline]
fn narrow(channel: u16) -> u8 {
    // channel / 256 always fits in a u8
    (channel >> 8) as u8
}
