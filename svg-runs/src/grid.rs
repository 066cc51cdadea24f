// SPDX-License-Identifier: MIT
//! # Pixel Grid Access
//!
//! The scanner only needs two things from an image: its bounds and a
//! wide-precision RGBA sample per coordinate. [`PixelGrid`] is that seam.
//! Implementations are provided for `image` buffers in 8-bit and 16-bit RGBA.
//!
//! Samples are alpha-premultiplied: a half-transparent white pixel reports
//! roughly half-intensity channels. Fully opaque pixels are unaffected.

use std::ops::Deref;

use image::{ImageBuffer, Rgba};

use crate::color::WidePixel;

/// Read-only view of a decoded raster.
pub trait PixelGrid {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Sample the pixel at `(x, y)`. Callers stay within [`Self::dimensions`].
    fn sample(&self, x: u32, y: u32) -> WidePixel;
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn sample(&self, x: u32, y: u32) -> WidePixel {
        (**self).sample(x, y)
    }
}

impl<C> PixelGrid for ImageBuffer<Rgba<u16>, C>
where
    C: Deref<Target = [u16]>,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn sample(&self, x: u32, y: u32) -> WidePixel {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        premultiplied(r, g, b, a)
    }
}

impl<C> PixelGrid for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn sample(&self, x: u32, y: u32) -> WidePixel {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        premultiplied(widen(r), widen(g), widen(b), widen(a))
    }
}

#[inline]
fn widen(v: u8) -> u16 {
    u16::from(v) * 257
}

#[inline]
fn premultiplied(r: u16, g: u16, b: u16, a: u16) -> WidePixel {
    let scale = |c: u16| (u32::from(c) * u32::from(a) / 0xffff) as u16;
    WidePixel {
        r: scale(r),
        g: scale(g),
        b: scale(b),
        a,
    }
}
