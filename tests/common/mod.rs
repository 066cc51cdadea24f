//! Common test utilities for the png2svg tests
//!
//! Fixture images are written as real PNG files into temporary directories so
//! the whole decode path is exercised.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const NAVY: Rgba<u8> = Rgba([0, 0, 128, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Save `img` as `name` under `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("fixture PNG should be writable");
    path
}

/// 3×1, all red.
pub fn solid_red_row() -> RgbaImage {
    RgbaImage::from_pixel(3, 1, RED)
}

/// 3×2 with a 2-pixel red run at the start of each row.
pub fn stacked_red_pairs() -> RgbaImage {
    RgbaImage::from_fn(3, 2, |x, _| if x < 2 { RED } else { CLEAR })
}

/// Fully transparent image of the given size.
pub fn transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, CLEAR)
}

pub const SOLID_RED_ROW_SVG: &str = "<svg viewBox='0 0 3 1' xmlns='http://www.w3.org/2000/svg'>\
    <defs></defs>\
    <rect width='3.2' height='1.1' x='0' y='0' fill='#ff0000'></rect></svg>";

pub const STACKED_RED_PAIRS_SVG: &str = "<svg viewBox='0 0 3 2' xmlns='http://www.w3.org/2000/svg'>\
    <defs><g id='0'><rect width='2.2' height='1.1' fill='#ff0000'></rect></g></defs>\
    <rect width='2.2' height='1.1' x='0' y='0' fill='#ff0000'></rect>\
    <use href='#0' x='0' y='1'></use></svg>";

/// Glob pattern matching every PNG directly inside `dir`.
pub fn png_glob(dir: &Path) -> String {
    format!("{}/*.png", dir.display())
}
