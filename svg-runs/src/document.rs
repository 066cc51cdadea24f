// SPDX-License-Identifier: MIT
//! # Document Assembly
//!
//! Pure concatenation: header, `<defs>` with every definition in id order, body
//! elements in scan order, footer. No validation happens here.

use std::fmt;

use crate::options::EncodeOptions;
use crate::shape::{Definition, Element};

const SVG_FOOTER: &str = "</svg>";

/// Counters gathered while encoding one image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Runs that reached the deduplicator.
    pub runs: usize,
    pub inline: usize,
    pub references: usize,
    pub definitions: usize,
    /// Black runs dropped by the scanner.
    pub suppressed_black: usize,
}

/// The encoded form of one image.
#[derive(Clone, Debug)]
pub struct Document {
    pub width: u32,
    pub height: u32,
    pub definitions: Vec<Definition>,
    pub elements: Vec<Element>,
    pub opts: EncodeOptions,
    pub suppressed_black: usize,
}

impl Document {
    pub fn stats(&self) -> EncodeStats {
        let references = self.elements.iter().filter(|e| e.is_reference()).count();
        EncodeStats {
            runs: self.elements.len(),
            inline: self.elements.len() - references,
            references,
            definitions: self.definitions.len(),
            suppressed_black: self.suppressed_black,
        }
    }

    /// Render the full SVG text.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<svg viewBox='0 0 {} {}' xmlns='http://www.w3.org/2000/svg'>",
            self.width, self.height
        )?;
        f.write_str("<defs>")?;
        for def in &self.definitions {
            def.write_svg(f, &self.opts)?;
        }
        f.write_str("</defs>")?;
        for el in &self.elements {
            el.write_svg(f, &self.opts)?;
        }
        f.write_str(SVG_FOOTER)
    }
}
