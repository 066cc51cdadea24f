// SPDX-License-Identifier: MIT
//! # Shape Deduplication
//!
//! Greedy first-match memoization of rectangle shapes.
//!
//! For each run, in scan order:
//! 1. If a [`Definition`] with the same signature exists, emit a reference to it.
//! 2. Else, if the signature was seen before, promote it to a new definition
//!    (next sequential id) and emit a reference to that.
//! 3. Else, remember the signature and emit the run inline.
//!
//! The first sighting of a promoted shape stays inline; nothing already emitted
//! is rewritten. Lookups are linear scans in creation order. Ids are visible in
//! the output, so match order is part of the contract: each call costs
//! O(definitions + history).

use crate::shape::{Definition, Element, Run, ShapeSignature};

/// Per-image deduplication state. Build a fresh one for every image.
#[derive(Debug, Default)]
pub struct ShapeDeduplicator {
    definitions: Vec<Definition>,
    history: Vec<ShapeSignature>,
}

impl ShapeDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide how `run` is drawn.
    pub fn classify(&mut self, run: &Run) -> Element {
        let signature = run.signature();

        if let Some(def) = self.definitions.iter().find(|d| d.signature == signature) {
            return Element::Reference {
                id: def.id,
                x: run.x,
                y: run.y,
            };
        }

        if self.history.iter().any(|seen| *seen == signature) {
            let id = self.definitions.len();
            self.definitions.push(Definition { id, signature });
            tracing::trace!(id, len = signature.len, color = %signature.color, "promoted shape");
            return Element::Reference {
                id,
                x: run.x,
                y: run.y,
            };
        }

        self.history.push(signature);
        Element::Inline(*run)
    }

    /// Definitions created so far, in id order.
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Distinct signatures seen inline so far, in first-sighting order.
    pub fn history(&self) -> &[ShapeSignature] {
        &self.history
    }

    pub fn into_definitions(self) -> Vec<Definition> {
        self.definitions
    }
}
