//! Shade scales: ordered shade labels paired with lightness offsets.
//!
//! A scale is the vertical axis of a palette. Each label (`100`, `200`, ...)
//! names one lightness variant of a color axis, and the offset at the same
//! index is added to the axis' base lightness to produce it.
//!
//! ```rust
//! use tonekit_palette::ShadeScale;
//!
//! let scale = ShadeScale::new(vec![100, 500, 900], vec![0.3, 0.0, -0.3]).unwrap();
//! let pairs: Vec<_> = scale.iter().collect();
//! assert_eq!(pairs, vec![(100, 0.3), (500, 0.0), (900, -0.3)]);
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{PaletteError, Result};

/// Shade labels of the reference scale.
pub const REFERENCE_LABELS: [u32; 7] = [100, 200, 300, 400, 500, 600, 700];

/// Lightness offsets of the reference scale, lighter shades first.
pub const REFERENCE_OFFSETS: [f64; 7] = [0.3, 0.2, 0.1, 0.0, -0.1, -0.2, -0.3];

/// Ordered shade labels paired 1:1 with lightness offsets.
///
/// Construction validates that both sequences have the same, non-zero
/// length, that labels are unique and that every offset is finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadeScale {
    labels: Vec<u32>,
    offsets: Vec<f64>,
}

impl ShadeScale {
    /// Creates a scale from its two parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidSpec`] if the lengths differ, the scale
    /// is empty, a label repeats or an offset is not finite.
    pub fn new(labels: Vec<u32>, offsets: Vec<f64>) -> Result<Self> {
        if labels.len() != offsets.len() {
            return Err(PaletteError::spec(
                "shade scale",
                format!(
                    "{} labels but {} lightness offsets",
                    labels.len(),
                    offsets.len()
                ),
            ));
        }
        if labels.is_empty() {
            return Err(PaletteError::spec("shade scale", "no shades defined"));
        }

        let mut seen = HashSet::new();
        for label in &labels {
            if !seen.insert(*label) {
                return Err(PaletteError::spec(
                    "shade scale",
                    format!("duplicate shade label {}", label),
                ));
            }
        }

        if let Some((label, offset)) = labels
            .iter()
            .zip(&offsets)
            .find(|(_, offset)| !offset.is_finite())
        {
            return Err(PaletteError::spec(
                "shade scale",
                format!("offset {} for shade {} is not a finite number", offset, label),
            ));
        }

        Ok(Self { labels, offsets })
    }

    /// The 100–700 scale with offsets from `+0.3` down to `-0.3`.
    pub fn reference() -> Self {
        Self {
            labels: REFERENCE_LABELS.to_vec(),
            offsets: REFERENCE_OFFSETS.to_vec(),
        }
    }

    /// Shade labels in declared order.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Lightness offsets in declared order.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of shades.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false for a constructed scale; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, offset)` pairs in lock-step.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.labels.iter().copied().zip(self.offsets.iter().copied())
    }
}

impl Default for ShadeScale {
    fn default() -> Self {
        Self::reference()
    }
}
