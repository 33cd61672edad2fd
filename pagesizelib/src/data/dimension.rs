//! Rotation-invariant page dimensions.
//!
//! A page rotated by 90 degrees has the same physical size, so a dimension is
//! an *unordered* pair of millimeter lengths. Rather than relying on
//! hash-time tricks, the pair is canonicalized once at construction: the
//! smaller length is stored as `short`, the larger as `long`. Equality,
//! hashing, and ordering all follow from the stored form, so `Dimension`
//! behaves correctly as a `HashMap` key and in ordered containers alike.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::units::points_to_mm;

/// Physical page size in whole millimeters, canonicalized so that
/// `short <= long`.
///
/// The derived `Ord` compares `(short, long)` lexicographically, which is
/// the canonical display sort key for tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dimension {
    short: u32,
    long: u32,
}

impl Dimension {
    /// Create a dimension from two side lengths in millimeters.
    /// Argument order is irrelevant.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            short: a.min(b),
            long: a.max(b),
        }
    }

    /// Create a dimension from side lengths in points.
    pub fn from_points(width_pt: f64, height_pt: f64) -> Self {
        Self::new(points_to_mm(width_pt), points_to_mm(height_pt))
    }

    /// The smaller of the two side lengths.
    pub fn short(&self) -> u32 {
        self.short
    }

    /// The larger of the two side lengths.
    pub fn long(&self) -> u32 {
        self.long
    }

    /// Whether both sides have the same length.
    pub fn is_square(&self) -> bool {
        self.short == self.long
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} mm", self.short, self.long)
    }
}
