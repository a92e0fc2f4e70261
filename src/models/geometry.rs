//! Cell geometry for pincode rendering.

use serde::{Deserialize, Serialize};

/// Size of a single pincode cell, measured in terminal cells.
///
/// A width of 5 and height of 3 leaves room for one glyph surrounded by
/// borders and horizontal padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSize {
    /// Cell width in terminal columns
    pub width: u16,
    /// Cell height in terminal rows
    pub height: u16,
}

impl CellSize {
    /// Creates a new cell size.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Creates a square cell size.
    #[must_use]
    pub const fn square(side: u16) -> Self {
        Self::new(side, side)
    }
}

impl Default for CellSize {
    fn default() -> Self {
        // One glyph plus borders and padding
        Self::new(5, 3)
    }
}
