//! Divider descriptor for visually grouping pincode cells.

use serde::{Deserialize, Serialize};

use crate::models::{CellSize, RgbColor};

/// Visual separator inserted between groups of pincode cells.
///
/// A divider splits the cell row after a given cell index, e.g. a divider
/// after index 2 turns a six-cell code into two groups of three.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Divider {
    /// No divider
    #[default]
    None,
    /// Divider after a specific cell index
    Custom {
        /// Cell index the divider follows (0-based)
        after_index: usize,
        /// Divider color
        color: RgbColor,
        /// Divider dimensions in terminal cells
        size: CellSize,
        /// Corner rounding, same scale as cell corner radius
        corner_radius: f32,
    },
}

impl Divider {
    /// Returns the cell index the divider follows, if one is configured.
    #[must_use]
    pub const fn slot_after(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Custom { after_index, .. } => Some(*after_index),
        }
    }

    /// Whether a divider should be drawn at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_default() {
        assert_eq!(Divider::default(), Divider::None);
        assert!(!Divider::None.is_visible());
        assert_eq!(Divider::None.slot_after(), None);
    }

    #[test]
    fn test_custom_slot() {
        let divider = Divider::Custom {
            after_index: 2,
            color: RgbColor::new(30, 50, 90),
            size: CellSize::new(2, 1),
            corner_radius: f32::INFINITY,
        };
        assert!(divider.is_visible());
        assert_eq!(divider.slot_after(), Some(2));
    }
}
