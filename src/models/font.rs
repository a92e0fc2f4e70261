//! Text emphasis for pincode glyphs.
//!
//! Terminals have no font faces or sizes; what a style can vary is the
//! emphasis applied to a glyph. `FontStyle` is the terminal stand-in for
//! a font reference and converts to a Ratatui modifier set for rendering.

use serde::{Deserialize, Serialize};

/// Emphasis flags applied to rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FontStyle {
    /// Render text bold
    pub bold: bool,
    /// Render text italic
    pub italic: bool,
    /// Render text underlined
    pub underlined: bool,
    /// Render text dimmed
    pub dim: bool,
}

impl FontStyle {
    /// Plain text with no emphasis.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            bold: false,
            italic: false,
            underlined: false,
            dim: false,
        }
    }

    /// Bold text.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            bold: true,
            italic: false,
            underlined: false,
            dim: false,
        }
    }

    /// Returns a copy with the dim flag set.
    #[must_use]
    pub const fn dimmed(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Converts the flags to a Ratatui modifier set for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub fn to_modifier(self) -> ratatui::style::Modifier {
        use ratatui::style::Modifier;

        let mut modifier = Modifier::empty();
        if self.bold {
            modifier |= Modifier::BOLD;
        }
        if self.italic {
            modifier |= Modifier::ITALIC;
        }
        if self.underlined {
            modifier |= Modifier::UNDERLINED;
        }
        if self.dim {
            modifier |= Modifier::DIM;
        }
        modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_default() {
        assert_eq!(FontStyle::plain(), FontStyle::default());
    }

    #[test]
    fn test_bold() {
        let font = FontStyle::bold();
        assert!(font.bold);
        assert!(!font.italic);
    }

    #[test]
    fn test_dimmed_preserves_other_flags() {
        let font = FontStyle::bold().dimmed();
        assert!(font.bold);
        assert!(font.dim);
    }

    #[cfg(feature = "ratatui")]
    #[test]
    fn test_to_modifier() {
        use ratatui::style::Modifier;

        assert_eq!(FontStyle::plain().to_modifier(), Modifier::empty());
        assert_eq!(FontStyle::bold().to_modifier(), Modifier::BOLD);

        let all = FontStyle {
            bold: true,
            italic: true,
            underlined: true,
            dim: true,
        };
        let modifier = all.to_modifier();
        assert!(modifier.contains(Modifier::BOLD));
        assert!(modifier.contains(Modifier::ITALIC));
        assert!(modifier.contains(Modifier::UNDERLINED));
        assert!(modifier.contains(Modifier::DIM));
    }
}
