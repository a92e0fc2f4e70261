//! Resend-code button descriptor and derived button style.

use serde::{Deserialize, Serialize};

use crate::models::{FontStyle, RgbColor};

/// Default label for a plain resend button.
pub const DEFAULT_RESEND_TEXT: &str = "Send code again";

/// Countdown period before a resend action becomes available again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cooldown {
    /// Resend is always available
    #[default]
    None,
    /// Resend is disabled for the given period after each use
    Duration {
        /// Cooldown length in seconds
        seconds: u32,
    },
}

impl Cooldown {
    /// Cooldown length in seconds, if one is configured.
    #[must_use]
    pub const fn seconds(&self) -> Option<u32> {
        match self {
            Self::None => None,
            Self::Duration { seconds } => Some(*seconds),
        }
    }
}

/// Horizontal placement of the resend button relative to the cell row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonAlignment {
    /// Align with the leading (left) edge
    #[default]
    Leading,
    /// Align with the trailing (right) edge
    Trailing,
}

impl ButtonAlignment {
    /// Converts to a Ratatui alignment for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_alignment(self) -> ratatui::layout::Alignment {
        match self {
            Self::Leading => ratatui::layout::Alignment::Left,
            Self::Trailing => ratatui::layout::Alignment::Right,
        }
    }
}

/// Optional affordance allowing the user to request a new code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ResendButton {
    /// No resend affordance
    #[default]
    None,
    /// Built-in button; colors are synthesized from the parent style
    Plain {
        /// Button label
        text: String,
        /// Label emphasis
        font: FontStyle,
        /// Countdown before the button re-enables after use
        cooldown: Cooldown,
        /// Horizontal placement
        alignment: ButtonAlignment,
    },
    /// Fully caller-supplied button style
    Custom(ResendButtonStyle),
}

impl ResendButton {
    /// Creates a plain button with the default label and no cooldown.
    #[must_use]
    pub fn plain(font: FontStyle) -> Self {
        Self::Plain {
            text: DEFAULT_RESEND_TEXT.to_string(),
            font,
            cooldown: Cooldown::None,
            alignment: ButtonAlignment::Leading,
        }
    }

    /// Whether a resend affordance should be shown at all.
    #[must_use]
    pub const fn show_button(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Fully-resolved appearance of the resend button.
///
/// For `ResendButton::Plain` this is synthesized from the button descriptor
/// plus the parent style's text and background colors; for
/// `ResendButton::Custom` it is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResendButtonStyle {
    /// Button label; empty for the hidden style
    pub text: String,
    /// Label emphasis
    pub font: FontStyle,
    /// Label color
    pub text_color: RgbColor,
    /// Button background color
    pub background_color: RgbColor,
    /// Countdown before the button re-enables after use
    pub cooldown: Cooldown,
    /// Horizontal placement
    pub alignment: ButtonAlignment,
}

impl ResendButtonStyle {
    /// The empty, disabled style used when no resend button is configured.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            text: String::new(),
            font: FontStyle::plain(),
            text_color: RgbColor::new(0, 0, 0),
            background_color: RgbColor::new(0, 0, 0),
            cooldown: Cooldown::None,
            alignment: ButtonAlignment::Leading,
        }
    }

    /// Whether this is the hidden style.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_seconds() {
        assert_eq!(Cooldown::None.seconds(), None);
        assert_eq!(Cooldown::Duration { seconds: 60 }.seconds(), Some(60));
    }

    #[test]
    fn test_show_button() {
        assert!(!ResendButton::None.show_button());
        assert!(ResendButton::plain(FontStyle::bold()).show_button());
        assert!(ResendButton::Custom(ResendButtonStyle::hidden()).show_button());
    }

    #[test]
    fn test_plain_defaults() {
        let button = ResendButton::plain(FontStyle::plain());
        match button {
            ResendButton::Plain {
                text,
                cooldown,
                alignment,
                ..
            } => {
                assert_eq!(text, DEFAULT_RESEND_TEXT);
                assert_eq!(cooldown, Cooldown::None);
                assert_eq!(alignment, ButtonAlignment::Leading);
            }
            _ => panic!("expected plain button"),
        }
    }

    #[test]
    fn test_hidden_style() {
        let style = ResendButtonStyle::hidden();
        assert!(style.is_hidden());
        assert_eq!(style.cooldown, Cooldown::None);
    }

    #[cfg(feature = "ratatui")]
    #[test]
    fn test_alignment_conversion() {
        use ratatui::layout::Alignment;

        assert_eq!(
            ButtonAlignment::Leading.to_ratatui_alignment(),
            Alignment::Left
        );
        assert_eq!(
            ButtonAlignment::Trailing.to_ratatui_alignment(),
            Alignment::Right
        );
    }
}
