//! Style configuration for the pincode view.
//!
//! A host application describes the appearance it wants through
//! [`StyleOptions`] (required inputs plus optional overrides), then calls
//! [`StyleOptions::resolve`] once to obtain an immutable, fully-populated
//! [`PincodeStyle`]. Every derived default is filled in at that single
//! point; the resolved style is handed read-only to rendering and input
//! policy for the lifetime of the owning view.

pub mod divider;
pub mod presets;
pub mod resend;

use serde::{Deserialize, Serialize};

use crate::models::{CellSize, FontStyle, RgbColor};

// Re-export style types
pub use divider::Divider;
pub use presets::Preset;
pub use resend::{
    ButtonAlignment, Cooldown, ResendButton, ResendButtonStyle, DEFAULT_RESEND_TEXT,
};

/// Number of code cells when the caller does not specify one.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Corner rounding design constants.
///
/// Terminals cannot draw arbitrary radii; rendering maps [`NONE`] to square
/// borders and any larger value to rounded ones. The numeric scale is kept
/// so styles stay meaningful for pixel-based hosts.
///
/// [`NONE`]: self::NONE
pub mod radius {
    /// Square corners
    pub const NONE: f32 = 0.0;
    /// Slightly rounded corners
    pub const SMALLER: f32 = 2.0;
    /// Default rounding
    pub const SMALL: f32 = 4.0;
    /// Fully rounded (pill-shaped) corners
    pub const ROUND: f32 = f32::INFINITY;
}

/// Kind of code being entered.
///
/// The terminal analogue of a keyboard/input type: it decides which pasted
/// characters a field accepts rather than which soft keyboard is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CodeKind {
    /// Any non-whitespace character is accepted
    #[default]
    Text,
    /// Only ASCII digits are accepted
    Numeric,
}

impl CodeKind {
    /// Whether a single character is acceptable for this code kind.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Text => !c.is_whitespace(),
            Self::Numeric => c.is_ascii_digit(),
        }
    }
}

/// Partially specified style for a pincode view.
///
/// Required inputs are taken by [`StyleOptions::new`]; everything else has
/// a documented default and can be overridden through the chainable
/// setters before calling [`resolve`](Self::resolve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Glyph emphasis for entered characters
    pub font: FontStyle,
    /// Color of entered characters
    pub text_color: RgbColor,
    /// Color of entered characters while the code is marked erroneous
    pub error_color: RgbColor,
    /// Cell background color
    pub background_color: RgbColor,
    /// Cell dimensions in terminal cells
    pub cell_size: CellSize,
    /// Number of code cells; defaults to [`DEFAULT_CODE_LENGTH`]
    pub code_length: Option<usize>,
    /// Placeholder glyph color; defaults to the text color
    pub placeholder_color: Option<RgbColor>,
    /// Background of the selected cell; defaults to the background color
    pub selected_background_color: Option<RgbColor>,
    /// Border of the selected cell; defaults to the background color
    pub selected_border_color: Option<RgbColor>,
    /// Show the selected border on every cell, not just the selected one
    pub always_show_selected_border: bool,
    /// Corner rounding; defaults to [`radius::SMALL`]
    pub cell_corner_radius: Option<f32>,
    /// Kind of code being entered
    pub code_kind: CodeKind,
    /// Divider between cell groups
    pub divider: Divider,
    /// Resend-code affordance
    pub resend_button: ResendButton,
}

impl StyleOptions {
    /// Creates options from the required style inputs.
    #[must_use]
    pub fn new(
        font: FontStyle,
        text_color: RgbColor,
        error_color: RgbColor,
        background_color: RgbColor,
        cell_size: CellSize,
    ) -> Self {
        Self {
            font,
            text_color,
            error_color,
            background_color,
            cell_size,
            code_length: None,
            placeholder_color: None,
            selected_background_color: None,
            selected_border_color: None,
            always_show_selected_border: false,
            cell_corner_radius: None,
            code_kind: CodeKind::default(),
            divider: Divider::default(),
            resend_button: ResendButton::default(),
        }
    }

    /// Sets the number of code cells.
    #[must_use]
    pub fn code_length(mut self, length: usize) -> Self {
        self.code_length = Some(length);
        self
    }

    /// Sets the placeholder glyph color.
    #[must_use]
    pub fn placeholder_color(mut self, color: RgbColor) -> Self {
        self.placeholder_color = Some(color);
        self
    }

    /// Sets the selected cell background color.
    #[must_use]
    pub fn selected_background_color(mut self, color: RgbColor) -> Self {
        self.selected_background_color = Some(color);
        self
    }

    /// Sets the selected cell border color.
    #[must_use]
    pub fn selected_border_color(mut self, color: RgbColor) -> Self {
        self.selected_border_color = Some(color);
        self
    }

    /// Shows the selected border on every cell.
    #[must_use]
    pub fn always_show_selected_border(mut self, always: bool) -> Self {
        self.always_show_selected_border = always;
        self
    }

    /// Sets the cell corner rounding.
    #[must_use]
    pub fn cell_corner_radius(mut self, radius: f32) -> Self {
        self.cell_corner_radius = Some(radius);
        self
    }

    /// Sets the kind of code being entered.
    #[must_use]
    pub fn code_kind(mut self, kind: CodeKind) -> Self {
        self.code_kind = kind;
        self
    }

    /// Sets the divider between cell groups.
    #[must_use]
    pub fn divider(mut self, divider: Divider) -> Self {
        self.divider = divider;
        self
    }

    /// Sets the resend-code affordance.
    #[must_use]
    pub fn resend_button(mut self, button: ResendButton) -> Self {
        self.resend_button = button;
        self
    }

    /// Resolves every unset field to its derived default.
    ///
    /// The fallback chain runs exactly once, in order:
    /// 1. placeholder color falls back to the text color
    /// 2. selected background falls back to the background color
    /// 3. selected border falls back to the background color
    /// 4. code length falls back to [`DEFAULT_CODE_LENGTH`]; no bounds
    ///    validation is performed
    /// 5. corner radius falls back to [`radius::SMALL`]
    ///
    /// Resolution is pure and cannot fail; resolving equal options twice
    /// yields field-for-field equal styles.
    #[must_use]
    pub fn resolve(self) -> PincodeStyle {
        PincodeStyle {
            code_length: self.code_length.unwrap_or(DEFAULT_CODE_LENGTH),
            font: self.font,
            text_color: self.text_color,
            error_color: self.error_color,
            placeholder_color: self.placeholder_color.unwrap_or(self.text_color),
            background_color: self.background_color,
            selected_background_color: self
                .selected_background_color
                .unwrap_or(self.background_color),
            selected_border_color: self.selected_border_color.unwrap_or(self.background_color),
            always_show_selected_border: self.always_show_selected_border,
            cell_size: self.cell_size,
            cell_corner_radius: self.cell_corner_radius.unwrap_or(radius::SMALL),
            code_kind: self.code_kind,
            divider: self.divider,
            resend_button: self.resend_button,
        }
    }
}

/// Fully-resolved visual configuration for a pincode view.
///
/// Constructed once through [`StyleOptions::resolve`] or a
/// [`Preset`](presets::Preset) and treated as read-only for the lifetime
/// of the owning view; no color field is ever absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PincodeStyle {
    /// Number of code cells
    pub code_length: usize,
    /// Glyph emphasis for entered characters
    pub font: FontStyle,
    /// Color of entered characters
    pub text_color: RgbColor,
    /// Color of entered characters while the code is marked erroneous
    pub error_color: RgbColor,
    /// Placeholder glyph color
    pub placeholder_color: RgbColor,
    /// Cell background color
    pub background_color: RgbColor,
    /// Background of the selected cell
    pub selected_background_color: RgbColor,
    /// Border of the selected cell
    pub selected_border_color: RgbColor,
    /// Show the selected border on every cell
    pub always_show_selected_border: bool,
    /// Cell dimensions in terminal cells
    pub cell_size: CellSize,
    /// Corner rounding
    pub cell_corner_radius: f32,
    /// Kind of code being entered
    pub code_kind: CodeKind,
    /// Divider between cell groups
    pub divider: Divider,
    /// Resend-code affordance
    pub resend_button: ResendButton,
}

impl PincodeStyle {
    /// Derives the resolved resend button appearance.
    ///
    /// Pure function of the button descriptor and this style; recomputed on
    /// each access, which is stable because the style never changes after
    /// resolution.
    #[must_use]
    pub fn resend_button_style(&self) -> ResendButtonStyle {
        match &self.resend_button {
            ResendButton::Custom(style) => style.clone(),
            ResendButton::Plain {
                text,
                font,
                cooldown,
                alignment,
            } => ResendButtonStyle {
                text: text.clone(),
                font: *font,
                text_color: self.text_color,
                background_color: self.background_color,
                cooldown: *cooldown,
                alignment: *alignment,
            },
            ResendButton::None => ResendButtonStyle::hidden(),
        }
    }
}

impl Default for PincodeStyle {
    /// Resolves a preset matching the OS dark/light mode.
    fn default() -> Self {
        Preset::detect().style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_options() -> StyleOptions {
        StyleOptions::new(
            FontStyle::bold(),
            RgbColor::new(240, 240, 240),
            RgbColor::new(247, 105, 74),
            RgbColor::new(54, 52, 61),
            CellSize::new(5, 3),
        )
    }

    #[test]
    fn test_placeholder_defaults_to_text_color() {
        let style = base_options().resolve();
        assert_eq!(style.placeholder_color, style.text_color);
    }

    #[test]
    fn test_placeholder_override_kept() {
        let style = base_options()
            .placeholder_color(RgbColor::new(10, 20, 30))
            .resolve();
        assert_eq!(style.placeholder_color, RgbColor::new(10, 20, 30));
        assert_ne!(style.placeholder_color, style.text_color);
    }

    #[test]
    fn test_selected_colors_default_to_background() {
        let style = base_options().resolve();
        assert_eq!(style.selected_background_color, style.background_color);
        assert_eq!(style.selected_border_color, style.background_color);
    }

    #[test]
    fn test_selected_border_override_does_not_touch_background() {
        let border = RgbColor::new(135, 136, 138);
        let style = base_options().selected_border_color(border).resolve();
        assert_eq!(style.selected_border_color, border);
        assert_eq!(style.selected_background_color, style.background_color);
    }

    #[test]
    fn test_code_length_defaults_to_six() {
        let style = base_options().resolve();
        assert_eq!(style.code_length, DEFAULT_CODE_LENGTH);
    }

    #[test]
    fn test_code_length_not_validated() {
        // Bounds are the caller's responsibility
        let style = base_options().code_length(0).resolve();
        assert_eq!(style.code_length, 0);
    }

    #[test]
    fn test_corner_radius_defaults_to_small() {
        let style = base_options().resolve();
        assert!((style.cell_corner_radius - radius::SMALL).abs() < f32::EPSILON);
    }

    #[test]
    fn test_remaining_defaults() {
        let style = base_options().resolve();
        assert_eq!(style.code_kind, CodeKind::Text);
        assert_eq!(style.divider, Divider::None);
        assert_eq!(style.resend_button, ResendButton::None);
        assert!(!style.always_show_selected_border);
    }

    #[test]
    fn test_resolution_idempotent() {
        let options = base_options()
            .code_length(4)
            .selected_border_color(RgbColor::new(1, 2, 3))
            .resend_button(ResendButton::plain(FontStyle::plain()));
        assert_eq!(options.clone().resolve(), options.resolve());
    }

    #[test]
    fn test_resend_style_none_is_hidden() {
        let style = base_options().resolve();
        assert!(style.resend_button_style().is_hidden());
    }

    #[test]
    fn test_resend_style_plain_synthesized_from_parent() {
        let style = base_options()
            .resend_button(ResendButton::Plain {
                text: "Resend".to_string(),
                font: FontStyle::plain(),
                cooldown: Cooldown::None,
                alignment: ButtonAlignment::Trailing,
            })
            .resolve();

        let button = style.resend_button_style();
        assert_eq!(button.text, "Resend");
        assert_eq!(button.text_color, style.text_color);
        assert_eq!(button.background_color, style.background_color);
        assert_eq!(button.alignment, ButtonAlignment::Trailing);
    }

    #[test]
    fn test_resend_style_custom_passthrough() {
        let custom = ResendButtonStyle {
            text: "New code".to_string(),
            font: FontStyle::bold(),
            text_color: RgbColor::new(9, 9, 9),
            background_color: RgbColor::new(200, 200, 200),
            cooldown: Cooldown::Duration { seconds: 30 },
            alignment: ButtonAlignment::Trailing,
        };
        let style = base_options()
            .resend_button(ResendButton::Custom(custom.clone()))
            .resolve();
        assert_eq!(style.resend_button_style(), custom);
    }

    #[test]
    fn test_code_kind_filters() {
        assert!(CodeKind::Text.accepts('a'));
        assert!(CodeKind::Text.accepts('7'));
        assert!(!CodeKind::Text.accepts(' '));
        assert!(CodeKind::Numeric.accepts('0'));
        assert!(!CodeKind::Numeric.accepts('a'));
        assert!(!CodeKind::Numeric.accepts(' '));
    }

    #[test]
    fn test_style_serde_roundtrip() {
        let style = base_options()
            .divider(Divider::Custom {
                after_index: 2,
                color: RgbColor::new(18, 30, 60),
                size: CellSize::new(2, 1),
                corner_radius: radius::SMALLER,
            })
            .resend_button(ResendButton::plain(FontStyle::bold()))
            .resolve();

        let json = serde_json::to_string(&style).unwrap();
        let back: PincodeStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
