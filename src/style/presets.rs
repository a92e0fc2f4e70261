//! Named preset styles.
//!
//! A fixed catalog of brand styles, each built through the same
//! [`StyleOptions`] initializer with literal color/size/font arguments.
//! Lookup is a pure function of the preset name and never changes during
//! the life of the process.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CellSize, FontStyle, RgbColor};
use crate::style::{
    radius, ButtonAlignment, CodeKind, Cooldown, Divider, PincodeStyle, ResendButton, StyleOptions,
};

/// Preset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Dark, bold, numeric code with a resend cooldown
    Midnight,
    /// Light with a trailing resend button
    Daylight,
    /// Blue-on-white numeric code
    Ocean,
    /// Warm four-digit PIN with pill-shaped cells
    Ember,
    /// Monochrome grouped code with a divider
    Mono,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Self; 5] = [
        Self::Midnight,
        Self::Daylight,
        Self::Ocean,
        Self::Ember,
        Self::Mono,
    ];

    /// The preset's lookup name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Midnight => "midnight",
            Self::Daylight => "daylight",
            Self::Ocean => "ocean",
            Self::Ember => "ember",
            Self::Mono => "mono",
        }
    }

    /// Looks up a preset by name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Picks a preset matching the OS theme.
    ///
    /// Uses the `dark-light` crate to detect whether the OS is in dark or
    /// light mode.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::Daylight,
            // Fall back to the dark preset for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::Midnight,
        }
    }

    /// Resolves the preset into a full style.
    #[must_use]
    pub fn style(self) -> PincodeStyle {
        match self {
            Self::Midnight => StyleOptions::new(
                FontStyle::bold(),
                RgbColor::new(236, 236, 238),
                RgbColor::new(247, 105, 74),
                RgbColor::new(54, 52, 61),
                CellSize::new(5, 3),
            )
            .selected_border_color(RgbColor::new(135, 136, 138))
            .code_kind(CodeKind::Numeric)
            .resend_button(ResendButton::Plain {
                text: super::DEFAULT_RESEND_TEXT.to_string(),
                font: FontStyle::bold(),
                cooldown: Cooldown::Duration { seconds: 60 },
                alignment: ButtonAlignment::Leading,
            })
            .resolve(),

            Self::Daylight => StyleOptions::new(
                FontStyle::plain(),
                RgbColor::new(43, 60, 70),
                RgbColor::new(255, 85, 106),
                RgbColor::new(245, 245, 245),
                CellSize::new(6, 3),
            )
            .cell_corner_radius(radius::SMALLER)
            .resend_button(ResendButton::Plain {
                text: "Resend code".to_string(),
                font: FontStyle::plain(),
                cooldown: Cooldown::Duration { seconds: 60 },
                alignment: ButtonAlignment::Trailing,
            })
            .resolve(),

            Self::Ocean => StyleOptions::new(
                FontStyle::plain(),
                RgbColor::new(25, 83, 147),
                RgbColor::new(239, 80, 80),
                RgbColor::new(255, 255, 255),
                CellSize::new(5, 3),
            )
            .placeholder_color(RgbColor::new(163, 186, 212))
            .selected_border_color(RgbColor::new(163, 186, 212))
            .code_kind(CodeKind::Numeric)
            .resolve(),

            Self::Ember => StyleOptions::new(
                FontStyle::bold(),
                RgbColor::new(255, 214, 165),
                RgbColor::new(255, 99, 71),
                RgbColor::new(40, 26, 26),
                CellSize::new(5, 3),
            )
            .code_length(4)
            .selected_background_color(RgbColor::new(60, 36, 30))
            .selected_border_color(RgbColor::new(255, 176, 109))
            .always_show_selected_border(true)
            .cell_corner_radius(radius::ROUND)
            .code_kind(CodeKind::Numeric)
            .resolve(),

            Self::Mono => StyleOptions::new(
                FontStyle::plain(),
                RgbColor::new(220, 220, 220),
                RgbColor::new(255, 64, 64),
                RgbColor::new(16, 16, 16),
                CellSize::new(5, 3),
            )
            .selected_border_color(RgbColor::new(220, 220, 220))
            .divider(Divider::Custom {
                after_index: 2,
                color: RgbColor::new(220, 220, 220),
                size: CellSize::new(2, 1),
                corner_radius: radius::ROUND,
            })
            .resolve(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
