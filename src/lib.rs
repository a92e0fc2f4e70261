//! Pincode Entry Library
//!
//! This library provides a reusable pincode/one-time-code entry component
//! for Ratatui terminal applications: a style configuration model with
//! named presets, a paste-only input field for autofill-style codes, and a
//! cell-row view composed from Ratatui primitives.
//!
//! The style types are toolkit-agnostic; everything that touches Ratatui
//! lives behind the `ratatui` feature (enabled by default).

// Module declarations
pub mod models;
pub mod style;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use style::{PincodeStyle, Preset, StyleOptions};
