//! Data models for pincode styling.
//!
//! This module contains the toolkit-agnostic value types used by the style
//! configuration. Models are designed to be independent of UI and input
//! handling; conversions to Ratatui types are gated behind the `ratatui`
//! feature.

pub mod color;
pub mod font;
pub mod geometry;

// Re-export all model types
pub use color::RgbColor;
pub use font::FontStyle;
pub use geometry::CellSize;
