//! Component trait pattern for TUI components.
//!
//! Defines the shape of a self-contained, testable TUI component that
//! handles its own input and rendering and signals the parent through a
//! typed event.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::style::PincodeStyle;

/// A component that can be rendered and handle input.
///
/// Components manage their own state, handle keyboard input, and emit
/// events to communicate with the parent. Rendering receives the resolved
/// style read-only; the same style a component was constructed with must be
/// passed on every render.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent. Returns `None` if input was handled internally (or
    /// filtered out) without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, style: &PincodeStyle);

    /// Check if the component should close.
    ///
    /// Default implementation returns `false`.
    fn should_close(&self) -> bool {
        false
    }
}
