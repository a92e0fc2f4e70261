//! Paste-only input field for one-time codes.
//!
//! [`PasteOnlyField`] wraps [`InputCore`], a plain single-line input state,
//! and restricts how its value may change: whole-value paste/programmatic
//! sets and backspace are accepted, manual per-character typing is filtered
//! out. This is the standard technique for accepting SMS/clipboard one-time
//! codes while preventing retyping that would bypass per-cell rendering.
//!
//! The owner of the field holds the authoritative code string. Accepted
//! edits flow back to it through [`FieldEvent`]; external updates flow down
//! through [`PasteOnlyField::set_value`] on every sync cycle. Neither
//! direction echoes back into the other.

use crossterm::event::{KeyCode, KeyEvent};

use crate::style::{CodeKind, PincodeStyle};

/// Single-line input state, the primitive the paste-only field wraps.
///
/// Holds the displayed value plus the native-level presentation knobs a
/// host may want to adjust through [`PasteOnlyField::configure`] without
/// this component enumerating them all ahead of time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCore {
    value: String,
    max_length: usize,
    /// Render entered characters as a mask glyph instead of themselves
    pub masked: bool,
    /// Glyph shown in cells that have no character yet
    pub placeholder: Option<char>,
}

impl InputCore {
    /// Creates an empty input limited to `max_length` characters.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self {
            value: String::new(),
            max_length,
            masked: false,
            placeholder: None,
        }
    }

    /// The displayed value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of characters entered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Whether no characters are entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the value has reached the maximum length.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.max_length
    }

    /// Replaces the value, truncating to the maximum length.
    fn overwrite(&mut self, value: &str) {
        self.value = value.chars().take(self.max_length).collect();
    }

    /// Removes the trailing character, if any. Returns whether one was removed.
    fn pop(&mut self) -> bool {
        self.value.pop().is_some()
    }
}

/// Accepted change to the field value, reported to the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed (paste or backspace); carries the new value
    Changed(String),
    /// A paste filled the code to its full length; carries the full code
    Filled(String),
}

/// Restricted text input accepting only whole-value sets and backspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteOnlyField {
    core: InputCore,
    kind: CodeKind,
}

impl PasteOnlyField {
    /// Creates a field for the given resolved style.
    ///
    /// Captures the code length and code kind; the style is immutable, so
    /// the captured policy stays consistent for the field's lifetime.
    #[must_use]
    pub fn new(style: &PincodeStyle) -> Self {
        Self {
            core: InputCore::new(style.code_length),
            kind: style.code_kind,
        }
    }

    /// One-shot construction-time escape hatch.
    ///
    /// Hands the underlying input primitive to the caller so native-level
    /// properties (masking, placeholder glyph) can be set without this
    /// component knowing about each of them.
    #[must_use]
    pub fn configure(mut self, f: impl FnOnce(&mut InputCore)) -> Self {
        f(&mut self.core);
        self
    }

    /// Read access to the underlying input primitive.
    #[must_use]
    pub const fn core(&self) -> &InputCore {
        &self.core
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.core.value()
    }

    /// Whether the code is complete.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.core.is_full()
    }

    /// Clears the value without emitting an event.
    pub fn clear(&mut self) {
        self.core.overwrite("");
    }

    /// Authoritative push from the bound external string.
    ///
    /// Called on every sync cycle so the displayed value never drifts from
    /// application state. Truncates to the code length and never emits an
    /// event, keeping the external string the single writer.
    pub fn set_value(&mut self, value: &str) {
        self.core.overwrite(value);
    }

    /// Handles a key press.
    ///
    /// Only backspace mutates the value, removing exactly one trailing
    /// character. Printable characters and every other editing key are
    /// filtered out and return `None`.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FieldEvent> {
        match key.code {
            KeyCode::Backspace => {
                if self.core.pop() {
                    Some(FieldEvent::Changed(self.core.value().to_string()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Handles a whole-value paste or programmatic set.
    ///
    /// Surrounding whitespace is trimmed (SMS codes often arrive padded).
    /// The set is rejected when empty or when any character fails the code
    /// kind filter; otherwise it replaces the value, truncated to the code
    /// length. Emits [`FieldEvent::Filled`] when the result is a complete
    /// code, [`FieldEvent::Changed`] otherwise.
    pub fn handle_paste(&mut self, pasted: &str) -> Option<FieldEvent> {
        let pasted = pasted.trim();
        if pasted.is_empty() || !pasted.chars().all(|c| self.kind.accepts(c)) {
            return None;
        }

        self.core.overwrite(pasted);
        let value = self.core.value().to_string();
        if self.core.is_full() {
            Some(FieldEvent::Filled(value))
        } else {
            Some(FieldEvent::Changed(value))
        }
    }
}
