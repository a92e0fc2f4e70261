//! Pincode entry view.
//!
//! Declarative composition of the cell row, optional divider, and optional
//! resend button over Ratatui primitives. The view owns a
//! [`PasteOnlyField`] for input policy and a [`ResendState`] for the
//! cooldown; everything visual comes from the resolved [`PincodeStyle`]
//! passed to [`render`](Component::render).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::style::{Cooldown, Divider, PincodeStyle};
use crate::tui::component::Component;
use crate::tui::input::{FieldEvent, InputCore, PasteOnlyField};
use crate::tui::resend::ResendState;

/// Glyph used for masked characters.
const MASK_GLYPH: char = '\u{2022}';

/// Events emitted by the pincode view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PincodeEvent {
    /// The entered code changed; carries the new value
    Changed(String),
    /// A complete code was confirmed (full paste or Enter on a full code)
    Submitted(String),
    /// The user requested a new code; the cooldown has been armed
    ResendRequested,
    /// The user dismissed the view
    Cancelled,
}

/// Pincode entry component.
pub struct PincodeView {
    field: PasteOnlyField,
    resend: ResendState,
    cooldown: Cooldown,
    show_resend: bool,
    error: bool,
}

impl PincodeView {
    /// Creates a view for the given resolved style.
    ///
    /// The input policy (code length, code kind) and the resend cooldown
    /// are captured here; pass the same style to every render call.
    #[must_use]
    pub fn new(style: &PincodeStyle) -> Self {
        Self {
            field: PasteOnlyField::new(style),
            resend: ResendState::new(),
            cooldown: style.resend_button_style().cooldown,
            show_resend: style.resend_button.show_button(),
            error: false,
        }
    }

    /// Forwards the construction-time escape hatch to the wrapped field.
    #[must_use]
    pub fn configure(mut self, f: impl FnOnce(&mut InputCore)) -> Self {
        self.field = self.field.configure(f);
        self
    }

    /// The entered code.
    #[must_use]
    pub fn value(&self) -> &str {
        self.field.value()
    }

    /// Authoritative push from the bound external string.
    ///
    /// Call before each render so the displayed code never drifts from
    /// application state.
    pub fn sync(&mut self, value: &str) {
        self.field.set_value(value);
    }

    /// Marks the entered code as erroneous (or clears the mark).
    ///
    /// While set, glyphs and visible borders use the error color. The mark
    /// clears automatically on the next accepted edit.
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Whether the error mark is set.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    /// Seconds until the resend affordance re-enables, if cooling down.
    #[must_use]
    pub fn resend_remaining(&self) -> Option<u64> {
        self.resend.remaining_seconds()
    }

    /// Handles a whole-value paste or programmatic set.
    ///
    /// A paste that completes the code is treated as a submission, matching
    /// autofill flows; shorter accepted sets report a change.
    pub fn handle_paste(&mut self, pasted: &str) -> Option<PincodeEvent> {
        match self.field.handle_paste(pasted)? {
            FieldEvent::Filled(code) => {
                self.error = false;
                Some(PincodeEvent::Submitted(code))
            }
            FieldEvent::Changed(code) => {
                self.error = false;
                Some(PincodeEvent::Changed(code))
            }
        }
    }

    /// Terminal footprint of the view for the given style.
    ///
    /// Hosts can use this to allocate or center the render area. Width
    /// covers the cell row with gaps and divider; height covers the cells
    /// plus the resend row when one is shown.
    #[must_use]
    pub fn footprint(style: &PincodeStyle) -> (u16, u16) {
        let len = style.code_length as u16;
        if len == 0 {
            return (0, 0);
        }
        let mut width = len * style.cell_size.width + (len - 1);
        if let Divider::Custom { after_index, size, .. } = style.divider {
            if (after_index as u16) < len - 1 {
                width += size.width + 1;
            }
        }
        let mut height = style.cell_size.height;
        if style.resend_button.show_button() {
            height += 2;
        }
        (width, height)
    }

    fn render_cells(&self, f: &mut Frame, area: Rect, style: &PincodeStyle) {
        let value: Vec<char> = self.field.value().chars().collect();
        let selected_index = (value.len() < style.code_length).then_some(value.len());

        let border_type = if style.cell_corner_radius > 0.0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };

        let glyph_color = if self.error {
            style.error_color
        } else {
            style.text_color
        };

        let mut x = area.x;
        for i in 0..style.code_length {
            if x + style.cell_size.width > area.right() {
                break; // viewport too narrow, clip the remaining cells
            }
            let cell_area = Rect::new(x, area.y, style.cell_size.width, style.cell_size.height)
                .intersection(area);

            let selected = selected_index == Some(i);
            let background = if selected {
                style.selected_background_color
            } else {
                style.background_color
            };
            let border_visible = selected || style.always_show_selected_border;
            let border_color = if !border_visible {
                // Paint the border in the cell background so the geometry
                // stays stable whether or not the border is showing
                background
            } else if self.error {
                style.error_color
            } else {
                style.selected_border_color
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color.to_ratatui_color()))
                .style(Style::default().bg(background.to_ratatui_color()));

            let glyph = match value.get(i) {
                Some(&c) => {
                    let shown = if self.field.core().masked { MASK_GLYPH } else { c };
                    Span::styled(
                        shown.to_string(),
                        Style::default()
                            .fg(glyph_color.to_ratatui_color())
                            .add_modifier(style.font.to_modifier()),
                    )
                }
                None => match self.field.core().placeholder {
                    Some(p) => Span::styled(
                        p.to_string(),
                        Style::default().fg(style.placeholder_color.to_ratatui_color()),
                    ),
                    None => Span::raw(""),
                },
            };

            let cell = Paragraph::new(Line::from(glyph))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(cell, cell_area);

            x += style.cell_size.width;
            if i + 1 < style.code_length {
                x += 1;
                if let Divider::Custom { after_index, color, size, .. } = style.divider {
                    if after_index == i {
                        let divider_y =
                            area.y + style.cell_size.height.saturating_sub(size.height) / 2;
                        let divider_area =
                            Rect::new(x, divider_y, size.width, size.height).intersection(area);
                        let bar = Block::default()
                            .style(Style::default().bg(color.to_ratatui_color()));
                        f.render_widget(bar, divider_area);
                        x += size.width + 1;
                    }
                }
            }
        }
    }

    fn render_resend(&self, f: &mut Frame, area: Rect, style: &PincodeStyle) {
        let button = style.resend_button_style();
        if button.is_hidden() {
            return;
        }

        let row_y = area.y + style.cell_size.height + 1;
        if row_y >= area.bottom() {
            return;
        }
        let (row_width, _) = Self::footprint(style);
        let row = Rect::new(area.x, row_y, row_width.min(area.width), 1).intersection(area);

        let (label, text_color, font) = match self.resend.remaining_seconds() {
            Some(remaining) => (
                format!("{} ({remaining}s)", button.text),
                button.text_color.dim(50),
                button.font.dimmed(),
            ),
            None => (button.text.clone(), button.text_color, button.font),
        };

        let line = Line::from(Span::styled(
            label,
            Style::default()
                .fg(text_color.to_ratatui_color())
                .bg(button.background_color.to_ratatui_color())
                .add_modifier(font.to_modifier()),
        ));
        let widget = Paragraph::new(line).alignment(button.alignment.to_ratatui_alignment());
        f.render_widget(widget, row);
    }
}

impl Component for PincodeView {
    type Event = PincodeEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(PincodeEvent::Cancelled),
            KeyCode::Enter => self
                .field
                .is_full()
                .then(|| PincodeEvent::Submitted(self.field.value().to_string())),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.show_resend && self.resend.request(&self.cooldown) {
                    Some(PincodeEvent::ResendRequested)
                } else {
                    None
                }
            }
            _ => match self.field.handle_input(key)? {
                FieldEvent::Changed(code) | FieldEvent::Filled(code) => {
                    self.error = false;
                    Some(PincodeEvent::Changed(code))
                }
            },
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, style: &PincodeStyle) {
        self.render_cells(f, area, style);
        self.render_resend(f, area, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CellSize, FontStyle, RgbColor};
    use crate::style::{ButtonAlignment, CodeKind, ResendButton, StyleOptions};

    fn test_style(resend: ResendButton) -> PincodeStyle {
        StyleOptions::new(
            FontStyle::plain(),
            RgbColor::new(255, 255, 255),
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 0, 0),
            CellSize::new(5, 3),
        )
        .code_kind(CodeKind::Numeric)
        .resend_button(resend)
        .resolve()
    }

    fn plain_resend(cooldown: Cooldown) -> ResendButton {
        ResendButton::Plain {
            text: "Resend".to_string(),
            font: FontStyle::plain(),
            cooldown,
            alignment: ButtonAlignment::Leading,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_escape_cancels() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(PincodeEvent::Cancelled));
    }

    #[test]
    fn test_typed_character_filtered() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        assert_eq!(view.handle_input(key(KeyCode::Char('1'))), None);
        assert_eq!(view.value(), "");
    }

    #[test]
    fn test_backspace_reports_change_and_clears_error() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        view.sync("123");
        view.set_error(true);
        let event = view.handle_input(key(KeyCode::Backspace));
        assert_eq!(event, Some(PincodeEvent::Changed("12".to_string())));
        assert!(!view.has_error());
    }

    #[test]
    fn test_enter_requires_full_code() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        view.sync("123");
        assert_eq!(view.handle_input(key(KeyCode::Enter)), None);

        view.sync("123456");
        assert_eq!(
            view.handle_input(key(KeyCode::Enter)),
            Some(PincodeEvent::Submitted("123456".to_string()))
        );
    }

    #[test]
    fn test_full_paste_submits() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        assert_eq!(
            view.handle_paste("123456"),
            Some(PincodeEvent::Submitted("123456".to_string()))
        );
    }

    #[test]
    fn test_partial_paste_reports_change() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        assert_eq!(
            view.handle_paste("12"),
            Some(PincodeEvent::Changed("12".to_string()))
        );
    }

    #[test]
    fn test_rejected_paste_keeps_error() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        view.set_error(true);
        assert_eq!(view.handle_paste("abc"), None);
        assert!(view.has_error());
    }

    #[test]
    fn test_resend_without_button_ignored() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        assert_eq!(view.handle_input(ctrl('r')), None);
    }

    #[test]
    fn test_resend_fires_then_cools_down() {
        let style = test_style(plain_resend(Cooldown::Duration { seconds: 60 }));
        let mut view = PincodeView::new(&style);
        assert_eq!(view.handle_input(ctrl('r')), Some(PincodeEvent::ResendRequested));
        assert_eq!(view.handle_input(ctrl('r')), None);
        assert!(view.resend_remaining().is_some());
    }

    #[test]
    fn test_resend_without_cooldown_repeats() {
        let style = test_style(plain_resend(Cooldown::None));
        let mut view = PincodeView::new(&style);
        assert_eq!(view.handle_input(ctrl('r')), Some(PincodeEvent::ResendRequested));
        assert_eq!(view.handle_input(ctrl('r')), Some(PincodeEvent::ResendRequested));
    }

    #[test]
    fn test_sync_is_authoritative() {
        let style = test_style(ResendButton::None);
        let mut view = PincodeView::new(&style);
        view.sync("4711");
        assert_eq!(view.value(), "4711");
        view.sync("");
        assert_eq!(view.value(), "");
    }

    #[test]
    fn test_footprint_without_extras() {
        let style = test_style(ResendButton::None);
        // 6 cells of width 5 plus 5 gaps
        assert_eq!(PincodeView::footprint(&style), (35, 3));
    }

    #[test]
    fn test_footprint_with_divider_and_resend() {
        let mut style = test_style(plain_resend(Cooldown::None));
        style.divider = Divider::Custom {
            after_index: 2,
            color: RgbColor::new(1, 1, 1),
            size: CellSize::new(2, 1),
            corner_radius: 0.0,
        };
        // Cell row plus divider slot, resend row plus spacer
        assert_eq!(PincodeView::footprint(&style), (38, 5));
    }
}
