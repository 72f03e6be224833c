//! Input bar widget — the message box at the bottom of the chat window.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! `Enter` is handled by the app shell, which calls [`InputBarState::take`]
//! and hands the text to the chat session.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct InputBarState {
    /// The message typed by the user.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
}

impl InputBarState {
    /// Handle an editing event; everything else is ignored.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.input.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = self.input[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.input.len());
                }
            }
            _ => {}
        }
    }

    /// Remove and return the typed text, resetting the cursor.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.input)
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn prev_boundary(&self) -> usize {
        self.input[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct InputBar<'a> {
    state: &'a InputBarState,
    /// True while a reply is pending; input is accepted but not sent.
    waiting: bool,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a InputBarState, waiting: bool, theme: &'a Theme) -> Self {
        Self { state, waiting, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let typed = self.state.input[..self.state.cursor].chars().count();
        let col = u16::try_from(typed).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Message ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.input.is_empty() {
            let hint = if self.waiting {
                "waiting for a reply…"
            } else {
                "type a question and press Enter · Esc to close"
            };
            Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM)))
        } else {
            Line::from(self.state.input.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBarState {
        let mut s = InputBarState::default();
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
        s
    }

    #[test]
    fn char_insert_and_backspace() {
        let mut s = typed("rate");
        assert_eq!(s.input, "rate");
        assert_eq!(s.cursor, 4);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input, "rat");
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut s = typed("rtes");
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Char('a'));
        assert_eq!(s.input, "rates");
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut s = typed("né");
        s.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(s.cursor, 1);
        s.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(s.cursor, 3);
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input, "n");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut s = InputBarState::default();
        s.handle(&AppEvent::Backspace);
        assert!(s.is_empty());
    }

    #[test]
    fn take_resets() {
        let mut s = typed("hello");
        assert_eq!(s.take(), "hello");
        assert!(s.is_empty());
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn cursor_clamps_on_very_long_input() {
        let s = InputBarState {
            input: "x".repeat(70_000),
            cursor: 70_000,
        };
        let theme = Theme::load_default();
        let bar = InputBar::new(&s, false, &theme);
        assert_eq!(bar.cursor_position(Rect::new(0, 5, 10_000, 3)), (9_998, 6));
    }
}
