//! Vim-style command bar — a single-line overlay at the bottom of the screen.
//!
//! Opened by typing `:` while the window is closed or the message box is
//! empty. The app shell owns `Enter` (parse with
//! [`Command::parse`](crate::commands::Command::parse) and execute) and
//! `Escape` (cancel); everything else edits the line.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::input_bar::InputBarState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

#[derive(Debug, Default)]
pub struct CommandBarState {
    /// Text after the `:` prompt. Edits exactly like the message box.
    pub line: InputBarState,
    /// Why the last command was rejected; shown until the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    pub fn clear(&mut self) {
        self.line.take();
        self.error = None;
    }

    pub fn text(&self) -> &str {
        &self.line.input
    }

    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        self.line.handle(event);
    }

    /// Terminal column for the cursor, one past the `:` prompt.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let typed = self.line.input[..self.line.cursor].chars().count();
        let typed = u16::try_from(typed).unwrap_or(u16::MAX);
        area.x.saturating_add(1).saturating_add(typed).min(area.right().saturating_sub(1))
    }
}

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = match &self.state.error {
            Some(err) => Line::styled(
                format!("✗ {err}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Line::from(vec![
                Span::styled(":", self.theme.border_command_bar),
                Span::raw(self.state.text()),
            ]),
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Direction;

    fn typed(text: &str) -> CommandBarState {
        let mut s = CommandBarState::default();
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
        s
    }

    #[test]
    fn edits_like_the_message_box() {
        let mut s = typed("quick 3");
        s.handle(&AppEvent::Backspace);
        s.handle(&AppEvent::Char('2'));
        assert_eq!(s.text(), "quick 2");
    }

    #[test]
    fn any_key_dismisses_error() {
        let mut s = typed("frob");
        s.error = Some("unknown command: frob".to_string());
        s.handle(&AppEvent::Nav(Direction::Left));
        assert!(s.error.is_none());
    }

    #[test]
    fn cursor_sits_after_prompt() {
        let s = typed("q");
        assert_eq!(s.cursor_col(Rect::new(0, 9, 80, 1)), 2);
    }

    #[test]
    fn clear_resets_text_and_error() {
        let mut s = typed("theme");
        s.error = Some("usage".to_string());
        s.clear();
        assert_eq!(s.text(), "");
        assert_eq!(s.line.cursor, 0);
        assert!(s.error.is_none());
    }

    #[test]
    fn cursor_clamps_on_very_long_command() {
        let mut s = CommandBarState::default();
        s.line.input = "x".repeat(70_000);
        s.line.cursor = 70_000;
        assert_eq!(s.cursor_col(Rect::new(0, 9, 10_000, 1)), 9_999);
    }
}
