//! Title bar — one row across the top of the open chat window.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

pub struct TitleBar<'a> {
    title: &'a str,
    status: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, status: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { title, status, theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(
            format!(" {} ", self.title),
            self.theme.border_focused.add_modifier(Modifier::BOLD),
        );
        buf.set_span(area.x, area.y, &title, area.width);

        let hint = match self.status {
            Some(status) => format!(" {status} "),
            None => " Esc:close  Ctrl+c:quit  ?:help ".to_string(),
        };
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
    }
}
