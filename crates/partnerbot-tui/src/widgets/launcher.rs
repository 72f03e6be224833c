//! Launcher — what the screen shows while the chat window is closed: a
//! bubble in the bottom-right corner inviting the user to open the chat.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
};

const BUBBLE_TEXT: &str = "Questions about partnering with us?";
const BUBBLE_HINT: &str = "Enter to chat · F1-F9 quick questions · q to quit";

pub struct Launcher<'a> {
    unread: usize,
    theme: &'a Theme,
}

impl<'a> Launcher<'a> {
    /// `unread` is the number of bot messages delivered while closed.
    pub fn new(unread: usize, theme: &'a Theme) -> Self {
        Self { unread, theme }
    }
}

impl Widget for Launcher<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (BUBBLE_HINT.chars().count() as u16 + 4).min(area.width);
        let height = 4.min(area.height);
        let bubble = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.bottom().saturating_sub(height + 1),
            width,
            height,
        };
        Clear.render(bubble, buf);

        let title = if self.unread > 0 {
            format!(" Partner Help ({} new) ", self.unread)
        } else {
            " Partner Help ".to_string()
        };
        let block = Block::bordered().title(title).border_style(self.theme.launcher);
        let inner = block.inner(bubble);
        block.render(bubble, buf);

        Paragraph::new(vec![
            Line::styled(BUBBLE_TEXT, self.theme.launcher),
            Line::styled(BUBBLE_HINT, Style::default().add_modifier(Modifier::DIM)),
        ])
        .render(inner, buf);
    }
}
