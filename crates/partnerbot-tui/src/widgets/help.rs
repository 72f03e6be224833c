//! Help popup — centred floating overlay listing all keybindings and
//! commands.
//!
//! Toggle with `?` (window closed, or input empty); close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Enter  /  c", "Open the chat window (when closed)"),
    ("Esc", "Close the chat window"),
    ("Enter", "Send message (when open)"),
    ("F1 … F9", "Ask a quick question"),
    ("↑  /  ↓", "Scroll one line"),
    ("PageUp / PageDown", "Scroll one page"),
    ("Ctrl+l", "Clear the conversation"),
    ("q  /  Ctrl+c", "Quit"),
    ("?", "Toggle this help popup"),
    (":", "Command line (see below)"),
    ("", ""),
    (":open  :close", "Open / close the window"),
    (":clear", "Clear the conversation"),
    (":quick <n>", "Ask quick question n"),
    (":topics", "List what the assistant knows about"),
    (":theme <name>", "default | gruvbox"),
    (":q", "Quit"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(64, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" partnerbot — keys (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<20}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
