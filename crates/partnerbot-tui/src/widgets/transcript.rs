//! Transcript widget — the scrollable conversation pane.
//!
//! # Scroll semantics
//!
//! `scroll` counts wrapped rows hidden below the view (0 = pinned to the
//! newest message). Submitting a message re-pins the view. Arrow keys move
//! one row, page keys move one screen.
//!
//! Messages are word-wrapped here rather than by [`Paragraph`] so the widget
//! knows the exact row count and can anchor the view to the bottom.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use partnerbot_core::chat::PendingReply;
use partnerbot_core::{Author, Message};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

const INDENT: &str = "  ";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct TranscriptState {
    /// Rows hidden below the view (0 = following the newest message).
    pub scroll: usize,
    pub show_timestamps: bool,
    pub timestamp_format: String,
    /// Cached from the last render so `handle()` can page and clamp.
    last_height: Cell<usize>,
    last_total: Cell<usize>,
}

impl TranscriptState {
    pub fn new(show_timestamps: bool, timestamp_format: impl Into<String>) -> Self {
        Self {
            scroll: 0,
            show_timestamps,
            timestamp_format: timestamp_format.into(),
            last_height: Cell::new(20),
            last_total: Cell::new(0),
        }
    }

    fn max_scroll(&self) -> usize {
        self.last_total.get().saturating_sub(self.last_height.get())
    }

    /// Pin the view to the newest message.
    pub fn follow(&mut self) {
        self.scroll = 0;
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let page = self.last_height.get().max(1);
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
            }
            AppEvent::Nav(Direction::Down) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            AppEvent::ScrollUp => {
                self.scroll = (self.scroll + page).min(self.max_scroll());
            }
            AppEvent::ScrollDown => {
                self.scroll = self.scroll.saturating_sub(page);
            }
            _ => return,
        }
        tracing::debug!(scroll = self.scroll, "transcript: scrolled");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Transcript<'a> {
    state: &'a TranscriptState,
    messages: &'a [Message],
    pending: Option<&'a PendingReply>,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> Transcript<'a> {
    pub fn new(
        state: &'a TranscriptState,
        messages: &'a [Message],
        pending: Option<&'a PendingReply>,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            messages,
            pending,
            title,
            theme,
        }
    }

    fn header(&self, author: Author, msg: Option<&Message>) -> Line<'static> {
        let mut spans = Vec::new();
        if self.state.show_timestamps {
            if let Some(m) = msg {
                spans.push(Span::styled(
                    format!("{} ", m.sent_at.format(&self.state.timestamp_format)),
                    self.theme.timestamp,
                ));
            }
        }
        let label = match author {
            Author::Bot => "Partner Help",
            Author::User => "You",
        };
        spans.push(Span::styled(
            label,
            self.theme.author_style(author).add_modifier(Modifier::BOLD),
        ));
        Line::from(spans)
    }

    fn body(text: &str, width: usize, style: Style, out: &mut Vec<Line<'static>>) {
        for paragraph in text.split('\n') {
            for row in wrap(paragraph, width.saturating_sub(INDENT.len())) {
                out.push(Line::from(Span::styled(format!("{INDENT}{row}"), style)));
            }
        }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for msg in self.messages {
            lines.push(self.header(msg.author, Some(msg)));
            Self::body(&msg.text, width, self.theme.author_style(msg.author), &mut lines);
            lines.push(Line::default());
        }
        if let Some(pending) = self.pending {
            lines.push(self.header(Author::Bot, None));
            if pending.is_thinking() {
                lines.push(Line::from(Span::styled(format!("{INDENT}typing…"), self.theme.typing)));
            } else {
                let shown = format!("{}▌", pending.visible_text());
                Self::body(&shown, width, self.theme.bot, &mut lines);
            }
        }
        lines
    }
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        // Leave one column for the scrollbar.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        let lines = self.lines(text_area.width as usize);
        let height = inner.height as usize;
        let total = lines.len();
        self.state.last_height.set(height);
        self.state.last_total.set(total);

        let scroll = self.state.scroll.min(total.saturating_sub(height));
        let end = total - scroll;
        let start = end.saturating_sub(height);

        Paragraph::new(lines[start..end].to_vec()).render(text_area, buf);

        if total > height {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Wrapping
// ---------------------------------------------------------------------------

/// Greedy word wrap to `width` columns. Words longer than a line are split.
/// Always returns at least one (possibly empty) row.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Hard-split words that cannot fit on an empty row.
        while word.len() > width {
            if row_len > 0 {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if row_len == 0 { word.len() } else { row_len + 1 + word.len() };
        if needed > width && row_len > 0 {
            rows.push(std::mem::take(&mut row));
            row_len = 0;
        }
        if row_len > 0 {
            row.push(' ');
            row_len += 1;
        }
        row_len += word.len();
        row.extend(word);
    }

    if row_len > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
