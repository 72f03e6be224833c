//! Quick-question strip — the row of predefined question buttons under the
//! transcript. Each button is labelled with the function key that asks it.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// At most this many buttons get a key (`F1`..`F9`).
pub const MAX_QUICK: usize = 9;

pub struct QuickQuestions<'a> {
    questions: &'a [String],
    disabled: bool,
    theme: &'a Theme,
}

impl<'a> QuickQuestions<'a> {
    pub fn new(questions: &'a [String], disabled: bool, theme: &'a Theme) -> Self {
        Self { questions, disabled, theme }
    }

    /// The spans for the strip, without truncation.
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, q) in self.questions.iter().take(MAX_QUICK).enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!(" F{} ", i + 1), self.theme.quick_key));
            spans.push(Span::styled(format!(" {q}"), self.theme.quick_label));
        }
        let line = Line::from(spans);
        if self.disabled {
            line.patch_style(Style::default().add_modifier(Modifier::DIM))
        } else {
            line
        }
    }
}

impl Widget for QuickQuestions<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Lines wider than the area are clipped by the buffer.
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_numbered_from_f1() {
        let theme = Theme::load_default();
        let qs = vec!["Rates?".to_string(), "Payments?".to_string()];
        let text: String = QuickQuestions::new(&qs, false, &theme)
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, " F1  Rates?   F2  Payments?");
    }

    #[test]
    fn only_nine_buttons() {
        let theme = Theme::load_default();
        let qs: Vec<String> = (0..12).map(|i| format!("q{i}")).collect();
        let text: String = QuickQuestions::new(&qs, false, &theme)
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("F9"));
        assert!(!text.contains("F10"));
    }
}
