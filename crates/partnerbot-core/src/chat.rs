//! Chat session — the state behind the partner help window.
//!
//! The window is either [`ChatState::Closed`] or [`ChatState::Open`]. While
//! open, the user submits messages; each one is answered by the injected
//! [`Responder`] immediately, but the reply is revealed over time: first a
//! "thinking" pause, then a character-by-character typing reveal. Time only
//! advances through [`ChatSession::tick`], so the session itself never reads
//! a clock and tests can drive it with exact durations.
//!
//! ```text
//!            open / toggle
//!   Closed ───────────────► Open ──┐ submit
//!      ▲                     │  ▲  │
//!      └──── close / toggle ─┘  └──┘ tick … reply lands in transcript
//! ```

use crate::config::ChatConfig;
use crate::matcher::Responder;
use crate::types::{Author, Message};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Closed,
    Open,
}

// ---------------------------------------------------------------------------
// PendingReply
// ---------------------------------------------------------------------------

/// A bot reply that has been computed but not yet fully shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    text: String,
    char_count: usize,
    thinking_left: Duration,
    typing_elapsed: Duration,
    revealed: usize,
}

impl PendingReply {
    fn new(text: String, thinking: Duration) -> Self {
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            thinking_left: thinking,
            typing_elapsed: Duration::ZERO,
            revealed: 0,
        }
    }

    /// True while the typing indicator should be shown instead of text.
    pub fn is_thinking(&self) -> bool {
        !self.thinking_left.is_zero()
    }

    /// The part of the reply revealed so far.
    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    fn is_done(&self) -> bool {
        self.revealed >= self.char_count
    }
}

// ---------------------------------------------------------------------------
// ChatSession
// ---------------------------------------------------------------------------

pub struct ChatSession<R> {
    responder: R,
    state: ChatState,
    greeting: String,
    quick_questions: Vec<String>,
    thinking: Duration,
    typing_cps: u32,
    transcript: Vec<Message>,
    pending: Option<PendingReply>,
}

impl<R: Responder> ChatSession<R> {
    pub fn new(responder: R, config: &ChatConfig) -> Self {
        Self {
            responder,
            state: ChatState::Closed,
            greeting: config.greeting.clone(),
            quick_questions: config.quick_questions.clone(),
            thinking: Duration::from_millis(config.thinking_ms),
            typing_cps: config.typing_cps,
            transcript: Vec::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ChatState::Open
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn pending(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    pub fn quick_questions(&self) -> &[String] {
        &self.quick_questions
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }

    /// Open the window. The greeting is posted the first time the
    /// transcript is empty.
    pub fn open(&mut self) {
        if self.state == ChatState::Open {
            return;
        }
        tracing::debug!("chat: open");
        self.state = ChatState::Open;
        if self.transcript.is_empty() && self.pending.is_none() {
            self.post_greeting();
        }
    }

    pub fn close(&mut self) {
        if self.state == ChatState::Closed {
            return;
        }
        tracing::debug!("chat: close");
        self.state = ChatState::Closed;
    }

    pub fn toggle(&mut self) {
        match self.state {
            ChatState::Closed => self.open(),
            ChatState::Open => self.close(),
        }
    }

    /// Send a user message. Returns `false` (and does nothing) when the
    /// window is closed, the text is blank, or a reply is still pending.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if self.state == ChatState::Closed || text.is_empty() || self.pending.is_some() {
            tracing::debug!(
                state = ?self.state,
                pending = self.pending.is_some(),
                "chat: submit ignored"
            );
            return false;
        }

        self.transcript.push(Message::new(Author::User, text));
        let reply = self.responder.respond(text);
        tracing::debug!(query = text, reply_chars = reply.len(), "chat: reply queued");
        self.pending = Some(PendingReply::new(reply, self.thinking));
        true
    }

    /// Submit the `index`-th quick question, opening the window first.
    pub fn ask_quick(&mut self, index: usize) -> bool {
        let Some(question) = self.quick_questions.get(index).cloned() else {
            tracing::debug!(index, "chat: no such quick question");
            return false;
        };
        self.open();
        self.submit(&question)
    }

    /// Advance the pending reply by `elapsed`. Thinking time is consumed
    /// first; any remainder goes to typing.
    pub fn tick(&mut self, elapsed: Duration) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let mut budget = elapsed;
        if !pending.thinking_left.is_zero() {
            if budget < pending.thinking_left {
                pending.thinking_left -= budget;
                return;
            }
            budget -= pending.thinking_left;
            pending.thinking_left = Duration::ZERO;
        }

        if self.typing_cps == 0 {
            pending.revealed = pending.char_count;
        } else {
            pending.typing_elapsed += budget;
            let chars = pending.typing_elapsed.as_millis() * u128::from(self.typing_cps) / 1000;
            pending.revealed = pending.char_count.min(usize::try_from(chars).unwrap_or(usize::MAX));
        }

        if pending.is_done() {
            self.land_pending();
        }
    }

    /// Show the pending reply in full right away.
    pub fn finish_pending(&mut self) {
        if self.pending.is_some() {
            self.land_pending();
        }
    }

    /// Post a bot message right away, without asking the responder and
    /// without the typing animation. Used for system notices.
    pub fn announce(&mut self, text: impl Into<String>) {
        self.transcript.push(Message::new(Author::Bot, text));
    }

    /// Drop the conversation. The greeting is re-posted if the window is open.
    pub fn clear(&mut self) {
        tracing::debug!(messages = self.transcript.len(), "chat: clear");
        self.transcript.clear();
        self.pending = None;
        if self.state == ChatState::Open {
            self.post_greeting();
        }
    }

    fn post_greeting(&mut self) {
        if !self.greeting.is_empty() {
            self.transcript.push(Message::new(Author::Bot, self.greeting.clone()));
        }
    }

    fn land_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!("chat: reply delivered");
            self.transcript.push(Message::new(Author::Bot, pending.text));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(thinking_ms: u64, typing_cps: u32) -> ChatConfig {
        ChatConfig {
            greeting: "hello".to_string(),
            thinking_ms,
            typing_cps,
            quick_questions: vec!["first?".to_string(), "second?".to_string()],
            ..ChatConfig::default()
        }
    }

    fn upper(q: &str) -> String {
        q.to_uppercase()
    }

    fn texts<R: Responder>(s: &ChatSession<R>) -> Vec<(Author, &str)> {
        s.transcript().iter().map(|m| (m.author, m.text.as_str())).collect()
    }

    #[test]
    fn starts_closed_and_empty() {
        let s = ChatSession::new(upper, &config(0, 0));
        assert_eq!(s.state(), ChatState::Closed);
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn first_open_posts_greeting_once() {
        let mut s = ChatSession::new(upper, &config(0, 0));
        s.open();
        s.close();
        s.open();
        assert_eq!(texts(&s), [(Author::Bot, "hello")]);
    }

    #[test]
    fn toggle_flips_state() {
        let mut s = ChatSession::new(upper, &config(0, 0));
        s.toggle();
        assert!(s.is_open());
        s.toggle();
        assert_eq!(s.state(), ChatState::Closed);
    }

    #[test]
    fn submit_ignored_while_closed() {
        let mut s = ChatSession::new(upper, &config(0, 0));
        assert!(!s.submit("hi"));
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn blank_submit_ignored() {
        let mut s = ChatSession::new(upper, &config(0, 0));
        s.open();
        assert!(!s.submit("   "));
        assert_eq!(s.transcript().len(), 1);
    }

    #[test]
    fn instant_reply_lands_on_first_tick() {
        let mut s = ChatSession::new(upper, &config(0, 0));
        s.open();
        assert!(s.submit("  rates  "));
        assert!(s.pending().is_some());
        s.tick(Duration::ZERO);
        assert!(s.pending().is_none());
        assert_eq!(
            texts(&s),
            [(Author::Bot, "hello"), (Author::User, "rates"), (Author::Bot, "RATES")]
        );
    }

    #[test]
    fn thinking_then_typing() {
        // 500ms thinking, 10 chars/s.
        let mut s = ChatSession::new(|_: &str| "abcdef".to_string(), &config(500, 10));
        s.open();
        s.submit("q");

        s.tick(Duration::from_millis(400));
        let p = s.pending().unwrap();
        assert!(p.is_thinking());
        assert_eq!(p.visible_text(), "");

        // 100ms finishes thinking, 200ms more types 2 chars.
        s.tick(Duration::from_millis(300));
        let p = s.pending().unwrap();
        assert!(!p.is_thinking());
        assert_eq!(p.visible_text(), "ab");
        assert_eq!(p.full_text(), "abcdef");

        s.tick(Duration::from_millis(400));
        assert!(s.pending().is_none());
        assert_eq!(s.transcript().last().unwrap().text, "abcdef");
    }

    #[test]
    fn typing_reveal_respects_char_boundaries() {
        let mut s = ChatSession::new(|_: &str| "héllo".to_string(), &config(0, 1000));
        s.open();
        s.submit("q");
        s.tick(Duration::from_millis(2));
        assert_eq!(s.pending().unwrap().visible_text(), "hé");
    }

    #[test]
    fn submit_blocked_while_reply_pending() {
        let mut s = ChatSession::new(upper, &config(1000, 10));
        s.open();
        assert!(s.submit("one"));
        assert!(!s.submit("two"));
        s.finish_pending();
        assert!(s.submit("two"));
    }

    #[test]
    fn quick_question_opens_window() {
        let mut s = ChatSession::new(upper, &config(0, 0));
        assert!(s.ask_quick(1));
        assert!(s.is_open());
        s.tick(Duration::ZERO);
        assert_eq!(
            &texts(&s)[1..],
            &[(Author::User, "second?"), (Author::Bot, "SECOND?")]
        );
    }

    #[test]
    fn quick_question_out_of_range() {
        let mut s = ChatSession::new(upper, &config(0, 0));
        assert!(!s.ask_quick(7));
        assert_eq!(s.state(), ChatState::Closed);
    }

    #[test]
    fn announce_skips_responder_and_animation() {
        let mut s = ChatSession::new(upper, &config(1000, 1));
        s.announce("notice");
        assert!(s.pending().is_none());
        assert_eq!(texts(&s), [(Author::Bot, "notice")]);
    }

    #[test]
    fn clear_keeps_greeting_when_open() {
        let mut s = ChatSession::new(upper, &config(1000, 10));
        s.open();
        s.submit("x");
        s.clear();
        assert!(s.pending().is_none());
        assert_eq!(texts(&s), [(Author::Bot, "hello")]);
    }

    #[test]
    fn huge_tick_lands_reply_instead_of_wrapping() {
        let mut s = ChatSession::new(upper, &config(10, u32::MAX));
        s.open();
        s.submit("rates");
        s.tick(Duration::from_secs(u64::MAX / 4));
        assert!(s.pending().is_none());
        assert_eq!(s.transcript().last().map(|m| m.text.as_str()), Some("RATES"));
    }
}
