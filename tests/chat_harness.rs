//! Chat session integration harness.
//!
//! # What this covers
//!
//! - **Window state**: open/close/toggle transitions and the one-time
//!   greeting.
//! - **Submission rules**: closed window, blank text and an in-flight reply
//!   all reject a message.
//! - **Reply animation**: thinking pause first, then a typing reveal at the
//!   configured rate, driven by explicit `tick` durations.
//! - **Quick questions**: open the window and submit the canned text.
//! - **Injected responder**: the session works with any `Responder`,
//!   including closures and the real matcher.
//!
//! # Running
//!
//! ```sh
//! cargo test --test chat_harness
//! ```

mod common;
use common::*;

use partnerbot_core::{Author, ChatSession, ChatState, FaqMatcher, Responder};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn echo(query: &str) -> String {
    format!("echo: {query}")
}

fn authors<R: Responder>(chat: &ChatSession<R>) -> Vec<Author> {
    chat.transcript().iter().map(|m| m.author).collect()
}

// ---------------------------------------------------------------------------
// Window state
// ---------------------------------------------------------------------------

#[test]
fn starts_closed_and_empty() {
    let chat = ChatSession::new(echo, &slow_chat());
    assert_eq!(chat.state(), ChatState::Closed);
    assert!(chat.transcript().is_empty());
}

#[test]
fn greeting_is_posted_once() {
    let mut chat = ChatSession::new(echo, &slow_chat());
    chat.toggle();
    chat.toggle();
    chat.toggle();
    assert!(chat.is_open());
    assert_eq!(authors(&chat), [Author::Bot]);
    assert_eq!(chat.transcript()[0].text, slow_chat().greeting);
}

#[test]
fn empty_greeting_posts_nothing() {
    let mut config = slow_chat();
    config.greeting.clear();
    let mut chat = ChatSession::new(echo, &config);
    chat.open();
    assert!(chat.transcript().is_empty());
}

// ---------------------------------------------------------------------------
// Submission rules
// ---------------------------------------------------------------------------

#[test]
fn closed_window_rejects_messages() {
    let mut chat = ChatSession::new(echo, &slow_chat());
    assert!(!chat.submit("hello"));
    assert!(chat.transcript().is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_messages_are_rejected(#[case] text: &str) {
    let mut chat = ChatSession::new(echo, &slow_chat());
    chat.open();
    assert!(!chat.submit(text));
    assert_eq!(chat.transcript().len(), 1);
}

#[test]
fn second_message_waits_for_first_reply() {
    let mut chat = ChatSession::new(echo, &instant_chat());
    chat.open();
    assert!(chat.submit("one"));
    assert!(!chat.submit("two"));
    chat.tick(ms(1));
    assert!(chat.submit("two"));
}

#[test]
fn user_text_is_trimmed() {
    let mut chat = ChatSession::new(echo, &instant_chat());
    chat.open();
    chat.submit("  rates  ");
    assert_eq!(chat.transcript()[1].text, "rates");
    chat.tick(ms(1));
    assert_eq!(chat.transcript()[2].text, "echo: rates");
}

// ---------------------------------------------------------------------------
// Reply animation
// ---------------------------------------------------------------------------

#[test]
fn thinking_then_typing_then_landed() {
    // 100 ms thinking, 10 chars/s → one char per 100 ms
    let mut chat = ChatSession::new(|_: &str| "abc".to_string(), &slow_chat());
    chat.open();
    chat.submit("q");

    chat.tick(ms(60));
    let pending = chat.pending().unwrap();
    assert!(pending.is_thinking());
    assert_eq!(pending.visible_text(), "");

    // 40 ms finishes thinking, 100 ms reveals one char
    chat.tick(ms(140));
    let pending = chat.pending().unwrap();
    assert!(!pending.is_thinking());
    assert_eq!(pending.visible_text(), "a");
    assert_eq!(pending.full_text(), "abc");

    chat.tick(ms(150));
    assert_eq!(chat.pending().unwrap().visible_text(), "ab");

    chat.tick(ms(50));
    assert!(chat.pending().is_none());
    assert_eq!(authors(&chat), [Author::Bot, Author::User, Author::Bot]);
    assert_eq!(chat.transcript()[2].text, "abc");
}

#[test]
fn typing_reveals_whole_chars() {
    let mut chat = ChatSession::new(|_: &str| "héllo".to_string(), &slow_chat());
    chat.open();
    chat.submit("q");
    chat.tick(ms(300));
    assert_eq!(chat.pending().unwrap().visible_text(), "hé");
}

#[test]
fn zero_rate_reveals_after_thinking() {
    let mut config = slow_chat();
    config.typing_cps = 0;
    let mut chat = ChatSession::new(echo, &config);
    chat.open();
    chat.submit("q");
    chat.tick(ms(99));
    assert!(chat.pending().is_some());
    chat.tick(ms(1));
    assert!(chat.pending().is_none());
}

#[test]
fn finish_pending_skips_animation() {
    let mut chat = ChatSession::new(echo, &slow_chat());
    chat.open();
    chat.submit("q");
    chat.finish_pending();
    assert!(chat.pending().is_none());
    assert_eq!(chat.transcript().last().unwrap().text, "echo: q");
}

#[test]
fn replies_keep_animating_while_closed() {
    let mut chat = ChatSession::new(echo, &instant_chat());
    chat.open();
    chat.submit("q");
    chat.close();
    chat.tick(ms(1));
    assert_eq!(chat.transcript().last().unwrap().author, Author::Bot);
    assert_eq!(chat.state(), ChatState::Closed);
}

#[test]
fn clear_drops_pending_and_reposts_greeting() {
    let mut chat = ChatSession::new(echo, &slow_chat());
    chat.open();
    chat.submit("q");
    chat.clear();
    assert!(chat.pending().is_none());
    assert_eq!(authors(&chat), [Author::Bot]);
}

// ---------------------------------------------------------------------------
// Quick questions
// ---------------------------------------------------------------------------

#[test]
fn quick_question_opens_and_submits() {
    let mut chat = ChatSession::new(echo, &instant_chat());
    assert!(chat.ask_quick(2));
    assert!(chat.is_open());
    assert_eq!(chat.transcript()[1].text, "How do payments work?");
}

#[test]
fn out_of_range_quick_question_is_ignored() {
    let mut chat = ChatSession::new(echo, &instant_chat());
    assert!(!chat.ask_quick(99));
    assert!(!chat.is_open());
}

// ---------------------------------------------------------------------------
// Real matcher
// ---------------------------------------------------------------------------

#[test]
fn every_quick_question_gets_its_faq_answer() {
    let matcher = FaqMatcher::builtin();
    let mut chat = ChatSession::new(FaqMatcher::builtin(), &instant_chat());
    for index in 0..chat.quick_questions().len() {
        let question = chat.quick_questions()[index].clone();
        assert!(chat.ask_quick(index));
        chat.tick(ms(1));
        let reply = &chat.transcript().last().unwrap().text;
        assert_eq!(reply, matcher.answer(&question));
        assert_ne!(reply, matcher.fallback());
    }
}

#[test]
fn gibberish_gets_the_fallback() {
    let mut chat = ChatSession::new(FaqMatcher::builtin(), &instant_chat());
    chat.open();
    chat.submit("xyz completely unrelated gibberish");
    chat.tick(ms(1));
    assert_eq!(
        chat.transcript().last().unwrap().text,
        chat.responder().fallback()
    );
}
