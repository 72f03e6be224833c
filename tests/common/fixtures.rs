//! Query corpora and builders used across harnesses.

#![allow(dead_code)]

use partnerbot_core::config::ChatConfig;
use partnerbot_core::{FaqMatcher, KnowledgeBase};
use std::process::Command;

/// Keys of the built-in knowledge base, normalised, in matching order.
pub const BUILTIN_KEYS: &[&str] = &[
    "how to become a partner?",
    "what are your rates?",
    "what services do you offer?",
    "how do payments work?",
    "what are the requirements?",
    "do i need insurance?",
    "how long does approval take?",
    "what areas do you serve?",
    "can i set my own schedule?",
    "how do i contact support?",
];

/// Free-text questions and the key they resolve to (`None` = fallback).
pub const SCENARIOS: &[(&str, Option<&str>)] = &[
    ("How do I become a partner?", Some("how to become a partner?")),
    ("what are your rates", Some("what are your rates?")),
    ("when do payments arrive", Some("how do payments work?")),
    ("insurance required", Some("do i need insurance?")),
    ("schedule flexibility", Some("can i set my own schedule?")),
    ("contact support", Some("how do i contact support?")),
    ("xyz completely unrelated gibberish", None),
    ("rates", None),
    ("hello", None),
    ("", None),
];

/// Whitespace-only inputs; every one must fall back.
pub const BLANK_QUERIES: &[&str] = &["", " ", "   ", "\t", "\n", " \t \n "];

/// A small ordered base whose keys share no short tokens, so overlap counts
/// are easy to reason about.
pub fn greek_base() -> KnowledgeBase {
    KnowledgeBase::from_pairs([
        ("alpha beta gamma", "first"),
        ("delta epsilon zeta", "second"),
        ("alpha delta omega", "third"),
    ])
    .expect("greek base is valid")
}

pub fn builtin_matcher() -> FaqMatcher<'static> {
    FaqMatcher::builtin()
}

/// Chat timing that is easy to step through: 100 ms thinking, 10 chars/s.
pub fn slow_chat() -> ChatConfig {
    ChatConfig {
        thinking_ms: 100,
        typing_cps: 10,
        ..ChatConfig::default()
    }
}

/// Chat timing where a reply lands on the first tick.
pub fn instant_chat() -> ChatConfig {
    ChatConfig {
        thinking_ms: 0,
        typing_cps: 0,
        ..ChatConfig::default()
    }
}

/// The compiled binary, isolated from the real user config directory.
pub fn partnerbot_binary(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_partnerbot"));
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd.env_remove("RUST_LOG");
    cmd
}
