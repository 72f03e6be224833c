//! partnerbot-core — FAQ intent matching for the contractor-partner assistant.
//!
//! This crate holds everything that is not rendering: the static knowledge
//! base, the matcher, the chat session state machine, configuration, and the
//! shared types.
//!
//! # Architecture
//!
//! ```text
//! Knowledge ──► Matcher ──► ChatSession ──► UI / CLI
//!    (static)    (pure)      (Responder)
//! ```
//!
//! The matcher is a pure function over a read-only base, so one instance can
//! serve any number of callers without locking.

pub mod chat;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod matcher;
pub mod normalizer;
pub mod types;

pub use chat::{ChatSession, ChatState};
pub use error::{Error, Result};
pub use knowledge::{KnowledgeBase, FALLBACK};
pub use matcher::{FaqMatcher, Responder};
pub use types::{Author, KnowledgeEntry, MatchResult, Message, Strategy};
