//! Core types for partnerbot-core.
//!
//! This module defines the data shared between the matcher, the chat session
//! and the surfaces: the [`KnowledgeEntry`], the per-query [`MatchResult`],
//! and the transcript [`Message`].

use crate::normalizer::{normalize, tokenize};

/// One canned question/answer pair in the knowledge base.
///
/// The key is stored normalised (lowercase, trimmed) so that exact lookups
/// compare like with like. Tokens are derived from the key once, at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    key: String,
    tokens: Vec<String>,
    answer: String,
}

impl KnowledgeEntry {
    /// Build an entry, normalising the key. Validation of empty keys and
    /// answers happens in [`KnowledgeBase::from_pairs`](crate::knowledge::KnowledgeBase::from_pairs).
    pub(crate) fn new(key: &str, answer: impl Into<String>) -> Self {
        let key = normalize(key);
        let tokens = tokenize(&key).map(str::to_string).collect();
        Self {
            key,
            tokens,
            answer: answer.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key tokens in their original order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// How a query was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Normalised query equals a key.
    Exact,
    /// At least `threshold` key tokens overlap with query tokens.
    Overlap,
    /// Nothing matched.
    Fallback,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Exact => write!(f, "exact"),
            Strategy::Overlap => write!(f, "overlap"),
            Strategy::Fallback => write!(f, "fallback"),
        }
    }
}

/// Outcome of classifying one query. Borrowed from the matcher; derived
/// fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    Exact(&'a KnowledgeEntry),
    /// `overlap` is the number of key tokens that matched.
    Overlap {
        entry: &'a KnowledgeEntry,
        overlap: usize,
    },
    Fallback(&'a str),
}

impl<'a> MatchResult<'a> {
    /// The text to show the user.
    pub fn answer(&self) -> &'a str {
        match self {
            MatchResult::Exact(entry) | MatchResult::Overlap { entry, .. } => entry.answer(),
            MatchResult::Fallback(text) => text,
        }
    }

    /// The matched entry, if any.
    pub fn entry(&self) -> Option<&'a KnowledgeEntry> {
        match self {
            MatchResult::Exact(entry) | MatchResult::Overlap { entry, .. } => Some(entry),
            MatchResult::Fallback(_) => None,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            MatchResult::Exact(_) => Strategy::Exact,
            MatchResult::Overlap { .. } => Strategy::Overlap,
            MatchResult::Fallback(_) => Strategy::Fallback,
        }
    }
}

/// Who wrote a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    Bot,
    User,
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Author::Bot => write!(f, "bot"),
            Author::User => write!(f, "you"),
        }
    }
}

/// A single bubble in the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            sent_at: chrono::Utc::now(),
        }
    }
}
