//! FAQ intent matcher — maps free text to the most relevant canned answer.
//!
//! Matching runs in three steps, stopping at the first that succeeds:
//!
//! 1. **Exact**: the normalised query equals a key.
//! 2. **Overlap**: walking the knowledge base in order, the first entry with
//!    at least `threshold` key tokens that contain, or are contained in, some
//!    query token. This is first-match, not best-match.
//! 3. **Fallback**: the configured apology text.
//!
//! Short key tokens (`a`, `i`, `to`) are substrings of many words and count
//! toward the threshold, so `"partner"` alone reaches 2 against
//! `"how to become a partner?"`. Entry order decides who wins these.

use crate::config::MatcherConfig;
use crate::error::{Error, Result};
use crate::knowledge::{KnowledgeBase, FALLBACK};
use crate::normalizer::{normalize, tokenize, tokens_overlap};
use crate::types::MatchResult;
use std::collections::HashSet;

/// Default number of overlapping key tokens required for a match.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Anything that can turn a user message into a reply.
///
/// The chat session depends on this rather than on [`FaqMatcher`] so the
/// UI can be driven by a stub in tests.
pub trait Responder {
    fn respond(&self, query: &str) -> String;
}

impl<F> Responder for F
where
    F: Fn(&str) -> String,
{
    fn respond(&self, query: &str) -> String {
        self(query)
    }
}

// ---------------------------------------------------------------------------
// FaqMatcher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FaqMatcher<'kb> {
    base: &'kb KnowledgeBase,
    threshold: usize,
    fallback: String,
}

impl FaqMatcher<'static> {
    /// Matcher over the built-in FAQ with default threshold and fallback.
    pub fn builtin() -> Self {
        FaqMatcher::new(KnowledgeBase::builtin())
    }
}

impl<'kb> FaqMatcher<'kb> {
    pub fn new(base: &'kb KnowledgeBase) -> Self {
        Self {
            base,
            threshold: DEFAULT_THRESHOLD,
            fallback: FALLBACK.to_string(),
        }
    }

    /// Apply the `[matcher]` config section.
    pub fn from_config(base: &'kb KnowledgeBase, config: &MatcherConfig) -> Result<Self> {
        let mut matcher = Self::new(base).with_threshold(config.threshold)?;
        if let Some(ref fallback) = config.fallback {
            matcher = matcher.with_fallback(fallback.clone());
        }
        Ok(matcher)
    }

    /// A threshold of 0 would let an empty query match the first entry, so
    /// it is rejected.
    pub fn with_threshold(mut self, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(Error::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.base
    }

    /// The answer for `query`. Total: every input yields some text.
    pub fn answer(&self, query: &str) -> &str {
        self.classify(query).answer()
    }

    /// Resolve `query` and report which step produced the answer.
    pub fn classify(&self, query: &str) -> MatchResult<'_> {
        let normalized = normalize(query);

        if let Some(entry) = self.base.get(&normalized) {
            tracing::debug!(query = %normalized, key = entry.key(), "match: exact");
            return MatchResult::Exact(entry);
        }

        let words: HashSet<&str> = tokenize(&normalized).collect();
        if words.is_empty() {
            tracing::debug!("match: empty query, fallback");
            return MatchResult::Fallback(&self.fallback);
        }

        for entry in self.base.entries() {
            let overlap = overlap_count(entry.tokens(), &words);
            if overlap >= self.threshold {
                tracing::debug!(
                    query = %normalized,
                    key = entry.key(),
                    overlap,
                    "match: overlap"
                );
                return MatchResult::Overlap { entry, overlap };
            }
        }

        tracing::debug!(query = %normalized, "match: fallback");
        MatchResult::Fallback(&self.fallback)
    }
}

impl Responder for FaqMatcher<'_> {
    fn respond(&self, query: &str) -> String {
        self.answer(query).to_string()
    }
}

/// Number of key tokens with a substring relationship to any query word.
fn overlap_count(key_tokens: &[String], words: &HashSet<&str>) -> usize {
    key_tokens
        .iter()
        .filter(|token| words.iter().any(|word| tokens_overlap(token, word)))
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
