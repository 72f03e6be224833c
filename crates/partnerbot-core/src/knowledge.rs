//! Knowledge base — the fixed, ordered set of canned partner FAQ answers.
//!
//! The built-in base is compiled in as a [`phf::OrderedMap`], so iteration
//! order is the order written below. The matcher's overlap step is
//! first-match-wins, which makes this order part of the matching contract:
//! an entry whose key shares many short tokens with common questions must
//! come before entries it would otherwise shadow.
//!
//! [`KnowledgeBase::builtin`] converts the static map once per process and
//! hands out a shared reference. Custom bases (tests, alternative deployments)
//! go through [`KnowledgeBase::from_pairs`], which validates the invariants.

use crate::error::{Error, Result};
use crate::types::KnowledgeEntry;
use std::collections::HashMap;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

/// Canonical question phrasing → answer. Keys must already be lowercase.
pub static FAQ: phf::OrderedMap<&'static str, &'static str> = phf::phf_ordered_map! {
    "how to become a partner?" =>
        "To become a partner with CAS Private Care, fill out the contractor application on our \
         Partner page. We review your experience, licensing and references, run a background \
         check, and then schedule a short onboarding call. Once approved you can start \
         accepting client bookings in your area.",
    "what are your rates?" =>
        "Our rates vary by service type, location and schedule. Companion care, personal care \
         and skilled nursing are each priced differently, and overnight or live-in shifts carry \
         their own rates. Partners see the exact rate for every booking before accepting it.",
    "what services do you offer?" =>
        "We connect families with companion care, personal care, respite care, housekeeping \
         support, and skilled nursing visits. As a partner you choose which of these services \
         you are qualified and willing to provide.",
    "how do payments work?" =>
        "Clients pay through the platform and partners are paid weekly by direct deposit for \
         every completed and approved shift. You can see pending and paid amounts in your \
         dashboard at any time.",
    "what are the requirements?" =>
        "Partners must be at least 18, legally able to work in the US, pass a background check, \
         and hold any license or certification the services they offer require (for example \
         CNA, HHA or RN). At least one year of caregiving experience is strongly preferred.",
    "do i need insurance?" =>
        "Independent partners should carry general liability insurance. Partners providing \
         skilled nursing must also carry professional liability coverage. We can point you to \
         affordable providers during onboarding.",
    "how long does approval take?" =>
        "Most applications are reviewed within 3 to 5 business days. The background check is \
         usually the longest step; we email you as soon as it clears.",
    "what areas do you serve?" =>
        "We currently serve New York City and Long Island, with new service areas opening \
         regularly. Partners set a travel radius and only see bookings inside it.",
    "can i set my own schedule?" =>
        "Yes. Partners choose their availability and accept only the bookings that fit. You can \
         update your availability from the dashboard whenever your schedule changes.",
    "how do i contact support?" =>
        "You can reach our partner support team by email or phone during business hours, or \
         leave a message through the dashboard and we will get back to you within one \
         business day.",
};

/// Shown when no entry reaches the overlap threshold.
pub const FALLBACK: &str = "I'm sorry, I didn't quite understand that. Could you try \
    rephrasing your question? I can help with becoming a partner, rates, services, payments, \
    requirements, insurance, approval times, service areas, scheduling, and contacting support.";

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

/// An ordered, read-only collection of [`KnowledgeEntry`] values with an
/// exact-key index.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    by_key: HashMap<String, usize>,
}

impl KnowledgeBase {
    /// The built-in partner FAQ, converted on first use.
    pub fn builtin() -> &'static KnowledgeBase {
        static BUILTIN: OnceLock<KnowledgeBase> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            KnowledgeBase::from_pairs(FAQ.entries().map(|(k, v)| (*k, *v)))
                .expect("built-in knowledge base must satisfy its own invariants")
        })
    }

    /// Build a base from `(question, answer)` pairs, preserving order.
    ///
    /// Keys are normalised before indexing. Fails if a key has no tokens,
    /// an answer is blank, or two keys normalise to the same text.
    pub fn from_pairs<I, K, A>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, A)>,
        K: AsRef<str>,
        A: Into<String>,
    {
        let mut entries = Vec::new();
        let mut by_key = HashMap::new();

        for (index, (key, answer)) in pairs.into_iter().enumerate() {
            let entry = KnowledgeEntry::new(key.as_ref(), answer);
            if entry.tokens().is_empty() {
                return Err(Error::EmptyKey { index });
            }
            if entry.answer().trim().is_empty() {
                return Err(Error::EmptyAnswer {
                    key: entry.key().to_string(),
                });
            }
            if by_key.insert(entry.key().to_string(), index).is_some() {
                return Err(Error::DuplicateKey(entry.key().to_string()));
            }
            entries.push(entry);
        }

        tracing::debug!(entries = entries.len(), "knowledge base built");
        Ok(Self { entries, by_key })
    }

    /// Exact lookup by already-normalised key.
    pub fn get(&self, normalized_key: &str) -> Option<&KnowledgeEntry> {
        self.by_key.get(normalized_key).map(|&i| &self.entries[i])
    }

    /// Entries in their defined order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
