//! Normalizer — turns raw user text into the canonical form the matcher
//! compares against.
//!
//! Normalisation is deliberately minimal: lowercase, then trim surrounding
//! whitespace. Punctuation is kept, so `"partner?"` and `"partner"` are
//! different tokens (they still overlap, since one contains the other).

/// Lowercase and trim a raw string.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Split already-normalised text into whitespace-delimited tokens.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// True when either token contains the other.
pub fn tokens_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
