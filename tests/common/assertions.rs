//! Domain-specific assertion macros for partnerbot harnesses.
//!
//! These add context to failures: which query, which step fired, and which
//! key was hit, so a misordered knowledge base is obvious from the output.

/// Assert that `query` resolves to the entry with normalised key `key`.
///
/// ```rust
/// assert_matches_key!(matcher, "what are your rates", "what are your rates?");
/// ```
#[macro_export]
macro_rules! assert_matches_key {
    ($matcher:expr, $query:expr, $key:expr) => {{
        let matcher: &partnerbot_core::FaqMatcher<'_> = &$matcher;
        let query: &str = $query;
        let expected: &str = $key;
        let result = matcher.classify(query);
        match result.entry() {
            Some(entry) if entry.key() == expected => {}
            Some(entry) => panic!(
                "assert_matches_key! failed for {:?}:\n  expected: {:?}\n  actual:   {:?} ({})",
                query,
                expected,
                entry.key(),
                result.strategy()
            ),
            None => panic!(
                "assert_matches_key! failed for {:?}: fell back, expected {:?}",
                query, expected
            ),
        }
    }};
}

/// Assert that `query` produces the matcher's fallback text.
#[macro_export]
macro_rules! assert_fallback {
    ($matcher:expr, $query:expr) => {{
        let matcher: &partnerbot_core::FaqMatcher<'_> = &$matcher;
        let query: &str = $query;
        let result = matcher.classify(query);
        if let Some(entry) = result.entry() {
            panic!(
                "assert_fallback! failed for {:?}: matched {:?} via {}",
                query,
                entry.key(),
                result.strategy()
            );
        }
        assert_eq!(result.answer(), matcher.fallback());
    }};
}
