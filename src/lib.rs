//! partnerbot — contractor-partner FAQ assistant
//!
//! The binary either launches the terminal chat window or answers a single
//! question headlessly. This crate holds the headless half so integration
//! tests can drive it without a terminal; matching lives in
//! [`partnerbot_core`] and rendering in `partnerbot_tui`.

use partnerbot_core::{config::Config, FaqMatcher};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Machine-readable answer printed by `partnerbot ask --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskResponse<'a> {
    pub query: &'a str,
    /// Normalised key of the matched entry; `null` on fallback.
    pub matched_key: Option<&'a str>,
    /// `exact`, `overlap` or `fallback`.
    pub strategy: String,
    pub answer: &'a str,
}

impl<'a> AskResponse<'a> {
    pub fn new(matcher: &'a FaqMatcher<'_>, query: &'a str) -> Self {
        let result = matcher.classify(query);
        Self {
            query,
            matched_key: result.entry().map(|e| e.key()),
            strategy: result.strategy().to_string(),
            answer: result.answer(),
        }
    }
}

/// Resolve the configuration for this run: an explicit `--config` file
/// layered over the defaults, or the user config (created on first use).
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Answer one question, writing either the bare answer or a JSON object.
pub fn ask(
    matcher: &FaqMatcher<'_>,
    query: &str,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let response = AskResponse::new(matcher, query);
    tracing::debug!(
        query,
        strategy = %response.strategy,
        key = ?response.matched_key,
        "headless ask"
    );
    if json {
        serde_json::to_writer(&mut *out, &response)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", response.answer)?;
    }
    Ok(())
}

/// List every knowledge-base key in matching order, one per line.
pub fn topics(matcher: &FaqMatcher<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    for entry in matcher.knowledge().entries() {
        writeln!(out, "{}", entry.key())?;
    }
    Ok(())
}
