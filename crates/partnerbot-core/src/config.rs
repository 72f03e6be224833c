//! Configuration types for partnerbot.
//!
//! [`Config::load`] reads `~/.config/partnerbot/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit path without creating anything. [`Config::defaults`] returns the
//! built-in defaults without touching the filesystem (useful in tests).

use crate::error::Result;
use crate::matcher::DEFAULT_THRESHOLD;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[matcher]
threshold = 2

[chat]
title           = "CAS Private Care · Partner Help"
greeting        = "Hi! I'm the CAS Private Care partner assistant. Ask me anything about becoming a contractor partner."
thinking_ms     = 800
typing_cps      = 60
quick_questions = [
    "How to become a partner?",
    "What are your rates?",
    "How do payments work?",
    "What are the requirements?",
    "How long does approval take?",
]

[ui]
show_timestamps  = false
timestamp_format = "%H:%M"
theme            = "default"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[matcher]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MatcherConfig {
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Replaces the built-in apology text when set.
    #[serde(default)]
    pub fallback: Option<String>,
}

fn default_threshold() -> usize { DEFAULT_THRESHOLD }

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            fallback: None,
        }
    }
}

/// `[chat]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Simulated "thinking" pause before a reply starts typing.
    #[serde(default = "default_thinking_ms")]
    pub thinking_ms: u64,
    /// Characters revealed per second while typing. 0 reveals instantly.
    #[serde(default = "default_typing_cps")]
    pub typing_cps: u32,
    #[serde(default = "default_quick_questions")]
    pub quick_questions: Vec<String>,
}

fn default_title() -> String { "CAS Private Care · Partner Help".to_string() }
fn default_greeting() -> String {
    "Hi! I'm the CAS Private Care partner assistant. Ask me anything about becoming a contractor partner."
        .to_string()
}
fn default_thinking_ms() -> u64 { 800 }
fn default_typing_cps() -> u32 { 60 }
fn default_quick_questions() -> Vec<String> {
    [
        "How to become a partner?",
        "What are your rates?",
        "How do payments work?",
        "What are the requirements?",
        "How long does approval take?",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            greeting: default_greeting(),
            thinking_ms: default_thinking_ms(),
            typing_cps: default_typing_cps(),
            quick_questions: default_quick_questions(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub show_timestamps: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_timestamp_format() -> String { "%H:%M".to_string() }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_timestamps: false,
            timestamp_format: default_timestamp_format(),
            theme: default_theme(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/partnerbot/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on the defaults. A missing file is not
    /// an error; the defaults are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("partnerbot")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
