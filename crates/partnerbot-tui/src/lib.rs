//! partnerbot TUI — ratatui application shell around the chat session.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use partnerbot_core::{config::Config, FaqMatcher, KnowledgeBase};

/// Start the TUI against the built-in knowledge base.
pub fn run(config: Config) -> anyhow::Result<()> {
    let matcher = FaqMatcher::from_config(KnowledgeBase::builtin(), &config.matcher)?;
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(
        threshold = matcher.threshold(),
        theme = %config.ui.theme,
        "starting partnerbot tui"
    );
    App::new(matcher, config, theme).run()
}
