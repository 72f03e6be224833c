//! Colour themes for the chat window.
//!
//! Themes are TOML files embedded with [`include_str!`], so the binary works
//! with nothing on disk. `ui.theme` in the config and `:theme <name>` pick
//! one by name; unknown names get the default.

use config::{Config, File, FileFormat};
use partnerbot_core::Author;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Name → embedded TOML. The first entry is the default.
const BUILTIN: &[(&str, &str)] = &[
    ("default", include_str!("themes/default.toml")),
    ("gruvbox_dark", include_str!("themes/gruvbox_dark.toml")),
];

// ---------------------------------------------------------------------------
// TOML shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleSpec {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    dim: bool,
    italic: bool,
}

impl From<StyleSpec> for Style {
    fn from(spec: StyleSpec) -> Style {
        let mut modifiers = Modifier::empty();
        modifiers.set(Modifier::BOLD, spec.bold);
        modifiers.set(Modifier::DIM, spec.dim);
        modifiers.set(Modifier::ITALIC, spec.italic);

        let mut style = Style::default().add_modifier(modifiers);
        if let Some(fg) = spec.fg.as_deref().and_then(parse_color) {
            style = style.fg(fg);
        }
        if let Some(bg) = spec.bg.as_deref().and_then(parse_color) {
            style = style.bg(bg);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct ThemeSpec {
    messages: MessageStyles,
    borders: BorderStyles,
    quick: QuickStyles,
    launcher: LauncherStyles,
}

#[derive(Debug, Deserialize)]
struct MessageStyles {
    bot: StyleSpec,
    user: StyleSpec,
    typing: StyleSpec,
    timestamp: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct BorderStyles {
    focused: StyleSpec,
    unfocused: StyleSpec,
    command_bar: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct QuickStyles {
    key: StyleSpec,
    label: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct LauncherStyles {
    bubble: StyleSpec,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Theme {
    pub bot: Style,
    pub user: Style,
    /// "typing…" while a reply is still thinking.
    pub typing: Style,
    pub timestamp: Style,

    pub border_focused: Style,
    pub border_unfocused: Style,
    pub border_command_bar: Style,

    /// The `F1` badge on a quick-question button.
    pub quick_key: Style,
    pub quick_label: Style,

    pub launcher: Style,
}

impl Theme {
    /// # Panics
    ///
    /// Panics if the embedded default theme is malformed.
    pub fn load_default() -> Self {
        let (name, src) = BUILTIN[0];
        Self::from_toml_str(src).unwrap_or_else(|e| panic!("embedded theme {name:?}: {e}"))
    }

    /// An embedded theme by exact name, if there is one.
    pub fn builtin(name: &str) -> Option<Self> {
        let (_, src) = BUILTIN.iter().find(|(n, _)| *n == name)?;
        Self::from_toml_str(src).ok()
    }

    /// Resolve `ui.theme` / `:theme` input. Case, `-` vs `_`, and the bare
    /// `gruvbox` alias are accepted.
    pub fn by_name(name: &str) -> Self {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        let key = if key == "gruvbox" { "gruvbox_dark".to_string() } else { key };
        Self::builtin(&key).unwrap_or_else(|| {
            tracing::debug!(theme = name, "unknown theme, using default");
            Self::load_default()
        })
    }

    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let spec: ThemeSpec = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        let ThemeSpec { messages, borders, quick, launcher } = spec;
        Ok(Self {
            bot: messages.bot.into(),
            user: messages.user.into(),
            typing: messages.typing.into(),
            timestamp: messages.timestamp.into(),
            border_focused: borders.focused.into(),
            border_unfocused: borders.unfocused.into(),
            border_command_bar: borders.command_bar.into(),
            quick_key: quick.key.into(),
            quick_label: quick.label.into(),
            launcher: launcher.bubble.into(),
        })
    }

    pub fn author_style(&self, author: Author) -> Style {
        match author {
            Author::Bot => self.bot,
            Author::User => self.user,
        }
    }
}

/// Terminal colour names (`light_cyan`, `dark-gray`, …), `#rrggbb`, or
/// `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.strip_prefix("indexed:") {
        Some(n) => n.parse().ok().map(Color::Indexed),
        None => s.parse().ok(),
    }
}
