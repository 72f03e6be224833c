//! Command-line commands typed after `:`.

use crate::app::AppState;
use crate::theme::Theme;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Open,
    Close,
    Clear,
    /// One-based, as shown on the quick-question buttons.
    Quick(usize),
    Topics,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "open" => Ok(Command::Open),
            "close" => Ok(Command::Close),
            "clear" => Ok(Command::Clear),
            "topics" => Ok(Command::Topics),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "quick" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Command::Quick(n)),
                _ => Err("usage: quick <1-9>".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Open => s.chat.open(),
        Command::Close => s.chat.close(),
        Command::Clear => s.chat.clear(),
        Command::Quick(n) => {
            if s.chat.ask_quick(n - 1) {
                s.transcript.follow();
            }
        }
        Command::Topics => {
            let topics: Vec<String> = s
                .chat_topics()
                .iter()
                .map(|t| format!("• {t}"))
                .collect();
            s.chat.open();
            s.chat.announce(format!("I can answer questions like:\n{}", topics.join("\n")));
            s.transcript.follow();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
