use clap::{Parser, Subcommand};
use partnerbot_core::{FaqMatcher, KnowledgeBase};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "partnerbot", about = "CAS Private Care partner FAQ assistant")]
struct Cli {
    /// Write debug logs to /tmp/partnerbot-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of ~/.config/partnerbot/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Answer one question and exit.
    Ask {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Print {"query","matched_key","strategy","answer"} as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List every question the assistant knows, in matching order.
    Topics,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/partnerbot-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("partnerbot debug log started — tail -f /tmp/partnerbot-debug.log");
    }

    let config = partnerbot::load_config(cli.config.as_deref())?;

    match cli.command {
        None => partnerbot_tui::run(config),
        Some(cmd) => {
            let matcher = FaqMatcher::from_config(KnowledgeBase::builtin(), &config.matcher)?;
            let mut out = std::io::stdout().lock();
            match cmd {
                Cmd::Ask { words, json } => {
                    partnerbot::ask(&matcher, &words.join(" "), json, &mut out)
                }
                Cmd::Topics => partnerbot::topics(&matcher, &mut out),
            }
        }
    }
}
