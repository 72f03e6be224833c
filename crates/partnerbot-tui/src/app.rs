//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Event handling and time
//! advancement ([`App::handle`], [`App::tick`]) do not touch the terminal, so
//! tests drive them directly.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        input_bar::{InputBar, InputBarState},
        launcher::Launcher,
        quick_questions::QuickQuestions,
        title_bar::TitleBar,
        transcript::{Transcript, TranscriptState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use partnerbot_core::{config::Config, ChatSession, FaqMatcher};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys go to the chat window (or the launcher while it is closed).
    Chat,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub chat: ChatSession<FaqMatcher<'static>>,
    pub input: InputBarState,
    pub transcript: TranscriptState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// Bot messages delivered while the window was closed.
    pub unread: usize,
    pub quit: bool,
}

impl AppState {
    /// Every knowledge-base key, in matching order.
    pub fn chat_topics(&self) -> Vec<&'static str> {
        self.chat
            .responder()
            .knowledge()
            .entries()
            .iter()
            .map(|e| e.key())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(matcher: FaqMatcher<'static>, config: Config, theme: Theme) -> Self {
        let chat = ChatSession::new(matcher, &config.chat);
        let transcript =
            TranscriptState::new(config.ui.show_timestamps, config.ui.timestamp_format.clone());

        let state = AppState {
            chat,
            input: InputBarState::default(),
            transcript,
            focus: Focus::Chat,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            unread: 0,
            quit: false,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut last = Instant::now();
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(POLL_INTERVAL)? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != crossterm::event::KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = if is_insert_mode(&self.state) {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }

            let now = Instant::now();
            self.tick(now - last);
            last = now;
        }
        Ok(())
    }

    /// Advance the reply animation.
    pub fn tick(&mut self, elapsed: Duration) {
        let s = &mut self.state;
        let before = s.chat.transcript().len();
        s.chat.tick(elapsed);
        let landed = s.chat.transcript().len() - before;
        if landed > 0 && !s.chat.is_open() {
            s.unread += landed;
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                AppEvent::Quit => s.quit = true,
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = Focus::Chat;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.text().to_string();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = Focus::Chat;
                            execute_command(s, cmd);
                            if s.chat.is_open() {
                                s.unread = 0;
                            }
                        }
                        Err(msg) if msg.is_empty() => {
                            s.command_bar.clear();
                            s.focus = Focus::Chat;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            AppEvent::QuickQuestion(index) => {
                if s.chat.ask_quick(index) {
                    s.transcript.follow();
                    s.unread = 0;
                }
            }

            // `?` and `:` only act as shortcuts when they would not be typed
            AppEvent::Char('?') if s.input.is_empty() => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }
            AppEvent::Char(':') if s.input.is_empty() => {
                tracing::debug!("entering command mode");
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            other if !s.chat.is_open() => {
                if other == AppEvent::ToggleChat {
                    s.chat.open();
                    s.unread = 0;
                }
            }

            AppEvent::Escape | AppEvent::ToggleChat => s.chat.close(),

            AppEvent::Enter => {
                // Keep the typed text until the previous reply has landed.
                if s.chat.pending().is_none() {
                    let text = s.input.take();
                    if s.chat.submit(&text) {
                        s.transcript.follow();
                    }
                }
            }

            AppEvent::Clear => {
                s.chat.clear();
                s.transcript.follow();
            }

            AppEvent::Nav(Direction::Up | Direction::Down)
            | AppEvent::ScrollUp
            | AppEvent::ScrollDown => s.transcript.handle(&event),

            other => s.input.handle(&other),
        }
    }
}

/// True when keys should be typed rather than treated as shortcuts.
fn is_insert_mode(s: &AppState) -> bool {
    s.focus == Focus::Command || (s.chat.is_open() && !s.show_help)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if state.chat.is_open() {
        draw_window(frame, state, area);
    } else {
        frame.render_widget(Launcher::new(state.unread, &state.theme), area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
        return;
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

fn draw_window(frame: &mut Frame, state: &AppState, area: Rect) {
    // Vertical: title | transcript | quick questions | input
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let waiting = state.chat.pending().is_some();
    let status = waiting.then_some("replying…");
    let title = state.config.chat.title.as_str();

    frame.render_widget(TitleBar::new(title, status, &state.theme), vert[0]);
    frame.render_widget(
        Transcript::new(
            &state.transcript,
            state.chat.transcript(),
            state.chat.pending(),
            "Conversation",
            &state.theme,
        ),
        vert[1],
    );
    frame.render_widget(
        QuickQuestions::new(state.chat.quick_questions(), waiting, &state.theme),
        vert[2],
    );

    let input = InputBar::new(&state.input, waiting, &state.theme);
    if state.focus == Focus::Chat && !state.show_help {
        let (cx, cy) = input.cursor_position(vert[3]);
        frame.set_cursor_position((cx, cy));
    }
    frame.render_widget(input, vert[3]);
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
