//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] while the chat window is
//! closed and [`to_app_event_insert`] while it is open (or while the command
//! bar is active), then match on the returned [`AppEvent`].
//!
//! # Keybindings (window closed)
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `c`, `Enter`            | `ToggleChat`               |
//! | `F1`..`F9`              | `QuickQuestion(0..8)`      |
//! | printable char          | `Char(c)`                  |
//! | `Esc`                   | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode (window open)
//!
//! Every printable character is forwarded as `Char`, including `q` and `c`.
//! The special bindings are:
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `Ctrl+c`                | `Quit`                     |
//! | `Esc`                   | `Escape` (close window)    |
//! | `Enter`                 | `Enter` (send)             |
//! | `Backspace`             | `Backspace`                |
//! | `←` / `→`               | `Nav(Left/Right)` (cursor) |
//! | `↑` / `↓`               | `Nav(Up/Down)` (scroll)    |
//! | `PageUp` / `PageDown`   | `ScrollUp` / `ScrollDown`  |
//! | `F1`..`F9`              | `QuickQuestion(0..8)`      |
//! | `Ctrl+l`                | `Clear`                    |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Open or close the chat window.
    ToggleChat,
    /// Ask one of the configured quick questions (zero-based).
    QuickQuestion(usize),
    /// Scroll the transcript up one page.
    ScrollUp,
    /// Scroll the transcript down one page.
    ScrollDown,
    /// Arrow keys: cursor movement or line scrolling depending on direction.
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Send the message / run the command.
    Enter,
    /// Clear the conversation.
    Clear,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (chat window, help popup, command bar).
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] while the window is closed.
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input ("insert") mode.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn quick_index(n: u8) -> Option<AppEvent> {
    (1..=9).contains(&n).then(|| AppEvent::QuickQuestion(usize::from(n - 1)))
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Char('c') if key.modifiers == Mod::NONE => Some(AppEvent::ToggleChat),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::ToggleChat),

        F(n) => quick_index(n),

        // `?` and `:` arrive as Char; the app shell decides what they open.
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('l') if key.modifiers == Mod::CONTROL => Some(AppEvent::Clear),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),
        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),

        F(n) => quick_index(n),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
