//! Ratatui widgets for the partnerbot TUI.

pub mod command_bar;
pub mod help;
pub mod input_bar;
pub mod launcher;
pub mod quick_questions;
pub mod title_bar;
pub mod transcript;
