//! Shared test utilities for partnerbot integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Nothing here sleeps: chat timing is driven through
//! `ChatSession::tick` with explicit durations.

pub mod assertions;
pub mod fixtures;

pub use fixtures::*;
