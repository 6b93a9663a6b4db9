//! Demo Console library
//!
//! This crate provides a scripted "demo console" for the terminal: a modal
//! overlay that plays a scenario's log lines at fixed intervals, and a stack
//! of short-lived toast notifications.
//!
//! # Architecture
//!
//! - [`scheduler`] plays an ordered list of lines with fixed delays.
//! - [`console`] owns the modal session lifecycle and its single teardown.
//! - [`toast`] creates, stacks and expires notifications.
//! - [`tui`] is the single event loop that owns all UI state. Timer tasks
//!   never mutate state directly; they send [`timer::TimerMessage`]s that the
//!   loop applies in order.

use std::fmt;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Modal console session lifecycle.
pub mod console;

/// Global key listener registry.
pub mod listeners;

/// Tracing subscriber setup.
pub mod logging;

/// Timed step playback.
pub mod scheduler;

/// Messages sent from timer tasks to the UI event loop.
pub mod timer;

/// Transient notifications.
pub mod toast;

/// TUI module providing the terminal user interface.
pub mod tui;

/// Scenario data and the built-in scenario set.
mod scenario;
pub use scenario::*;

/// Notification severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Neutral information.
    #[default]
    Info,
    /// A completed action.
    Success,
    /// Something the user should notice.
    Warning,
    /// A failed action.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests;
