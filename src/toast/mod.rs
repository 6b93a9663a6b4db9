//! Toast notifications.
//!
//! A toast lives for `duration`, then spends `exit` in the exiting state
//! before it is removed. Both transitions arrive as timer messages from a
//! single task spawned by [`ToastManager::notify`]; the event loop applies
//! them with [`ToastManager::begin_exit`] and [`ToastManager::dismiss`].
//!
//! Active toasts are kept in creation order. A toast's slot in the top-right
//! stack is its index, so removing one closes the gap.

use crate::timer::{self, TimerMessage, TimerSender};
use crate::Severity;
use std::fmt;
use std::time::Duration;

/// How long a toast stays fully visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Length of the exit transition before removal.
pub const DEFAULT_TOAST_EXIT: Duration = Duration::from_millis(300);

/// Identifier of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Shown normally.
    Visible,
    /// In its exit transition; removed when the exit timer fires.
    Exiting,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Toast identifier.
    pub id: ToastId,
    /// Text shown in the toast.
    pub message: String,
    /// Picks the toast's colours.
    pub severity: Severity,
    /// Visible or exiting.
    pub phase: ToastPhase,
}

/// Toast lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Time fully visible.
    pub duration: Duration,
    /// Time in the exiting phase.
    pub exit: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TOAST_DURATION,
            exit: DEFAULT_TOAST_EXIT,
        }
    }
}

/// Owns the active toasts.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
    timing: ToastTiming,
}

impl ToastManager {
    /// Creates an empty manager using `timing` for every toast.
    pub fn new(timing: ToastTiming) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            timing,
        }
    }

    /// Shows `message` and schedules its removal.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        tx: &TimerSender,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let message = message.into();

        tracing::debug!(%id, %severity, message = %message, "toast shown");
        self.toasts.push(Toast {
            id,
            message,
            severity,
            phase: ToastPhase::Visible,
        });

        timer::send_sequence(
            tx,
            [
                (self.timing.duration, TimerMessage::ToastExit(id)),
                (self.timing.exit, TimerMessage::ToastExpired(id)),
            ],
        );
        id
    }

    /// Moves a toast into its exit transition. Returns `false` if the toast
    /// is gone.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Exiting;
                true
            }
            None => false,
        }
    }

    /// Removes a toast. Removing a toast that is already gone does nothing.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        let removed = self.toasts.len() != before;
        if removed {
            tracing::debug!(%id, "toast removed");
        }
        removed
    }

    /// Active toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Number of active toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns `true` if no toast is shown.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests;
