//! Console modal controller.
//!
//! Owns the lifecycle of the demo overlay as an explicit state machine:
//!
//! ```text
//! Closed --open()--> Open(session) --close(reason)--> Closed
//!                      |   ^
//!                      +---+ open() while open: the running session is
//!                            closed with DismissReason::Replaced first
//! ```
//!
//! Every dismissal path (close control, backdrop click, cancel key) goes
//! through [`ConsoleController::close`], which releases the scheduler run, the
//! key listener and the overlay exactly once. Closing an already closed
//! controller does nothing.

mod layout;
mod session;

pub use layout::{ConsoleLayout, HitTarget, LayoutError};
pub use session::{ConsoleSession, SessionPhase};

use crate::listeners::{KeyListeners, ListenerAction};
use crate::scheduler::{self, StepEvent, StepTiming};
use crate::timer::{TimerMessage, TimerSender};
use crossterm::event::KeyCode;
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;

/// Identifier of a console session. Increases with every open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a session was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The close control was activated.
    CloseControl,
    /// The backdrop outside the content box was clicked.
    Backdrop,
    /// The cancel key was pressed.
    CancelKey,
    /// A new session was opened over this one.
    Replaced,
    /// The application is shutting down.
    Shutdown,
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DismissReason::CloseControl => "close-control",
            DismissReason::Backdrop => "backdrop",
            DismissReason::CancelKey => "cancel-key",
            DismissReason::Replaced => "replaced",
            DismissReason::Shutdown => "shutdown",
        };
        write!(f, "{}", s)
    }
}

/// Controller state.
#[derive(Debug, Default)]
pub enum ConsoleState {
    /// No overlay.
    #[default]
    Closed,
    /// One overlay is attached.
    Open(Box<ConsoleSession>),
}

/// Owns the single console overlay.
#[derive(Debug)]
pub struct ConsoleController {
    state: ConsoleState,
    timing: StepTiming,
    next_id: u64,
}

impl ConsoleController {
    /// Creates a closed controller that plays steps with `timing`.
    pub fn new(timing: StepTiming) -> Self {
        Self {
            state: ConsoleState::Closed,
            timing,
            next_id: 0,
        }
    }

    /// Opens a session playing `steps` under `title`.
    ///
    /// Registers the cancel key in `listeners` and starts the scheduler, whose
    /// events arrive on `tx` as [`TimerMessage::Step`]. If a session is already
    /// open it is closed first. Must be called from within a tokio runtime.
    pub fn open(
        &mut self,
        title: impl Into<String>,
        steps: impl Into<Arc<[String]>>,
        listeners: &mut KeyListeners,
        tx: &TimerSender,
    ) -> SessionId {
        if self.is_open() {
            tracing::debug!("console already open, replacing session");
            self.close(DismissReason::Replaced, listeners);
        }

        self.next_id += 1;
        let id = SessionId(self.next_id);
        let title = title.into();
        let steps = steps.into();

        let key_listener = listeners.register(KeyCode::Esc, ListenerAction::DismissConsole(id));
        let scheduler = scheduler::play(
            Arc::clone(&steps),
            self.timing,
            tx.clone(),
            move |event| TimerMessage::Step { session: id, event },
        );

        tracing::info!(session = %id, title = %title, steps = steps.len(), "console opened");

        self.state = ConsoleState::Open(Box::new(ConsoleSession {
            id,
            title,
            steps,
            current_step: None,
            phase: SessionPhase::Running,
            transcript: Default::default(),
            layout: None,
            scheduler,
            key_listener,
        }));
        id
    }

    /// Tears down the open session.
    ///
    /// Cancels the scheduler, deregisters the cancel-key listener and detaches
    /// the overlay. Returns `false` if nothing was open.
    pub fn close(&mut self, reason: DismissReason, listeners: &mut KeyListeners) -> bool {
        let ConsoleState::Open(session) = std::mem::take(&mut self.state) else {
            return false;
        };

        session.scheduler.cancel();
        if !listeners.deregister(session.key_listener) {
            tracing::warn!(session = %session.id, "cancel-key listener was already gone");
        }
        tracing::info!(
            session = %session.id,
            %reason,
            revealed = session.transcript.len(),
            "console closed"
        );
        true
    }

    /// Applies a scheduler event.
    ///
    /// Events for a session other than the open one (cancelled or replaced
    /// before its message was processed) are dropped. Returns `true` if the
    /// event was applied.
    pub fn apply_step(&mut self, session: SessionId, event: &StepEvent) -> bool {
        match &mut self.state {
            ConsoleState::Open(open) if open.id == session => {
                open.apply(event, Instant::now());
                true
            }
            _ => {
                tracing::trace!(session = %session, "dropping stale step event");
                false
            }
        }
    }

    /// Returns `true` if an overlay is attached.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ConsoleState::Open(_))
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&ConsoleSession> {
        match &self.state {
            ConsoleState::Open(session) => Some(session.as_ref()),
            ConsoleState::Closed => None,
        }
    }

    /// Mutable access to the open session, if any.
    pub fn session_mut(&mut self) -> Option<&mut ConsoleSession> {
        match &mut self.state {
            ConsoleState::Open(session) => Some(session.as_mut()),
            ConsoleState::Closed => None,
        }
    }

    /// Records the layout of the last render for hit-testing.
    pub fn set_layout(&mut self, layout: Option<ConsoleLayout>) {
        if let Some(session) = self.session_mut() {
            session.layout = layout;
        }
    }

    /// Hit-tests a pointer position against the last rendered overlay.
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        self.session()
            .and_then(|s| s.layout)
            .map_or(HitTarget::Outside, |layout| layout.hit_test(column, row))
    }
}
