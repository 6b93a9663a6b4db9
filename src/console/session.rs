//! A single console session, from open to teardown.

use super::layout::ConsoleLayout;
use super::SessionId;
use crate::listeners::ListenerId;
use crate::scheduler::{ConsoleLine, SchedulerHandle, StepEvent, Surface, Transcript};
use std::sync::Arc;
use tokio::time::Instant;

/// Progress of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Steps are still being revealed.
    Running,
    /// The completion entry has been appended.
    Completed,
}

/// One open console overlay.
///
/// Owns every resource the overlay needs: the scheduler run, the cancel-key
/// listener id and the transcript. The controller releases them all in one
/// teardown.
#[derive(Debug)]
pub struct ConsoleSession {
    /// Session identifier.
    pub id: SessionId,
    /// Title shown in the header.
    pub title: String,
    /// Steps being played.
    pub steps: Arc<[String]>,
    /// Index of the last revealed step; `None` until the first reveal.
    pub current_step: Option<usize>,
    /// Running or completed.
    pub phase: SessionPhase,
    /// Lines revealed so far.
    pub transcript: Transcript,
    /// Layout from the last render, used for hit-testing.
    pub layout: Option<ConsoleLayout>,
    pub(super) scheduler: SchedulerHandle,
    pub(super) key_listener: ListenerId,
}

impl ConsoleSession {
    /// Header text.
    pub fn heading(&self) -> String {
        format!("Demo: {}", self.title)
    }

    /// Id of the registered cancel-key listener.
    pub fn key_listener(&self) -> ListenerId {
        self.key_listener
    }

    /// Returns `true` once the completion entry has been appended.
    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// Applies one scheduler event to this session.
    pub(super) fn apply(&mut self, event: &StepEvent, now: Instant) {
        if self.is_completed() {
            return;
        }
        match event {
            StepEvent::Reveal { index, .. } => {
                self.current_step = Some(*index);
            }
            StepEvent::Completed => {
                self.phase = SessionPhase::Completed;
            }
        }
        self.transcript.append(ConsoleLine::from_event(event, now));
    }
}
