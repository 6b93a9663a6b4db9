//! Step scheduler.
//!
//! Plays an ordered list of lines into a surface with fixed delays:
//!
//! ```text
//! t = initial_delay                               reveal line 0
//! t = initial_delay + i * step_interval           reveal line i
//! t = last reveal + completion_delay              completion entry
//! ```
//!
//! An empty list produces only the completion entry, at
//! `initial_delay + completion_delay`.
//!
//! The schedule itself is plain data ([`StepPlan`]); [`play`] runs it on a
//! tokio task and reports each event through a channel. The task never touches
//! the surface directly, so whoever owns the receiving end decides where the
//! lines go.

mod surface;

pub use surface::{ConsoleLine, LineKind, Surface, Transcript, WriterSurface, COMPLETION_TEXT};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Delay before the first line is revealed.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(500);

/// Delay between consecutive line reveals.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(800);

/// Delay between the last reveal and the completion entry.
pub const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(1000);

/// Presentation delay added per line index.
pub const DEFAULT_REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Delays used by a scheduler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    /// Delay before the first reveal.
    pub initial_delay: Duration,
    /// Delay between reveals.
    pub step_interval: Duration,
    /// Delay between the last reveal and completion.
    pub completion_delay: Duration,
    /// Per-index presentation delay tagged on each revealed line.
    pub reveal_stagger: Duration,
}

impl Default for StepTiming {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            step_interval: DEFAULT_STEP_INTERVAL,
            completion_delay: DEFAULT_COMPLETION_DELAY,
            reveal_stagger: DEFAULT_REVEAL_STAGGER,
        }
    }
}

impl StepTiming {
    /// Timing with every delay set to zero.
    pub const fn instant() -> Self {
        Self {
            initial_delay: Duration::ZERO,
            step_interval: Duration::ZERO,
            completion_delay: Duration::ZERO,
            reveal_stagger: Duration::ZERO,
        }
    }

    /// Presentation delay for the line at `index`.
    pub fn reveal_delay(&self, index: usize) -> Duration {
        self.reveal_stagger.saturating_mul(index as u32)
    }
}

/// An event emitted by a scheduler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// The line at `index` is revealed.
    Reveal {
        /// Zero-based step index.
        index: usize,
        /// Step text.
        text: String,
        /// Presentation delay for this line.
        reveal_delay: Duration,
    },
    /// All steps have been revealed and the trailing delay has elapsed.
    Completed,
}

impl StepEvent {
    /// Returns `true` for the terminal completion event.
    pub fn is_completed(&self) -> bool {
        matches!(self, StepEvent::Completed)
    }
}

/// The offsets, measured from the start of a run, at which each event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPlan {
    len: usize,
    timing: StepTiming,
}

impl StepPlan {
    /// Plans a run over `len` steps.
    pub fn new(len: usize, timing: StepTiming) -> Self {
        Self { len, timing }
    }

    /// Number of reveal events in the plan.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the plan has no reveal events.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the reveal for step `index`. Saturates at `Duration::MAX`.
    pub fn reveal_at(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.timing
            .initial_delay
            .saturating_add(self.timing.step_interval.saturating_mul(index))
    }

    /// Offset of the completion event.
    pub fn completion_at(&self) -> Duration {
        let base = match self.len.checked_sub(1) {
            Some(last) => self.reveal_at(last),
            None => self.timing.initial_delay,
        };
        base.saturating_add(self.timing.completion_delay)
    }

    /// All event offsets in firing order; the last entry is the completion.
    pub fn offsets(&self) -> Vec<Duration> {
        (0..self.len)
            .map(|i| self.reveal_at(i))
            .chain(std::iter::once(self.completion_at()))
            .collect()
    }
}

/// Handle to a running scheduler.
///
/// Cancelling aborts the timer task, so no further events are sent.
/// Cancelling a finished run is a no-op. Dropping the handle cancels the run.
#[derive(Debug)]
pub struct SchedulerHandle {
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Cancels all pending timers of this run.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Returns `true` once the run has completed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Starts playing `steps`.
///
/// Each event is mapped through `wrap` and sent on `tx`. If the receiver is
/// dropped the run ends early. Must be called from within a tokio runtime.
pub fn play<T, F>(
    steps: Arc<[String]>,
    timing: StepTiming,
    tx: mpsc::Sender<T>,
    wrap: F,
) -> SchedulerHandle
where
    T: Send + 'static,
    F: Fn(StepEvent) -> T + Send + 'static,
{
    let offsets = StepPlan::new(steps.len(), timing).offsets();
    let start = Instant::now();
    tracing::debug!(steps = steps.len(), "scheduler started");

    let task = tokio::spawn(async move {
        for (index, offset) in offsets.into_iter().enumerate() {
            let Some(deadline) = start.checked_add(offset) else {
                tracing::warn!("scheduler deadline out of range at event {}, stopping", index);
                return;
            };
            sleep_until(deadline).await;

            let event = match steps.get(index) {
                Some(text) => StepEvent::Reveal {
                    index,
                    text: text.clone(),
                    reveal_delay: timing.reveal_delay(index),
                },
                None => StepEvent::Completed,
            };
            if tx.send(wrap(event)).await.is_err() {
                tracing::debug!("scheduler receiver closed at event {}", index);
                return;
            }
        }
        tracing::debug!("scheduler completed");
    });

    SchedulerHandle { task }
}

/// Plays `steps` to completion, appending every event to `surface` as it
/// arrives.
///
/// Used by the headless `play` command.
pub async fn run_to_surface<S: Surface>(steps: Arc<[String]>, timing: StepTiming, surface: &mut S) {
    let (tx, mut rx) = mpsc::channel(crate::timer::TIMER_CHANNEL_CAPACITY);
    let _handle = play(steps, timing, tx, |event| event);

    while let Some(event) = rx.recv().await {
        let done = event.is_completed();
        surface.append(ConsoleLine::from_event(&event, Instant::now()));
        if done {
            break;
        }
    }
}

#[cfg(test)]
mod tests;
