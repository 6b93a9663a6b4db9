//! Console lines and the surfaces they are appended to.

use super::StepEvent;
use std::io::Write;
use std::time::Duration;
use tokio::time::Instant;

/// Text of the terminal entry appended after the last step.
pub const COMPLETION_TEXT: &str = "Demo complete! Press ESC or click outside to close.";

/// Kind of a console line, used to pick its presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A scenario step.
    Step,
    /// The terminal completion entry.
    Completed,
}

/// One entry on a console surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    /// Text without the prompt prefix.
    pub text: String,
    /// Step or completion entry.
    pub kind: LineKind,
    /// How long after `appended_at` the line becomes visible.
    pub reveal_delay: Duration,
    /// When the line was appended to the surface.
    pub appended_at: Instant,
}

impl ConsoleLine {
    /// Builds the line for a scheduler event.
    pub fn from_event(event: &StepEvent, now: Instant) -> Self {
        match event {
            StepEvent::Reveal {
                text, reveal_delay, ..
            } => Self {
                text: text.clone(),
                kind: LineKind::Step,
                reveal_delay: *reveal_delay,
                appended_at: now,
            },
            StepEvent::Completed => Self {
                text: COMPLETION_TEXT.to_string(),
                kind: LineKind::Completed,
                reveal_delay: Duration::ZERO,
                appended_at: now,
            },
        }
    }

    /// The line as shown on a console: `$ <text>`.
    pub fn prompt(&self) -> String {
        format!("$ {}", self.text)
    }

    /// When the line becomes visible.
    pub fn visible_at(&self) -> Instant {
        self.appended_at + self.reveal_delay
    }

    /// Returns `true` if the line is visible at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        now >= self.visible_at()
    }

    /// Returns `true` while the line is still in its fade-in window.
    pub fn is_typing(&self, now: Instant, fade: Duration) -> bool {
        self.is_visible(now) && now < self.visible_at() + fade
    }
}

/// A target that console lines are appended to. Surfaces never remove lines.
pub trait Surface {
    /// Appends one line.
    fn append(&mut self, line: ConsoleLine);
}

/// In-memory surface holding every appended line in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<ConsoleLine>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in append order.
    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Number of lines appended so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines visible at `now`.
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &ConsoleLine> {
        self.lines.iter().filter(move |line| line.is_visible(now))
    }
}

impl Surface for Transcript {
    fn append(&mut self, line: ConsoleLine) {
        self.lines.push(line);
    }
}

/// Surface that writes each line as `$ <text>` to a writer.
///
/// Presentation delays are ignored; lines are written as they arrive.
#[derive(Debug)]
pub struct WriterSurface<W: Write> {
    writer: W,
}

impl<W: Write> WriterSurface<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for WriterSurface<W> {
    fn append(&mut self, line: ConsoleLine) {
        let result = writeln!(self.writer, "{}", line.prompt()).and_then(|()| self.writer.flush());
        if let Err(e) = result {
            tracing::debug!("failed to write console line: {}", e);
        }
    }
}
