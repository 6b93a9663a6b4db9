//! Event handling for the TUI.
//!
//! Merges crossterm input, timer messages and a periodic tick into one
//! stream of [`Event`]s, and maps key presses to [`Action`]s.

use crate::console::{DismissReason, SessionId};
use crate::listeners::ListenerAction;
use crate::timer::{TimerMessage, TimerReceiver};
use crate::tui::app::App;
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers, MouseEvent,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// A timer fired.
    Timer(TimerMessage),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input and timers with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event: terminal input, a timer message or a tick.
    pub async fn next(
        &self,
        reader: &mut EventStream,
        timers: &mut TimerReceiver,
    ) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => return Ok(Event::Mouse(mouse)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                Some(message) = timers.recv() => {
                    return Ok(Event::Timer(message));
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Open the console for the scenario at the given index.
    OpenScenario(usize),
    /// Pretend to start a download.
    Download,
    /// Dismiss the given console session.
    DismissConsole {
        /// Session the trigger was bound to.
        session: SessionId,
        /// Which trigger fired.
        reason: DismissReason,
    },
}

/// Handles a key event by dispatching to the appropriate app method or action.
///
/// Registered key listeners see the key before the page does. While the
/// console is open, keys no listener claims are swallowed.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: quit always works
    if should_quit(key) {
        return Action::Quit;
    }

    if let Some(action) = app.listeners.dispatch(&key) {
        return match action {
            ListenerAction::DismissConsole(session) => Action::DismissConsole {
                session,
                reason: DismissReason::CancelKey,
            },
        };
    }

    if app.console.is_open() {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
            Action::None
        }
        KeyCode::Enter => app
            .selected_index
            .map_or(Action::None, Action::OpenScenario),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as u8 - b'1') as usize;
            if index < app.scenarios.len() {
                Action::OpenScenario(index)
            } else {
                Action::None
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') => Action::Download,
        _ => Action::None,
    }
}

/// Returns true if the key event should trigger application quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')))
}
