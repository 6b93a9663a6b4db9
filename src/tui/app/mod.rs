//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! The loop is the only owner of console, toast and listener state; timer
//! tasks reach it through the timer channel.

use crate::config::{Config, ConfigError};
use crate::console::{ConsoleController, DismissReason, HitTarget};
use crate::listeners::KeyListeners;
use crate::timer::{self, TimerReceiver, TimerSender};
use crate::toast::ToastManager;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render;
use crate::tui::views::page::PageAreas;
use crate::{Scenario, Severity};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, EventStream, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

mod update;

/// Message shown when the download button is used.
pub const DOWNLOAD_MESSAGE: &str = "Download started! Check your Downloads folder.";

/// Core application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Count of ticks processed (useful for testing/diagnostics).
    pub tick_count: u64,
    /// Scenarios listed on the page.
    pub scenarios: Vec<Scenario>,
    /// Currently selected scenario index.
    pub selected_index: Option<usize>,
    /// The console overlay.
    pub console: ConsoleController,
    /// Active toasts.
    pub toasts: ToastManager,
    /// Global key listeners.
    pub listeners: KeyListeners,
    /// Typing-style window for new console lines.
    pub line_fade: Duration,
    /// Redraw interval while idle.
    pub tick_rate: Duration,
    /// Page rectangles from the last render, for click mapping.
    pub page_areas: Option<PageAreas>,
    timer_tx: TimerSender,
    timer_rx: Option<TimerReceiver>,
}

impl App {
    /// Creates an App from a loaded configuration.
    ///
    /// Fails only if a duration in `config` does not parse.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let (timer_tx, timer_rx) = timer::channel();
        let scenarios = config.scenarios.clone();
        let selected_index = if scenarios.is_empty() { None } else { Some(0) };
        Ok(Self {
            should_quit: false,
            tick_count: 0,
            scenarios,
            selected_index,
            console: ConsoleController::new(config.timing.step_timing()?),
            toasts: ToastManager::new(config.timing.toast_timing()?),
            listeners: KeyListeners::new(),
            line_fade: config.timing.line_fade()?,
            tick_rate: config.tui.tick_rate()?,
            page_areas: None,
            timer_tx,
            timer_rx: Some(timer_rx),
        })
    }

    /// Moves the selection down by one, clamped to the last scenario.
    pub fn select_next(&mut self) {
        if self.scenarios.is_empty() {
            return;
        }
        let last = self.scenarios.len() - 1;
        self.selected_index = Some(self.selected_index.map_or(0, |i| (i + 1).min(last)));
    }

    /// Moves the selection up by one, clamped to the first scenario.
    pub fn select_previous(&mut self) {
        if self.scenarios.is_empty() {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Carries out an action. Must be called from within a tokio runtime.
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => {
                self.should_quit = true;
                self.console.close(DismissReason::Shutdown, &mut self.listeners);
            }
            Action::OpenScenario(index) => self.open_scenario(index),
            Action::Download => {
                self.toasts
                    .notify(DOWNLOAD_MESSAGE, Severity::Success, &self.timer_tx);
            }
            Action::DismissConsole { session, reason } => {
                if self.console.session().map(|s| s.id) == Some(session) {
                    self.console.close(reason, &mut self.listeners);
                } else {
                    tracing::debug!(%session, %reason, "dismiss for a session that is not open");
                }
            }
        }
    }

    fn open_scenario(&mut self, index: usize) {
        let Some(scenario) = self.scenarios.get(index) else {
            tracing::warn!("no scenario at index {}", index);
            return;
        };
        self.selected_index = Some(index);
        self.console.open(
            scenario.title.clone(),
            scenario.steps.clone(),
            &mut self.listeners,
            &self.timer_tx,
        );
    }

    /// Handles a mouse event and returns the appropriate action.
    ///
    /// While the console is open, clicks on the close control or the
    /// backdrop dismiss it and clicks inside the content do nothing. On the
    /// page, clicking a scenario opens it and the scroll wheel moves the
    /// selection.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        if let Some(session) = self.console.session().map(|s| s.id) {
            if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                return Action::None;
            }
            let reason = match self.console.hit_test(mouse.column, mouse.row) {
                HitTarget::CloseControl => DismissReason::CloseControl,
                HitTarget::Backdrop => DismissReason::Backdrop,
                HitTarget::Content | HitTarget::Outside => return Action::None,
            };
            return Action::DismissConsole { session, reason };
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(areas) = self.page_areas else {
                    return Action::None;
                };
                if contains(areas.download_button, mouse.column, mouse.row) {
                    return Action::Download;
                }
                match self.clicked_scenario(areas.list_inner, mouse.column, mouse.row) {
                    Some(index) => Action::OpenScenario(index),
                    None => Action::None,
                }
            }
            MouseEventKind::ScrollDown => {
                self.select_next();
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.select_previous();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Maps a click to a scenario row.
    fn clicked_scenario(&self, list: Rect, column: u16, row: u16) -> Option<usize> {
        if !contains(list, column, row) {
            return None;
        }
        let index = (row - list.y) as usize;
        (index < self.scenarios.len()).then_some(index)
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let Some(mut timers) = self.timer_rx.take() else {
            return Err(io::Error::other("event loop is already running"));
        };
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();
        tracing::info!(scenarios = self.scenarios.len(), "tui started");

        while !self.should_quit {
            terminal.draw(|frame| render(frame, self))?;

            match event_handler.next(&mut reader, &mut timers).await? {
                Event::Key(key) => {
                    let action = handle_key_event(self, key);
                    self.perform(action);
                }
                Event::Mouse(mouse) => {
                    let action = self.handle_mouse_event(mouse);
                    self.perform(action);
                }
                Event::Timer(message) => self.apply_timer(message),
                Event::Tick => self.tick_count += 1,
                Event::Resize(_, _) => {}
            }
        }

        tracing::info!("tui stopped");
        Ok(())
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;
