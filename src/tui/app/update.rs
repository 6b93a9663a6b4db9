use super::*;
use crate::timer::TimerMessage;

impl App {
    /// Applies a timer message.
    ///
    /// Step events for a session that is no longer open and toast messages
    /// for toasts already removed are dropped.
    pub(super) fn apply_timer(&mut self, message: TimerMessage) {
        match message {
            TimerMessage::Step { session, event } => {
                self.console.apply_step(session, &event);
            }
            TimerMessage::ToastExit(id) => {
                self.toasts.begin_exit(id);
            }
            TimerMessage::ToastExpired(id) => {
                self.toasts.dismiss(id);
            }
        }
    }

    /// Applies every timer message already queued. Returns how many there were.
    #[cfg(test)]
    pub(crate) fn pump_timers(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(rx) = self.timer_rx.as_mut() {
            while let Ok(message) = rx.try_recv() {
                pending.push(message);
            }
        }
        let count = pending.len();
        for message in pending {
            self.apply_timer(message);
        }
        count
    }
}
