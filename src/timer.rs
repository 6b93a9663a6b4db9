//! Timer messages.
//!
//! Timer tasks run on the tokio runtime but never touch UI state. Every timer
//! reports back by sending a [`TimerMessage`] into the channel owned by the
//! TUI event loop, which applies messages one at a time.

use crate::console::SessionId;
use crate::scheduler::StepEvent;
use crate::toast::ToastId;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Capacity of the timer message channel.
///
/// Timers fire at most a few times per second, so this only needs to absorb
/// bursts while the event loop is busy rendering.
pub const TIMER_CHANNEL_CAPACITY: usize = 64;

/// A message produced by a timer task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerMessage {
    /// A step scheduler event for the given console session.
    Step {
        /// Session the scheduler was started for.
        session: SessionId,
        /// The scheduled event.
        event: StepEvent,
    },
    /// A toast reached the end of its display duration and starts exiting.
    ToastExit(ToastId),
    /// A toast finished its exit transition and should be removed.
    ToastExpired(ToastId),
}

/// Sending half of the timer channel.
pub type TimerSender = mpsc::Sender<TimerMessage>;

/// Receiving half of the timer channel.
pub type TimerReceiver = mpsc::Receiver<TimerMessage>;

/// Creates the timer message channel.
pub fn channel() -> (TimerSender, TimerReceiver) {
    mpsc::channel(TIMER_CHANNEL_CAPACITY)
}

/// Sends `messages` in order from a single task, each after its delay.
///
/// Delays are relative to the previous message, so `[(a, m1), (b, m2)]`
/// sends `m1` at `a` and `m2` at `a + b`. If the receiver has been dropped
/// the remaining messages are discarded.
pub fn send_sequence<I>(tx: &TimerSender, messages: I) -> JoinHandle<()>
where
    I: IntoIterator<Item = (Duration, TimerMessage)>,
    I::IntoIter: Send + 'static,
{
    let tx = tx.clone();
    let messages = messages.into_iter();
    tokio::spawn(async move {
        for (delay, message) in messages {
            tokio::time::sleep(delay).await;
            if tx.send(message).await.is_err() {
                tracing::trace!("timer fired after receiver closed");
                return;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn send_sequence_delivers_each_after_its_delay() {
        let (tx, mut rx) = channel();
        let start = Instant::now();
        send_sequence(
            &tx,
            [
                (Duration::from_millis(300), TimerMessage::ToastExit(ToastId(7))),
                (Duration::from_millis(200), TimerMessage::ToastExpired(ToastId(7))),
            ],
        );

        let msg = rx.recv().await.expect("first timer should fire");
        assert_eq!(msg, TimerMessage::ToastExit(ToastId(7)));
        assert_eq!(start.elapsed().as_millis(), 300);

        let msg = rx.recv().await.expect("second timer should fire");
        assert_eq!(msg, TimerMessage::ToastExpired(ToastId(7)));
        assert_eq!(start.elapsed().as_millis(), 500);

        drop(tx);
        assert!(rx.recv().await.is_none(), "each message is sent once");
    }

    #[tokio::test(start_paused = true)]
    async fn send_sequence_with_closed_receiver_finishes_quietly() {
        let (tx, rx) = channel();
        drop(rx);
        let handle = send_sequence(
            &tx,
            [(Duration::from_millis(10), TimerMessage::ToastExpired(ToastId(1)))],
        );
        handle.await.expect("timer task should not panic");
    }
}
