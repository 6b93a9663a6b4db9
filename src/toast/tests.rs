use super::*;
use crate::timer::TimerReceiver;

/// Applies pending toast messages the way the event loop does.
fn pump(toasts: &mut ToastManager, rx: &mut TimerReceiver) {
    while let Ok(msg) = rx.try_recv() {
        match msg {
            TimerMessage::ToastExit(id) => {
                toasts.begin_exit(id);
            }
            TimerMessage::ToastExpired(id) => {
                toasts.dismiss(id);
            }
            TimerMessage::Step { .. } => {}
        }
    }
}

/// Ids in stack order, top first.
fn stack(toasts: &ToastManager) -> Vec<ToastId> {
    toasts.toasts().iter().map(|t| t.id).collect()
}

#[tokio::test(start_paused = true)]
async fn test_notify_adds_visible_toast() {
    let (tx, _rx) = timer::channel();
    let mut toasts = ToastManager::default();

    let id = toasts.notify("Download started!", Severity::Success, &tx);

    assert_eq!(toasts.len(), 1);
    let toast = &toasts.toasts()[0];
    assert_eq!(toast.id, id);
    assert_eq!(toast.message, "Download started!");
    assert_eq!(toast.severity, Severity::Success);
    assert_eq!(toast.phase, ToastPhase::Visible);
}

#[tokio::test(start_paused = true)]
async fn test_toast_lifecycle_without_interaction() {
    let (tx, mut rx) = timer::channel();
    let mut toasts = ToastManager::default();
    let id = toasts.notify("hello", Severity::Info, &tx);

    tokio::time::sleep(Duration::from_millis(3900)).await;
    pump(&mut toasts, &mut rx);
    assert_eq!(toasts.toasts()[0].phase, ToastPhase::Visible);

    tokio::time::sleep(Duration::from_millis(200)).await; // t = 4100
    pump(&mut toasts, &mut rx);
    assert_eq!(toasts.toasts()[0].phase, ToastPhase::Exiting);
    assert_eq!(stack(&toasts), vec![id]);

    tokio::time::sleep(Duration::from_millis(300)).await; // t = 4400
    pump(&mut toasts, &mut rx);
    assert!(toasts.is_empty(), "toast detaches itself after duration + exit");
}

#[tokio::test(start_paused = true)]
async fn test_custom_timing() {
    let (tx, mut rx) = timer::channel();
    let mut toasts = ToastManager::new(ToastTiming {
        duration: Duration::from_millis(100),
        exit: Duration::from_millis(50),
    });
    toasts.notify("quick", Severity::Warning, &tx);

    tokio::time::sleep(Duration::from_millis(160)).await;
    pump(&mut toasts, &mut rx);
    assert!(toasts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_toasts_stack_by_index() {
    let (tx, mut rx) = timer::channel();
    let mut toasts = ToastManager::default();

    let first = toasts.notify("one", Severity::Info, &tx);
    tokio::time::sleep(Duration::from_millis(1000)).await;
    let second = toasts.notify("two", Severity::Error, &tx);
    let third = toasts.notify("three", Severity::Success, &tx);

    assert_eq!(stack(&toasts), vec![first, second, third]);

    // first expires at 4300; the others move up
    tokio::time::sleep(Duration::from_millis(3500)).await; // t = 4500
    pump(&mut toasts, &mut rx);
    assert_eq!(stack(&toasts), vec![second, third]);
}

#[tokio::test(start_paused = true)]
async fn test_external_removal_is_tolerated() {
    let (tx, mut rx) = timer::channel();
    let mut toasts = ToastManager::default();
    let id = toasts.notify("gone early", Severity::Info, &tx);

    assert!(toasts.dismiss(id));
    assert!(!toasts.dismiss(id), "second removal is a no-op");

    tokio::time::sleep(Duration::from_millis(5000)).await;
    pump(&mut toasts, &mut rx);
    assert!(toasts.is_empty());
    assert!(!toasts.begin_exit(id));
}

#[tokio::test(start_paused = true)]
async fn test_ids_are_unique() {
    let (tx, _rx) = timer::channel();
    let mut toasts = ToastManager::default();
    let a = toasts.notify("a", Severity::Info, &tx);
    let b = toasts.notify("b", Severity::Info, &tx);
    assert_ne!(a, b);
    assert_eq!(b.to_string(), "toast-2");
}

#[test]
fn test_default_timing() {
    let timing = ToastTiming::default();
    assert_eq!(timing.duration, Duration::from_millis(4000));
    assert_eq!(timing.exit, Duration::from_millis(300));
}
