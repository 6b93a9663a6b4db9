use super::*;
use tokio::time::sleep;

fn steps(items: &[&str]) -> Arc<[String]> {
    items.iter().map(|s| s.to_string()).collect::<Vec<_>>().into()
}

/// Collects every event with its offset from `start`, until completion.
async fn collect_timed(
    rx: &mut mpsc::Receiver<StepEvent>,
    start: Instant,
) -> Vec<(u128, StepEvent)> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        let done = event.is_completed();
        events.push((start.elapsed().as_millis(), event));
        if done {
            break;
        }
    }
    events
}

// --- StepPlan ---

#[test]
fn test_plan_offsets_three_steps() {
    let plan = StepPlan::new(3, StepTiming::default());
    assert_eq!(
        plan.offsets(),
        vec![
            Duration::from_millis(500),
            Duration::from_millis(1300),
            Duration::from_millis(2100),
            Duration::from_millis(3100),
        ]
    );
}

#[test]
fn test_plan_empty_has_only_completion() {
    let plan = StepPlan::new(0, StepTiming::default());
    assert!(plan.is_empty());
    assert_eq!(plan.offsets(), vec![Duration::from_millis(1500)]);
}

#[test]
fn test_plan_single_step() {
    let plan = StepPlan::new(1, StepTiming::default());
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.reveal_at(0), Duration::from_millis(500));
    assert_eq!(plan.completion_at(), Duration::from_millis(1500));
}

#[test]
fn test_plan_offsets_strictly_increase() {
    let plan = StepPlan::new(9, StepTiming::default());
    let offsets = plan.offsets();
    assert_eq!(offsets.len(), 10);
    for pair in offsets.windows(2) {
        assert!(pair[0] < pair[1], "offsets must increase: {:?}", pair);
    }
}

#[test]
fn test_plan_instant_timing_is_all_zero() {
    let plan = StepPlan::new(4, StepTiming::instant());
    assert!(plan.offsets().iter().all(|d| d.is_zero()));
}

#[test]
fn test_plan_saturates_on_huge_timing() {
    let timing = StepTiming {
        step_interval: Duration::MAX,
        ..StepTiming::default()
    };
    let plan = StepPlan::new(3, timing);
    assert_eq!(plan.reveal_at(0), Duration::from_millis(500));
    assert_eq!(plan.reveal_at(2), Duration::MAX);
    assert_eq!(plan.completion_at(), Duration::MAX);
}

#[test]
fn test_reveal_delay_grows_with_index() {
    let timing = StepTiming::default();
    assert_eq!(timing.reveal_delay(0), Duration::ZERO);
    assert_eq!(timing.reveal_delay(1), Duration::from_millis(100));
    assert_eq!(timing.reveal_delay(5), Duration::from_millis(500));
}

// --- play ---

#[tokio::test(start_paused = true)]
async fn test_play_reveals_in_order_then_completes() {
    let (tx, mut rx) = mpsc::channel(16);
    let start = Instant::now();
    let _handle = play(steps(&["step1", "step2", "step3"]), StepTiming::default(), tx, |e| e);

    let events = collect_timed(&mut rx, start).await;
    let times: Vec<u128> = events.iter().map(|(t, _)| *t).collect();
    assert_eq!(times, vec![500, 1300, 2100, 3100]);

    for (i, (_, event)) in events.iter().take(3).enumerate() {
        match event {
            StepEvent::Reveal { index, text, .. } => {
                assert_eq!(*index, i);
                assert_eq!(text, &format!("step{}", i + 1));
            }
            other => panic!("expected reveal, got {:?}", other),
        }
    }
    assert_eq!(events[3].1, StepEvent::Completed);
}

#[tokio::test(start_paused = true)]
async fn test_play_emits_exactly_one_completion() {
    let (tx, mut rx) = mpsc::channel(16);
    let handle = play(steps(&["a", "b"]), StepTiming::default(), tx, |e| e);

    let events = collect_timed(&mut rx, Instant::now()).await;
    assert_eq!(events.iter().filter(|(_, e)| e.is_completed()).count(), 1);

    // Task ends after completion; the channel closes with nothing else in it.
    assert!(rx.recv().await.is_none());
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_play_empty_steps_emits_only_completion() {
    let (tx, mut rx) = mpsc::channel(16);
    let start = Instant::now();
    let _handle = play(steps(&[]), StepTiming::default(), tx, |e| e);

    let events = collect_timed(&mut rx, start).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], (1500, StepEvent::Completed));
}

#[tokio::test(start_paused = true)]
async fn test_play_tags_reveal_delays() {
    let (tx, mut rx) = mpsc::channel(16);
    let _handle = play(steps(&["a", "b", "c"]), StepTiming::default(), tx, |e| e);

    let events = collect_timed(&mut rx, Instant::now()).await;
    let delays: Vec<Duration> = events
        .iter()
        .filter_map(|(_, e)| match e {
            StepEvent::Reveal { reveal_delay, .. } => Some(*reveal_delay),
            StepEvent::Completed => None,
        })
        .collect();
    assert_eq!(
        delays,
        vec![
            Duration::ZERO,
            Duration::from_millis(100),
            Duration::from_millis(200)
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_cancel_before_completion_stops_all_events() {
    let (tx, mut rx) = mpsc::channel(16);
    let handle = play(steps(&["step1", "step2", "step3"]), StepTiming::default(), tx, |e| e);

    sleep(Duration::from_millis(1000)).await;
    handle.cancel();

    let first = rx.try_recv().expect("first reveal fired at 500");
    assert!(matches!(first, StepEvent::Reveal { index: 0, .. }));

    sleep(Duration::from_millis(5000)).await;
    // Aborting drops the sender, so the channel reports closed with no events.
    assert!(rx.recv().await.is_none(), "no events after cancel");
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_completion_is_noop() {
    let (tx, mut rx) = mpsc::channel(16);
    let handle = play(steps(&["only"]), StepTiming::default(), tx, |e| e);

    let events = collect_timed(&mut rx, Instant::now()).await;
    assert_eq!(events.len(), 2);

    handle.cancel();
    handle.cancel();
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_drop_handle_cancels_run() {
    let (tx, mut rx) = mpsc::channel(16);
    let handle = play(steps(&["a", "b"]), StepTiming::default(), tx, |e| e);
    drop(handle);

    sleep(Duration::from_millis(5000)).await;
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_play_stops_when_receiver_dropped() {
    let (tx, rx) = mpsc::channel(16);
    let handle = play(steps(&["a", "b", "c"]), StepTiming::default(), tx, |e| e);
    drop(rx);

    sleep(Duration::from_millis(600)).await;
    assert!(handle.is_finished(), "run should end once the receiver is gone");
}

#[tokio::test(start_paused = true)]
async fn test_play_stops_at_unreachable_deadline() {
    let timing = StepTiming {
        step_interval: Duration::MAX,
        ..StepTiming::default()
    };
    let (tx, mut rx) = mpsc::channel(16);
    let handle = play(steps(&["first", "never"]), timing, tx, |e| e);

    let first = rx.recv().await.expect("first reveal is in range");
    assert!(matches!(first, StepEvent::Reveal { index: 0, .. }));
    assert!(rx.recv().await.is_none(), "run ends instead of panicking");
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_play_wraps_events() {
    let (tx, mut rx) = mpsc::channel(16);
    let _handle = play(steps(&["x"]), StepTiming::default(), tx, |e| (42u8, e));

    let (tag, event) = rx.recv().await.expect("reveal");
    assert_eq!(tag, 42);
    assert!(matches!(event, StepEvent::Reveal { index: 0, .. }));
}

// --- run_to_surface ---

#[tokio::test(start_paused = true)]
async fn test_run_to_surface_fills_transcript() {
    let mut transcript = Transcript::new();
    run_to_surface(steps(&["one", "two"]), StepTiming::default(), &mut transcript).await;

    let texts: Vec<&str> = transcript.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", COMPLETION_TEXT]);
    assert_eq!(transcript.lines()[2].kind, LineKind::Completed);
}

#[tokio::test]
async fn test_run_to_surface_instant_writes_prompt_lines() {
    let mut surface = WriterSurface::new(Vec::new());
    run_to_surface(steps(&["alpha", "beta"]), StepTiming::instant(), &mut surface).await;

    let output = String::from_utf8(surface.into_inner()).expect("utf8 output");
    assert_eq!(
        output,
        format!("$ alpha\n$ beta\n$ {}\n", COMPLETION_TEXT)
    );
}

// --- ConsoleLine ---

#[tokio::test(start_paused = true)]
async fn test_console_line_visibility_respects_reveal_delay() {
    let now = Instant::now();
    let event = StepEvent::Reveal {
        index: 3,
        text: "hello".to_string(),
        reveal_delay: Duration::from_millis(300),
    };
    let line = ConsoleLine::from_event(&event, now);
    assert_eq!(line.prompt(), "$ hello");
    assert!(!line.is_visible(now));
    assert!(line.is_visible(now + Duration::from_millis(300)));

    let fade = Duration::from_millis(500);
    assert!(line.is_typing(now + Duration::from_millis(400), fade));
    assert!(!line.is_typing(now + Duration::from_millis(900), fade));
}

#[tokio::test(start_paused = true)]
async fn test_transcript_visible_filters_pending_lines() {
    let now = Instant::now();
    let mut transcript = Transcript::new();
    transcript.append(ConsoleLine::from_event(
        &StepEvent::Reveal {
            index: 0,
            text: "now".to_string(),
            reveal_delay: Duration::ZERO,
        },
        now,
    ));
    transcript.append(ConsoleLine::from_event(
        &StepEvent::Reveal {
            index: 1,
            text: "later".to_string(),
            reveal_delay: Duration::from_millis(100),
        },
        now,
    ));
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.visible(now).count(), 1);
    assert_eq!(transcript.visible(now + Duration::from_millis(100)).count(), 2);
}
