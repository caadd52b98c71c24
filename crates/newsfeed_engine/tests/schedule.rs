use std::sync::mpsc;
use std::time::Duration;

use newsfeed_engine::{AutoplayTimer, ScheduledTask, SearchDebouncer};

const WAIT: Duration = Duration::from_secs(2);

#[test]
fn repeating_task_fires_until_cancelled() {
    let (tx, rx) = mpsc::channel();
    let task = ScheduledTask::repeating(Duration::from_millis(5), move || tx.send(()).is_ok());

    for _ in 0..3 {
        rx.recv_timeout(WAIT).expect("tick");
    }
    task.cancel();
    while rx.try_recv().is_ok() {}
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn repeating_task_ends_when_callback_declines() {
    let (tx, rx) = mpsc::channel::<()>();
    drop(rx);
    let task = ScheduledTask::repeating(Duration::from_millis(1), move || tx.send(()).is_ok());
    for _ in 0..200 {
        if task.is_finished() {
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(task.is_finished());
}

#[test]
fn once_task_can_be_cancelled_before_firing() {
    let (tx, rx) = mpsc::channel();
    let task = ScheduledTask::once(Duration::from_secs(5), move || {
        let _ = tx.send(());
    });
    task.cancel();
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn autoplay_timer_keeps_one_live_generation() {
    let (tx, rx) = mpsc::channel();
    let mut timer = AutoplayTimer::new(move |generation| tx.send(generation).is_ok());

    timer.start(1, Duration::from_millis(5));
    assert_eq!(rx.recv_timeout(WAIT), Ok(1));

    timer.start(2, Duration::from_millis(5));
    assert_eq!(timer.live_generation(), Some(2));
    while let Ok(generation) = rx.recv_timeout(WAIT) {
        if generation == 2 {
            break;
        }
    }
    for _ in 0..3 {
        assert_eq!(rx.recv_timeout(WAIT), Ok(2));
    }

    // Stopping a retired generation leaves the live timer alone.
    timer.stop(1);
    assert_eq!(timer.live_generation(), Some(2));

    timer.stop(2);
    assert_eq!(timer.live_generation(), None);
    while rx.try_recv().is_ok() {}
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn debouncer_submits_only_the_settled_query() {
    let (tx, rx) = mpsc::channel();
    let mut debouncer = SearchDebouncer::new(Duration::from_millis(40), move |query| {
        let _ = tx.send(query);
    });

    debouncer.input("m");
    debouncer.input("ma");
    debouncer.input("mars");
    assert!(debouncer.is_pending());

    assert_eq!(rx.recv_timeout(WAIT).as_deref(), Ok("mars"));
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn flush_submits_immediately_and_drops_pending() {
    let (tx, rx) = mpsc::channel();
    let mut debouncer = SearchDebouncer::new(Duration::from_secs(5), move |query| {
        let _ = tx.send(query);
    });

    debouncer.input("spo");
    debouncer.flush("sports");
    assert!(!debouncer.is_pending());
    assert_eq!(rx.try_recv().as_deref(), Ok("sports"));
    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}
