use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use feed_logging::feed_debug;

/// A deferred or recurring callback on its own thread.
///
/// Cancelled by `cancel()`, which also waits for the thread, or by dropping
/// the handle, which only signals it.
pub struct ScheduledTask {
    cancel_tx: Option<mpsc::Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Calls `f` every `interval` until cancelled or until `f` returns false.
    pub fn repeating<F>(interval: Duration, mut f: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        Self::spawn(move |cancel_rx| loop {
            match cancel_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if !f() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        })
    }

    /// Calls `f` once after `delay` unless cancelled first.
    pub fn once<F>(delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn(move |cancel_rx| {
            if let Err(RecvTimeoutError::Timeout) = cancel_rx.recv_timeout(delay) {
                f();
            }
        })
    }

    fn spawn<F>(body: F) -> Self
    where
        F: FnOnce(mpsc::Receiver<()>) + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel();
        let worker = thread::spawn(move || body(cancel_rx));
        Self {
            cancel_tx: Some(cancel_tx),
            worker: Some(worker),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stops the task; `f` is not called again once this returns.
    pub fn cancel(mut self) {
        self.signal();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }

    fn signal(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.signal();
    }
}

type TickSink = Arc<dyn Fn(u64) -> bool + Send + Sync>;

/// Runtime side of carousel autoplay: at most one repeating timer, tagged
/// with the generation the carousel issued for it.
pub struct AutoplayTimer {
    sink: TickSink,
    live: Option<(u64, ScheduledTask)>,
}

impl AutoplayTimer {
    /// `sink` receives the generation on every tick and returns false once
    /// nobody is listening any more.
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(u64) -> bool + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
            live: None,
        }
    }

    /// Starts ticking for `generation`, cancelling whatever was running.
    pub fn start(&mut self, generation: u64, interval: Duration) {
        self.cancel_live();
        let sink = Arc::clone(&self.sink);
        let task = ScheduledTask::repeating(interval, move || sink(generation));
        feed_debug!(
            "Autoplay timer generation {} every {:?}",
            generation,
            interval
        );
        self.live = Some((generation, task));
    }

    /// Stops the timer if it belongs to `generation`.
    pub fn stop(&mut self, generation: u64) {
        if self.live_generation() == Some(generation) {
            self.cancel_live();
        }
    }

    pub fn live_generation(&self) -> Option<u64> {
        self.live.as_ref().map(|(generation, _)| *generation)
    }

    fn cancel_live(&mut self) {
        if let Some((generation, task)) = self.live.take() {
            feed_debug!("Cancelling autoplay timer generation {}", generation);
            task.cancel();
        }
    }
}
