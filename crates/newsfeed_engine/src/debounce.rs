use std::sync::Arc;
use std::time::Duration;

use crate::ScheduledTask;

type QuerySink = Arc<dyn Fn(String) + Send + Sync>;

/// Pending search query with a delay timer. Every keystroke replaces the
/// pending query; only a query left alone for `delay` reaches the sink.
pub struct SearchDebouncer {
    delay: Duration,
    sink: QuerySink,
    pending: Option<ScheduledTask>,
}

impl SearchDebouncer {
    pub fn new<F>(delay: Duration, sink: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        Self {
            delay,
            sink: Arc::new(sink),
            pending: None,
        }
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.cancel();
        let sink = Arc::clone(&self.sink);
        let text = text.into();
        self.pending = Some(ScheduledTask::once(self.delay, move || sink(text)));
    }

    /// Submits `text` now, dropping any pending query (Enter key, search button).
    pub fn flush(&mut self, text: impl Into<String>) {
        self.cancel();
        (self.sink)(text.into());
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}
