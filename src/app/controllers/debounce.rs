use std::time::{Duration, Instant};

use crate::app::domain::content::ContentDocument;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces a burst of edits into one history step.
///
/// The first edit of a burst captures the document as it was before the
/// burst; later edits only push the deadline out. The coordinator owns the
/// actual UI timer and calls `poll` when it fires.
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingBurst>,
}

struct PendingBurst {
    before: ContentDocument,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register an edit at `now`. `before` is only kept if this edit starts
    /// a new burst.
    pub fn schedule(&mut self, before: impl FnOnce() -> ContentDocument, now: Instant) {
        let deadline = now + self.delay;
        match self.pending.as_mut() {
            Some(burst) => burst.deadline = deadline,
            None => {
                self.pending = Some(PendingBurst {
                    before: before(),
                    deadline,
                })
            }
        }
    }

    /// Take the pre-burst snapshot if the quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<ContentDocument> {
        let due = self.pending.as_ref().is_some_and(|b| now >= b.deadline);
        if due { self.flush() } else { None }
    }

    /// Take the pre-burst snapshot regardless of the deadline.
    pub fn flush(&mut self) -> Option<ContentDocument> {
        self.pending.take().map(|b| b.before)
    }

    /// Drop the pending burst without recording it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending burst is due, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|b| b.deadline.saturating_duration_since(now))
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titled(title: &str) -> ContentDocument {
        let mut doc = ContentDocument::defaults();
        doc.set_section("hero", json!({ "title": title }));
        doc
    }

    #[test]
    fn test_burst_keeps_first_snapshot() {
        let mut debouncer = Debouncer::default();
        let t0 = Instant::now();
        debouncer.schedule(|| titled("a"), t0);
        debouncer.schedule(|| titled("b"), t0 + Duration::from_millis(40));
        debouncer.schedule(|| titled("c"), t0 + Duration::from_millis(90));

        assert!(debouncer.poll(t0 + Duration::from_millis(500)).is_none());
        let before = debouncer.poll(t0 + Duration::from_millis(590)).unwrap();
        assert_eq!(before, titled("a"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_pushes_deadline() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        debouncer.schedule(ContentDocument::defaults, t0);
        debouncer.schedule(ContentDocument::defaults, t0 + Duration::from_millis(80));
        assert_eq!(
            debouncer.remaining(t0 + Duration::from_millis(100)),
            Some(Duration::from_millis(80))
        );
    }

    #[test]
    fn test_flush_and_cancel() {
        let mut debouncer = Debouncer::default();
        let t0 = Instant::now();
        debouncer.schedule(|| titled("x"), t0);
        assert_eq!(debouncer.flush(), Some(titled("x")));
        assert_eq!(debouncer.flush(), None);

        debouncer.schedule(|| titled("y"), t0);
        debouncer.cancel();
        assert!(debouncer.poll(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_poll_without_pending() {
        let mut debouncer = Debouncer::default();
        assert!(debouncer.poll(Instant::now()).is_none());
        assert_eq!(debouncer.remaining(Instant::now()), None);
    }
}
