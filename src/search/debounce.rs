//! Keystroke debouncer for search input
//!
//! Holds at most one pending query. Each keystroke replaces the pending text
//! and restarts the delay, so a query is only evaluated once typing pauses.

use std::time::{Duration, Instant};

use crate::core::config::DEFAULT_DEBOUNCE_MS;

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    scheduled_at: Instant,
}

pub struct QueryDebouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Default for QueryDebouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl QueryDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a keystroke, superseding whatever was pending
    pub fn push(&mut self, text: impl Into<String>, now: Instant) {
        if let Some(previous) = &self.pending {
            tracing::trace!(superseded = %previous.text, "debounced query replaced");
        }
        self.pending = Some(Pending {
            text: text.into(),
            scheduled_at: now,
        });
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the delay has elapsed since the last keystroke
    pub fn is_ready(&self, now: Instant) -> bool {
        self.pending
            .as_ref()
            .map(|p| now.saturating_duration_since(p.scheduled_at) >= self.delay)
            .unwrap_or(false)
    }

    /// Time left before the pending query fires (None if nothing pending)
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| {
            let elapsed = now.saturating_duration_since(p.scheduled_at);
            self.delay.saturating_sub(elapsed)
        })
    }

    /// Hand out the pending query once it is due
    pub fn take_ready(&mut self, now: Instant) -> Option<String> {
        if !self.is_ready(now) {
            return None;
        }
        self.pending.take().map(|p| p.text)
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_not_ready_before_delay() {
        let start = Instant::now();
        let mut debouncer = QueryDebouncer::default();
        debouncer.push("om", start);

        assert!(debouncer.has_pending());
        assert!(!debouncer.is_ready(start + ms(299)));
        assert_eq!(debouncer.time_until_ready(start + ms(100)), Some(ms(200)));
        assert_eq!(debouncer.take_ready(start + ms(299)), None);
        assert!(debouncer.has_pending());
    }

    #[test]
    fn test_ready_after_delay() {
        let start = Instant::now();
        let mut debouncer = QueryDebouncer::default();
        debouncer.push("omeg", start);

        assert_eq!(debouncer.take_ready(start + ms(300)), Some("omeg".to_string()));
        assert!(!debouncer.has_pending());
        assert_eq!(debouncer.take_ready(start + ms(900)), None);
    }

    #[test]
    fn test_keystroke_supersedes_pending() {
        let start = Instant::now();
        let mut debouncer = QueryDebouncer::new(ms(300));
        debouncer.push("s", start);
        debouncer.push("se", start + ms(100));
        debouncer.push("sec", start + ms(250));

        // first keystroke's deadline has passed but it was superseded
        assert!(!debouncer.is_ready(start + ms(400)));
        assert_eq!(debouncer.take_ready(start + ms(550)), Some("sec".to_string()));
    }

    #[test]
    fn test_clear() {
        let start = Instant::now();
        let mut debouncer = QueryDebouncer::default();
        debouncer.push("vtam", start);
        debouncer.clear();

        assert!(!debouncer.has_pending());
        assert_eq!(debouncer.time_until_ready(start), None);
        assert!(!debouncer.is_ready(start + ms(1000)));
    }
}
