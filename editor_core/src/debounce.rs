//! Debounced task scheduling.

use std::time::{Duration, Instant};

/// Timer-reset debouncer.
///
/// Scheduling while a deadline is pending supersedes it, so rapid repeated
/// changes coalesce into a single firing once a full quiet period has
/// elapsed. The host loop pumps [`fire`](Debouncer::fire) with explicit
/// instants; nothing here spawns timers or threads.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Change the quiet period. A pending deadline keeps its old instant.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Arm (or re-arm) the deadline at `now + delay`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True once the deadline has passed; disarms on firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_fires_only_after_the_quiet_period() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);

        debounce.schedule(start);
        assert!(!debounce.fire(start));
        assert!(!debounce.fire(start + DELAY / 2));
        assert!(debounce.fire(start + DELAY));
        // Disarmed after firing.
        assert!(!debounce.fire(start + DELAY * 2));
    }

    #[test]
    fn test_rescheduling_supersedes_the_pending_deadline() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);

        debounce.schedule(start);
        debounce.schedule(start + DELAY / 2);

        assert!(!debounce.fire(start + DELAY));
        assert!(debounce.fire(start + DELAY / 2 + DELAY));
    }

    #[test]
    fn test_cancel_disarms() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(DELAY);

        debounce.schedule(start);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert!(!debounce.fire(start + DELAY));
    }

    #[test]
    fn test_unscheduled_never_fires() {
        let mut debounce = Debouncer::new(DELAY);
        assert!(!debounce.fire(Instant::now()));
    }
}
