//! One-shot timer that returns the engine to its initial state after an
//! error has been shown for a while.
//!
//! The timer does not read a clock. Whoever drives the engine reports how
//! much time has passed through [`RecoveryTimer::advance`], which keeps the
//! engine synchronous and lets tests simulate time exactly.

use std::time::Duration;

/// A cancellable, re-armable one-shot countdown.
///
/// At most one countdown is pending: arming while armed replaces the old
/// deadline instead of queueing a second one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryTimer {
    remaining: Option<Duration>,
}

impl RecoveryTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a countdown of `delay`. Returns `true` if a pending countdown
    /// was replaced.
    pub fn arm(
        &mut self,
        delay: Duration,
    ) -> bool {
        self.remaining.replace(delay).is_some()
    }

    /// Drops any pending countdown. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    /// Time left before the countdown fires.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Moves the countdown forward by `elapsed`.
    ///
    /// Returns `true` exactly once, on the call that reaches the deadline;
    /// the timer is disarmed afterwards.
    pub fn advance(
        &mut self,
        elapsed: Duration,
    ) -> bool {
        match self.remaining {
            Some(remaining) if elapsed >= remaining => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - elapsed);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn new_timer_is_idle() {
        let mut timer = RecoveryTimer::new();

        assert_eq!(timer.remaining(), None);
        assert!(!timer.advance(Duration::from_secs(60)));
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = RecoveryTimer::new();
        timer.arm(DELAY);

        assert!(!timer.advance(Duration::from_millis(1999)));
        assert_eq!(timer.remaining(), Some(Duration::from_millis(1)));
        assert!(timer.advance(Duration::from_millis(1)));
        assert_eq!(timer.remaining(), None);
        assert!(!timer.advance(DELAY));
    }

    #[test]
    fn fires_when_time_overshoots() {
        let mut timer = RecoveryTimer::new();
        timer.arm(DELAY);

        assert!(timer.advance(Duration::from_secs(10)));
    }

    #[test]
    fn rearming_replaces_pending_countdown() {
        let mut timer = RecoveryTimer::new();

        assert!(!timer.arm(DELAY));
        timer.advance(Duration::from_millis(1500));
        assert!(timer.arm(DELAY));

        assert!(!timer.advance(Duration::from_millis(1500)));
        assert!(timer.advance(Duration::from_millis(500)));
        assert!(!timer.advance(DELAY));
    }

    #[test]
    fn cancel_disarms() {
        let mut timer = RecoveryTimer::new();
        timer.arm(DELAY);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.advance(DELAY));
    }
}
