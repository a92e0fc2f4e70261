//! Cooldown tracking for the resend-code affordance.

use std::time::{Duration, Instant};

use crate::style::Cooldown;

/// Tracks when a resend action becomes available again.
///
/// The state starts ready. A successful [`request`](Self::request) arms the
/// configured cooldown; further requests are refused until the deadline
/// passes.
#[derive(Debug, Clone, Default)]
pub struct ResendState {
    deadline: Option<Instant>,
}

impl ResendState {
    /// Creates a state with no pending cooldown.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Whether a resend may fire now.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.deadline.is_none_or(|deadline| Instant::now() >= deadline)
    }

    /// Whole seconds until the resend re-enables, if a cooldown is pending.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u64> {
        let deadline = self.deadline?;
        let now = Instant::now();
        if now >= deadline {
            return None;
        }
        // Round up so the countdown never shows 0 while still disabled
        Some(deadline.duration_since(now).as_secs_f64().ceil() as u64)
    }

    /// Attempts to fire a resend.
    ///
    /// Returns `true` and arms the cooldown when ready; returns `false`
    /// while a previous cooldown is still pending.
    pub fn request(&mut self, cooldown: &Cooldown) -> bool {
        if !self.ready() {
            return false;
        }
        self.deadline = cooldown
            .seconds()
            .map(|seconds| Instant::now() + Duration::from_secs(u64::from(seconds)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_ready() {
        let state = ResendState::new();
        assert!(state.ready());
        assert_eq!(state.remaining_seconds(), None);
    }

    #[test]
    fn test_no_cooldown_stays_ready() {
        let mut state = ResendState::new();
        assert!(state.request(&Cooldown::None));
        assert!(state.ready());
        assert!(state.request(&Cooldown::None));
    }

    #[test]
    fn test_cooldown_blocks_second_request() {
        let mut state = ResendState::new();
        assert!(state.request(&Cooldown::Duration { seconds: 60 }));
        assert!(!state.ready());
        assert!(!state.request(&Cooldown::Duration { seconds: 60 }));
    }

    #[test]
    fn test_remaining_counts_down_from_cooldown() {
        let mut state = ResendState::new();
        state.request(&Cooldown::Duration { seconds: 60 });
        let remaining = state.remaining_seconds().unwrap();
        assert!(remaining > 0 && remaining <= 60);
    }

    #[test]
    fn test_zero_cooldown_is_immediately_ready() {
        let mut state = ResendState::new();
        assert!(state.request(&Cooldown::Duration { seconds: 0 }));
        assert!(state.ready());
        assert_eq!(state.remaining_seconds(), None);
    }
}
