use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending { fire_at: Instant },
}

/// Coalesces bursts of triggers into one deferred action.
///
/// The first trigger schedules the action `delay` later; triggers while it is
/// pending are absorbed. A pending action cannot be cancelled.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Returns true when this call scheduled the action.
    pub fn trigger(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::Pending { .. } => false,
            DebounceState::Idle => {
                self.state = DebounceState::Pending {
                    fire_at: now + self.delay,
                };
                true
            }
        }
    }

    /// Returns true exactly once per scheduled action, when it is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::Pending { fire_at } if now >= fire_at => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending action is due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            DebounceState::Idle => None,
            DebounceState::Pending { fire_at } => Some(fire_at.saturating_duration_since(now)),
        }
    }
}
