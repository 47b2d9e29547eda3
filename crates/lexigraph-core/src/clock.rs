//! Global clock for the Lexigraph simulation.
//!
//! The clock is the single source of truth for game time. It starts at 0,
//! advances by exactly one per agent action (and once after initial
//! targets are assigned), and never moves backwards. `time_max` is the
//! first time at which no action may run.

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,
}

/// Global tick counter with an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    /// Current time.
    time: u64,
    /// First time at which actions are refused.
    time_max: u64,
}

impl GameClock {
    /// Create a clock at time 0.
    pub const fn new(time_max: u64) -> Self {
        Self { time: 0, time_max }
    }

    /// Advance the clock by one tick. Returns the new time.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] if the counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.time = self.time.checked_add(1).ok_or(ClockError::TickOverflow)?;
        Ok(self.time)
    }

    /// Current time.
    pub const fn time(&self) -> u64 {
        self.time
    }

    /// The bound.
    pub const fn time_max(&self) -> u64 {
        self.time_max
    }

    /// Whether the bound has been reached.
    pub const fn is_exhausted(&self) -> bool {
        self.time >= self.time_max
    }

    /// Rewind to time 0, keeping the bound.
    pub const fn reset(&mut self) {
        self.time = 0;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = GameClock::new(400);
        assert_eq!(clock.time(), 0);
        assert_eq!(clock.time_max(), 400);
    }

    #[test]
    fn clock_advances_by_one() {
        let mut clock = GameClock::new(3);
        assert_eq!(clock.advance().unwrap(), 1);
        assert_eq!(clock.advance().unwrap(), 2);
        assert!(!clock.is_exhausted());
        assert_eq!(clock.advance().unwrap(), 3);
        assert!(clock.is_exhausted());
    }

    #[test]
    fn zero_bound_is_exhausted_immediately() {
        assert!(GameClock::new(0).is_exhausted());
    }

    #[test]
    fn reset_rewinds_time_only() {
        let mut clock = GameClock::new(5);
        clock.advance().unwrap();
        clock.reset();
        assert_eq!(clock.time(), 0);
        assert_eq!(clock.time_max(), 5);
    }
}
