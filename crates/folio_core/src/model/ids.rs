//! Identifier and clock sources for newly created records.
//!
//! # Invariants
//! - Ids are stringified Unix epoch milliseconds.
//! - Ids handed out by one generator are strictly increasing, even when the
//!   clock has not advanced between two calls.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current instant in Unix epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock implementation backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Hands out unique record ids and creation timestamps.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator<C: Clock = SystemClock> {
    clock: C,
    last_issued: Option<i64>,
}

impl IdGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> IdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last_issued: None,
        }
    }

    /// Returns the next id, bumping past the previous one on clock stalls.
    pub fn next_id(&mut self) -> String {
        let now = self.clock.now_millis();
        let next = match self.last_issued {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_issued = Some(next);
        next.to_string()
    }

    /// Current instant used for `Lead::timestamp`.
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, IdGenerator};

    struct StuckClock(i64);

    impl Clock for StuckClock {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn ids_stay_unique_when_clock_stalls() {
        let mut ids = IdGenerator::with_clock(StuckClock(1_700_000_000_000));
        assert_eq!(ids.next_id(), "1700000000000");
        assert_eq!(ids.next_id(), "1700000000001");
        assert_eq!(ids.next_id(), "1700000000002");
    }

    #[test]
    fn system_clock_ids_are_numeric() {
        let mut ids = IdGenerator::new();
        let id = ids.next_id();
        assert!(id.parse::<i64>().expect("id should be numeric") > 0);
    }
}
