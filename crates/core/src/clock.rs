//! Wall-clock access for relative shortcuts.
//!
//! Resolvers never read the system time directly; the ambient "now" comes in
//! through [`Clock`] so callers (and tests) can pin it to a known instant.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the ambient "now" used to anchor relative shortcuts like `t`,
/// `.`, or a weekday name.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current local time of day.
    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed instant, for deterministic expansion.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
