//! Time sources for the scheduler
//!
//! Scheduling functions take the current instant as an argument. A `Clock`
//! supplies that instant at the session boundary.

use std::cell::Cell;

use chrono::{DateTime, Days, Duration, Local, TimeZone};

use super::error::{Result, SchedulerError};

pub trait Clock {
    /// Zone whose calendar defines day boundaries
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Tz = C::Tz;

    fn now(&self) -> DateTime<Self::Tz> {
        (**self).now()
    }
}

/// Wall clock in the machine's local zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A settable clock for tests and replays
pub struct FixedClock<Tz: TimeZone> {
    now: Cell<DateTime<Tz>>,
}

impl<Tz: TimeZone> FixedClock<Tz>
where
    Tz::Offset: Copy,
{
    pub fn new(now: DateTime<Tz>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: DateTime<Tz>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move forward by calendar days, keeping local time-of-day.
    /// Leaves the clock untouched when the result is unrepresentable.
    pub fn advance_days(&self, days: u64) -> Result<()> {
        let next = self
            .now
            .get()
            .checked_add_days(Days::new(days))
            .ok_or(SchedulerError::DateOutOfRange)?;
        self.now.set(next);
        Ok(())
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz>
where
    Tz::Offset: Copy,
{
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_fixed_clock_advance() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::hours(2));
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 1, 31, 11, 0, 0).unwrap());

        clock.advance_days(1).unwrap();
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 2, 1, 11, 0, 0).unwrap());
    }

    #[test]
    fn test_fixed_clock_keeps_zone() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let start = tz.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
        let clock = FixedClock::new(start);
        clock.advance_days(2).unwrap();
        assert_eq!(clock.now(), tz.with_ymd_and_hms(2024, 6, 3, 23, 30, 0).unwrap());
        assert_eq!(clock.now().offset(), &tz);
    }

    #[test]
    fn test_fixed_clock_advance_days_out_of_range() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
        let clock = FixedClock::new(start);

        assert_eq!(clock.advance_days(u64::MAX), Err(SchedulerError::DateOutOfRange));
        assert_eq!(clock.now(), start);
    }
}
