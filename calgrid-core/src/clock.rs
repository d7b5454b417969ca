//! Source of "today" for the engine.

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

/// Supplies today's civil date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock. Today is taken in `tz` when set, otherwise in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub tz: Option<Tz>,
}

impl SystemClock {
    pub fn new(tz: Option<Tz>) -> Self {
        SystemClock { tz }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.tz {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

/// A clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Whether `date` is the clock's current civil day.
pub fn is_today(date: NaiveDate, clock: &impl Clock) -> bool {
    date == clock.today()
}
