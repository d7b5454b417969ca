//! Month navigation state owned by the caller.

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::grid::{DayCell, month_grid, normalize_month};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month being viewed. `month` is 0-based and always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: i32) -> Self {
        let (year, month) = normalize_month(year, month);
        MonthCursor { year, month }
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn today(clock: &impl Clock) -> Self {
        Self::containing(clock.today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn offset(self, months: i32) -> Self {
        Self::new(self.year, (self.month as i32).saturating_add(months))
    }

    pub fn grid(&self) -> Vec<DayCell> {
        month_grid(self.year, self.month as i32)
    }

    /// e.g. "January 2026"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize], self.year)
    }
}
