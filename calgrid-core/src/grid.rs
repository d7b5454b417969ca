//! Month grid generation.
//!
//! A month view is always six Sunday-first weeks: the days of the month
//! plus padding from the months on either side.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::CalendarEvent;
use crate::date_key::format_date_key;

/// Cells in a month grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Furthest year a grid can be built for; chrono stops a little past this.
const MAX_GRID_YEAR: i64 = 262_000;

/// One day of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

impl DayCell {
    pub fn key(&self) -> String {
        format_date_key(self.date)
    }

    /// Day of month shown in the cell.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The first `max` events and how many more did not fit.
    pub fn preview(events: &[CalendarEvent], max: usize) -> (&[CalendarEvent], usize) {
        let shown = events.len().min(max);
        (&events[..shown], events.len() - shown)
    }
}

/// Fold an out-of-range 0-based month into the year.
///
/// Returns `(year, month)` with `month` in `0..12`; `(2026, -1)` becomes
/// `(2025, 11)` and `(2026, 12)` becomes `(2027, 0)`. Years beyond what the
/// calendar can represent are clamped.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month);
    let year = total.div_euclid(12).clamp(-MAX_GRID_YEAR, MAX_GRID_YEAR);
    let month = total.rem_euclid(12);
    (year as i32, month as u32)
}

/// Number of days in a 0-based month, after normalization.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let (year, month) = normalize_month(year, month);
    let first = first_of_month(year, month);
    first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days() as u32)
        .unwrap_or(31)
}

/// The 42 cells for a 0-based month, starting on the Sunday on or before
/// the 1st.
pub fn month_grid(year: i32, month: i32) -> Vec<DayCell> {
    let (year, month) = normalize_month(year, month);
    let first = first_of_month(year, month);
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

    start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| DayCell {
            date,
            is_current_month: date.year() == year && date.month0() == month,
        })
        .collect()
}

fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    // normalize_month keeps year and month inside chrono's range
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(NaiveDate::MIN)
}
