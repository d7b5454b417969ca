//! The canonical `YYYY-MM-DD` date key.
//!
//! Grid cells, grouping and lookup all go through this module so that an
//! event always lands on the same civil day it is looked up under.

use chrono::{Datelike, NaiveDate};

use crate::error::{CalGridError, CalGridResult};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a civil date as its key, from year / month / day-of-month.
pub fn format_date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Date-only prefix of a raw event date.
///
/// Splits on the first date/time separator (`T` or a space). A value with
/// no separator is returned as-is, without checking that it is a date.
pub fn date_key_of(raw: &str) -> &str {
    match raw.find(['T', ' ']) {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Parse a `YYYY-MM-DD` key into a civil date.
///
/// Only canonical keys are accepted: the date must format back to exactly
/// `raw`, so no surrounding whitespace, signs or unpadded fields.
pub fn parse_date_key(raw: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
        .ok()
        .filter(|date| format_date_key(*date) == raw)
        .ok_or_else(|| CalGridError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_day_of_month_not_weekday() {
        // 2026-01-31 is a Saturday (weekday 6)
        assert_eq!(format_date_key(date(2026, 1, 31)), "2026-01-31");
        assert_eq!(format_date_key(date(2026, 12, 1)), "2026-12-01");
    }

    #[test]
    fn pads_small_years() {
        assert_eq!(format_date_key(date(987, 3, 4)), "0987-03-04");
    }

    #[test]
    fn key_of_timestamp_drops_time() {
        assert_eq!(date_key_of("2026-01-12T09:00:00Z"), "2026-01-12");
        assert_eq!(date_key_of("2026-01-12T23:30:00-05:00"), "2026-01-12");
        assert_eq!(date_key_of("2026-01-12 08:00"), "2026-01-12");
    }

    #[test]
    fn key_of_plain_value_is_unchanged() {
        assert_eq!(date_key_of("2026-01-12"), "2026-01-12");
        assert_eq!(date_key_of("garbage"), "garbage");
        assert_eq!(date_key_of(""), "");
    }

    #[test]
    fn parse_round_trips_with_format() {
        let d = date(2024, 2, 29);
        assert_eq!(parse_date_key(&format_date_key(d)).unwrap(), d);
    }

    #[test]
    fn parse_rejects_impossible_and_unpadded_dates() {
        assert!(parse_date_key("2026-13-40").is_err());
        assert!(parse_date_key("2025-02-29").is_err());
        assert!(parse_date_key("2026-1-5").is_err());
        assert!(parse_date_key("garbage").is_err());
    }

    #[test]
    fn parse_rejects_non_canonical_keys() {
        for raw in ["2026-01-12\n", "2026-01-12\t", " 2026-01-12", "+026-01-12"] {
            assert!(parse_date_key(raw).is_err(), "accepted {:?}", raw);
        }
    }
}
