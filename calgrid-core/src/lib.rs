//! Core of the calgrid calendar client.
//!
//! Everything here is pure and synchronous apart from [`config`]:
//! - [`grid`] builds the 42-cell month grid
//! - [`date_key`] is the single `YYYY-MM-DD` key convention
//! - [`grouping`] buckets events by date key and looks days up
//! - [`navigation`] is caller-owned month state
//! - [`event`] and [`draft`] are the backend record and request body

pub mod clock;
pub mod config;
pub mod date_key;
pub mod draft;
pub mod error;
pub mod event;
pub mod grid;
pub mod grouping;
pub mod navigation;

pub use clock::{Clock, FixedClock, SystemClock, is_today};
pub use date_key::{date_key_of, format_date_key, parse_date_key};
pub use draft::EventDraft;
pub use error::{CalGridError, CalGridResult};
pub use event::CalendarEvent;
pub use grid::{DayCell, GRID_CELLS, WEEKDAY_LABELS, days_in_month, month_grid, normalize_month};
pub use grouping::{EventsByDate, events_on, group_by_date, group_by_date_strict};
pub use navigation::MonthCursor;
