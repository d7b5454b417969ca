//! TUI rendering for calgrid types.
//!
//! Extension traits and helpers that add colored terminal output to
//! calgrid-core types using owo_colors.

use calgrid_core::{
    CalendarEvent, Clock, DayCell, EventsByDate, MonthCursor, WEEKDAY_LABELS, events_on,
    format_date_key, is_today,
};
use owo_colors::OwoColorize;

/// Most event dots shown in one day cell before collapsing into "+N".
pub const MAX_VISIBLE_DOTS: usize = 4;

/// Width of one grid column, in characters.
const CELL_WIDTH: usize = 7;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarEvent {
    /// One line in a day listing.
    fn render(&self) -> String {
        let time = self.start_time.as_deref().unwrap_or("all-day");
        let mut line = format!("{}  {}", format!("{:>7}", time).dimmed(), self.event_title.bold());
        if let Some(location) = &self.location {
            line.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
        }
        line.push_str(&format!(" {}", format!("#{}", self.id).dimmed()));
        line
    }
}

/// Event detail view: date header, times, labels, location, description.
pub fn render_detail(event: &CalendarEvent) -> String {
    let date = event.date_key().unwrap_or("—");
    let mut lines = vec![
        format!("{}  {}", date.bold(), event.time_range().dimmed()),
        String::new(),
        if event.event_title.trim().is_empty() {
            "Event Details".bold().to_string()
        } else {
            event.event_title.bold().to_string()
        },
    ];

    if !event.labels().is_empty() {
        let labels: Vec<String> = event
            .labels()
            .iter()
            .map(|l| format!("[{}]", l).cyan().to_string())
            .collect();
        lines.push(format!("{} {}", "Labels:".dimmed(), labels.join(" ")));
    }
    if let Some(location) = &event.location {
        lines.push(format!("{} {}", "Location:".dimmed(), location));
    }
    if let Some(rule) = &event.recurring_rule {
        lines.push(format!("{} {}", "Repeats:".dimmed(), rule));
    }
    if let Some(reminder) = &event.reminder_time {
        lines.push(format!("{} {}", "Reminder:".dimmed(), reminder));
    }
    if let Some(description) = &event.description {
        lines.push(String::new());
        lines.push(description.clone());
    }

    lines.join("\n")
}

/// Events for one day, under a date header.
pub fn render_day(date: chrono::NaiveDate, events: &[CalendarEvent]) -> String {
    let header = format!("{} {}", date.format("%a"), format_date_key(date));
    let mut lines = vec![header.bold().to_string()];

    if events.is_empty() {
        lines.push(format!("  {}", "No events".dimmed()));
    }
    for event in events {
        lines.push(format!("  {}", event.render()));
    }

    lines.join("\n")
}

/// Plain day-number column of a cell, padded to the cell width.
fn day_text(cell: &DayCell) -> String {
    format!("{:>3}{:width$}", cell.day(), "", width = CELL_WIDTH - 3)
}

/// Plain dot column of a cell: one dot per event, then "+N".
fn dots_text(events: &[CalendarEvent]) -> String {
    let (shown, overflow) = DayCell::preview(events, MAX_VISIBLE_DOTS);
    let mut dots = " ".to_string() + &"•".repeat(shown.len());
    if overflow > 0 {
        dots.push_str(&format!("+{}", overflow));
    }
    let used = dots.chars().count();
    dots + &" ".repeat(CELL_WIDTH.saturating_sub(used))
}

/// The month view: title, weekday header and six weeks of cells, each week
/// drawn as a row of day numbers over a row of event dots.
pub fn render_month(cursor: &MonthCursor, grouped: &EventsByDate, clock: &impl Clock) -> String {
    let width = CELL_WIDTH * WEEKDAY_LABELS.len();
    let mut lines = vec![format!("{:^width$}", cursor.title()).bold().to_string()];

    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{:>3}{:width$}", label, "", width = CELL_WIDTH - 3))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for week in cursor.grid().chunks(WEEKDAY_LABELS.len()) {
        let mut days = String::new();
        let mut dots = String::new();

        for cell in week {
            let text = day_text(cell);
            let text = if is_today(cell.date, clock) {
                text.reversed().bold().to_string()
            } else if cell.is_current_month {
                text
            } else {
                text.dimmed().to_string()
            };
            days.push_str(&text);
            dots.push_str(&dots_text(events_on(cell.date, grouped)).yellow().to_string());
        }

        lines.push(days);
        lines.push(dots);
    }

    lines.join("\n")
}
