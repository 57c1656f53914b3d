// Date utility functions
// Date-only arithmetic for the year grid; no time-of-day is ever involved.

use chrono::{Datelike, Duration, NaiveDate};

/// Canonical key format for a calendar day (`YYYY-MM-DD`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub const MONTH_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Weekday labels indexed by days from Sunday.
pub const WEEKDAY_SHORT: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a canonical `YYYY-MM-DD` key. Returns `None` for anything else.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let trimmed = key.trim();
    // chrono accepts unpadded fields; the key format is fixed-width
    if trimmed.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_KEY_FORMAT).ok()
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub fn previous_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(1))
}

pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(1))
}

pub fn month_short(date: NaiveDate) -> &'static str {
    MONTH_SHORT[date.month0() as usize]
}

pub fn weekday_short(date: NaiveDate) -> &'static str {
    WEEKDAY_SHORT[date.weekday().num_days_from_sunday() as usize]
}

pub fn is_weekend(date: NaiveDate) -> bool {
    let dow = date.weekday().num_days_from_sunday();
    dow == 0 || dow == 6
}

/// Human readable label for the inclusive range `start..=end_inclusive`.
///
/// * same day: `Mar 10, 2024`
/// * same month: `Mar 10–12, 2024`
/// * otherwise: `Mar 30, 2024 – Apr 2, 2024`
pub fn format_display_range(start: NaiveDate, end_inclusive: NaiveDate) -> String {
    let left = format!("{} {}", month_short(start), start.day());
    if start == end_inclusive {
        return format!("{}, {}", left, start.year());
    }
    if start.year() == end_inclusive.year() && start.month() == end_inclusive.month() {
        return format!("{}–{}, {}", left, end_inclusive.day(), start.year());
    }
    format!(
        "{}, {} – {} {}, {}",
        left,
        start.year(),
        month_short(end_inclusive),
        end_inclusive.day(),
        end_inclusive.year()
    )
}
