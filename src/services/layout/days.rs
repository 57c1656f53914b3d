use chrono::{Datelike, NaiveDate};

use crate::utils::date::format_date_key;

/// One calendar day of the rendered year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Day {
    /// Canonical `YYYY-MM-DD` key
    pub key: String,
    pub date: NaiveDate,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            key: format_date_key(date),
            date,
        }
    }
}

/// Every day from Jan 1 to Dec 31 of `year`, in order.
///
/// Dates are plain calendar dates, so there is no time-of-day to drift across
/// daylight-saving transitions. Years chrono cannot represent yield an empty list.
pub fn generate_year_days(year: i32) -> Vec<Day> {
    let Some(first) = NaiveDate::from_yo_opt(year, 1) else {
        log::warn!("Year {} is outside the supported date range", year);
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| date.year() == year)
        .map(Day::new)
        .collect()
}
