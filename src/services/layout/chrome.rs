//! Text drawn around the grid: column headers and the labels inside day cells.

use chrono::{Datelike, NaiveDate};

use crate::models::settings::LayoutConstants;
use crate::models::view_mode::ViewMode;
use crate::utils::date::{month_short, weekday_short, WEEKDAY_SHORT};

/// Labels shown inside one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLabel {
    pub number: u32,
    pub weekday: Option<&'static str>,
    /// Month abbreviation on the first of each month in the default view
    pub month_marker: Option<&'static str>,
}

pub fn day_label(date: NaiveDate, view: ViewMode, show_days_of_week: bool) -> DayLabel {
    let weekday = match view {
        ViewMode::Default => show_days_of_week,
        ViewMode::Months | ViewMode::Weeks => true,
    };
    let month_marker = (view == ViewMode::Default && date.day() == 1).then(|| month_short(date));

    DayLabel {
        number: date.day(),
        weekday: weekday.then(|| weekday_short(date)),
        month_marker,
    }
}

/// Header row above the grid: day-of-month numbers for months, weekday names
/// for weeks, nothing for the default view.
pub fn column_headers(view: ViewMode, columns: usize) -> Vec<String> {
    match view {
        ViewMode::Default => Vec::new(),
        ViewMode::Months => (1..=columns).map(|day| day.to_string()).collect(),
        ViewMode::Weeks => WEEKDAY_SHORT
            .iter()
            .cycle()
            .take(columns)
            .map(|name| name.to_string())
            .collect(),
    }
}

pub fn header_row_height(view: ViewMode, constants: &LayoutConstants) -> f32 {
    if view.has_index_column() {
        constants.header_row_height
    } else {
        0.0
    }
}
