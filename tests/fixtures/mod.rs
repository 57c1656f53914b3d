// Test fixtures - reusable test data
// Provides consistent events and layout inputs across all test files
#![allow(dead_code)]

use chrono::NaiveDate;
use year_calendar::models::event::AllDayEvent;
use year_calendar::models::settings::LayoutConstants;
use year_calendar::models::view_mode::ViewMode;
use year_calendar::services::layout::{LayoutInput, Viewport};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// All-day event covering `start..end` (end exclusive)
    pub fn all_day(id: &str, start: NaiveDate, end: NaiveDate) -> AllDayEvent {
        AllDayEvent {
            id: id.to_string(),
            calendar_id: "work|primary".to_string(),
            summary: id.to_string(),
            start_date: start,
            end_date: end,
        }
    }

    /// Mar 10-12, 2024 (end date Mar 13)
    pub fn spring_trip_2024() -> AllDayEvent {
        all_day("spring-trip", date(2024, 3, 10), date(2024, 3, 13))
    }

    /// Three events overlapping on Jan 3, 2024 plus one that fits after them
    pub fn overlapping_2024() -> Vec<AllDayEvent> {
        vec![
            all_day("a", date(2024, 1, 1), date(2024, 1, 4)),
            all_day("b", date(2024, 1, 2), date(2024, 1, 5)),
            all_day("c", date(2024, 1, 3), date(2024, 1, 6)),
            all_day("d", date(2024, 1, 4), date(2024, 1, 5)),
        ]
    }

    /// Starts in late 2023 and ends in early 2024
    pub fn new_year_party() -> AllDayEvent {
        all_day("party", date(2023, 12, 30), date(2024, 1, 2))
    }
}

/// Common window sizes
pub mod viewports {
    use super::*;

    pub fn laptop() -> Viewport {
        Viewport::new(1200.0, 800.0)
    }

    pub fn narrow() -> Viewport {
        Viewport::new(420.0, 900.0)
    }
}

pub fn layout_input<'a>(
    year: i32,
    view: ViewMode,
    viewport: Viewport,
    events: &'a [AllDayEvent],
    constants: &'a LayoutConstants,
) -> LayoutInput<'a> {
    LayoutInput {
        year,
        view,
        viewport,
        measured_cell: None,
        events,
        constants,
    }
}
