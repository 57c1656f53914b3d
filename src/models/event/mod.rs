// Event module
// All-day calendar events as delivered by the calendar fetcher, plus the
// create/update draft sent back through the events endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{format_date_key, format_display_range, next_day, parse_date_key, previous_day};

/// Separator between account id and calendar id in composite calendar ids.
pub const CALENDAR_ID_SEPARATOR: char = '|';

const UNTITLED: &str = "(Untitled)";

/// Split a composite `account|calendar` id. Both halves must be non-empty.
pub fn split_calendar_id(calendar_id: &str) -> Option<(&str, &str)> {
    calendar_id
        .split_once(CALENDAR_ID_SEPARATOR)
        .filter(|(account, calendar)| !account.is_empty() && !calendar.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Title is required")]
    MissingTitle,
    #[error("calendarId is required")]
    MissingCalendar,
    #[error("Invalid calendarId '{0}'")]
    InvalidCalendar(String),
    #[error("{field} must be YYYY-MM-DD, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("endDate must be on/after startDate")]
    EndBeforeStart,
    #[error("Event '{0}' must end after it starts")]
    EmptyRange(String),
}

/// All-day event covering `[start_date, end_date)`.
///
/// The end date is exclusive: a one-day event on March 10 has
/// `end_date` March 11.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllDayEvent {
    pub id: String,
    #[serde(default)]
    pub calendar_id: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn default_summary() -> String {
    UNTITLED.to_string()
}

impl AllDayEvent {
    /// Create a new event, checking the range is non-empty.
    ///
    /// # Examples
    /// ```
    /// use year_calendar::models::event::AllDayEvent;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
    /// let event = AllDayEvent::new("acc|cal:1", "acc|cal", "Trip", start, end).unwrap();
    /// assert_eq!(event.span_days(), 3);
    /// ```
    pub fn new(
        id: impl Into<String>,
        calendar_id: impl Into<String>,
        summary: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, EventError> {
        let event = Self {
            id: id.into(),
            calendar_id: calendar_id.into(),
            summary: summary.into(),
            start_date,
            end_date,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.end_date <= self.start_date {
            return Err(EventError::EmptyRange(self.id.clone()));
        }
        Ok(())
    }

    /// Last day the event covers.
    pub fn inclusive_end(&self) -> Option<NaiveDate> {
        previous_day(self.end_date)
    }

    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn is_multi_day(&self) -> bool {
        self.span_days() > 1
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date
    }

    pub fn display_range(&self) -> String {
        let end = self.inclusive_end().unwrap_or(self.start_date);
        format_display_range(self.start_date, end.max(self.start_date))
    }

    /// Account half of the composite calendar id, if present.
    pub fn account_id(&self) -> Option<&str> {
        split_calendar_id(&self.calendar_id).map(|(account, _)| account)
    }
}

/// Body for creating or updating an event. `end_date` is inclusive and
/// optional; single-day events omit it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub calendar_id: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl EventDraft {
    /// Blank single-day draft for a clicked day.
    pub fn for_day(date: NaiveDate, calendar_id: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            calendar_id: calendar_id.into(),
            start_date: format_date_key(date),
            end_date: None,
        }
    }

    /// Pre-fill an edit form from an existing event. Only multi-day events
    /// carry an explicit (inclusive) end date.
    pub fn from_event(event: &AllDayEvent) -> Self {
        let end_date = event
            .is_multi_day()
            .then(|| event.inclusive_end())
            .flatten()
            .map(format_date_key);

        Self {
            title: event.summary.clone(),
            calendar_id: event.calendar_id.clone(),
            start_date: format_date_key(event.start_date),
            end_date,
        }
    }

    /// Check the draft and return its parsed `(start, inclusive_end)` dates.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveDate), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::MissingTitle);
        }

        let calendar = self.calendar_id.trim();
        if !calendar.contains(CALENDAR_ID_SEPARATOR) {
            return Err(EventError::MissingCalendar);
        }
        if split_calendar_id(calendar).is_none() {
            return Err(EventError::InvalidCalendar(calendar.to_string()));
        }

        let start = parse_date_key(&self.start_date).ok_or_else(|| EventError::InvalidDate {
            field: "startDate",
            value: self.start_date.clone(),
        })?;

        let end = match self.end_date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_date_key(raw).ok_or_else(|| EventError::InvalidDate {
                field: "endDate",
                value: raw.to_string(),
            })?,
            None => start,
        };

        if end < start {
            return Err(EventError::EndBeforeStart);
        }

        Ok((start, end))
    }

    /// Exclusive end date the calendar service expects for all-day events.
    pub fn exclusive_end(&self) -> Result<NaiveDate, EventError> {
        let (_, end) = self.validate()?;
        next_day(end).ok_or_else(|| EventError::InvalidDate {
            field: "endDate",
            value: format_date_key(end),
        })
    }

    /// Apply a validated draft to an event, keeping its identity.
    pub fn apply_to(&self, event: &AllDayEvent) -> Result<AllDayEvent, EventError> {
        let (start, _) = self.validate()?;
        let end = self.exclusive_end()?;
        AllDayEvent::new(
            event.id.clone(),
            self.calendar_id.trim(),
            self.title.trim(),
            start,
            end,
        )
    }

    /// Build a new event from the draft. The id follows the fetcher's
    /// `account|calendar:key` shape.
    pub fn create(&self, key: &str) -> Result<AllDayEvent, EventError> {
        let (start, _) = self.validate()?;
        let end = self.exclusive_end()?;
        let calendar = self.calendar_id.trim();
        AllDayEvent::new(
            format!("{}:{}", calendar, key),
            calendar,
            self.title.trim(),
            start,
            end,
        )
    }
}
