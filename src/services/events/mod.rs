// Event ingestion
// The calendar fetcher writes a JSON snapshot of flattened all-day events;
// this module reads it and prepares the list the layout engine consumes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::models::event::{split_calendar_id, AllDayEvent};

/// The fetcher either writes a bare array or the `{ "events": [...] }`
/// response body of the events endpoint. Records stay raw so one bad
/// record cannot sink the rest.
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsPayload {
    Wrapped { events: Vec<Value> },
    List(Vec<Value>),
}

fn parse_record(index: usize, record: Value) -> Option<AllDayEvent> {
    let event: AllDayEvent = match serde_json::from_value(record) {
        Ok(event) => event,
        Err(err) => {
            log::warn!("Dropping event #{}: {}", index, err);
            return None;
        }
    };
    match event.validate() {
        Ok(()) => Some(event),
        Err(err) => {
            log::warn!("Dropping event: {}", err);
            None
        }
    }
}

pub fn parse_events(json: &str) -> Result<Vec<AllDayEvent>> {
    let payload: EventsPayload =
        serde_json::from_str(json).context("failed to parse events JSON")?;
    let records = match payload {
        EventsPayload::Wrapped { events } | EventsPayload::List(events) => events,
    };

    let total = records.len();
    let valid: Vec<AllDayEvent> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| parse_record(index, record))
        .collect();

    if valid.len() != total {
        log::info!("Kept {} of {} events", valid.len(), total);
    }
    Ok(valid)
}

/// Load the event snapshot at `path`. A missing file is an empty calendar.
pub fn load_events(path: &Path) -> Result<Vec<AllDayEvent>> {
    if !path.exists() {
        log::info!("No event snapshot at {}", path.display());
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = parse_events(&data)
        .with_context(|| format!("failed to load events from {}", path.display()))?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Events the user has not hidden, in their original order.
pub fn visible_events(events: &[AllDayEvent], hidden: &BTreeSet<String>) -> Vec<AllDayEvent> {
    events
        .iter()
        .filter(|event| !hidden.contains(&event.id))
        .cloned()
        .collect()
}

/// Every covered day -> indices of the events covering it.
pub fn events_by_day(events: &[AllDayEvent]) -> BTreeMap<NaiveDate, Vec<usize>> {
    let mut map: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (idx, event) in events.iter().enumerate() {
        for date in event.start_date.iter_days().take_while(|date| *date < event.end_date) {
            map.entry(date).or_default().push(idx);
        }
    }
    map
}

/// Calendars a new or edited event can target: every composite calendar
/// id seen in the events or the color table. Sorting keeps each account's
/// calendars together.
pub fn calendar_choices(events: &[AllDayEvent], colors: &BTreeMap<String, String>) -> Vec<String> {
    let mut choices: BTreeSet<String> = colors
        .keys()
        .filter(|id| split_calendar_id(id).is_some())
        .cloned()
        .collect();
    choices.extend(
        events
            .iter()
            .filter(|event| event.account_id().is_some())
            .map(|event| event.calendar_id.clone()),
    );
    choices.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "events": [
            {"id": "a|primary:1", "calendarId": "a|primary", "summary": "Trip",
             "startDate": "2024-03-10", "endDate": "2024-03-13"},
            {"id": "a|primary:2", "calendarId": "a|primary", "summary": "Broken",
             "startDate": "2024-03-10", "endDate": "2024-03-10"},
            {"id": "a|work:3", "calendarId": "a|work",
             "startDate": "2024-03-11", "endDate": "2024-03-12"}
        ]
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_wrapped_payload_drops_invalid_events() {
        let events = parse_events(SNAPSHOT).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a|primary:1", "a|work:3"]);
        assert_eq!(events[1].summary, "(Untitled)");
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"id": "x", "startDate": "2024-01-01", "endDate": "2024-01-02"}]"#;
        assert_eq!(parse_events(json).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_drops_malformed_records_only() {
        let json = r#"{"events": [
            {"id": "x", "startDate": "01/01/2024", "endDate": "2024-01-02"},
            {"id": "y", "startDate": "2024-01-01"},
            "not an event",
            {"id": "z", "startDate": "2024-01-01", "endDate": "2024-01-02"}
        ]}"#;
        let events = parse_events(json).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["z"]);
    }

    #[test]
    fn test_parse_rejects_non_list_payloads() {
        assert!(parse_events("not json").is_err());
        assert!(parse_events(r#"{"items": []}"#).is_err());
        assert!(parse_events(r#""2024-01-01""#).is_err());
    }

    #[test]
    fn test_calendar_choices_groups_by_account() {
        let events = parse_events(SNAPSHOT).unwrap();
        let colors = BTreeMap::from([
            ("b|home".to_string(), "#00ff00".to_string()),
            ("a|primary".to_string(), "#3366ff".to_string()),
            ("legacy".to_string(), "#ff0000".to_string()),
        ]);
        assert_eq!(
            calendar_choices(&events, &colors),
            vec!["a|primary".to_string(), "a|work".to_string(), "b|home".to_string()]
        );
    }

    #[test]
    fn test_load_events_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        assert_eq!(load_events(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let events = load_events(&dir.path().join("events.json")).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_visible_events_filters_hidden_ids() {
        let events = parse_events(SNAPSHOT).unwrap();
        let hidden = BTreeSet::from(["a|primary:1".to_string()]);
        let visible = visible_events(&events, &hidden);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a|work:3");
    }

    #[test]
    fn test_events_by_day_excludes_end_date() {
        let events = parse_events(SNAPSHOT).unwrap();
        let map = events_by_day(&events);
        assert_eq!(map.get(&date(2024, 3, 10)), Some(&vec![0]));
        assert_eq!(map.get(&date(2024, 3, 11)), Some(&vec![0, 1]));
        assert_eq!(map.get(&date(2024, 3, 12)), Some(&vec![0]));
        assert_eq!(map.get(&date(2024, 3, 13)), None);
    }
}
