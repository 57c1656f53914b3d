//! Selection state for event bars.
//!
//! `Idle -> Selected -> Editing`, `Idle -> Selected -> MenuOpen` and a day
//! click into `Creating`. The state only reads event identities from the
//! render model and never feeds back into layout.

use chrono::NaiveDate;

use crate::models::event::{AllDayEvent, EventDraft, EventError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Selected {
        event_id: String,
    },
    Editing {
        event_id: String,
        draft: EventDraft,
    },
    MenuOpen {
        event_id: String,
    },
    /// New-event form opened from a day cell
    Creating {
        date: NaiveDate,
        draft: EventDraft,
    },
}

/// What the host should do after an interaction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    None,
    /// Send this draft to the events endpoint as an update
    Save { event_id: String, draft: EventDraft },
    /// Send this draft to the events endpoint as a new event
    Create { draft: EventDraft },
    Hide { event_id: String },
    Delete { event_id: String },
}

impl Interaction {
    pub fn selected_event_id(&self) -> Option<&str> {
        match self {
            Interaction::Idle | Interaction::Creating { .. } => None,
            Interaction::Selected { event_id }
            | Interaction::Editing { event_id, .. }
            | Interaction::MenuOpen { event_id } => Some(event_id),
        }
    }

    /// True while either draft form is open.
    pub fn is_editing(&self) -> bool {
        matches!(self, Interaction::Editing { .. } | Interaction::Creating { .. })
    }

    pub fn is_creating(&self) -> bool {
        matches!(self, Interaction::Creating { .. })
    }

    /// Clicking a day opens a blank draft for it from any state.
    pub fn begin_create(&mut self, date: NaiveDate, calendar_id: &str) {
        *self = Interaction::Creating {
            date,
            draft: EventDraft::for_day(date, calendar_id),
        };
    }

    /// Clicking a bar selects its event from any state.
    pub fn select(&mut self, event: &AllDayEvent) {
        *self = Interaction::Selected {
            event_id: event.id.clone(),
        };
    }

    pub fn begin_edit(&mut self, event: &AllDayEvent) {
        if let Interaction::Selected { event_id } = self {
            if *event_id == event.id {
                *self = Interaction::Editing {
                    event_id: event.id.clone(),
                    draft: EventDraft::from_event(event),
                };
            }
        }
    }

    pub fn open_menu(&mut self) {
        if let Interaction::Selected { event_id } = self {
            *self = Interaction::MenuOpen {
                event_id: std::mem::take(event_id),
            };
        }
    }

    pub fn close_menu(&mut self) {
        if let Interaction::MenuOpen { event_id } = self {
            *self = Interaction::Selected {
                event_id: std::mem::take(event_id),
            };
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match self {
            Interaction::Editing { draft, .. } | Interaction::Creating { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Finish the open form. Invalid drafts keep the form open.
    pub fn save(&mut self) -> Result<InteractionOutcome, EventError> {
        match self {
            Interaction::Editing { event_id, draft } => {
                draft.validate()?;
                let outcome = InteractionOutcome::Save {
                    event_id: event_id.clone(),
                    draft: draft.clone(),
                };
                *self = Interaction::Selected {
                    event_id: std::mem::take(event_id),
                };
                Ok(outcome)
            }
            Interaction::Creating { draft, .. } => {
                draft.validate()?;
                let outcome = InteractionOutcome::Create {
                    draft: std::mem::take(draft),
                };
                *self = Interaction::Idle;
                Ok(outcome)
            }
            _ => Ok(InteractionOutcome::None),
        }
    }

    /// Menu actions close everything.
    pub fn hide(&mut self) -> InteractionOutcome {
        match std::mem::take(self) {
            Interaction::MenuOpen { event_id } => InteractionOutcome::Hide { event_id },
            other => {
                *self = other;
                InteractionOutcome::None
            }
        }
    }

    pub fn delete(&mut self) -> InteractionOutcome {
        match std::mem::take(self) {
            Interaction::MenuOpen { event_id } => InteractionOutcome::Delete { event_id },
            other => {
                *self = other;
                InteractionOutcome::None
            }
        }
    }

    /// Escape. Also closes the editor without saving.
    pub fn cancel(&mut self) {
        *self = Interaction::Idle;
    }

    /// A click that lands on neither a bar nor the open popover.
    pub fn click_outside(&mut self) {
        if *self != Interaction::Idle {
            log::trace!("Click outside, clearing selection");
        }
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn event() -> AllDayEvent {
        AllDayEvent {
            id: "acc|cal:1".to_string(),
            calendar_id: "acc|cal".to_string(),
            summary: "Trip".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(),
        }
    }

    #[test]
    fn test_edit_flow() {
        let ev = event();
        let mut state = Interaction::default();
        state.begin_edit(&ev);
        assert_eq!(state, Interaction::Idle);

        state.select(&ev);
        state.begin_edit(&ev);
        assert!(state.is_editing());
        state.draft_mut().unwrap().title = "Longer trip".to_string();

        let outcome = state.save().unwrap();
        assert!(matches!(outcome, InteractionOutcome::Save { ref draft, .. } if draft.title == "Longer trip"));
        assert_eq!(state.selected_event_id(), Some("acc|cal:1"));
    }

    #[test]
    fn test_invalid_draft_stays_in_editor() {
        let ev = event();
        let mut state = Interaction::default();
        state.select(&ev);
        state.begin_edit(&ev);
        state.draft_mut().unwrap().title.clear();

        assert!(state.save().is_err());
        assert!(state.is_editing());
    }

    #[test]
    fn test_menu_flow() {
        let ev = event();
        let mut state = Interaction::default();
        state.open_menu();
        assert_eq!(state, Interaction::Idle);

        state.select(&ev);
        state.open_menu();
        state.close_menu();
        assert_eq!(state, Interaction::Selected { event_id: ev.id.clone() });

        state.open_menu();
        assert_eq!(state.hide(), InteractionOutcome::Hide { event_id: ev.id.clone() });
        assert_eq!(state, Interaction::Idle);
    }

    #[test]
    fn test_delete_requires_menu() {
        let ev = event();
        let mut state = Interaction::default();
        state.select(&ev);
        assert_eq!(state.delete(), InteractionOutcome::None);
        assert_eq!(state.selected_event_id(), Some("acc|cal:1"));
    }

    #[test]
    fn test_cancel_from_anywhere() {
        let ev = event();
        let mut state = Interaction::default();
        state.select(&ev);
        state.begin_edit(&ev);
        state.cancel();
        assert_eq!(state, Interaction::Idle);

        state.select(&ev);
        state.open_menu();
        state.click_outside();
        assert_eq!(state, Interaction::Idle);
    }

    fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    #[test]
    fn test_day_click_creates_event() {
        let mut state = Interaction::default();
        state.begin_create(leap_day(), "acc|cal");
        assert!(state.is_creating());
        assert_eq!(state.selected_event_id(), None);
        assert_eq!(state.draft_mut().unwrap().start_date, "2024-02-29");

        state.draft_mut().unwrap().title = "Leap day".to_string();
        let InteractionOutcome::Create { draft } = state.save().unwrap() else {
            panic!("expected a create outcome");
        };
        assert_eq!(draft.title, "Leap day");
        assert_eq!(draft.calendar_id, "acc|cal");
        assert_eq!(state, Interaction::Idle);
    }

    #[test]
    fn test_invalid_new_event_keeps_form_open() {
        let mut state = Interaction::default();
        state.begin_create(leap_day(), "");
        state.draft_mut().unwrap().title = "No calendar".to_string();

        assert_eq!(state.save(), Err(EventError::MissingCalendar));
        assert!(state.is_creating());
        assert_eq!(state.draft_mut().unwrap().title, "No calendar");
    }

    #[test]
    fn test_day_click_replaces_selection_and_cancels() {
        let ev = event();
        let mut state = Interaction::default();
        state.select(&ev);
        state.begin_create(leap_day(), "acc|cal");
        assert!(matches!(state, Interaction::Creating { date, .. } if date == leap_day()));

        state.cancel();
        assert_eq!(state, Interaction::Idle);
        assert_eq!(state.save(), Ok(InteractionOutcome::None));
    }
}
