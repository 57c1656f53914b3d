//! Popover for the selected event: details, the edit form and the action menu.
//! A day click reuses the edit form for a new event.

use egui::{Pos2, RichText};

use crate::models::event::{split_calendar_id, AllDayEvent, EventDraft};
use crate::ui_egui::interaction::Interaction;

const WINDOW_ID: &str = "event_popover";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverAction {
    None,
    Edit,
    OpenMenu,
    CloseMenu,
    Save,
    Hide,
    Delete,
    Close,
}

/// Where the popover window sits. A new anchor moves the window once;
/// afterwards the user may drag it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PopoverPlacement {
    anchor: Pos2,
    pending: bool,
}

impl PopoverPlacement {
    pub fn move_to(&mut self, anchor: Pos2) {
        self.anchor = anchor;
        self.pending = true;
    }

    /// The anchor to force this frame, if it changed since the last one.
    pub fn take_pending(&mut self) -> Option<Pos2> {
        std::mem::take(&mut self.pending).then_some(self.anchor)
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }
}

pub struct EventPopover<'a> {
    /// The selected event; `None` while a new event is being drafted
    pub event: Option<&'a AllDayEvent>,
    pub placement: &'a mut PopoverPlacement,
    /// Calendar ids offered by the edit form
    pub calendars: &'a [String],
    /// Validation message from the last save attempt
    pub error: Option<&'a str>,
}

impl EventPopover<'_> {
    /// Show the popover for the current interaction state. Returns the
    /// button the user pressed, if any.
    pub fn show(self, ctx: &egui::Context, interaction: &mut Interaction) -> PopoverAction {
        let mut action = PopoverAction::None;
        let mut open = true;

        let title = match (&*interaction, self.event) {
            (Interaction::Creating { .. }, _) => "New event".to_string(),
            (Interaction::Editing { .. }, _) => "Edit event".to_string(),
            (_, Some(event)) => event.summary.clone(),
            (_, None) => return PopoverAction::None,
        };

        let mut window = egui::Window::new(title)
            .id(egui::Id::new(WINDOW_ID))
            .default_pos(self.placement.anchor())
            .collapsible(false)
            .resizable(false)
            .open(&mut open);
        if let Some(anchor) = self.placement.take_pending() {
            window = window.current_pos(anchor);
        }

        window.show(ctx, |ui| {
            ui.set_max_width(320.0);
            action = match (&mut *interaction, self.event) {
                (Interaction::Editing { draft, .. } | Interaction::Creating { draft, .. }, _) => {
                    Self::edit_form(ui, draft, self.calendars, self.error)
                }
                (Interaction::MenuOpen { .. }, _) => Self::menu(ui),
                (_, Some(event)) => Self::details(ui, event),
                (_, None) => PopoverAction::None,
            };
        });

        if !open {
            return PopoverAction::Close;
        }
        action
    }

    fn details(ui: &mut egui::Ui, event: &AllDayEvent) -> PopoverAction {
        let mut action = PopoverAction::None;
        ui.label(event.display_range());
        ui.label(RichText::new(&event.calendar_id).small().weak());
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                action = PopoverAction::Edit;
            }
            if ui.button("More…").clicked() {
                action = PopoverAction::OpenMenu;
            }
        });
        action
    }

    fn menu(ui: &mut egui::Ui) -> PopoverAction {
        let mut action = PopoverAction::None;
        ui.vertical(|ui| {
            if ui.button("Hide event").clicked() {
                action = PopoverAction::Hide;
            }
            if ui
                .button(RichText::new("Delete event").color(ui.visuals().error_fg_color))
                .clicked()
            {
                action = PopoverAction::Delete;
            }
            ui.separator();
            if ui.button("Back").clicked() {
                action = PopoverAction::CloseMenu;
            }
        });
        action
    }

    fn edit_form(
        ui: &mut egui::Ui,
        draft: &mut EventDraft,
        calendars: &[String],
        error: Option<&str>,
    ) -> PopoverAction {
        let mut action = PopoverAction::None;

        egui::Grid::new("event_popover_form")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Title");
                ui.text_edit_singleline(&mut draft.title);
                ui.end_row();

                ui.label("Start");
                ui.add(egui::TextEdit::singleline(&mut draft.start_date).hint_text("YYYY-MM-DD"));
                ui.end_row();

                ui.label("End");
                ui.horizontal(|ui| {
                    let mut multi_day = draft.end_date.is_some();
                    if ui.checkbox(&mut multi_day, "").changed() {
                        draft.end_date = multi_day.then(|| draft.start_date.clone());
                    }
                    if let Some(end) = draft.end_date.as_mut() {
                        ui.add(egui::TextEdit::singleline(end).hint_text("YYYY-MM-DD"));
                    }
                });
                ui.end_row();

                ui.label("Calendar");
                Self::calendar_picker(ui, &mut draft.calendar_id, calendars);
                ui.end_row();
            });

        if let Some(error) = error {
            ui.colored_label(ui.visuals().error_fg_color, error);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                action = PopoverAction::Save;
            }
            if ui.button("Cancel").clicked() {
                action = PopoverAction::Close;
            }
        });
        action
    }

    /// Calendars grouped under their account. Free text only when there is
    /// nothing to pick from.
    fn calendar_picker(ui: &mut egui::Ui, calendar_id: &mut String, calendars: &[String]) {
        if calendars.is_empty() {
            ui.add(egui::TextEdit::singleline(calendar_id).hint_text("account|calendar"));
            return;
        }

        egui::ComboBox::from_id_source("event_popover_calendar")
            .selected_text(calendar_label(calendar_id))
            .show_ui(ui, |ui| {
                let mut account = None;
                for choice in calendars {
                    let (choice_account, name) = split_calendar_id(choice).unwrap_or(("", choice.as_str()));
                    if account != Some(choice_account) {
                        ui.label(RichText::new(choice_account).small().weak());
                        account = Some(choice_account);
                    }
                    ui.selectable_value(calendar_id, choice.clone(), name);
                }
            });
    }
}

fn calendar_label(calendar_id: &str) -> String {
    match split_calendar_id(calendar_id) {
        Some((account, name)) => format!("{} ({})", name, account),
        None if calendar_id.is_empty() => "Choose a calendar".to_string(),
        None => calendar_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_moves_once_per_anchor() {
        let mut placement = PopoverPlacement::default();
        assert_eq!(placement.take_pending(), None);

        placement.move_to(Pos2::new(40.0, 120.0));
        assert_eq!(placement.take_pending(), Some(Pos2::new(40.0, 120.0)));
        assert_eq!(placement.take_pending(), None);

        placement.move_to(Pos2::new(300.0, 60.0));
        assert_eq!(placement.take_pending(), Some(Pos2::new(300.0, 60.0)));
        assert_eq!(placement.anchor(), Pos2::new(300.0, 60.0));
    }

    #[test]
    fn test_calendar_label() {
        assert_eq!(calendar_label("acc|work"), "work (acc)");
        assert_eq!(calendar_label(""), "Choose a calendar");
        assert_eq!(calendar_label("legacy"), "legacy");
    }
}
