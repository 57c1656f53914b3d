use std::collections::BTreeMap;

use chrono::{Datelike, Local, NaiveDate};
use crate::models::event::AllDayEvent;
use crate::models::settings::Settings;
use crate::models::view_mode::ViewMode;
use crate::services::events::{calendar_choices, events_by_day, visible_events};
use crate::services::layout::{
    grid_dims, header_row_height, CellSize, GridDims, LayoutCache, LayoutInput, Viewport,
};
use crate::ui_egui::interaction::{Interaction, InteractionOutcome};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{
    EventPopover, PopoverAction, PopoverPlacement, YearGridAction, YearGridView,
};
use crate::utils::date::days_in_year;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

pub struct YearCalendarApp {
    settings: Settings,
    /// Every loaded event, hidden ones included
    events: Vec<AllDayEvent>,
    /// Events handed to the layout engine
    visible: Vec<AllDayEvent>,
    day_index: BTreeMap<NaiveDate, Vec<usize>>,
    /// Calendar ids offered when creating or editing
    calendars: Vec<String>,
    year: i32,
    view: ViewMode,
    theme: CalendarTheme,
    layout_cache: LayoutCache,
    interaction: Interaction,
    popover: PopoverPlacement,
    edit_error: Option<String>,
    /// Suffix for ids of events created in this session
    next_local_id: u64,
}

impl eframe::App for YearCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.interaction.cancel();
            self.edit_error = None;
        }

        self.render_toolbar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_grid(ui);
        });

        self.render_popover(ctx);
    }
}

impl YearCalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, events: Vec<AllDayEvent>) -> Self {
        let theme = CalendarTheme::for_mode(settings.dark_theme);
        theme.apply_to_context(&cc.egui_ctx);

        let year = settings
            .year
            .unwrap_or_else(|| Local::now().date_naive().year())
            .clamp(MIN_YEAR, MAX_YEAR);
        log::info!("Showing {} in {} view with {} events", year, settings.view, events.len());

        let mut app = Self {
            view: settings.view,
            settings,
            events,
            visible: Vec::new(),
            day_index: BTreeMap::new(),
            calendars: Vec::new(),
            year,
            theme,
            layout_cache: LayoutCache::new(),
            interaction: Interaction::default(),
            popover: PopoverPlacement::default(),
            edit_error: None,
            next_local_id: 1,
        };
        app.refresh_visible();
        app
    }

    fn refresh_visible(&mut self) {
        self.visible = visible_events(&self.events, &self.settings.hidden_events);
        self.day_index = events_by_day(&self.visible);
        self.calendars = calendar_choices(&self.events, &self.settings.calendar_colors);
    }

    /// Calendar a new event on `date` starts in: whatever calendar already
    /// has an event that day, else the first one known.
    fn default_calendar_for(&self, date: NaiveDate) -> &str {
        self.visible
            .iter()
            .filter(|event| event.covers(date) && event.account_id().is_some())
            .map(|event| event.calendar_id.as_str())
            .next()
            .or_else(|| self.calendars.first().map(String::as_str))
            .unwrap_or_default()
    }

    fn local_event_key(&mut self, calendar_id: &str) -> String {
        loop {
            let key = format!("local-{}", self.next_local_id);
            self.next_local_id += 1;
            let id = format!("{}:{}", calendar_id, key);
            if !self.events.iter().any(|event| event.id == id) {
                return key;
            }
        }
    }

    fn set_year(&mut self, year: i32) {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        if year != self.year {
            self.year = year;
            self.interaction.cancel();
        }
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Previous year").clicked() {
                    self.set_year(self.year - 1);
                }
                ui.heading(self.year.to_string());
                if ui.button("▶").on_hover_text("Next year").clicked() {
                    self.set_year(self.year + 1);
                }
                if ui.button("Today").clicked() {
                    self.set_year(Local::now().date_naive().year());
                }

                ui.separator();

                egui::ComboBox::from_id_source("view_mode")
                    .selected_text(self.view.label())
                    .show_ui(ui, |ui| {
                        for view in ViewMode::ALL {
                            ui.selectable_value(&mut self.view, view, view.label());
                        }
                    });

                if self.view == ViewMode::Default {
                    ui.checkbox(&mut self.settings.show_days_of_week, "Days of week");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let hidden = self.events.len() - self.visible.len();
                    if hidden > 0 && ui.small_button("Show hidden").clicked() {
                        self.settings.hidden_events.clear();
                        self.refresh_visible();
                    }
                    let summary = if hidden > 0 {
                        format!("{} events ({} hidden)", self.visible.len(), hidden)
                    } else {
                        format!("{} events", self.visible.len())
                    };
                    ui.label(summary);
                });
            });
        });
    }

    fn render_grid(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let constants = self.settings.layout;
        let viewport = Viewport::new(
            available.x,
            available.y - header_row_height(self.view, &constants),
        );
        let dims = grid_dims(self.view, days_in_year(self.year), viewport, &constants);

        let input = LayoutInput {
            year: self.year,
            view: self.view,
            viewport,
            measured_cell: measured_cell(self.view, dims, viewport, constants.gap),
            events: &self.visible,
            constants: &constants,
        };
        let model = self.layout_cache.get_or_compute(&input);

        let today = Local::now().date_naive();
        let action = egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                YearGridView {
                    model: &model,
                    events: &self.visible,
                    events_by_day: &self.day_index,
                    settings: &self.settings,
                    theme: &self.theme,
                    today,
                    selected_event_id: self.interaction.selected_event_id(),
                }
                .show(ui)
            })
            .inner;

        match action {
            YearGridAction::None => {}
            YearGridAction::SelectEvent { event, anchor } => {
                if let Some(event) = self.visible.get(event) {
                    log::debug!("Selected event {}", event.id);
                    self.interaction.select(event);
                    self.popover.move_to(anchor);
                    self.edit_error = None;
                }
            }
            YearGridAction::DayClicked { date, anchor } => {
                log::debug!("New event on {}", date);
                let calendar = self.default_calendar_for(date).to_string();
                self.interaction.begin_create(date, &calendar);
                self.popover.move_to(anchor);
                self.edit_error = None;
            }
            YearGridAction::ClickOutside => self.interaction.click_outside(),
        }
    }

    fn render_popover(&mut self, ctx: &egui::Context) {
        let event = self
            .interaction
            .selected_event_id()
            .and_then(|id| self.visible.iter().find(|event| event.id == id))
            .cloned();
        if event.is_none() && !self.interaction.is_creating() {
            return;
        }

        let action = EventPopover {
            event: event.as_ref(),
            placement: &mut self.popover,
            calendars: &self.calendars,
            error: self.edit_error.as_deref(),
        }
        .show(ctx, &mut self.interaction);

        match action {
            PopoverAction::None => {}
            PopoverAction::Edit => {
                if let Some(event) = &event {
                    self.interaction.begin_edit(event);
                }
            }
            PopoverAction::OpenMenu => self.interaction.open_menu(),
            PopoverAction::CloseMenu => self.interaction.close_menu(),
            PopoverAction::Save => match self.interaction.save() {
                Ok(outcome) => self.apply_outcome(outcome),
                Err(err) => self.edit_error = Some(err.to_string()),
            },
            PopoverAction::Hide => {
                let outcome = self.interaction.hide();
                self.apply_outcome(outcome);
            }
            PopoverAction::Delete => {
                let outcome = self.interaction.delete();
                self.apply_outcome(outcome);
            }
            PopoverAction::Close => {
                self.interaction.cancel();
                self.edit_error = None;
            }
        }
    }

    fn apply_outcome(&mut self, outcome: InteractionOutcome) {
        match outcome {
            InteractionOutcome::None => {}
            InteractionOutcome::Save { event_id, draft } => {
                let Some(slot) = self.events.iter_mut().find(|event| event.id == event_id) else {
                    log::warn!("Edited event {} no longer exists", event_id);
                    return;
                };
                match draft.apply_to(slot) {
                    Ok(updated) => {
                        log::info!("Updated event {} ({})", updated.id, updated.display_range());
                        *slot = updated;
                        self.edit_error = None;
                    }
                    Err(err) => self.edit_error = Some(err.to_string()),
                }
            }
            InteractionOutcome::Create { draft } => {
                let key = self.local_event_key(draft.calendar_id.trim());
                match draft.create(&key) {
                    Ok(event) => {
                        log::info!("Created event {} ({})", event.id, event.display_range());
                        self.events.push(event);
                        self.edit_error = None;
                    }
                    Err(err) => self.edit_error = Some(err.to_string()),
                }
            }
            InteractionOutcome::Hide { event_id } => {
                log::info!("Hiding event {}", event_id);
                self.settings.hidden_events.insert(event_id);
            }
            InteractionOutcome::Delete { event_id } => {
                log::info!("Deleting event {}", event_id);
                self.events.retain(|event| event.id != event_id);
            }
        }
        self.refresh_visible();
    }
}

/// Cell size the grid actually renders at. Default-view cells stretch to
/// fill the width the square solver leaves unused; months/weeks let the
/// engine split the width itself.
fn measured_cell(view: ViewMode, dims: GridDims, viewport: Viewport, gap: f32) -> Option<CellSize> {
    if view != ViewMode::Default || dims.columns == 0 {
        return None;
    }
    let columns = dims.columns as f32;
    let width = (viewport.width - (columns - 1.0) * gap) / columns;
    let height = dims.cell_size as f32;
    (width.is_finite() && width >= height).then_some(CellSize { width, height })
}
