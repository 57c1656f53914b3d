//! Painter for the year grid.
//!
//! Everything positional comes from the [`RenderModel`]; this module only
//! turns its pixel rectangles into egui shapes and maps clicks back to
//! events and days.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use egui::text::{LayoutJob, TextFormat, TextWrapping};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::YearGridPalette;
use crate::models::event::AllDayEvent;
use crate::models::settings::Settings;
use crate::services::layout::{
    column_headers, day_label, header_row_height, DayCell, PixelRect, RenderModel,
};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

const DAY_FONT_SIZE: f32 = 10.0;
const BAR_FONT_SIZE: f32 = 10.0;
const BAR_TEXT_PADDING: f32 = 4.0;
const CELL_TEXT_INSET: Vec2 = Vec2::new(3.0, 2.0);

#[derive(Debug, Clone, PartialEq)]
pub enum YearGridAction {
    None,
    /// A bar was clicked; `event` indexes the events the model was built from
    SelectEvent { event: usize, anchor: Pos2 },
    DayClicked { date: NaiveDate, anchor: Pos2 },
    /// Click on the grid background or chrome
    ClickOutside,
}

pub struct YearGridView<'a> {
    pub model: &'a RenderModel,
    pub events: &'a [AllDayEvent],
    pub events_by_day: &'a BTreeMap<NaiveDate, Vec<usize>>,
    pub settings: &'a Settings,
    pub theme: &'a CalendarTheme,
    pub today: NaiveDate,
    pub selected_event_id: Option<&'a str>,
}

impl YearGridView<'_> {
    pub fn show(&self, ui: &mut egui::Ui) -> YearGridAction {
        let palette = YearGridPalette::from_theme(self.theme);
        let header_height = header_row_height(self.model.view, &self.settings.layout);
        let desired = Vec2::new(self.model.total_width, header_height + self.model.total_height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

        if !ui.is_rect_visible(rect) {
            return YearGridAction::None;
        }

        let painter = ui.painter_at(rect);
        let grid_origin = rect.min + Vec2::new(0.0, header_height);
        painter.rect_filled(rect, 0.0, palette.grid_bg);

        self.paint_header(&painter, rect.min, header_height, &palette);
        self.paint_index_column(&painter, grid_origin, &palette);
        for cell in &self.model.cells {
            self.paint_day_cell(&painter, grid_origin, cell, &palette);
        }
        self.paint_bars(ui, &painter, grid_origin, &palette);

        let local = |pos: Pos2| (pos.x - grid_origin.x, pos.y - grid_origin.y);

        let mut response = response;
        if let Some(pos) = response.hover_pos() {
            let (x, y) = local(pos);
            if let Some(bar) = self.model.bar_at(x, y) {
                if let Some(event) = self.events.get(bar.segment.event) {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    response = response.on_hover_ui_at_pointer(|ui| {
                        ui.strong(&event.summary);
                        ui.label(event.display_range());
                    });
                }
            } else if let Some(cell) = self.model.cell_at(x, y) {
                let cell_rect = to_rect(grid_origin, &cell.rect);
                painter.rect_stroke(cell_rect, 0.0, Stroke::new(1.0, palette.hover_border));
                let count = self.events_by_day.get(&cell.day.date).map_or(0, Vec::len);
                response = response.on_hover_ui_at_pointer(|ui| {
                    ui.label(cell.day.date.format("%a %b %-d %Y").to_string());
                    if count > 0 {
                        ui.label(format!("{} event{}", count, if count == 1 { "" } else { "s" }));
                    }
                });
            }
        }

        if !response.clicked() {
            return YearGridAction::None;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return YearGridAction::None;
        };
        let (x, y) = local(pos);
        if let Some(bar) = self.model.bar_at(x, y) {
            return YearGridAction::SelectEvent {
                event: bar.segment.event,
                anchor: to_rect(grid_origin, &bar.rect).left_bottom(),
            };
        }
        match self.model.cell_at(x, y) {
            Some(cell) => YearGridAction::DayClicked {
                date: cell.day.date,
                anchor: to_rect(grid_origin, &cell.rect).right_top(),
            },
            None => YearGridAction::ClickOutside,
        }
    }

    fn paint_header(
        &self,
        painter: &egui::Painter,
        origin: Pos2,
        height: f32,
        palette: &YearGridPalette,
    ) {
        if height <= 0.0 {
            return;
        }
        let gap = self.settings.layout.gap;
        let cell_width = self.model.cell.width;
        let index_width = self.model.index_column_width;
        let font = FontId::proportional(DAY_FONT_SIZE);

        let corner = Rect::from_min_size(origin, Vec2::new(index_width, height));
        painter.rect_filled(corner, 0.0, palette.chrome_bg);

        for (col, text) in column_headers(self.model.view, self.model.dims.columns)
            .iter()
            .enumerate()
        {
            let left = index_width + col as f32 * (cell_width + gap);
            let header = Rect::from_min_size(
                origin + Vec2::new(left, 0.0),
                Vec2::new(cell_width, height - gap),
            );
            painter.rect_filled(header, 0.0, palette.chrome_bg);
            painter.text(header.center(), Align2::CENTER_CENTER, text, font.clone(), palette.chrome_text);
        }
    }

    fn paint_index_column(&self, painter: &egui::Painter, origin: Pos2, palette: &YearGridPalette) {
        let width = self.model.index_column_width;
        if width <= 0.0 {
            return;
        }
        let font = FontId::proportional(12.0);
        for row in &self.model.rows {
            let Some(label) = row.label else {
                continue;
            };
            let rect = Rect::from_min_size(
                origin + Vec2::new(0.0, row.top),
                Vec2::new(width, row.height),
            );
            painter.rect_filled(rect, 0.0, palette.chrome_bg);
            painter.text(rect.center(), Align2::CENTER_CENTER, label.text(), font.clone(), palette.chrome_text);
        }
    }

    fn paint_day_cell(
        &self,
        painter: &egui::Painter,
        origin: Pos2,
        cell: &DayCell,
        palette: &YearGridPalette,
    ) {
        let rect = to_rect(origin, &cell.rect);
        let date = cell.day.date;
        let is_today = date == self.today;

        let bg = if is_today {
            palette.today_bg
        } else if is_weekend(date) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        painter.rect_filled(rect, 0.0, bg);
        if is_today {
            painter.rect_stroke(rect.shrink(0.5), 0.0, Stroke::new(1.0, palette.today_border));
        }

        let label = day_label(date, self.model.view, self.settings.show_days_of_week);
        let font = FontId::proportional(DAY_FONT_SIZE);
        let mut cursor = rect.min + CELL_TEXT_INSET;

        if let Some(marker) = label.month_marker {
            let used = painter.text(
                cursor,
                Align2::LEFT_TOP,
                marker.to_uppercase(),
                font.clone(),
                palette.month_marker,
            );
            cursor.x = used.right() + 2.0;
        }
        if let Some(weekday) = label.weekday {
            let used = painter.text(cursor, Align2::LEFT_TOP, weekday, font.clone(), palette.muted_text);
            cursor.x = used.right() + 2.0;
        }
        let number_color = if is_today {
            palette.today_border
        } else {
            palette.text
        };
        painter.text(cursor, Align2::LEFT_TOP, label.number.to_string(), font, number_color);
    }

    fn paint_bars(
        &self,
        ui: &egui::Ui,
        painter: &egui::Painter,
        origin: Pos2,
        palette: &YearGridPalette,
    ) {
        let font = FontId::proportional(BAR_FONT_SIZE);
        for bar in &self.model.bars {
            let Some(event) = self.events.get(bar.segment.event) else {
                continue;
            };
            let rect = to_rect(origin, &bar.rect);
            let color_hex = self
                .settings
                .calendar_colors
                .get(&event.calendar_id)
                .map(String::as_str);
            painter.rect_filled(rect, 2.0, self.theme.bar_color(color_hex));

            if self.selected_event_id == Some(event.id.as_str()) {
                painter.rect_stroke(rect, 2.0, Stroke::new(1.5, palette.selection_border));
            }

            let label = bar_label_job(
                &event.summary,
                font.clone(),
                palette.bar_text,
                rect.width() - 2.0 * BAR_TEXT_PADDING,
            );
            if let Some(job) = label {
                let galley = ui.fonts(|fonts| fonts.layout_job(job));
                let pos = Pos2::new(
                    rect.left() + BAR_TEXT_PADDING,
                    rect.center().y - galley.size().y / 2.0,
                );
                painter.with_clip_rect(rect).galley(pos, galley, palette.bar_text);
            }
        }
    }
}

fn to_rect(origin: Pos2, rect: &PixelRect) -> Rect {
    Rect::from_min_size(
        origin + Vec2::new(rect.left, rect.top),
        Vec2::new(rect.width, rect.height),
    )
}

/// One-row label that egui elides with "…" once it outgrows the bar.
fn bar_label_job(text: &str, font: FontId, color: Color32, max_width: f32) -> Option<LayoutJob> {
    if text.is_empty() || max_width <= 0.0 {
        return None;
    }
    let mut job = LayoutJob::single_section(text.to_owned(), TextFormat::simple(font, color));
    job.wrap = TextWrapping {
        max_width,
        max_rows: 1,
        break_anywhere: true,
        overflow_character: Some('…'),
    };
    Some(job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rect_offsets_by_origin() {
        let rect = to_rect(
            Pos2::new(10.0, 40.0),
            &PixelRect {
                left: 50.0,
                top: 16.0,
                width: 100.0,
                height: 14.0,
            },
        );
        assert_eq!(rect.min, Pos2::new(60.0, 56.0));
        assert_eq!(rect.size(), Vec2::new(100.0, 14.0));
    }

    #[test]
    fn test_bar_label_stays_on_one_row() {
        let fonts = egui::text::Fonts::new(1.0, 2048, egui::FontDefinitions::default());
        let font = FontId::proportional(BAR_FONT_SIZE);
        let title = "Quarterly planning offsite with the whole team";

        let full = fonts.layout_no_wrap(title.to_owned(), font.clone(), Color32::WHITE);
        let job = bar_label_job(title, font, Color32::WHITE, 40.0).unwrap();
        let label = fonts.layout_job(job);

        assert!(full.size().x > 40.0);
        assert_eq!(label.rows.len(), 1);
        assert!(label.size().x <= 40.5);
    }

    #[test]
    fn test_bar_label_skips_empty_space() {
        let font = FontId::proportional(BAR_FONT_SIZE);
        assert!(bar_label_job("Trip", font.clone(), Color32::WHITE, 0.0).is_none());
        assert!(bar_label_job("", font, Color32::WHITE, 80.0).is_none());
    }
}
