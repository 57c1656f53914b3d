// Settings module
// Application configuration and the presentation constants the layout engine
// reads. Everything defaults so a partial config file is valid.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use super::view_mode::ViewMode;

/// Pixel constants shared by the layout engine and the grid painter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    /// Gap between neighbouring cells, both axes
    pub gap: f32,
    /// Space reserved above the first lane for the date number
    pub label_offset: f32,
    pub lane_height: f32,
    /// Extra space below the last lane
    pub row_padding: f32,
    /// Subtracted from lane height to leave a gap between stacked bars
    pub bar_inset: f32,
    /// Leading label column for months/weeks views
    pub index_column_width: f32,
    /// Height of the sticky header row in months/weeks views
    pub header_row_height: f32,
    pub month_columns: usize,
    pub month_cell_height: u32,
    pub week_columns: usize,
    pub week_cell_height: u32,
    /// Smallest cell size the square grid falls back to
    pub fallback_cell_size: u32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            gap: 1.0,
            label_offset: 16.0,
            lane_height: 16.0,
            row_padding: 2.0,
            bar_inset: 2.0,
            index_column_width: 50.0,
            header_row_height: 30.0,
            month_columns: 31,
            month_cell_height: 50,
            week_columns: 7,
            week_cell_height: 40,
            fallback_cell_size: 10,
        }
    }
}

impl LayoutConstants {
    pub fn index_column_width_for(&self, view: ViewMode) -> f32 {
        if view.has_index_column() {
            self.index_column_width
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Year to open on; `None` means the current year
    pub year: Option<i32>,
    pub view: ViewMode,
    pub show_days_of_week: bool,
    pub dark_theme: bool,
    /// JSON snapshot of events written by the calendar fetcher
    pub events_path: Option<PathBuf>,
    /// calendarId -> hex color
    pub calendar_colors: BTreeMap<String, String>,
    /// Event ids the user chose to hide
    pub hidden_events: BTreeSet<String>,
    pub layout: LayoutConstants,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            year: None,
            view: ViewMode::Default,
            show_days_of_week: false,
            dark_theme: false,
            events_path: None,
            calendar_colors: BTreeMap::new(),
            hidden_events: BTreeSet::new(),
            layout: LayoutConstants::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let layout = &self.layout;
        if layout.gap < 0.0 || !layout.gap.is_finite() {
            return Err("Layout gap must be a non-negative number".to_string());
        }
        if layout.lane_height <= layout.bar_inset {
            return Err("Lane height must be larger than the bar inset".to_string());
        }
        if layout.month_columns < 31 {
            return Err("Months view needs at least 31 columns".to_string());
        }
        if layout.week_columns < 7 {
            return Err("Weeks view needs at least 7 columns".to_string());
        }
        if layout.fallback_cell_size == 0 {
            return Err("Fallback cell size must be positive".to_string());
        }
        Ok(())
    }
}
