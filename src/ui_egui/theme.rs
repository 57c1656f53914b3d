//! Theme module for the year grid
//!
//! Defines the CalendarTheme structure and resolves per-calendar bar colors
//! from the configured hex strings.

use egui::Color32;

use crate::utils::color::{hex_to_rgba, DEFAULT_BAR_ALPHA};

/// Colors used when painting the grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Grid background, visible through the gaps between cells
    pub calendar_background: Color32,

    pub weekend_background: Color32,

    pub today_background: Color32,
    pub today_border: Color32,

    pub day_background: Color32,
    pub day_border: Color32,

    /// Primary text color (day numbers, row labels)
    pub text_primary: Color32,

    /// Secondary text color (weekday letters, month markers)
    pub text_secondary: Color32,

    /// Bar fill for calendars without a configured color
    pub bar_fallback: Color32,

    /// Outline drawn around the selected event's bars
    pub selection_border: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(220, 220, 220),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            bar_fallback: Color32::from_rgb(100, 150, 255),
            selection_border: Color32::from_rgb(40, 40, 40),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(60, 60, 60),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            bar_fallback: Color32::from_rgb(100, 150, 255),
            selection_border: Color32::from_rgb(240, 240, 240),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Translucent bar fill for a calendar's configured hex color.
    pub fn bar_color(&self, hex: Option<&str>) -> Color32 {
        match hex.and_then(|hex| hex_to_rgba(hex, DEFAULT_BAR_ALPHA)) {
            Some(rgba) => Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a),
            None => with_alpha(self.bar_fallback, (DEFAULT_BAR_ALPHA * 255.0).round() as u8),
        }
    }
}

pub(crate) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
