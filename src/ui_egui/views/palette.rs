use crate::ui_egui::theme::{with_alpha, CalendarTheme};
use egui::Color32;

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct YearGridPalette {
    pub grid_bg: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub today_border: Color32,
    pub hover_border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub month_marker: Color32,
    pub chrome_bg: Color32,
    pub chrome_text: Color32,
    pub bar_text: Color32,
    pub selection_border: Color32,
}

impl YearGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            grid_bg: theme.calendar_background,
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            today_border: theme.today_border,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
            text: theme.text_primary,
            muted_text: theme.text_secondary,
            month_marker: theme.today_border,
            chrome_bg: blend(theme.app_background, theme.day_background, 0.3),
            chrome_text: theme.text_secondary,
            bar_text: theme.text_primary,
            selection_border: theme.selection_border,
        }
    }
}
