mod app;
pub mod interaction;
pub mod theme;
pub mod views;

pub use app::YearCalendarApp;
