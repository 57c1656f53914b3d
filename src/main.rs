// Year Calendar Application
// Main entry point

use std::path::PathBuf;

use year_calendar::services::events::load_events;
use year_calendar::services::settings::{default_config_path, load_settings_or_default};
use year_calendar::ui_egui::YearCalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Year Calendar");

    // An explicit config path wins over the platform default
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(default_config_path);
    let settings = load_settings_or_default(config_path.as_deref());

    let events = match settings.events_path.as_deref() {
        Some(path) => load_events(path).unwrap_or_else(|err| {
            log::warn!("{:#}", err);
            Vec::new()
        }),
        None => {
            log::info!("No events_path configured, starting with an empty calendar");
            Vec::new()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Year Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Year Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(YearCalendarApp::new(cc, settings, events)))),
    )
}
