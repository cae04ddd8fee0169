//! Agenda - desktop contact manager.
//!
//! Lists contacts in a table and lets you:
//! - Add contacts through a modal form
//! - Delete the selected contact after confirmation
//! - See short-lived toast notifications for each action

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;

use app::App;
use config::ConfigManager;
use eframe::NativeOptions;
use tracing_subscriber::EnvFilter;

/// eframe app id; the window title comes from the config.
const APP_NAME: &str = "Agenda";

fn main() -> eframe::Result<()> {
    let config_manager = ConfigManager::new();
    let config = config_manager.load();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        path = %config_manager.get_config_file_path().display(),
        "configuration loaded"
    );

    // Write defaults on first run so the file can be edited by hand.
    if !config_manager.get_config_file_path().exists() {
        if let Err(e) = config_manager.save(&config) {
            tracing::warn!("could not write default config: {e:#}");
        }
    }

    // Configure native window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(&config.window_title)
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 400.0])
            .with_maximized(config.start_maximized),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name_independent_of_title() {
        let config = config::Config::default();
        assert_eq!(APP_NAME, "Agenda");
        assert_ne!(APP_NAME, config.window_title);
    }
}
