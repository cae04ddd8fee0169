//! Application state and eframe integration.
//!
//! Main application structure implementing eframe::App trait.

use crate::config::Config;
use crate::core::controller::InMemoryController;
use crate::ui::main_window::MainWindow;
use eframe::egui;

/// Main application state.
pub struct App {
    main_window: MainWindow<InMemoryController>,
}

impl App {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let controller = InMemoryController::with_seed(&config.seed_contacts);
        tracing::info!(contacts = controller.len(), "contact store ready");

        Self {
            main_window: MainWindow::new(controller, config),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            tracing::info!("window closing");
            self.main_window.shutdown();
        }
        self.main_window.render(ctx);
    }
}
