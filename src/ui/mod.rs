//! egui front-end: main window, dialogs, toasts and theme.

pub mod add_dialog;
pub mod dialogs;
pub mod main_window;
pub mod theme;
pub mod toast;
