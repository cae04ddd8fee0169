//! Simple modal dialogs: message boxes and yes/no confirmation.

use crate::ui::theme;
use egui::{Align2, Color32, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Warning,
    Error,
}

impl MessageKind {
    fn icon(self) -> &'static str {
        match self {
            MessageKind::Warning => "⚠",
            MessageKind::Error => "❌",
        }
    }

    fn color(self) -> Color32 {
        match self {
            MessageKind::Warning => theme::TOAST_INFO,
            MessageKind::Error => theme::DELETE_BUTTON,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub title: String,
    pub message: String,
    pub kind: MessageKind,
}

impl MessageDialog {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: MessageKind::Warning,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: MessageKind::Error,
        }
    }

    /// Returns true once the user dismissed the dialog.
    pub fn render(&self, ctx: &egui::Context) -> bool {
        let mut is_open = true;
        let mut dismissed = false;

        egui::Window::new(self.title.as_str())
            .id(egui::Id::new("message_dialog"))
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.kind.icon()).size(24.0).color(self.kind.color()));
                    ui.label(&self.message);
                });
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Aceptar").clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed || !is_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAnswer {
    Yes,
    No,
}

/// Yes/No prompt. Closing the window counts as No.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn render(&self, ctx: &egui::Context) -> Option<ConfirmAnswer> {
        let mut is_open = true;
        let mut answer = None;

        egui::Window::new(self.title.as_str())
            .id(egui::Id::new("confirm_dialog"))
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&self.message);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Sí").clicked() {
                        answer = Some(ConfirmAnswer::Yes);
                    }
                    if ui.button("No").clicked() {
                        answer = Some(ConfirmAnswer::No);
                    }
                });
            });

        if !is_open {
            return Some(ConfirmAnswer::No);
        }
        answer
    }
}
