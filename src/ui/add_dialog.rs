//! "Agregar contacto" dialog.
//!
//! Collects the new contact's fields and submits them through the controller.
//! The main window polls [`AddContactDialog::is_open`] every frame and, once
//! the dialog has closed, checks [`AddContactDialog::succeeded`].

use crate::core::contact::{Contact, NewContact};
use crate::core::controller::ContactController;
use crate::ui::theme;
use egui::{Align2, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogState {
    Open,
    Succeeded,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct AddContactDialog {
    name: String,
    email: String,
    phone: String,
    error: Option<String>,
    state: DialogState,
}

impl Default for AddContactDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddContactDialog {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            error: None,
            state: DialogState::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// True only after the dialog closed with a stored contact.
    pub fn succeeded(&self) -> bool {
        self.state == DialogState::Succeeded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Send the form to the controller. On failure the dialog stays open
    /// and shows the controller's message.
    pub fn submit<C: ContactController>(&mut self, controller: &mut C) -> Option<Contact> {
        let input = NewContact::new(&self.name, &self.email, &self.phone);
        match controller.add(input) {
            Ok(contact) => {
                self.error = None;
                self.state = DialogState::Succeeded;
                Some(contact)
            }
            Err(e) => {
                tracing::warn!("add contact rejected: {e}");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Cancelled;
    }

    pub fn render<C: ContactController>(&mut self, ctx: &egui::Context, controller: &mut C) {
        let mut is_open = true;
        let mut save_triggered = false;
        let mut cancel_triggered = false;

        egui::Window::new("Agregar contacto")
            .open(&mut is_open)
            .collapsible(false)
            .resizable(false)
            .min_width(420.0)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("add_contact_fields")
                    .num_columns(2)
                    .spacing([10.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Nombre:");
                        ui.text_edit_singleline(&mut self.name);
                        ui.end_row();

                        ui.label("Email:");
                        ui.text_edit_singleline(&mut self.email);
                        ui.end_row();

                        ui.label("Teléfono:");
                        let phone = ui.text_edit_singleline(&mut self.phone);
                        if phone.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            save_triggered = true;
                        }
                        ui.end_row();
                    });

                if let Some(error) = self.error() {
                    ui.add_space(5.0);
                    ui.colored_label(theme::DELETE_BUTTON, error);
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(RichText::new("Guardar").color(theme::ADD_BUTTON).strong())
                        .clicked()
                    {
                        save_triggered = true;
                    }
                    if ui.button("Cancelar").clicked() {
                        cancel_triggered = true;
                    }
                });
            });

        if save_triggered {
            self.submit(controller);
        } else if !is_open || cancel_triggered {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::controller::InMemoryController;

    #[test]
    fn test_submit_success_closes_dialog() {
        let mut controller = InMemoryController::new();
        let mut dialog = AddContactDialog::new();
        dialog.name = "Ana".to_string();
        dialog.email = "ana@x.com".to_string();
        dialog.phone = "111".to_string();

        let added = dialog.submit(&mut controller);

        assert_eq!(added.map(|c| c.id().to_string()), Some("1".to_string()));
        assert!(!dialog.is_open());
        assert!(dialog.succeeded());
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_submit_failure_keeps_dialog_open() {
        let mut controller = InMemoryController::new();
        let mut dialog = AddContactDialog::new();
        dialog.email = "ana@x.com".to_string();
        dialog.phone = "111".to_string();

        assert!(dialog.submit(&mut controller).is_none());
        assert!(dialog.is_open());
        assert!(!dialog.succeeded());
        assert_eq!(dialog.error(), Some("El nombre es obligatorio"));
    }

    #[test]
    fn test_retry_after_failure() {
        let mut controller = InMemoryController::new();
        let mut dialog = AddContactDialog::new();
        dialog.name = "Ana".to_string();
        dialog.email = "bad".to_string();
        dialog.phone = "111".to_string();
        dialog.submit(&mut controller);
        dialog.email = "ana@x.com".to_string();
        dialog.submit(&mut controller);

        assert!(dialog.succeeded());
        assert!(dialog.error().is_none());
    }

    #[test]
    fn test_cancel() {
        let mut dialog = AddContactDialog::new();
        dialog.cancel();
        assert!(!dialog.is_open());
        assert!(!dialog.succeeded());
    }
}
