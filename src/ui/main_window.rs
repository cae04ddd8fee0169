//! Main application window.
//!
//! Contact table plus the "Agregar"/"Eliminar" action bar. The table is a
//! projection of `ContactController::list` and is rebuilt from scratch after
//! every mutation. At most one modal is open at a time; while it is, the table
//! and the action bar are disabled.

use crate::config::Config;
use crate::core::controller::ContactController;
use crate::ui::add_dialog::AddContactDialog;
use crate::ui::dialogs::{ConfirmAnswer, ConfirmDialog, MessageDialog};
use crate::ui::theme;
use crate::ui::toast::{ToastKind, ToastTray};
use egui::{Color32, RichText, Ui};

pub const COLUMNS: [&str; 4] = ["ID", "Nombre", "Email", "Teléfono"];

const WELCOME_MESSAGE: &str = "¡Bienvenido a la Agenda MVC!";
const ADDED_MESSAGE: &str = "Contacto agregado con éxito";
const DELETED_MESSAGE: &str = "Contacto eliminado correctamente";

/// The single modal the window may be showing.
#[derive(Debug)]
enum Modal {
    AddContact(AddContactDialog),
    ConfirmDelete { id: String, dialog: ConfirmDialog },
    Message(MessageDialog),
}

pub struct MainWindow<C: ContactController> {
    controller: C,
    rows: Vec<[String; 4]>,
    selected_row: Option<usize>,
    modal: Option<Modal>,
    toasts: ToastTray,
    theme_applied: bool,
}

impl<C: ContactController> MainWindow<C> {
    pub fn new(controller: C, config: &Config) -> Self {
        let mut window = Self {
            controller,
            rows: Vec::new(),
            selected_row: None,
            modal: None,
            toasts: ToastTray::new(config.toast_duration(), config.max_toasts),
            theme_applied: false,
        };
        window.toasts.show(WELCOME_MESSAGE, ToastKind::Info);
        window.load_contacts();
        window
    }

    /// Select a row, or clear the selection with `None`. Out-of-range
    /// indices clear the selection.
    pub fn select_row(&mut self, row: Option<usize>) {
        self.selected_row = row.filter(|&r| r < self.rows.len());
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Rebuild the table from the controller. On failure the current rows are
    /// kept and an error dialog is shown.
    pub fn load_contacts(&mut self) -> bool {
        match self.controller.list() {
            Ok(contacts) => {
                self.rows = contacts.iter().map(|c| c.to_row()).collect();
                self.selected_row = None;
                tracing::debug!(count = self.rows.len(), "contacts loaded");
                true
            }
            Err(e) => {
                tracing::error!("failed to load contacts: {e}");
                self.modal = Some(Modal::Message(MessageDialog::error(
                    "Error",
                    format!("No se pudo cargar la lista de contactos: {e}"),
                )));
                false
            }
        }
    }

    pub fn on_add(&mut self) {
        if self.modal.is_none() {
            self.modal = Some(Modal::AddContact(AddContactDialog::new()));
        }
    }

    /// Once the add dialog has closed, refresh and toast if it stored a contact.
    pub fn poll_add_dialog(&mut self) {
        let succeeded = match &self.modal {
            Some(Modal::AddContact(dialog)) if !dialog.is_open() => dialog.succeeded(),
            _ => return,
        };
        self.modal = None;

        if succeeded {
            self.load_contacts();
            self.toasts.show(ADDED_MESSAGE, ToastKind::Success);
        }
    }

    /// Start deleting the selected contact: warn if nothing is selected,
    /// otherwise ask for confirmation.
    pub fn on_delete(&mut self) {
        if self.modal.is_some() {
            return;
        }

        let Some(row) = self.selected_row.and_then(|r| self.rows.get(r)) else {
            self.modal = Some(Modal::Message(MessageDialog::warning(
                "Atención",
                "Seleccione un contacto para eliminar.",
            )));
            return;
        };

        self.modal = Some(Modal::ConfirmDelete {
            id: row[0].clone(),
            dialog: ConfirmDialog::new(
                "Confirmar eliminación",
                "¿Seguro que desea eliminar este contacto?",
            ),
        });
    }

    /// Apply the user's answer to a pending confirmation. Returns whether the
    /// contact was deleted.
    pub fn resolve_delete(&mut self, answer: ConfirmAnswer) -> bool {
        let id = match self.modal.take() {
            Some(Modal::ConfirmDelete { id, .. }) => id,
            other => {
                self.modal = other;
                return false;
            }
        };

        if answer == ConfirmAnswer::No {
            return false;
        }

        let deleted = self.delete_contact(&id);
        if deleted {
            self.toasts.show(DELETED_MESSAGE, ToastKind::Danger);
        }
        deleted
    }

    fn delete_contact(&mut self, id: &str) -> bool {
        if let Err(e) = self.controller.delete(id) {
            tracing::error!(id, "failed to delete contact: {e}");
            self.modal = Some(Modal::Message(MessageDialog::error(
                "Error",
                format!("No se pudo eliminar el contacto: {e}"),
            )));
            return false;
        }
        self.load_contacts();
        true
    }

    pub fn dismiss_message(&mut self) {
        if matches!(self.modal, Some(Modal::Message(_))) {
            self.modal = None;
        }
    }

    /// Drop every transient resource owned by the window.
    pub fn shutdown(&mut self) {
        self.toasts.clear();
        self.modal = None;
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_dark_theme(ctx);
            self.theme_applied = true;
        }

        let enabled = !self.is_modal_open();

        egui::TopBottomPanel::bottom("actions")
            .frame(egui::Frame::none().fill(theme::BACKGROUND).inner_margin(15.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| self.render_actions(ui));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BACKGROUND).inner_margin(15.0))
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| self.render_table(ui));
            });

        self.render_modal(ctx);
        self.toasts.render(ctx);
    }

    fn render_actions(&mut self, ui: &mut Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left: the last button added sits leftmost.
            if action_button(ui, "🗑 Eliminar", theme::DELETE_BUTTON).clicked() {
                self.on_delete();
            }
            if action_button(ui, "➕ Agregar", theme::ADD_BUTTON).clicked() {
                self.on_add();
            }
        });
    }

    fn render_table(&mut self, ui: &mut Ui) {
        let mut clicked_row = None;

        egui::Frame::none()
            .fill(theme::TABLE_PANEL)
            .stroke(egui::Stroke::new(1.0, theme::BORDER))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                egui::ScrollArea::both()
                    .id_salt("contacts_table")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Grid::new("contacts_grid")
                            .num_columns(COLUMNS.len())
                            .striped(true)
                            .min_row_height(theme::ROW_HEIGHT)
                            .min_col_width(120.0)
                            .spacing([24.0, 4.0])
                            .show(ui, |ui| {
                                for header in COLUMNS {
                                    egui::Frame::none()
                                        .fill(theme::TABLE_HEADER)
                                        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                                        .show(ui, |ui| {
                                            ui.label(
                                                RichText::new(header)
                                                    .strong()
                                                    .size(theme::HEADER_SIZE)
                                                    .color(theme::TEXT),
                                            );
                                        });
                                }
                                ui.end_row();

                                for (idx, row) in self.rows.iter().enumerate() {
                                    let is_selected = self.selected_row == Some(idx);
                                    for cell in row {
                                        let text = RichText::new(cell)
                                            .size(theme::BODY_SIZE)
                                            .color(theme::TEXT);
                                        if ui.add(egui::SelectableLabel::new(is_selected, text)).clicked() {
                                            clicked_row = Some(idx);
                                        }
                                    }
                                    ui.end_row();
                                }
                            });

                        if self.rows.is_empty() {
                            ui.add_space(10.0);
                            ui.label(RichText::new("No hay contactos registrados.").color(Color32::GRAY));
                        }
                    });
            });

        if let Some(idx) = clicked_row {
            // Clicking the selected row again clears the selection.
            let next = if self.selected_row == Some(idx) { None } else { Some(idx) };
            self.select_row(next);
        }
    }

    fn render_modal(&mut self, ctx: &egui::Context) {
        match self.modal.take() {
            Some(Modal::AddContact(mut dialog)) => {
                dialog.render(ctx, &mut self.controller);
                self.modal = Some(Modal::AddContact(dialog));
                self.poll_add_dialog();
            }
            Some(Modal::ConfirmDelete { id, dialog }) => {
                let answer = dialog.render(ctx);
                self.modal = Some(Modal::ConfirmDelete { id, dialog });
                if let Some(answer) = answer {
                    self.resolve_delete(answer);
                }
            }
            Some(Modal::Message(dialog)) => {
                let dismissed = dialog.render(ctx);
                self.modal = Some(Modal::Message(dialog));
                if dismissed {
                    self.dismiss_message();
                }
            }
            None => {}
        }
    }
}

/// Filled action button that darkens while hovered.
fn action_button(ui: &mut Ui, label: &str, base: Color32) -> egui::Response {
    let hover_id = ui.id().with(label);
    let was_hovered = ui.data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false);
    let fill = if was_hovered { theme::darker(base) } else { base };

    let response = ui
        .add(
            egui::Button::new(RichText::new(label).color(Color32::WHITE).strong().size(16.0))
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, theme::darker(base))),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    let hovered = response.hovered();
    if hovered != was_hovered {
        ui.data_mut(|d| d.insert_temp(hover_id, hovered));
        ui.ctx().request_repaint();
    }
    response
}
