//! Theme configuration for egui.
//!
//! Dark agenda theme: slate background, near-black table, white text.

use egui::{Color32, FontFamily, FontId, Stroke, TextStyle};

pub const BACKGROUND: Color32 = Color32::from_rgb(34, 40, 49);
pub const TABLE_PANEL: Color32 = Color32::from_rgb(19, 19, 27);
pub const TABLE_HEADER: Color32 = Color32::from_rgb(57, 62, 70);
pub const TABLE_STRIPE: Color32 = Color32::from_rgb(28, 30, 40);
pub const BORDER: Color32 = Color32::from_rgb(85, 85, 85);
pub const TEXT: Color32 = Color32::WHITE;

pub const ADD_BUTTON: Color32 = Color32::from_rgb(13, 165, 131);
pub const DELETE_BUTTON: Color32 = Color32::from_rgb(220, 53, 69);

pub const TOAST_INFO: Color32 = Color32::from_rgb(251, 214, 32);
pub const TOAST_SUCCESS: Color32 = Color32::from_rgb(3, 175, 175);
pub const TOAST_DANGER: Color32 = Color32::from_rgb(186, 10, 10);

pub const BODY_SIZE: f32 = 16.0;
pub const HEADER_SIZE: f32 = 18.0;
pub const ROW_HEIGHT: f32 = 30.0;

/// Apply the dark theme to egui context.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    // Panel colors
    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = BACKGROUND;
    style.visuals.extreme_bg_color = TABLE_PANEL;
    style.visuals.faint_bg_color = TABLE_STRIPE;

    // Text colors
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT);
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);

    // Selection
    style.visuals.selection.bg_fill = TABLE_HEADER;
    style.visuals.selection.stroke = Stroke::new(1.0, TEXT);

    // Typography
    style.text_styles.insert(
        TextStyle::Body,
        FontId::new(BODY_SIZE, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Button,
        FontId::new(BODY_SIZE, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Heading,
        FontId::new(HEADER_SIZE, FontFamily::Proportional),
    );

    // Spacing
    style.spacing.item_spacing = egui::vec2(15.0, 10.0);
    style.spacing.window_margin = 15.0.into();
    style.spacing.button_padding = egui::vec2(20.0, 10.0);

    ctx.set_style(style);
}

/// Darken a color the way AWT's `Color::darker` does (factor 0.7).
pub fn darker(color: Color32) -> Color32 {
    let scale = |c: u8| (u16::from(c) * 7 / 10) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darker() {
        assert_eq!(darker(Color32::from_rgb(100, 200, 10)), Color32::from_rgb(70, 140, 7));
        assert_eq!(darker(Color32::BLACK), Color32::BLACK);
    }
}
