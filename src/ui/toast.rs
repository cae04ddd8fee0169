//! Transient, auto-dismissing notifications.
//!
//! Toasts are stacked near the bottom of the window and expire on the UI loop:
//! every frame the tray drops expired entries and schedules a repaint for the
//! next expiry. Nothing runs off the UI thread.

use crate::ui::theme;
use egui::{Align2, Color32, Frame, Margin, RichText};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Danger,
}

impl ToastKind {
    pub fn color(self) -> Color32 {
        match self {
            ToastKind::Info => theme::TOAST_INFO,
            ToastKind::Success => theme::TOAST_SUCCESS,
            ToastKind::Danger => theme::TOAST_DANGER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Owns every visible toast. Newest toast is at the back.
#[derive(Debug)]
pub struct ToastTray {
    toasts: VecDeque<Toast>,
    duration: Duration,
    capacity: usize,
}

impl ToastTray {
    pub fn new(duration: Duration, capacity: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
            capacity: capacity.max(1),
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        tracing::debug!(?kind, %message, "toast");
        while self.toasts.len() >= self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message,
            kind,
            expires_at: now + self.duration,
        });
    }

    /// Drop expired toasts and return how long until the next one expires.
    pub fn prune(&mut self, now: Instant) -> Option<Duration> {
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts
            .iter()
            .map(|t| t.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        if let Some(next) = self.prune(Instant::now()) {
            ctx.request_repaint_after(next);
        }
        if self.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toast_tray"))
            .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -90.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    for toast in self.iter() {
                        Frame::none()
                            .fill(toast.kind.color())
                            .rounding(6.0)
                            .inner_margin(Margin::symmetric(20.0, 10.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(&toast.message)
                                        .color(Color32::WHITE)
                                        .strong()
                                        .size(14.0),
                                );
                            });
                        ui.add_space(6.0);
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tray() -> ToastTray {
        ToastTray::new(Duration::from_secs(2), 3)
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let mut tray = tray();
        let start = Instant::now();
        tray.show_at("hola", ToastKind::Info, start);

        assert_eq!(tray.prune(start), Some(Duration::from_secs(2)));
        assert_eq!(
            tray.prune(start + Duration::from_millis(1500)),
            Some(Duration::from_millis(500))
        );
        assert_eq!(tray.prune(start + Duration::from_secs(2)), None);
        assert!(tray.is_empty());
    }

    #[test]
    fn test_toasts_stack_independently() {
        let mut tray = tray();
        let start = Instant::now();
        tray.show_at("a", ToastKind::Success, start);
        tray.show_at("b", ToastKind::Danger, start + Duration::from_secs(1));

        tray.prune(start + Duration::from_millis(2500));
        let left: Vec<&str> = tray.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["b"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut tray = tray();
        let start = Instant::now();
        for msg in ["1", "2", "3", "4"] {
            tray.show_at(msg, ToastKind::Info, start);
        }
        let left: Vec<&str> = tray.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(ToastKind::Info.color(), Color32::from_rgb(251, 214, 32));
        assert_eq!(ToastKind::Success.color(), Color32::from_rgb(3, 175, 175));
        assert_eq!(ToastKind::Danger.color(), Color32::from_rgb(186, 10, 10));
    }
}
