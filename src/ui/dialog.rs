// src/ui/dialog.rs
use eframe::egui;

use crate::state::AppState;

/// Error and notice windows. Both are dismissed with OK.
pub fn show_messages(ctx: &egui::Context, state: &mut AppState) {
    if let Some(error) = state.error_message.clone() {
        if message_window(ctx, "Error", &error) {
            state.error_message = None;
        }
    }

    if let Some(notice) = state.notice.clone() {
        if message_window(ctx, "Aviso", &notice) {
            state.notice = None;
        }
    }
}

// Returns true once OK was clicked
fn message_window(ctx: &egui::Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
        .show(ctx, |ui| {
            ui.label(message);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    dismissed
}
