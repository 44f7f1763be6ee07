// src/gui/components/notice.rs
//
// Blocking acknowledgment: a centered window over a locked form.
// Closed by "Aceptar" or Enter.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(msg) = app.notice.clone() else { return };

    let mut close = ctx.input(|i| i.key_pressed(egui::Key::Enter));

    egui::Window::new("Aviso")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(msg.as_str()).size(16.0));
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Aceptar").clicked() {
                    close = true;
                }
            });
        });

    if close {
        logd!("UI: notice acknowledged → {}", msg);
        app.notice = None;
    }
}
