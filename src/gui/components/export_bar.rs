// src/gui/components/export_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(420.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let export = &mut app.state.options.export;
        if ui.checkbox(&mut export.overwrite, "Overwrite").changed() {
            logf!("UI: overwrite → {}", export.overwrite);
        }

        ui.checkbox(&mut app.state.gui.show_records, "Show records");
    });

    // --- Actions (Save / Export) ---
    ui.horizontal(|ui| {
        if ui.button("Guardar registro").clicked() {
            actions::save(app);
        }

        let green = egui::Color32::from_rgb(30, 140, 70);
        if ui
            .add(egui::Button::new(egui::RichText::new("Exportar Excel").color(egui::Color32::WHITE).strong())
                .fill(green))
            .clicked()
        {
            actions::export(app);
        }

        ui.separator();
        ui.label(egui::RichText::new(app.counter.as_str()).strong());
        ui.separator();
        ui.label(format!("Status: {}", app.status));
    });
}
