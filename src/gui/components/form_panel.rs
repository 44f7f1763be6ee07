// src/gui/components/form_panel.rs
//
// One text input per field, grouped by section. Values are free text;
// nothing is parsed or validated here.

use eframe::egui;
use crate::{gui::app::App, record::{DATE_FIELD, SECTIONS}};

const LABEL_W: f32 = 120.0;
const INPUT_W: f32 = 160.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Registro antropométrico");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("form_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (section, ids) in SECTIONS {
                egui::CollapsingHeader::new(*section)
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::Grid::new(("form_grid", *section))
                            .num_columns(4)
                            .spacing([12.0, 6.0])
                            .show(ui, |ui| {
                                for (i, id) in ids.iter().enumerate() {
                                    input_row(ui, app, id);
                                    // two label/input pairs per row
                                    if i % 2 == 1 { ui.end_row(); }
                                }
                                if ids.len() % 2 == 1 { ui.end_row(); }
                            });
                    });
            }
        });
}

fn input_row(ui: &mut egui::Ui, app: &mut App, id: &str) {
    ui.add_sized([LABEL_W, 18.0], egui::Label::new(id));

    let Some(value) = app.form.value_mut(id) else {
        ui.label("—");
        return;
    };

    let mut edit = egui::TextEdit::singleline(value).desired_width(INPUT_W);
    if id == DATE_FIELD {
        edit = edit.hint_text("AAAA-MM-DD");
    }
    ui.add(edit);
}
