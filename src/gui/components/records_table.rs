// src/gui/components/records_table.rs
//
// Read-only view of everything captured this session, in capture order.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, record::COLUMNS};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let records = app.store.records();
    if records.is_empty() {
        ui.weak("Sin registros guardados.");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("records_hscroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .column(Column::exact(32.0))
                .columns(Column::auto().at_least(48.0).resizable(true).clip(true), COLUMNS.len())
                .header(20.0, |mut header| {
                    header.col(|ui| { ui.strong("#"); });
                    for name in COLUMNS {
                        header.col(|ui| { ui.strong(*name); });
                    }
                })
                .body(|body| {
                    body.rows(18.0, records.len(), |mut row| {
                        let ix = row.index();
                        row.col(|ui| { ui.label((ix + 1).to_string()); });
                        for value in records[ix].values() {
                            row.col(|ui| { ui.label(value); });
                        }
                    });
                });
        });
}
