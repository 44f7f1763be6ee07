// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::WINDOW_TITLE, state::AppState},
    form::FormState,
    store::{self, RecordStore},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // the form being filled in, and everything saved this session
    pub form: FormState,
    pub store: RecordStore,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // "Registros guardados: N"
    pub counter: String,

    // status line under the buttons
    pub status: String,

    // modal message; the form is locked until it's acknowledged
    pub notice: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text: String = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: inputs={} + date, out={}", crate::record::FIELD_NAMES.len(), out_path_text);

        Self {
            state,
            form: FormState::new(),
            store: RecordStore::new(),
            out_path_text,
            out_path_dirty: false,
            counter: store::counter_text(0),
            status: s!("Idle"),
            notice: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.notice.is_some()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let locked = self.is_locked();

        egui::TopBottomPanel::bottom("export_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!locked, |ui| {
                crate::gui::components::export_bar::draw(ui, self);
            });
        });

        if self.state.gui.show_records {
            egui::TopBottomPanel::bottom("records")
                .resizable(true)
                .default_height(180.0)
                .show(ctx, |ui| {
                    crate::gui::components::records_table::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!locked, |ui| {
                crate::gui::components::form_panel::draw(ui, self);
            });
        });

        crate::gui::components::notice::draw(ctx, self);
    }
}
