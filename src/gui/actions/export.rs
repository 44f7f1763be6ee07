// src/gui/actions/export.rs
use crate::{export::{self, ExportOutcome}, gui::app::App};
use super::GuiForm;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }

    let status_msg = {
        let mut ui = GuiForm {
            form: &mut app.form,
            counter: &mut app.counter,
            notice: &mut app.notice,
        };

        match export::export(&app.store, &app.state.options.export, &mut ui) {
            Ok(ExportOutcome::Written(path)) => format!("Exported {} record(s) → {}", app.store.count(), path.display()),
            Ok(ExportOutcome::Empty) => s!("Nothing to export"),
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        }
    };

    app.status(status_msg);
}
