// src/gui/actions/save.rs
use crate::gui::app::App;
use super::GuiForm;

pub fn save(app: &mut App) {
    let mut ui = GuiForm {
        form: &mut app.form,
        counter: &mut app.counter,
        notice: &mut app.notice,
    };
    let record = app.store.capture(&mut ui);
    let id = record.id.clone();

    app.status(if id.is_empty() {
        s!("Saved record without ID")
    } else {
        format!("Saved record ID={id}")
    });
}
