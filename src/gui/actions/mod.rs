// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{save,export}.

mod export;  // src/gui/actions/export.rs
mod save;    // src/gui/actions/save.rs

pub use export::export;
pub use save::save;

use crate::{
    form::{FieldSource, FormState, FormUi},
    store,
};

/// The window as seen by capture/export: form inputs, counter, modal notice.
pub(super) struct GuiForm<'a> {
    pub form: &'a mut FormState,
    pub counter: &'a mut String,
    pub notice: &'a mut Option<String>,
}

impl FieldSource for GuiForm<'_> {
    fn value(&self, id: &str) -> Option<String> {
        self.form.value(id)
    }
}

impl FormUi for GuiForm<'_> {
    fn clear_all_inputs(&mut self) {
        self.form.clear();
    }
    fn notify_user(&mut self, msg: &str) {
        *self.notice = Some(s!(msg));
    }
    fn show_count(&mut self, count: usize) {
        *self.counter = store::counter_text(count);
    }
}
