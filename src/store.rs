// src/store.rs
//
// Session-scoped, append-only record list. Only `capture` mutates it;
// nothing is ever edited or removed, and nothing survives the process.

use crate::config::consts::MSG_SAVED;
use crate::form::FormUi;
use crate::record::Record;

#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self { Self::default() }

    /// Snapshot the form into a new record and append it.
    /// Then: counter, confirmation, cleared form. Never fails.
    pub fn capture(&mut self, ui: &mut dyn FormUi) -> &Record {
        let record = Record::from_source(&*ui);
        let blank = record.is_blank();
        self.records.push(record);

        let count = self.records.len();
        logf!("Capture: record #{} (id={:?}, blank={})", count, self.records[count - 1].id, blank);

        ui.show_count(count);
        ui.notify_user(MSG_SAVED);
        ui.clear_all_inputs();

        &self.records[count - 1]
    }

    pub fn count(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Capture order.
    pub fn records(&self) -> &[Record] { &self.records }
}

/// "Registros guardados: N"
pub fn counter_text(count: usize) -> String {
    format!("{}: {count}", crate::config::consts::COUNTER_LABEL)
}
