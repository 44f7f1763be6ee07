// src/form.rs
//
// What capture/export need from a frontend: read an input by id, clear the
// form, show the counter, tell the user something. GUI and CLI implement
// `FormUi`; `FormState` is the plain in-memory form both of them wrap.

use std::collections::HashMap;

use crate::record::{COLUMNS, is_known_field};

/// Read side of the form. `None` means the input does not exist.
pub trait FieldSource {
    fn value(&self, id: &str) -> Option<String>;
}

/// A frontend as seen by the record store and the exporter.
pub trait FormUi: FieldSource {
    /// Reset every input to "".
    fn clear_all_inputs(&mut self);

    /// Blocking acknowledgment ("saved", "nothing to export").
    fn notify_user(&mut self, msg: &str);

    /// Visible counter of captured records.
    fn show_count(&mut self, _count: usize) {}
}

/// In-memory form: one text value per known input.
#[derive(Clone, Debug)]
pub struct FormState {
    values: HashMap<&'static str, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: COLUMNS.iter().map(|&id| (id, s!())).collect(),
        }
    }
}

impl FormState {
    pub fn new() -> Self { Self::default() }

    /// Set one input. Unknown ids are rejected.
    pub fn set(&mut self, id: &str, value: impl Into<String>) -> Result<(), String> {
        match self.values.get_mut(id) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(format!("Unknown field: {id}")),
        }
    }

    /// Mutable handle for a text widget.
    pub fn value_mut(&mut self, id: &str) -> Option<&mut String> {
        self.values.get_mut(id)
    }

    pub fn clear(&mut self) {
        for v in self.values.values_mut() {
            v.clear();
        }
    }

    /// Number of inputs holding something.
    pub fn filled(&self) -> usize {
        self.values.values().filter(|v| !v.is_empty()).count()
    }

    /// Parse `ID=VALUE` (as typed on the command line) into the form.
    pub fn apply_assignment(&mut self, text: &str) -> Result<(), String> {
        let (id, value) = text
            .split_once('=')
            .ok_or_else(|| format!("Expected FIELD=VALUE, got: {text}"))?;
        let id = id.trim();
        if !is_known_field(id) {
            return Err(format!("Unknown field: {id}"));
        }
        self.set(id, value.trim())
    }
}

impl FieldSource for FormState {
    fn value(&self, id: &str) -> Option<String> {
        self.values.get(id).cloned()
    }
}
