//! Interaction state of the live form preview.
//!
//! Values, touched flags and shown errors are keyed by field id, so two
//! fields sharing a `name` never overwrite each other's input.

use std::collections::{HashMap, HashSet};

use crate::model::{FieldDefinition, FieldId, FieldValue};
use crate::validation::first_violation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    values: HashMap<FieldId, FieldValue>,
    touched: HashSet<FieldId>,
    errors: HashMap<FieldId, String>,
    submitted: bool,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, id: FieldId) -> Option<&FieldValue> {
        self.values.get(&id)
    }

    /// Current text of a text-like input, empty when nothing was typed.
    pub fn text(&self, id: FieldId) -> &str {
        self.value(id).and_then(FieldValue::as_text).unwrap_or_default()
    }

    pub fn is_checked(&self, id: FieldId) -> bool {
        self.value(id).is_some_and(FieldValue::is_checked)
    }

    pub fn is_touched(&self, id: FieldId) -> bool {
        self.touched.contains(&id)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Stores a new value. Any error shown for the field is stale from now
    /// until the next blur or submit.
    pub fn change(&mut self, id: FieldId, value: FieldValue) {
        self.values.insert(id, value);
        self.errors.remove(&id);
    }

    /// Marks the field touched and shows its first violation, if any.
    pub fn blur(&mut self, field: &FieldDefinition) {
        self.touched.insert(field.id);
        if let Some(message) = first_violation(field, self.values.get(&field.id)) {
            self.errors.insert(field.id, message);
        }
    }

    /// Validates every field. Returns `true` and enters the submitted state
    /// when nothing is violated; otherwise the per-field errors are shown.
    pub fn submit(&mut self, fields: &[FieldDefinition]) -> bool {
        self.touched = fields.iter().map(|field| field.id).collect();
        self.errors = fields
            .iter()
            .filter_map(|field| {
                first_violation(field, self.values.get(&field.id)).map(|message| (field.id, message))
            })
            .collect();
        if self.errors.is_empty() {
            self.submitted = true;
        }
        self.errors.is_empty()
    }

    /// Error to display under a field; only touched fields show one.
    pub fn error_for(&self, id: FieldId) -> Option<&str> {
        if self.is_touched(id) {
            self.errors.get(&id).map(String::as_str)
        } else {
            None
        }
    }

    /// Touched, without error and holding a value.
    pub fn is_valid(&self, id: FieldId) -> bool {
        self.is_touched(id)
            && !self.errors.contains_key(&id)
            && self.value(id).is_some_and(|value| !value.is_empty())
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
