use crate::model::{FieldId, FieldPatch, FieldType};

/// A single mutation of the [`FormStore`](super::FormStore).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddField(FieldType),
    UpdateField { id: FieldId, patch: FieldPatch },
    RemoveField(FieldId),
    DuplicateField(FieldId),
    /// `to: None` is a drag released outside any drop target.
    Reorder { from: usize, to: Option<usize> },
    Select(FieldId),
    Deselect,
    SetTitle(String),
    SetDescription(String),
    /// Replace the schema with the JSON document in the payload.
    Import(String),
}

/// What applying a [`Command`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing observable changed (unknown id, out-of-range index, same value).
    Unchanged,
    Changed,
    /// A field was added or duplicated and is now selected.
    Created(FieldId),
    Imported(ImportSummary),
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub field_count: usize,
    pub title_replaced: bool,
    pub description_replaced: bool,
}
