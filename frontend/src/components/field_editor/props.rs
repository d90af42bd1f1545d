use common::model::{FieldDefinition, FieldPatch};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FieldEditorProps {
    /// Snapshot of the selected field.
    pub field: FieldDefinition,
    /// Receives one patch per edit; a label edit carries the derived name too.
    pub on_update: Callback<FieldPatch>,
    pub on_remove: Callback<()>,
}
