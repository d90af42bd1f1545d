use common::model::FieldType;
use common::store::Command;

use super::state::ViewMode;

pub enum Msg {
    /// Forward a mutation to the store.
    Store(Command),
    /// Add a field from the picker and fold the picker.
    AddField(FieldType),
    SetView(ViewMode),
    ToggleDarkMode,
    ToggleFieldPicker,
    DragStart(usize),
    DragOver(usize),
    Drop(usize),
    DragEnd,
    OpenFilePicker,
    FileSelected(Option<web_sys::File>),
    ImportLoaded(String),
    ImportReadFailed(String),
}
