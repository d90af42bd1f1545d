use common::editor::EditorTab;
use common::model::FieldPatch;

pub enum Msg {
    SetTab(EditorTab),
    Patch(FieldPatch),
    Remove,
}
