//! Field editor: edits the selected field through three facets (basic,
//! validation, options).
//!
//! The editor keeps no copy of the field. Every edit becomes a
//! `FieldPatch` sent to the parent through `on_update`; the parent applies
//! it to the store and re-renders the editor with the updated field.

use common::editor::EditorTab;
use yew::prelude::*;

mod messages;
mod props;
mod view;

pub use messages::Msg;
pub use props::FieldEditorProps;

pub struct FieldEditor {
    /// Facet currently shown.
    pub active_tab: EditorTab,
}

impl Component for FieldEditor {
    type Message = Msg;
    type Properties = FieldEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: EditorTab::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                let changed = self.active_tab != tab;
                self.active_tab = tab;
                changed
            }
            Msg::Patch(patch) => {
                ctx.props().on_update.emit(patch);
                false
            }
            Msg::Remove => {
                ctx.props().on_remove.emit(());
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().field.id != old_props.field.id {
            self.active_tab = EditorTab::Basic;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
