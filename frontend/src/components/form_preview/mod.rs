//! Live preview of the form with interactive validation.
//!
//! The preview owns a `PreviewState` (values, touched flags, errors) and
//! re-reads the field list from its props on every render, so edits made in
//! the builder show up immediately. Switching views unmounts the preview and
//! discards whatever was typed.

use common::model::{FieldId, FieldValue};
use common::preview::PreviewState;
use yew::prelude::*;

mod props;
mod view;

pub use props::FormPreviewProps;

pub enum Msg {
    Change(FieldId, FieldValue),
    Focus(FieldId),
    Blur(FieldId),
    Submit,
}

pub struct FormPreview {
    pub state: PreviewState,
    pub focused: Option<FieldId>,
}

impl Component for FormPreview {
    type Message = Msg;
    type Properties = FormPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: PreviewState::new(),
            focused: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let fields = &ctx.props().fields;
        match msg {
            Msg::Change(id, value) => {
                self.state.change(id, value);
                true
            }
            Msg::Focus(id) => {
                self.focused = Some(id);
                true
            }
            Msg::Blur(id) => {
                self.focused = None;
                if let Some(field) = fields.iter().find(|field| field.id == id) {
                    self.state.blur(field);
                }
                true
            }
            Msg::Submit => {
                if self.state.submit(fields) {
                    gloo_console::info!("preview form submitted");
                } else {
                    gloo_console::debug!(format!(
                        "preview submit blocked by {} invalid fields",
                        self.state.error_count()
                    ));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
