//! Form builder: root component owning the schema store.
//!
//! Responsibilities
//! - Hold the single `FormStore` and hand snapshots of it to the builder
//!   canvas, the field editor, the preview and the JSON view.
//! - Turn DOM events (clicks, drags, file picks) into store commands.
//! - Load and persist the dark-mode preference.

use yew::prelude::*;

mod cards;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{FormBuilderComponent, ViewMode};

impl Component for FormBuilderComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let dark_mode = crate::theme::load_dark_mode();
        crate::theme::apply_dark_class(dark_mode);
        FormBuilderComponent::new(dark_mode)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
