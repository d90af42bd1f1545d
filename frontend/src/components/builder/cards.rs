//! Field cards shown on the builder canvas.
//!
//! Each card is a native HTML5 drag source and drop target. Dropping card
//! `from` on card `to` reorders the store; a drag released anywhere else
//! ends with `Msg::DragEnd` and leaves the order alone.

use common::model::{FieldDefinition, FieldType};
use common::store::Command;
use yew::html::Scope;
use yew::prelude::*;

use crate::config::DRAG_DATA_FORMAT;

use super::messages::Msg;
use super::state::FormBuilderComponent;

fn icon_for(field_type: FieldType) -> &'static str {
    common::catalog::entry(field_type).icon
}

pub fn field_card(
    component: &FormBuilderComponent,
    field: &FieldDefinition,
    index: usize,
    link: &Scope<FormBuilderComponent>,
) -> Html {
    let id = field.id;
    let selected = component.store.selected() == Some(id);
    let dragging = component.dragging == Some(index);
    let drop_target = component.drop_target == Some(index) && !dragging;

    let ondragstart = link.callback(move |e: DragEvent| {
        if let Some(transfer) = e.data_transfer() {
            transfer.set_data(DRAG_DATA_FORMAT, &index.to_string()).ok();
        }
        Msg::DragStart(index)
    });
    let ondragover = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::DragOver(index)
    });
    let ondrop = link.callback(move |e: DragEvent| {
        e.prevent_default();
        Msg::Drop(index)
    });
    let ondragend = link.callback(|_: DragEvent| Msg::DragEnd);

    let on_duplicate = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::Store(Command::DuplicateField(id))
    });
    let on_remove = link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::Store(Command::RemoveField(id))
    });

    html! {
        <div
            key={id.to_string()}
            class={classes!(
                "field-card",
                selected.then_some("selected"),
                dragging.then_some("dragging"),
                drop_target.then_some("drop-target")
            )}
            draggable="true"
            {ondragstart}
            {ondragover}
            {ondrop}
            {ondragend}
            onclick={link.callback(move |_| Msg::Store(Command::Select(id)))}
        >
            <div class="drag-handle"><i class="material-icons">{"drag_indicator"}</i></div>
            <div class={classes!("field-icon", (field.field_type() == FieldType::Checkbox).then_some("checkbox"))}>
                <i class="material-icons">{ icon_for(field.field_type()) }</i>
            </div>
            <div class="field-info">
                <div class="field-title">
                    <h3>{ field.label.clone() }</h3>
                    { if field.required { html! { <span class="required">{"*"}</span> } } else { html! {} } }
                    { if selected { html! { <span class="badge">{"Editing"}</span> } } else { html! {} } }
                </div>
                <span class="field-name">{ field.name.clone() }</span>
                { field_sample(field) }
                {
                    if field.help_text.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="help-text">{ field.help_text.clone() }</p> }
                    }
                }
            </div>
            <div class="field-actions">
                <button class="icon-btn" title="Duplicate field" onclick={on_duplicate}>
                    <i class="material-icons">{"content_copy"}</i>
                </button>
                <button class="icon-btn danger" title="Remove field" onclick={on_remove}>
                    <i class="material-icons">{"delete"}</i>
                </button>
            </div>
        </div>
    }
}

/// Inert rendering of the input, so the card hints at what the user will see.
fn field_sample(field: &FieldDefinition) -> Html {
    match field.field_type() {
        FieldType::Text | FieldType::Email => {
            let hint = if field.placeholder.is_empty() {
                "Enter text..."
            } else {
                field.placeholder.as_str()
            };
            html! { <div class="sample sample-input">{ hint.to_string() }</div> }
        }
        FieldType::Select => {
            let hint = if field.placeholder.is_empty() {
                "Select an option..."
            } else {
                field.placeholder.as_str()
            };
            html! {
                <div class="sample sample-select">
                    { hint.to_string() }
                    <span class="option-count">{ format!("{} options", field.options().len()) }</span>
                </div>
            }
        }
        FieldType::Checkbox => html! {
            <div class="sample sample-checkbox">
                <span class="box" />
                { field.checkbox_caption().to_string() }
            </div>
        },
    }
}
