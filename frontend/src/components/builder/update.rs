//! Update function for the form builder, Elm style: mutate the component
//! for one `Msg` and report whether the view must re-render.

use common::store::{Command, Outcome};
use gloo_file::futures::read_as_text;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::show_toast;
use crate::theme::store_dark_mode;

use super::messages::Msg;
use super::state::FormBuilderComponent;

pub fn update(
    component: &mut FormBuilderComponent,
    ctx: &Context<FormBuilderComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Store(command) => dispatch(component, command),
        Msg::AddField(field_type) => {
            component.show_field_picker = false;
            dispatch(component, Command::AddField(field_type));
            true
        }
        Msg::SetView(view) => {
            if component.view == view {
                return false;
            }
            component.view = view;
            true
        }
        Msg::ToggleDarkMode => {
            component.dark_mode = !component.dark_mode;
            store_dark_mode(component.dark_mode);
            true
        }
        Msg::ToggleFieldPicker => {
            component.show_field_picker = !component.show_field_picker;
            true
        }
        Msg::DragStart(index) => {
            component.dragging = Some(index);
            component.drop_target = None;
            true
        }
        Msg::DragOver(index) => {
            if component.drop_target == Some(index) {
                return false;
            }
            component.drop_target = Some(index);
            true
        }
        Msg::Drop(index) => {
            if let Some(from) = component.dragging.take() {
                dispatch(component, Command::Reorder { from, to: Some(index) });
            }
            component.drop_target = None;
            true
        }
        Msg::DragEnd => {
            // Released outside every card: the drop never happened.
            if let Some(from) = component.dragging.take() {
                dispatch(component, Command::Reorder { from, to: None });
            }
            component.drop_target = None;
            true
        }
        Msg::OpenFilePicker => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            let Some(file) = file else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let file = gloo_file::File::from(file);
                match read_as_text(&file).await {
                    Ok(text) => link.send_message(Msg::ImportLoaded(text)),
                    Err(err) => link.send_message(Msg::ImportReadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::ImportLoaded(text) => match component.store.apply(Command::Import(text)) {
            Ok(_) => {
                show_toast("Form imported successfully!");
                true
            }
            Err(err) => {
                gloo_console::error!(format!("import failed: {err}"));
                show_toast("Invalid JSON format");
                false
            }
        },
        Msg::ImportReadFailed(reason) => {
            gloo_console::error!(format!("could not read import file: {reason}"));
            show_toast("Invalid JSON format");
            false
        }
    }
}

/// Applies a command to the store; re-render only if something changed.
fn dispatch(component: &mut FormBuilderComponent, command: Command) -> bool {
    match component.store.apply(command) {
        Ok(Outcome::Unchanged) => false,
        Ok(_) => true,
        Err(err) => {
            gloo_console::error!(format!("command rejected: {err}"));
            false
        }
    }
}
