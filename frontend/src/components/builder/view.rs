//! View rendering for the form builder.
//!
//! A header with the view switcher and the dark-mode toggle sits above one
//! of three panes:
//! - Builder: sidebar (field picker, form details, import/export), the
//!   canvas of draggable field cards and, when a field is selected, the
//!   field editor.
//! - Preview: the live form.
//! - JSON: the export document.

use common::catalog::FIELD_CATALOG;
use common::config::EXPORT_FILE_NAME;
use common::model::{FieldPatch, FieldType};
use common::serializer::export_json;
use common::store::Command;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::field_editor::FieldEditor;
use crate::components::form_preview::FormPreview;
use crate::components::json_export::JsonExport;

use super::cards::field_card;
use super::messages::Msg;
use super::state::{FormBuilderComponent, ViewMode};

pub fn view(component: &FormBuilderComponent, ctx: &Context<FormBuilderComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class={classes!("app-root", component.dark_mode.then_some("dark"))}>
            { build_header(component, link) }
            <main class="main">
                {
                    match component.view {
                        ViewMode::Builder => build_builder_view(component, link),
                        ViewMode::Preview => build_preview_view(component),
                        ViewMode::Json => build_json_view(component),
                    }
                }
            </main>
        </div>
    }
}

fn build_header(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    let toggle_title = if component.dark_mode {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };
    html! {
        <header class="header">
            <div class="view-switcher">
                { for ViewMode::ALL.iter().map(|mode| {
                    let mode = *mode;
                    html! {
                        <button
                            class={classes!("tab-btn", (component.view == mode).then_some("active"))}
                            onclick={link.callback(move |_| Msg::SetView(mode))}
                        >
                            <i class="material-icons">{mode.icon()}</i>
                            <span>{mode.label()}</span>
                        </button>
                    }
                }) }
            </div>
            <div class="brand">
                <span class="brand-name">{"Form Builder"}</span>
                <p class="brand-motto">{"Create beautiful forms"}</p>
            </div>
            <button
                class="icon-btn theme-toggle"
                title={toggle_title}
                onclick={link.callback(|_| Msg::ToggleDarkMode)}
            >
                <i class="material-icons">{ if component.dark_mode { "dark_mode" } else { "light_mode" } }</i>
            </button>
        </header>
    }
}

fn build_builder_view(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    html! {
        <div class="builder">
            { build_sidebar(component, link) }
            { build_canvas(component, link) }
            { build_editor_panel(component, link) }
        </div>
    }
}

fn build_sidebar(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    html! {
        <aside class="card sidebar">
            <div class="sidebar-header">
                <h2>{"Add Fields"}</h2>
                <span class="badge">{ component.field_count_label() }</span>
            </div>
            <button class="btn-primary" onclick={link.callback(|_| Msg::ToggleFieldPicker)}>
                <i class="material-icons">{"add"}</i>
                {"Add New Field"}
            </button>
            {
                if component.show_field_picker {
                    build_field_picker(link)
                } else {
                    html! {}
                }
            }
            { build_form_details(component, link) }
            { build_actions(component, link) }
        </aside>
    }
}

fn build_field_picker(link: &Scope<FormBuilderComponent>) -> Html {
    html! {
        <div class="field-picker">
            { for FIELD_CATALOG.iter().map(|entry| {
                let field_type = entry.field_type;
                html! {
                    <button
                        key={field_type.as_str()}
                        class="picker-entry"
                        onclick={link.callback(move |_| Msg::AddField(field_type))}
                    >
                        <i class="material-icons">{entry.icon}</i>
                        <div class="picker-text">
                            <p class="picker-label">{entry.label}</p>
                            <p class="picker-description">{entry.description}</p>
                        </div>
                    </button>
                }
            }) }
        </div>
    }
}

fn build_form_details(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    html! {
        <div class="form-details">
            <h3>{"Form Details"}</h3>
            <label class="label">{"Form Title"}</label>
            <input
                type="text"
                class="input"
                placeholder="Enter form title"
                value={component.store.title().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Store(Command::SetTitle(input.value()))
                })}
            />
            <label class="label">{"Description"}</label>
            <textarea
                class="input"
                rows="2"
                placeholder="Enter form description"
                value={component.store.description().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Store(Command::SetDescription(input.value()))
                })}
            />
        </div>
    }
}

fn build_actions(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    html! {
        <div class="actions">
            <JsonExport json={export_text(component)} file_name={EXPORT_FILE_NAME} show_copy={true} />
            <button class="btn-secondary" onclick={link.callback(|_| Msg::OpenFilePicker)}>
                <i class="material-icons">{"upload"}</i>
                {"Import"}
            </button>
            <input
                ref={component.file_input_ref.clone()}
                type="file"
                accept=".json"
                style="display: none;"
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let file = input.files().and_then(|files| files.get(0));
                    // Allow picking the same file again.
                    input.set_value("");
                    Msg::FileSelected(file)
                })}
            />
        </div>
    }
}

fn build_canvas(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    let fields = component.store.fields();
    html! {
        <section class="card canvas">
            <div class="canvas-header">
                <div>
                    <h2>{ component.store.title().to_string() }</h2>
                    <p class="hint">{"Drag to reorder, click to edit"}</p>
                </div>
                <span class="badge">{ component.field_count_label() }</span>
            </div>
            {
                if fields.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"Click \"Add New Field\" to start building your form. Choose from text, email, dropdown, or checkbox fields."}</p>
                            <button
                                class="btn-primary"
                                onclick={link.callback(|_| Msg::AddField(FieldType::Text))}
                            >
                                {"Add Text Field"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="field-list">
                            { for fields.iter().enumerate().map(|(index, field)| {
                                field_card(component, field, index, link)
                            }) }
                        </div>
                    }
                }
            }
        </section>
    }
}

fn build_editor_panel(component: &FormBuilderComponent, link: &Scope<FormBuilderComponent>) -> Html {
    let Some(field) = component.store.selected_field() else {
        return html! {};
    };
    let id = field.id;
    let on_update = link.callback(move |patch: FieldPatch| {
        Msg::Store(Command::UpdateField { id, patch })
    });
    let on_remove = link.callback(move |_: ()| Msg::Store(Command::RemoveField(id)));

    html! {
        <aside class="card editor-panel">
            <div class="editor-panel-header">
                <h2>{"Field Settings"}</h2>
                <button
                    class="icon-btn"
                    title="Close"
                    onclick={link.callback(|_| Msg::Store(Command::Deselect))}
                >
                    <i class="material-icons">{"close"}</i>
                </button>
            </div>
            <FieldEditor field={field.clone()} {on_update} {on_remove} />
        </aside>
    }
}

fn build_preview_view(component: &FormBuilderComponent) -> Html {
    html! {
        <FormPreview
            title={component.store.title().to_string()}
            description={component.store.description().to_string()}
            fields={component.store.fields().to_vec()}
        />
    }
}

fn build_json_view(component: &FormBuilderComponent) -> Html {
    let json = export_text(component);
    html! {
        <div class="card json-view">
            <div class="json-header">
                <div>
                    <h2>{"JSON Schema"}</h2>
                    <p class="hint">{"Export your form configuration"}</p>
                </div>
                <JsonExport json={json.clone()} file_name={EXPORT_FILE_NAME} show_copy={false} />
            </div>
            <pre class="json-output">{ json.to_string() }</pre>
        </div>
    }
}

/// Current export document; an empty string if serialization failed.
fn export_text(component: &FormBuilderComponent) -> AttrValue {
    match export_json(&component.store) {
        Ok(text) => AttrValue::from(text),
        Err(err) => {
            gloo_console::error!(format!("export failed: {err}"));
            AttrValue::default()
        }
    }
}
