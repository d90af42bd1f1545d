//! View rendering for the field editor.

use common::editor::{
    add_option, move_option, remove_option, update_option, with_max_length, with_min_length,
    Direction, EditorTab, OptionAttr,
};
use common::model::{FieldDefinition, FieldPatch, FieldType, SelectOption, TextValidation};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::FieldEditor;

pub fn view(editor: &FieldEditor, ctx: &Context<FieldEditor>) -> Html {
    let link = ctx.link();
    let field = &ctx.props().field;
    let tabs = EditorTab::available(field.field_type() == FieldType::Select);
    let active = if tabs.contains(&editor.active_tab) {
        editor.active_tab
    } else {
        EditorTab::Basic
    };

    html! {
        <div class="field-editor">
            { build_header(field, link) }
            <div class="tab-bar">
                { for tabs.into_iter().map(|tab| html! {
                    <button
                        key={tab.title()}
                        class={classes!("tab-btn", (tab == active).then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetTab(tab))}
                    >
                        { tab.title() }
                    </button>
                }) }
            </div>
            {
                match active {
                    EditorTab::Basic => build_basic_tab(field, link),
                    EditorTab::Validation => build_validation_tab(field, link),
                    EditorTab::Options => build_options_tab(field.options(), link),
                }
            }
        </div>
    }
}

fn build_header(field: &FieldDefinition, link: &Scope<FieldEditor>) -> Html {
    html! {
        <div class="editor-header">
            <div>
                <span class="badge">{ field.field_type().as_str() }</span>
                <p class="field-name">{ field.name.clone() }</p>
            </div>
            <button
                class="icon-btn danger"
                title="Remove field"
                onclick={link.callback(|_| Msg::Remove)}
            >
                <i class="material-icons">{"delete"}</i>
            </button>
        </div>
    }
}

/// Text input that turns each keystroke into a patch.
fn text_input(
    link: &Scope<FieldEditor>,
    value: &str,
    placeholder: &'static str,
    to_patch: impl Fn(String) -> FieldPatch + 'static,
) -> Html {
    html! {
        <input
            type="text"
            class="input"
            value={value.to_string()}
            {placeholder}
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Patch(to_patch(input.value()))
            })}
        />
    }
}

fn build_basic_tab(field: &FieldDefinition, link: &Scope<FieldEditor>) -> Html {
    let required = field.required;
    let placeholder_hint = if field.field_type() == FieldType::Select {
        "Select an option..."
    } else {
        "Enter text..."
    };

    html! {
        <div class="tab-content">
            <div>
                <label class="label">{"Label"}<span class="required">{"*"}</span></label>
                { text_input(link, &field.label, "Enter field label", |value| FieldPatch::label(value)) }
            </div>
            <div>
                <label class="label">{"Field Name"}</label>
                { text_input(link, &field.name, "field_name", |value| FieldPatch::name(value)) }
                <p class="hint">{"Used for form submission data"}</p>
            </div>
            {
                if field.field_type().supports_placeholder() {
                    html! {
                        <div>
                            <label class="label">{"Placeholder"}</label>
                            { text_input(link, &field.placeholder, placeholder_hint, |value| FieldPatch::placeholder(value)) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div>
                <label class="label">{"Help Text"}</label>
                { text_input(link, &field.help_text, "Additional information for users", |value| FieldPatch::help_text(value)) }
                <p class="hint">{"Show below the field to help users"}</p>
            </div>
            <div class="toggle-row">
                <div>
                    <span class="toggle-title">{"Required"}</span>
                    <span class="hint">{"Users must fill this"}</span>
                </div>
                <button
                    class={classes!("toggle", required.then_some("on"))}
                    onclick={link.callback(move |_| Msg::Patch(FieldPatch::required(!required)))}
                >
                    <span class="knob" />
                </button>
            </div>
        </div>
    }
}

fn length_input(
    link: &Scope<FieldEditor>,
    label: &'static str,
    hint: &'static str,
    current: Option<usize>,
    apply: impl Fn(&str) -> TextValidation + 'static,
) -> Html {
    html! {
        <div class="length-input">
            <label class="label">{label}</label>
            <input
                type="number"
                class="input"
                min="0"
                placeholder="None"
                value={current.map(|n| n.to_string()).unwrap_or_default()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Patch(FieldPatch::validation(apply(&input.value())))
                })}
            />
            <p class="hint">{hint}</p>
        </div>
    }
}

fn notice(title: &'static str, body: &'static str) -> Html {
    html! {
        <div class="notice">
            <i class="material-icons">{"check_circle"}</i>
            <div>
                <p class="notice-title">{title}</p>
                <p class="hint">{body}</p>
            </div>
        </div>
    }
}

fn build_validation_tab(field: &FieldDefinition, link: &Scope<FieldEditor>) -> Html {
    let specific = match field.text_validation() {
        Some(validation) => {
            let validation = *validation;
            html! {
                <div class="length-grid">
                    { length_input(link, "Min Length", "Minimum characters", validation.min_length,
                        move |input| with_min_length(validation, input)) }
                    { length_input(link, "Max Length", "Maximum characters", validation.max_length,
                        move |input| with_max_length(validation, input)) }
                </div>
            }
        }
        None => match field.field_type() {
            FieldType::Email => notice(
                "Email format validation enabled",
                "Email addresses are automatically validated",
            ),
            FieldType::Checkbox => notice(
                "Checkbox validation available",
                "Require the checkbox to be checked",
            ),
            _ => html! {},
        },
    };

    html! {
        <div class="tab-content">
            { specific }
            <div class="notice">
                <i class="material-icons">{"info"}</i>
                <div>
                    <p class="notice-title">{"Validation in Preview"}</p>
                    <p class="hint">{"Validation rules are applied in preview mode to test user experience."}</p>
                </div>
            </div>
        </div>
    }
}

fn build_options_tab(options: &[SelectOption], link: &Scope<FieldEditor>) -> Html {
    let on_add = {
        let options = options.to_vec();
        link.callback(move |_: MouseEvent| Msg::Patch(FieldPatch::options(add_option(&options))))
    };
    let last = options.len().saturating_sub(1);

    html! {
        <div class="tab-content">
            <div class="options-header">
                <label class="label">{"Dropdown Options"}</label>
                <button class="btn-secondary" onclick={on_add}>
                    <i class="material-icons">{"add"}</i>
                    {"Add Option"}
                </button>
            </div>
            {
                if options.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No options yet. Click \"Add Option\" to create one."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="option-list">
                            { for options.iter().enumerate().map(|(index, option)| {
                                build_option_row(options, index, option, index == last, link)
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_option_row(
    options: &[SelectOption],
    index: usize,
    option: &SelectOption,
    is_last: bool,
    link: &Scope<FieldEditor>,
) -> Html {
    let id = option.id;
    let edit = |attr: OptionAttr| {
        let options = options.to_vec();
        link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Patch(FieldPatch::options(update_option(&options, id, attr, &input.value())))
        })
    };
    let shift = |direction: Direction| {
        let options = options.to_vec();
        link.callback(move |_: MouseEvent| Msg::Patch(FieldPatch::options(move_option(&options, index, direction))))
    };
    let on_remove = {
        let options = options.to_vec();
        link.callback(move |_: MouseEvent| Msg::Patch(FieldPatch::options(remove_option(&options, id))))
    };

    html! {
        <div class="option-row" key={id.to_string()}>
            <i class="material-icons drag-handle">{"drag_indicator"}</i>
            <input
                type="text"
                class="input"
                placeholder="Option Label"
                value={option.label.clone()}
                oninput={edit(OptionAttr::Label)}
            />
            <input
                type="text"
                class="input"
                placeholder="Value"
                value={option.value.clone()}
                oninput={edit(OptionAttr::Value)}
            />
            <button class="icon-btn" title="Move up" disabled={index == 0} onclick={shift(Direction::Up)}>
                <i class="material-icons">{"expand_less"}</i>
            </button>
            <button class="icon-btn" title="Move down" disabled={is_last} onclick={shift(Direction::Down)}>
                <i class="material-icons">{"expand_more"}</i>
            </button>
            <button class="icon-btn danger" title="Remove option" onclick={on_remove}>
                <i class="material-icons">{"close"}</i>
            </button>
        </div>
    }
}
