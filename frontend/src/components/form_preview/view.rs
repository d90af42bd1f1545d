//! View rendering for the form preview.

use common::model::{FieldDefinition, FieldType, FieldValue};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::{FormPreview, Msg};

pub fn view(preview: &FormPreview, ctx: &Context<FormPreview>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <div class="preview">
            <div class="card">
                <div class="preview-header">
                    <h1>{ props.title.clone() }</h1>
                    {
                        if props.description.is_empty() {
                            html! {}
                        } else {
                            html! { <p>{ props.description.clone() }</p> }
                        }
                    }
                </div>
                {
                    if preview.state.is_submitted() {
                        html! {
                            <div class="success-banner">
                                <i class="material-icons">{"check_circle"}</i>
                                <div>
                                    <p class="success-title">{"Form submitted successfully!"}</p>
                                    <p>{"Thank you for your submission."}</p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form
                    class="preview-form"
                    novalidate=true
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    {
                        if props.fields.is_empty() {
                            html! {
                                <div class="empty-state">
                                    <p>{"No fields in this form yet. Go back to the builder to add fields."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    { for props.fields.iter().map(|field| build_field_row(preview, field, link)) }
                                    <button type="submit" class="btn-primary">
                                        <i class="material-icons">{"send"}</i>
                                        {"Submit Form"}
                                    </button>
                                </>
                            }
                        }
                    }
                </form>
                <div class="preview-footer">
                    <p>{"This is a preview of how your form will appear to users."}</p>
                </div>
            </div>
        </div>
    }
}

fn build_field_row(preview: &FormPreview, field: &FieldDefinition, link: &Scope<FormPreview>) -> Html {
    let id = field.id;
    let error = preview.state.error_for(id);
    let is_checkbox = field.field_type() == FieldType::Checkbox;

    html! {
        <div class="preview-field" key={id.to_string()}>
            {
                if is_checkbox {
                    html! {}
                } else {
                    html! {
                        <label class="label">
                            <span>{ field.label.clone() }</span>
                            { if field.required { html! { <span class="required">{"*"}</span> } } else { html! {} } }
                            {
                                if preview.state.is_valid(id) {
                                    html! { <i class="material-icons valid">{"check"}</i> }
                                } else {
                                    html! {}
                                }
                            }
                        </label>
                    }
                }
            }
            { build_input(preview, field, link) }
            {
                match error {
                    Some(message) => html! {
                        <div class="field-error">
                            <i class="material-icons">{"error"}</i>
                            <span>{ message.to_string() }</span>
                        </div>
                    },
                    None if !is_checkbox && !field.help_text.is_empty() => html! {
                        <p class="help-text">{ field.help_text.clone() }</p>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn build_input(preview: &FormPreview, field: &FieldDefinition, link: &Scope<FormPreview>) -> Html {
    let id = field.id;
    let state = &preview.state;
    let class = classes!(
        "input",
        state.error_for(id).is_some().then_some("invalid"),
        state.is_valid(id).then_some("valid"),
        (preview.focused == Some(id)).then_some("focused")
    );
    let onblur = link.callback(move |_: FocusEvent| Msg::Blur(id));
    let onfocus = link.callback(move |_: FocusEvent| Msg::Focus(id));

    match field.field_type() {
        FieldType::Text | FieldType::Email => html! {
            <input
                type={field.field_type().as_str()}
                {class}
                placeholder={field.placeholder.clone()}
                value={state.text(id).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Change(id, FieldValue::Text(input.value()))
                })}
                {onblur}
                {onfocus}
            />
        },
        FieldType::Select => {
            let current = state.text(id);
            let prompt = if field.placeholder.is_empty() {
                "Select an option".to_string()
            } else {
                field.placeholder.clone()
            };
            html! {
                <select
                    {class}
                    onchange={link.callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::Change(id, FieldValue::Text(select.value()))
                    })}
                    {onblur}
                    {onfocus}
                >
                    <option value="" selected={current.is_empty()}>{ prompt }</option>
                    { for field.options().iter().map(|option| html! {
                        <option
                            key={option.id.to_string()}
                            value={option.value.clone()}
                            selected={current == option.value}
                        >
                            { option.label.clone() }
                        </option>
                    }) }
                </select>
            }
        }
        FieldType::Checkbox => html! {
            <div class={classes!("checkbox-row", state.error_for(id).is_some().then_some("invalid"))}>
                <label>
                    <input
                        type="checkbox"
                        checked={state.is_checked(id)}
                        onchange={link.callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Change(id, FieldValue::Checked(input.checked()))
                        })}
                        {onblur}
                    />
                    <span>{ field.checkbox_caption().to_string() }</span>
                </label>
            </div>
        },
    }
}
