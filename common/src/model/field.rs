use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Process-local identifier of a field. Never serialized, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of an option, unique within the option list of one select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId(Uuid);

impl OptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of field kinds, without their kind-specific attributes.
///
/// This is the value written to the `kind` key of the JSON schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Select,
    Checkbox,
}

impl FieldType {
    pub const ALL: [FieldType; 4] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Select,
        FieldType::Checkbox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
        }
    }

    /// Capitalized tag, used for the label of freshly added fields.
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Email => "Email",
            FieldType::Select => "Select",
            FieldType::Checkbox => "Checkbox",
        }
    }

    /// Whether fields of this kind render placeholder text.
    pub fn supports_placeholder(&self) -> bool {
        !matches!(self, FieldType::Checkbox)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length constraints of a text field. `None` means unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl TextValidation {
    pub fn new(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length: min_length.filter(|n| *n > 0),
            max_length: max_length.filter(|n| *n > 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none()
    }
}

/// One entry of a select field's option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: OptionId,
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Kind of a field together with the attributes only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text { validation: TextValidation },
    Email,
    Select { options: Vec<SelectOption> },
    Checkbox,
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text { .. } => FieldType::Text,
            FieldKind::Email => FieldType::Email,
            FieldKind::Select { .. } => FieldType::Select,
            FieldKind::Checkbox => FieldType::Checkbox,
        }
    }
}

/// Configuration of one form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub kind: FieldKind,
    pub label: String,
    pub name: String,
    /// Empty when the field has no placeholder.
    pub placeholder: String,
    /// Empty when the field has no help text.
    pub help_text: String,
    pub required: bool,
}

impl FieldDefinition {
    /// Creates a field with a fresh id and empty optional attributes.
    pub fn new(kind: FieldKind, label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: FieldId::new(),
            kind,
            label: label.into(),
            name: name.into(),
            placeholder: String::new(),
            help_text: String::new(),
            required: false,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Options of a select field; empty for every other kind.
    pub fn options(&self) -> &[SelectOption] {
        match &self.kind {
            FieldKind::Select { options } => options,
            _ => &[],
        }
    }

    /// Length constraints of a text field; `None` for every other kind.
    pub fn text_validation(&self) -> Option<&TextValidation> {
        match &self.kind {
            FieldKind::Text { validation } => Some(validation),
            _ => None,
        }
    }

    /// Text shown next to a checkbox, which has no separate label row.
    pub fn checkbox_caption(&self) -> &str {
        if self.help_text.is_empty() {
            &self.label
        } else {
            &self.help_text
        }
    }

    /// Copy of this field with a fresh id and fresh option ids.
    pub fn with_fresh_ids(&self) -> Self {
        let mut copy = self.clone();
        copy.id = FieldId::new();
        if let FieldKind::Select { options } = &mut copy.kind {
            for option in options.iter_mut() {
                option.id = OptionId::new();
            }
        }
        copy
    }

    /// Merges `patch` into this field. Attributes the kind does not carry
    /// are ignored. Returns whether anything changed.
    pub fn apply_patch(&mut self, patch: FieldPatch) -> bool {
        let before = self.clone();

        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(placeholder) = patch.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(help_text) = patch.help_text {
            self.help_text = help_text;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        match &mut self.kind {
            FieldKind::Text { validation } => {
                if let Some(new_validation) = patch.validation {
                    *validation = new_validation;
                }
            }
            FieldKind::Select { options } => {
                if let Some(new_options) = patch.options {
                    *options = new_options;
                }
            }
            FieldKind::Email | FieldKind::Checkbox => {}
        }

        *self != before
    }
}

/// Partial set of field attributes; `None` leaves an attribute untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub required: Option<bool>,
    pub validation: Option<TextValidation>,
    pub options: Option<Vec<SelectOption>>,
}

impl FieldPatch {
    /// Combined patch issued when the label is edited: the name follows it.
    pub fn label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: Some(crate::naming::derive_name(&label)),
            label: Some(label),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            ..Self::default()
        }
    }

    pub fn help_text(help_text: impl Into<String>) -> Self {
        Self {
            help_text: Some(help_text.into()),
            ..Self::default()
        }
    }

    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    pub fn validation(validation: TextValidation) -> Self {
        Self {
            validation: Some(validation),
            ..Self::default()
        }
    }

    pub fn options(options: Vec<SelectOption>) -> Self {
        Self {
            options: Some(options),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_patch_derives_name() {
        let mut field = FieldDefinition::new(FieldKind::Email, "Email", "email");
        assert!(field.apply_patch(FieldPatch::label("Work Email")));
        assert_eq!(field.label, "Work Email");
        assert_eq!(field.name, "work_email");
    }

    #[test]
    fn patch_leaves_unspecified_attributes() {
        let mut field = FieldDefinition::new(FieldKind::Checkbox, "Agree", "agree");
        field.help_text = "I accept the terms".to_string();
        field.apply_patch(FieldPatch::required(true));
        assert!(field.required);
        assert_eq!(field.help_text, "I accept the terms");
        assert_eq!(field.label, "Agree");
    }

    #[test]
    fn kind_specific_patch_is_ignored_for_other_kinds() {
        let mut field = FieldDefinition::new(FieldKind::Email, "Email", "email");
        let changed = field.apply_patch(FieldPatch::options(vec![SelectOption::new("a", "A")]));
        assert!(!changed);
        assert!(field.options().is_empty());

        let changed =
            field.apply_patch(FieldPatch::validation(TextValidation::new(Some(1), None)));
        assert!(!changed);
        assert!(field.text_validation().is_none());
    }

    #[test]
    fn zero_bounds_are_unset() {
        let validation = TextValidation::new(Some(0), Some(10));
        assert_eq!(validation.min_length, None);
        assert_eq!(validation.max_length, Some(10));
    }

    #[test]
    fn fresh_ids_cover_options() {
        let field = FieldDefinition::new(
            FieldKind::Select {
                options: vec![SelectOption::new("a", "A")],
            },
            "Pick",
            "pick",
        );
        let copy = field.with_fresh_ids();
        assert_ne!(copy.id, field.id);
        assert_ne!(copy.options()[0].id, field.options()[0].id);
        assert_eq!(copy.options()[0].value, "a");
    }

    #[test]
    fn checkbox_caption_falls_back_to_label() {
        let mut field = FieldDefinition::new(FieldKind::Checkbox, "Agree", "agree");
        assert_eq!(field.checkbox_caption(), "Agree");
        field.help_text = "I agree to the terms".to_string();
        assert_eq!(field.checkbox_caption(), "I agree to the terms");
    }
}
