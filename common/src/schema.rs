//! Wire representation of a form schema.
//!
//! These types mirror the exported JSON document. Identifiers are
//! process-local and never appear here; conversion to the in-memory model
//! assigns fresh ones.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::SCHEMA_VERSION;
use crate::model::{FieldDefinition, FieldKind, FieldType, SelectOption, TextValidation};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSchema {
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldSchema>,
    pub metadata: SchemaMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    pub created_at: String,
    pub version: String,
}

impl SchemaMetadata {
    pub fn stamped(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// One field as it appears in the `fields` array.
///
/// Field order is the key order of the exported document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(alias = "type")]
    pub kind: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub placeholder: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub help_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation: TextValidation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionSchema>>,
}

/// Reads an explicit `null` the same way as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionSchema {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl From<&FieldDefinition> for FieldSchema {
    fn from(field: &FieldDefinition) -> Self {
        let (validation, options) = match &field.kind {
            FieldKind::Text { validation } => (*validation, None),
            FieldKind::Select { options } => (
                TextValidation::default(),
                Some(options.iter().map(OptionSchema::from).collect()),
            ),
            FieldKind::Email | FieldKind::Checkbox => (TextValidation::default(), None),
        };
        Self {
            kind: field.field_type(),
            label: field.label.clone(),
            name: field.name.clone(),
            placeholder: field.placeholder.clone(),
            required: field.required,
            help_text: field.help_text.clone(),
            validation,
            options,
        }
    }
}

impl From<&SelectOption> for OptionSchema {
    fn from(option: &SelectOption) -> Self {
        Self {
            value: option.value.clone(),
            label: option.label.clone(),
        }
    }
}

impl FieldSchema {
    /// Builds an in-memory field with fresh identifiers. Attributes that the
    /// kind does not carry are dropped.
    pub fn into_definition(self) -> FieldDefinition {
        let kind = match self.kind {
            FieldType::Text => FieldKind::Text {
                validation: TextValidation::new(
                    self.validation.min_length,
                    self.validation.max_length,
                ),
            },
            FieldType::Email => FieldKind::Email,
            FieldType::Select => FieldKind::Select {
                options: self
                    .options
                    .unwrap_or_default()
                    .into_iter()
                    .map(|option| SelectOption::new(option.value, option.label))
                    .collect(),
            },
            FieldType::Checkbox => FieldKind::Checkbox,
        };
        let mut field = FieldDefinition::new(kind, self.label, self.name);
        field.placeholder = self.placeholder;
        field.help_text = self.help_text;
        field.required = self.required;
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_entry_uses_defaults() {
        let schema: FieldSchema =
            serde_json::from_value(json!({ "kind": "text", "label": "Nick" })).unwrap();
        assert_eq!(schema.name, "");
        assert!(!schema.required);
        assert!(schema.validation.is_empty());
        assert!(schema.options.is_none());
    }

    #[test]
    fn null_attributes_read_as_absent() {
        let schema: FieldSchema = serde_json::from_value(json!({
            "kind": "text",
            "label": "Nick",
            "placeholder": null,
            "helpText": null,
            "required": null,
            "validation": null,
            "options": null
        }))
        .unwrap();
        assert_eq!(schema.placeholder, "");
        assert_eq!(schema.help_text, "");
        assert!(!schema.required);
        assert!(schema.validation.is_empty());
        assert!(schema.options.is_none());
    }

    #[test]
    fn legacy_type_key_is_accepted() {
        let schema: FieldSchema =
            serde_json::from_value(json!({ "type": "email", "label": "Mail" })).unwrap();
        assert_eq!(schema.kind, FieldType::Email);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = serde_json::from_value::<FieldSchema>(json!({ "kind": "radio" }));
        assert!(result.is_err());
    }

    #[test]
    fn options_on_non_select_are_dropped() {
        let schema: FieldSchema = serde_json::from_value(json!({
            "kind": "checkbox",
            "options": [{ "value": "x", "label": "X" }],
            "validation": { "minLength": 3 }
        }))
        .unwrap();
        let field = schema.into_definition();
        assert!(field.options().is_empty());
        assert!(field.text_validation().is_none());
    }

    #[test]
    fn serialized_keys_follow_declared_order() {
        let mut field = FieldDefinition::new(
            FieldKind::Text {
                validation: TextValidation::new(Some(2), None),
            },
            "Full Name",
            "full_name",
        );
        field.placeholder = "Jane".to_string();
        let text = serde_json::to_string(&FieldSchema::from(&field)).unwrap();
        assert_eq!(
            text,
            r#"{"kind":"text","label":"Full Name","name":"full_name","placeholder":"Jane","required":false,"validation":{"minLength":2}}"#
        );
    }

    #[test]
    fn metadata_stamp_is_rfc3339_utc() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T10:20:30.456Z")
            .unwrap()
            .with_timezone(&Utc);
        let metadata = SchemaMetadata::stamped(at);
        assert_eq!(metadata.created_at, "2024-05-01T10:20:30.456Z");
        assert_eq!(metadata.version, "1.0");
    }
}
