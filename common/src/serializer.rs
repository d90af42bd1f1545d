//! Conversion between a [`FormStore`] and the JSON schema document.

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde_json::Value;

use crate::error::{ImportError, SchemaError};
use crate::model::FieldDefinition;
use crate::schema::{FieldSchema, FormSchema, SchemaMetadata};
use crate::store::{FormStore, ImportSummary};

/// Snapshot of the store in wire form, stamped with `at`.
pub fn to_schema(store: &FormStore, at: DateTime<Utc>) -> FormSchema {
    FormSchema {
        title: store.title().to_string(),
        description: store.description().to_string(),
        fields: store.fields().iter().map(FieldSchema::from).collect(),
        metadata: SchemaMetadata::stamped(at),
    }
}

/// Pretty-printed export stamped with the current time.
pub fn export_json(store: &FormStore) -> Result<String, SchemaError> {
    export_json_at(store, Utc::now())
}

pub fn export_json_at(store: &FormStore, at: DateTime<Utc>) -> Result<String, SchemaError> {
    Ok(serde_json::to_string_pretty(&to_schema(store, at))?)
}

/// A document that passed import checks, not yet applied to a store.
#[derive(Debug)]
pub struct ParsedImport {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

/// Parses and checks an import document without touching any store.
///
/// Every entry of `fields` must be a valid field description. Each becomes a
/// field with a fresh id, whatever ids the document carries. `title` and
/// `description` are only picked up when they are non-empty strings.
pub fn parse_import(text: &str) -> Result<ParsedImport, ImportError> {
    let document: Value = serde_json::from_str(text).map_err(ImportError::Parse)?;
    let entries = document
        .get("fields")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingFields)?;

    let fields = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<FieldSchema>(entry.clone())
                .map(FieldSchema::into_definition)
                .map_err(|source| ImportError::InvalidField { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParsedImport {
        title: non_empty_string(&document, "title"),
        description: non_empty_string(&document, "description"),
        fields,
    })
}

/// Replaces the store's fields with the document's. The store is left
/// untouched when the document is rejected.
pub fn import_json(store: &mut FormStore, text: &str) -> Result<ImportSummary, ImportError> {
    let parsed = parse_import(text).inspect_err(|err| warn!("import rejected: {err}"))?;

    let summary = ImportSummary {
        field_count: parsed.fields.len(),
        title_replaced: parsed.title.is_some(),
        description_replaced: parsed.description.is_some(),
    };
    store.replace_fields(parsed.fields);
    if let Some(title) = parsed.title {
        store.set_title(title);
    }
    if let Some(description) = parsed.description {
        store.set_description(description);
    }
    debug!("imported {} fields", summary.field_count);
    Ok(summary)
}

fn non_empty_string(document: &Value, key: &str) -> Option<String> {
    document
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_has_metadata_and_no_ids() {
        let store = FormStore::new();
        let text = export_json(&store).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["metadata"]["version"], "1.0");
        assert!(value["metadata"]["createdAt"].is_string());
        assert_eq!(value["fields"].as_array().unwrap().len(), 3);
        assert!(!text.contains("\"id\""));
    }

    #[test]
    fn export_is_indented_by_two_spaces() {
        let text = export_json(&FormStore::empty()).unwrap();
        assert!(text.starts_with("{\n  \"title\": \"My Form\""));
    }

    #[test]
    fn options_only_on_select() {
        let value: Value = serde_json::from_str(&export_json(&FormStore::new()).unwrap()).unwrap();
        assert!(value["fields"][0].get("options").is_none());
        assert_eq!(value["fields"][0]["validation"]["minLength"], 2);
        assert_eq!(value["fields"][1]["validation"], serde_json::json!({}));
        assert_eq!(value["fields"][2]["options"][1]["value"], "uk");
    }

    #[test]
    fn missing_fields_array_is_rejected() {
        assert!(matches!(
            parse_import(r#"{"title":"x"}"#),
            Err(ImportError::MissingFields)
        ));
        assert!(matches!(
            parse_import(r#"{"fields":{}}"#),
            Err(ImportError::MissingFields)
        ));
        assert!(matches!(parse_import("[]"), Err(ImportError::MissingFields)));
    }

    #[test]
    fn invalid_entry_reports_index() {
        let result = parse_import(r#"{"fields":[{"kind":"text"},{"kind":"radio"}]}"#);
        assert!(matches!(
            result,
            Err(ImportError::InvalidField { index: 1, .. })
        ));
    }

    #[test]
    fn empty_title_is_not_applied() {
        let mut store = FormStore::new();
        let summary = import_json(
            &mut store,
            r#"{"title":"","description":"New","fields":[]}"#,
        )
        .unwrap();
        assert!(!summary.title_replaced);
        assert!(summary.description_replaced);
        assert_eq!(store.title(), "My Form");
        assert_eq!(store.description(), "New");
        assert!(store.is_empty());
    }

    #[test]
    fn import_clears_selection() {
        let mut store = FormStore::new();
        store.select(store.fields()[0].id);
        import_json(&mut store, r#"{"fields":[{"kind":"email"}]}"#).unwrap();
        assert!(store.selected().is_none());
    }
}
