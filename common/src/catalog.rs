//! Registry of the field kinds offered by the builder's field picker.

use crate::model::{FieldKind, FieldType, SelectOption, TextValidation};

/// One entry of the field picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub field_type: FieldType,
    pub label: &'static str,
    pub description: &'static str,
    /// Material icon name.
    pub icon: &'static str,
}

pub const FIELD_CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        field_type: FieldType::Text,
        label: "Text Field",
        description: "Single line text input",
        icon: "text_fields",
    },
    CatalogEntry {
        field_type: FieldType::Email,
        label: "Email Field",
        description: "Email address input",
        icon: "mail",
    },
    CatalogEntry {
        field_type: FieldType::Select,
        label: "Dropdown",
        description: "Select from options",
        icon: "list",
    },
    CatalogEntry {
        field_type: FieldType::Checkbox,
        label: "Checkbox",
        description: "Boolean selection",
        icon: "check_box",
    },
];

pub fn entry(field_type: FieldType) -> &'static CatalogEntry {
    match field_type {
        FieldType::Text => &FIELD_CATALOG[0],
        FieldType::Email => &FIELD_CATALOG[1],
        FieldType::Select => &FIELD_CATALOG[2],
        FieldType::Checkbox => &FIELD_CATALOG[3],
    }
}

/// Default shape of a newly added field of `field_type`.
///
/// Select fields start with two placeholder options so the dropdown is
/// never empty in the preview.
pub fn default_kind(field_type: FieldType) -> FieldKind {
    match field_type {
        FieldType::Text => FieldKind::Text {
            validation: TextValidation::default(),
        },
        FieldType::Email => FieldKind::Email,
        FieldType::Select => FieldKind::Select {
            options: vec![
                SelectOption::new("option1", "Option 1"),
                SelectOption::new("option2", "Option 2"),
            ],
        },
        FieldType::Checkbox => FieldKind::Checkbox,
    }
}
