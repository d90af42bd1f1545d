//! Data model of a form under construction.

mod field;
mod value;

pub use field::{
    FieldDefinition, FieldId, FieldKind, FieldPatch, FieldType, OptionId, SelectOption,
    TextValidation,
};
pub use value::FieldValue;
