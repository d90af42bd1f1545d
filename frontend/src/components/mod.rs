pub mod builder;
pub mod field_editor;
pub mod form_preview;
pub mod json_export;
