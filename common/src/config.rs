//! Compile-time settings shared by the core and the browser application.

/// Version stamped into `metadata.version` of every export.
pub const SCHEMA_VERSION: &str = "1.0";

/// Suggested file name for downloaded schemas.
pub const EXPORT_FILE_NAME: &str = "form-schema.json";

/// MIME type of the exported document.
pub const EXPORT_MIME_TYPE: &str = "application/json";

pub const DEFAULT_TITLE: &str = "My Form";
pub const DEFAULT_DESCRIPTION: &str = "A sample form built with Form Builder";

/// Label given to options created from the editor.
pub const NEW_OPTION_LABEL: &str = "New Option";

/// Suffixes applied by `duplicate_field`.
pub const COPY_NAME_SUFFIX: &str = "_copy";
pub const COPY_LABEL_SUFFIX: &str = " (Copy)";
