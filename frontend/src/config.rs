//! Browser-side settings.

/// `localStorage` key of the dark-mode flag, stored as JSON `true`/`false`.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Media query consulted when no preference was stored yet.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on `<html>` while dark mode is on.
pub const DARK_CLASS: &str = "dark";

pub const TOAST_MILLIS: u32 = 3000;

/// How long the copy button shows its confirmation.
pub const COPIED_MILLIS: u32 = 2000;

/// Drag payload type required by some browsers to start a drag.
pub const DRAG_DATA_FORMAT: &str = "text/plain";
