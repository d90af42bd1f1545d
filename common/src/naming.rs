//! Machine-safe field names.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_]").expect("valid regex"));

/// Derives a submission key from a label.
///
/// The label is lower-cased, every run of whitespace becomes a single `_`
/// and anything outside `[a-z0-9_]` is dropped.
///
/// ```
/// assert_eq!(common::naming::derive_name("Full Name!!"), "full_name");
/// ```
pub fn derive_name(label: &str) -> String {
    let lowered = label.to_lowercase();
    let underscored = WHITESPACE.replace_all(&lowered, "_");
    DISALLOWED.replace_all(&underscored, "").into_owned()
}

/// Returns `base` if `is_taken` rejects it, otherwise `base_2`, `base_3`, ...
pub fn first_free(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}_{n}");
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// `<prefix>_<unix millis>`, the seed for generated names and option values.
pub fn timestamped(prefix: &str) -> String {
    format!("{prefix}_{}", Utc::now().timestamp_millis())
}
