//! Dark-mode preference: the only state persisted across sessions.

use crate::config::{DARK_CLASS, DARK_MODE_STORAGE_KEY, PREFERS_DARK_QUERY};

/// Reads the stored preference, falling back to the OS color scheme.
pub fn load_dark_mode() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(DARK_MODE_STORAGE_KEY).ok().flatten());

    parse_preference(stored.as_deref()).unwrap_or_else(|| {
        window
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    })
}

/// Persists the flag and applies it to the document.
pub fn store_dark_mode(dark: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if storage
            .set_item(DARK_MODE_STORAGE_KEY, &dark.to_string())
            .is_err()
        {
            gloo_console::warn!("could not persist dark mode preference");
        }
    }
    apply_dark_class(dark);
}

pub fn apply_dark_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let applied = if dark {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if applied.is_err() {
        gloo_console::warn!("could not apply dark mode class");
    }
}

/// Stored values are JSON booleans; anything else counts as "not stored".
pub fn parse_preference(raw: Option<&str>) -> Option<bool> {
    raw.and_then(|raw| serde_json::from_str::<bool>(raw).ok())
}

#[cfg(test)]
mod tests {
    use super::parse_preference;

    #[test]
    fn stored_booleans_are_read() {
        assert_eq!(parse_preference(Some("true")), Some(true));
        assert_eq!(parse_preference(Some("false")), Some(false));
    }

    #[test]
    fn missing_or_garbage_falls_back() {
        assert_eq!(parse_preference(None), None);
        assert_eq!(parse_preference(Some("yes")), None);
        assert_eq!(parse_preference(Some("")), None);
    }
}
