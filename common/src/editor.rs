//! Pure helpers behind the field editor's Validation and Options facets.
//!
//! Each helper returns a new option list (or constraint) that the editor
//! wraps into a [`FieldPatch`](crate::model::FieldPatch).

use crate::config::NEW_OPTION_LABEL;
use crate::model::{OptionId, SelectOption, TextValidation};
use crate::naming::{first_free, timestamped};

/// Facets of the field editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Basic,
    Validation,
    Options,
}

impl EditorTab {
    pub fn title(&self) -> &'static str {
        match self {
            EditorTab::Basic => "basic",
            EditorTab::Validation => "validation",
            EditorTab::Options => "options",
        }
    }

    /// Tabs available for a field; Options only exists for select fields.
    pub fn available(has_options: bool) -> Vec<EditorTab> {
        if has_options {
            vec![EditorTab::Basic, EditorTab::Validation, EditorTab::Options]
        } else {
            vec![EditorTab::Basic, EditorTab::Validation]
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Which half of an option an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAttr {
    Label,
    Value,
}

/// Appends a "New Option" whose value does not clash with existing values.
pub fn add_option(options: &[SelectOption]) -> Vec<SelectOption> {
    let value = first_free(&timestamped("option"), |candidate| {
        options.iter().any(|option| option.value == candidate)
    });
    push_option(options, value, NEW_OPTION_LABEL)
}

/// Appends an option with the given value and label.
pub fn push_option(
    options: &[SelectOption],
    value: impl Into<String>,
    label: impl Into<String>,
) -> Vec<SelectOption> {
    let mut next = options.to_vec();
    next.push(SelectOption::new(value, label));
    next
}

pub fn remove_option(options: &[SelectOption], id: OptionId) -> Vec<SelectOption> {
    options
        .iter()
        .filter(|option| option.id != id)
        .cloned()
        .collect()
}

/// Swaps the option at `index` with its neighbour. Moving the first option up
/// or the last option down leaves the list unchanged.
pub fn move_option(options: &[SelectOption], index: usize, direction: Direction) -> Vec<SelectOption> {
    let mut next = options.to_vec();
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => index.checked_add(1),
    };
    if let Some(target) = target {
        if index < next.len() && target < next.len() {
            next.swap(index, target);
        }
    }
    next
}

pub fn update_option(
    options: &[SelectOption],
    id: OptionId,
    attr: OptionAttr,
    text: &str,
) -> Vec<SelectOption> {
    options
        .iter()
        .map(|option| {
            let mut option = option.clone();
            if option.id == id {
                match attr {
                    OptionAttr::Label => option.label = text.to_string(),
                    OptionAttr::Value => option.value = text.to_string(),
                }
            }
            option
        })
        .collect()
}

/// Parses a length bound typed into a number input. Blank, zero, negative
/// or non-numeric input clears the bound.
pub fn parse_length(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

pub fn with_min_length(validation: TextValidation, input: &str) -> TextValidation {
    TextValidation {
        min_length: parse_length(input),
        ..validation
    }
}

pub fn with_max_length(validation: TextValidation, input: &str) -> TextValidation {
    TextValidation {
        max_length: parse_length(input),
        ..validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn add_option_uses_default_label_and_unique_value() {
        let first = add_option(&[]);
        let second = add_option(&first);
        assert_eq!(second.len(), 2);
        assert_eq!(second[1].label, NEW_OPTION_LABEL);
        assert!(second[0].value.starts_with("option_"));
        assert_ne!(second[0].value, second[1].value);
        assert_ne!(second[0].id, second[1].id);
    }

    #[test]
    fn move_option_is_guarded_at_both_ends() {
        let options = push_option(&push_option(&[], "a", "A"), "b", "B");
        assert_eq!(values(&move_option(&options, 0, Direction::Up)), ["a", "b"]);
        assert_eq!(values(&move_option(&options, 1, Direction::Down)), ["a", "b"]);
        assert_eq!(values(&move_option(&options, 0, Direction::Down)), ["b", "a"]);
        assert_eq!(values(&move_option(&options, 1, Direction::Up)), ["b", "a"]);
        assert_eq!(values(&move_option(&options, 7, Direction::Up)), ["a", "b"]);
    }

    #[test]
    fn update_option_touches_only_target() {
        let options = push_option(&push_option(&[], "a", "A"), "b", "B");
        let edited = update_option(&options, options[1].id, OptionAttr::Label, "Bee");
        assert_eq!(edited[0].label, "A");
        assert_eq!(edited[1].label, "Bee");
        assert_eq!(edited[1].value, "b");
        let edited = update_option(&edited, options[0].id, OptionAttr::Value, "alpha");
        assert_eq!(values(&edited), ["alpha", "b"]);
    }

    #[test]
    fn remove_unknown_option_is_noop() {
        let options = push_option(&[], "a", "A");
        assert_eq!(remove_option(&options, OptionId::new()), options);
    }

    #[test]
    fn parse_length_clears_on_blank_zero_or_garbage() {
        assert_eq!(parse_length("12"), Some(12));
        assert_eq!(parse_length(" 3 "), Some(3));
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("0"), None);
        assert_eq!(parse_length("-4"), None);
        assert_eq!(parse_length("ten"), None);
    }

    #[test]
    fn length_setters_keep_other_bound() {
        let validation = with_min_length(TextValidation::default(), "2");
        let validation = with_max_length(validation, "50");
        assert_eq!(validation, TextValidation::new(Some(2), Some(50)));
        let validation = with_min_length(validation, "");
        assert_eq!(validation, TextValidation::new(None, Some(50)));
    }

    #[test]
    fn tabs_hide_options_for_non_select() {
        assert_eq!(EditorTab::available(false).len(), 2);
        assert_eq!(EditorTab::available(true).last(), Some(&EditorTab::Options));
    }
}
