//! Validation rules applied to values entered in the form preview.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{FieldDefinition, FieldType, FieldValue};

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));

/// Returns every violation of `field`'s constraints by `value`, in a fixed
/// order: required, minimum length, maximum length, email shape.
///
/// Length checks only apply to a non-empty text value; an absent or empty
/// value is the business of the required check alone. Lengths are counted in
/// characters.
pub fn validate(field: &FieldDefinition, value: Option<&FieldValue>) -> Vec<String> {
    let mut violations = Vec::new();
    let present = value.filter(|v| !v.is_empty());
    let text = present.and_then(FieldValue::as_text);

    if field.required && present.is_none() {
        violations.push(format!("{} is required", field.label));
    }

    if let (Some(validation), Some(text)) = (field.text_validation(), text) {
        let length = text.chars().count();
        if let Some(min) = validation.min_length.filter(|min| length < *min) {
            violations.push(format!(
                "{} must be at least {} characters",
                field.label, min
            ));
        }
        if let Some(max) = validation.max_length.filter(|max| length > *max) {
            violations.push(format!(
                "{} must be no more than {} characters",
                field.label, max
            ));
        }
    }

    if field.field_type() == FieldType::Email {
        if let Some(text) = text {
            if !is_email_shaped(text) {
                violations.push(format!("{} must be a valid email", field.label));
            }
        }
    }

    violations
}

/// First violation only, as shown under a field.
pub fn first_violation(field: &FieldDefinition, value: Option<&FieldValue>) -> Option<String> {
    validate(field, value).into_iter().next()
}

/// Loose `token@token.token` check.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}
