use crate::model::{FieldDefinition, FieldKind, SelectOption, TextValidation};

/// The three example fields every new session starts with.
pub fn seeded_fields() -> Vec<FieldDefinition> {
    let mut full_name = FieldDefinition::new(
        FieldKind::Text {
            validation: TextValidation::new(Some(2), Some(50)),
        },
        "Full Name",
        "fullName",
    );
    full_name.placeholder = "Enter your full name".to_string();
    full_name.required = true;

    let mut email = FieldDefinition::new(FieldKind::Email, "Email Address", "email");
    email.placeholder = "Enter your email".to_string();
    email.help_text = "We will never share your email".to_string();
    email.required = true;

    let mut country = FieldDefinition::new(
        FieldKind::Select {
            options: vec![
                SelectOption::new("us", "United States"),
                SelectOption::new("uk", "United Kingdom"),
                SelectOption::new("ca", "Canada"),
            ],
        },
        "Country",
        "country",
    );
    country.placeholder = "Select your country".to_string();
    country.required = true;

    vec![full_name, email, country]
}
