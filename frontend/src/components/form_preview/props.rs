use common::model::FieldDefinition;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormPreviewProps {
    pub title: String,
    pub description: String,
    /// Fields in display order.
    pub fields: Vec<FieldDefinition>,
}
