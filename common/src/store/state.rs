use log::debug;

use crate::catalog;
use crate::config::{COPY_LABEL_SUFFIX, COPY_NAME_SUFFIX, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use crate::model::{FieldDefinition, FieldId, FieldPatch, FieldType};
use crate::naming::{first_free, timestamped};

use super::seed::seeded_fields;

/// In-memory form under construction.
///
/// Field order is the display and submission order. Ids are unique across
/// `fields` at all times; every constructor below generates fresh ones.
/// At most one field is selected for editing.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStore {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) fields: Vec<FieldDefinition>,
    pub(crate) selected: Option<FieldId>,
}

impl Default for FormStore {
    /// Default title and description with the three example fields.
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            fields: seeded_fields(),
            selected: None,
        }
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with no fields, mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            fields: Vec::new(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id == id)
    }

    pub fn selected(&self) -> Option<FieldId> {
        self.selected
    }

    pub fn selected_field(&self) -> Option<&FieldDefinition> {
        self.selected.and_then(|id| self.field(id))
    }

    /// Appends a field of `field_type` in its default shape and selects it.
    pub fn add_field(&mut self, field_type: FieldType) -> FieldId {
        let name = first_free(&timestamped("field"), |candidate| {
            self.fields.iter().any(|field| field.name == candidate)
        });
        let label = format!("New {} Field", field_type.display_name());
        let field = FieldDefinition::new(catalog::default_kind(field_type), label, name);
        let id = field.id;
        debug!("add {} field {} as `{}`", field_type, id, field.name);
        self.fields.push(field);
        self.selected = Some(id);
        id
    }

    /// Merges `patch` into the field with `id`. Returns whether the field
    /// existed and changed.
    pub fn update_field(&mut self, id: FieldId, patch: FieldPatch) -> bool {
        match self.fields.iter_mut().find(|field| field.id == id) {
            Some(field) => field.apply_patch(patch),
            None => {
                debug!("update ignored, no field {}", id);
                false
            }
        }
    }

    pub fn remove_field(&mut self, id: FieldId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("remove ignored, no field {}", id);
            return false;
        };
        self.fields.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!("removed field {} at {}", id, index);
        true
    }

    /// Inserts a copy of the field right after it and selects the copy.
    pub fn duplicate_field(&mut self, id: FieldId) -> Option<FieldId> {
        let index = self.position(id)?;
        let mut copy = self.fields[index].with_fresh_ids();
        copy.name.push_str(COPY_NAME_SUFFIX);
        copy.label.push_str(COPY_LABEL_SUFFIX);
        let copy_id = copy.id;
        self.fields.insert(index + 1, copy);
        self.selected = Some(copy_id);
        debug!("duplicated field {} as {}", id, copy_id);
        Some(copy_id)
    }

    /// Moves the field at `from` to `to`. A missing target or an index outside
    /// the sequence leaves the order untouched.
    pub fn reorder(&mut self, from: usize, to: Option<usize>) -> bool {
        let Some(to) = to else {
            return false;
        };
        let len = self.fields.len();
        if from >= len || to >= len {
            debug!("reorder {} -> {} ignored, {} fields", from, to, len);
            return false;
        }
        if from == to {
            return false;
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        true
    }

    /// Selects an existing field. Unknown ids are ignored.
    pub fn select(&mut self, id: FieldId) -> bool {
        if self.selected == Some(id) || self.field(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn deselect(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.title == title {
            return false;
        }
        self.title = title;
        true
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        let description = description.into();
        if self.description == description {
            return false;
        }
        self.description = description;
        true
    }

    /// Replaces every field. Used by import; the selection is cleared since
    /// the previously selected id no longer exists.
    pub(crate) fn replace_fields(&mut self, fields: Vec<FieldDefinition>) {
        self.fields = fields;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldKind;

    #[test]
    fn new_store_is_seeded() {
        let store = FormStore::new();
        assert_eq!(store.title(), "My Form");
        assert_eq!(store.len(), 3);
        let names: Vec<_> = store.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["fullName", "email", "country"]);
        assert_eq!(store.fields()[2].options().len(), 3);
        assert!(store.selected().is_none());
    }

    #[test]
    fn add_field_appends_and_selects() {
        let mut store = FormStore::new();
        let id = store.add_field(FieldType::Select);
        assert_eq!(store.len(), 4);
        assert_eq!(store.fields().last().map(|f| f.id), Some(id));
        assert_eq!(store.selected(), Some(id));

        let field = store.field(id).unwrap();
        assert_eq!(field.label, "New Select Field");
        assert!(field.name.starts_with("field_"));
        assert!(!field.required);
        assert_eq!(field.options().len(), 2);
    }

    #[test]
    fn add_field_names_do_not_collide() {
        let mut store = FormStore::empty();
        for _ in 0..20 {
            store.add_field(FieldType::Text);
        }
        let mut names: Vec<_> = store.fields().iter().map(|f| f.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn non_select_fields_have_no_options() {
        let mut store = FormStore::empty();
        for field_type in [FieldType::Text, FieldType::Email, FieldType::Checkbox] {
            let id = store.add_field(field_type);
            assert!(store.field(id).unwrap().options().is_empty());
        }
    }

    #[test]
    fn update_unknown_field_is_noop() {
        let mut store = FormStore::new();
        let before = store.clone();
        assert!(!store.update_field(FieldId::new(), FieldPatch::required(false)));
        assert_eq!(store, before);
    }

    #[test]
    fn update_does_not_rederive_name() {
        let mut store = FormStore::new();
        let id = store.fields()[0].id;
        let patch = FieldPatch {
            label: Some("Given Name".to_string()),
            ..FieldPatch::default()
        };
        assert!(store.update_field(id, patch));
        assert_eq!(store.field(id).unwrap().name, "fullName");
    }

    #[test]
    fn removing_selected_field_clears_selection() {
        let mut store = FormStore::new();
        let id = store.add_field(FieldType::Email);
        assert!(store.remove_field(id));
        assert!(store.selected().is_none());
        assert!(!store.remove_field(id));
    }

    #[test]
    fn removing_other_field_keeps_selection() {
        let mut store = FormStore::new();
        let id = store.add_field(FieldType::Email);
        let first = store.fields()[0].id;
        store.remove_field(first);
        assert_eq!(store.selected(), Some(id));
    }

    #[test]
    fn duplicate_inserts_after_source() {
        let mut store = FormStore::new();
        let source = store.fields()[0].clone();
        let copy_id = store.duplicate_field(source.id).unwrap();
        assert_eq!(store.position(copy_id), Some(1));
        assert_eq!(store.selected(), Some(copy_id));

        let copy = store.field(copy_id).unwrap();
        assert_eq!(copy.name, "fullName_copy");
        assert_eq!(copy.label, "Full Name (Copy)");
        assert_eq!(copy.kind, source.kind);
        assert!(store.duplicate_field(FieldId::new()).is_none());
    }

    #[test]
    fn duplicate_select_gets_fresh_option_ids() {
        let mut store = FormStore::new();
        let source = store.fields()[2].clone();
        let copy_id = store.duplicate_field(source.id).unwrap();
        let copy = store.field(copy_id).unwrap();
        for (a, b) in source.options().iter().zip(copy.options()) {
            assert_ne!(a.id, b.id);
            assert_eq!(a.value, b.value);
        }
    }

    #[test]
    fn reorder_moves_field() {
        let mut store = FormStore::new();
        let ids: Vec<_> = store.fields().iter().map(|f| f.id).collect();
        assert!(store.reorder(0, Some(2)));
        let after: Vec<_> = store.fields().iter().map(|f| f.id).collect();
        assert_eq!(after, vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn reorder_without_target_or_out_of_range_is_noop() {
        let mut store = FormStore::new();
        let before = store.clone();
        assert!(!store.reorder(0, None));
        assert!(!store.reorder(3, Some(0)));
        assert!(!store.reorder(0, Some(3)));
        assert!(!store.reorder(1, Some(1)));
        assert_eq!(store, before);
    }

    #[test]
    fn selection_is_idempotent_and_checked() {
        let mut store = FormStore::new();
        let id = store.fields()[1].id;
        assert!(store.select(id));
        assert!(!store.select(id));
        assert_eq!(store.selected(), Some(id));
        assert!(!store.select(FieldId::new()));
        assert_eq!(store.selected(), Some(id));
        assert!(store.deselect());
        assert!(!store.deselect());
    }

    #[test]
    fn selected_field_follows_selection() {
        let mut store = FormStore::new();
        let id = store.add_field(FieldType::Checkbox);
        assert_eq!(
            store.selected_field().map(|f| &f.kind),
            Some(&FieldKind::Checkbox)
        );
        store.deselect();
        assert!(store.selected_field().is_none());
        assert!(store.field(id).is_some());
    }
}
