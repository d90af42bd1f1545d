//! Reducer applying [`Command`]s to the [`FormStore`].

use log::debug;

use crate::error::ImportError;
use crate::serializer;

use super::commands::{Command, Outcome};
use super::state::FormStore;

impl FormStore {
    /// Applies one command. Only [`Command::Import`] can fail; a failed
    /// import leaves the store untouched.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, ImportError> {
        debug!("apply {}", command_name(&command));
        let outcome = match command {
            Command::AddField(field_type) => Outcome::Created(self.add_field(field_type)),
            Command::UpdateField { id, patch } => changed(self.update_field(id, patch)),
            Command::RemoveField(id) => changed(self.remove_field(id)),
            Command::DuplicateField(id) => match self.duplicate_field(id) {
                Some(copy) => Outcome::Created(copy),
                None => Outcome::Unchanged,
            },
            Command::Reorder { from, to } => changed(self.reorder(from, to)),
            Command::Select(id) => changed(self.select(id)),
            Command::Deselect => changed(self.deselect()),
            Command::SetTitle(title) => changed(self.set_title(title)),
            Command::SetDescription(description) => changed(self.set_description(description)),
            Command::Import(text) => Outcome::Imported(serializer::import_json(self, &text)?),
        };
        Ok(outcome)
    }
}

fn changed(flag: bool) -> Outcome {
    if flag { Outcome::Changed } else { Outcome::Unchanged }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::AddField(_) => "add_field",
        Command::UpdateField { .. } => "update_field",
        Command::RemoveField(_) => "remove_field",
        Command::DuplicateField(_) => "duplicate_field",
        Command::Reorder { .. } => "reorder",
        Command::Select(_) => "select",
        Command::Deselect => "deselect",
        Command::SetTitle(_) => "set_title",
        Command::SetDescription(_) => "set_description",
        Command::Import(_) => "import",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldId, FieldPatch, FieldType};

    #[test]
    fn add_reports_created_id() {
        let mut store = FormStore::empty();
        let outcome = store.apply(Command::AddField(FieldType::Email)).unwrap();
        let Outcome::Created(id) = outcome else {
            panic!("expected created, got {outcome:?}");
        };
        assert_eq!(store.selected(), Some(id));
    }

    #[test]
    fn referential_noops_are_unchanged() {
        let mut store = FormStore::new();
        let ghost = FieldId::new();
        for command in [
            Command::RemoveField(ghost),
            Command::DuplicateField(ghost),
            Command::Select(ghost),
            Command::Deselect,
            Command::Reorder { from: 0, to: None },
            Command::Reorder { from: 9, to: Some(0) },
            Command::UpdateField {
                id: ghost,
                patch: FieldPatch::required(true),
            },
        ] {
            assert_eq!(store.apply(command).unwrap(), Outcome::Unchanged);
        }
    }

    #[test]
    fn title_and_description_commands() {
        let mut store = FormStore::new();
        let outcome = store.apply(Command::SetTitle("Signup".into())).unwrap();
        assert!(outcome.is_changed());
        assert_eq!(store.title(), "Signup");
        let outcome = store.apply(Command::SetTitle("Signup".into())).unwrap();
        assert!(!outcome.is_changed());
        store.apply(Command::SetDescription(String::new())).unwrap();
        assert_eq!(store.description(), "");
    }

    #[test]
    fn failed_import_leaves_store_untouched() {
        let mut store = FormStore::new();
        let before = store.clone();
        let result = store.apply(Command::Import("{ nope".into()));
        assert!(matches!(result, Err(ImportError::Parse(_))));
        assert_eq!(store, before);
    }
}
