use common::editor::{Direction, move_option, push_option, remove_option};
use common::model::{FieldKind, FieldPatch, FieldType};
use common::store::{Command, FormStore, Outcome};

#[test]
fn duplicate_then_remove_restores_sequence() {
    let mut store = FormStore::new();
    let before = store.fields().to_vec();
    let source = store.fields()[1].id;

    let copy = store.duplicate_field(source).unwrap();
    assert_eq!(store.len(), before.len() + 1);
    store.remove_field(copy);

    assert_eq!(store.fields(), before.as_slice());
}

#[test]
fn select_options_edit_scenario() {
    let mut store = FormStore::empty();
    let Outcome::Created(id) = store.apply(Command::AddField(FieldType::Select)).unwrap() else {
        panic!("select field not created");
    };
    store.update_field(id, FieldPatch::options(Vec::new()));

    let options = push_option(store.field(id).unwrap().options(), "a", "A");
    store.update_field(id, FieldPatch::options(options));
    let options = push_option(store.field(id).unwrap().options(), "b", "B");
    store.update_field(id, FieldPatch::options(options));

    let first_added = store.field(id).unwrap().options()[0].id;
    let options = move_option(store.field(id).unwrap().options(), 0, Direction::Down);
    store.update_field(id, FieldPatch::options(options));
    let options = remove_option(store.field(id).unwrap().options(), first_added);
    store.update_field(id, FieldPatch::options(options));

    let remaining: Vec<_> = store
        .field(id)
        .unwrap()
        .options()
        .iter()
        .map(|o| (o.value.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(remaining, [("b", "B")]);
}

#[test]
fn import_checkbox_document() {
    let mut store = FormStore::new();
    let previous_ids: Vec<_> = store.fields().iter().map(|f| f.id).collect();

    let outcome = store
        .apply(Command::Import(
            r#"{"fields":[{"kind":"checkbox","label":"Agree","name":"agree","required":true}]}"#
                .to_string(),
        ))
        .unwrap();

    assert!(matches!(outcome, Outcome::Imported(summary) if summary.field_count == 1));
    assert_eq!(store.len(), 1);
    let field = &store.fields()[0];
    assert_eq!(field.kind, FieldKind::Checkbox);
    assert!(field.required);
    assert_eq!(field.label, "Agree");
    assert_eq!(field.name, "agree");
    assert!(!previous_ids.contains(&field.id));
    assert_eq!(store.title(), "My Form");
}

#[test]
fn import_ignores_ids_in_document() {
    let mut store = FormStore::new();
    let text = r#"{"fields":[
        {"id":"same","kind":"text","label":"A","name":"a"},
        {"id":"same","kind":"text","label":"B","name":"b"}
    ]}"#;
    store.apply(Command::Import(text.to_string())).unwrap();
    assert_eq!(store.len(), 2);
    assert_ne!(store.fields()[0].id, store.fields()[1].id);
}

#[test]
fn label_edit_issues_combined_patch() {
    let mut store = FormStore::new();
    let id = store.add_field(FieldType::Text);
    store
        .apply(Command::UpdateField {
            id,
            patch: FieldPatch::label("Full Name!!"),
        })
        .unwrap();
    let field = store.field(id).unwrap();
    assert_eq!(field.label, "Full Name!!");
    assert_eq!(field.name, "full_name");
}

#[test]
fn name_collisions_are_permitted() {
    let mut store = FormStore::empty();
    let a = store.add_field(FieldType::Text);
    let b = store.add_field(FieldType::Text);
    store.update_field(a, FieldPatch::name("same"));
    assert!(store.update_field(b, FieldPatch::name("same")));
    assert_eq!(store.field(a).unwrap().name, store.field(b).unwrap().name);
}
