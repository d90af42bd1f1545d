use std::collections::HashSet;

use common::model::FieldType;
use common::store::FormStore;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(FieldType),
    Remove(usize),
    Reorder(usize, Option<usize>),
    Duplicate(usize),
}

fn field_type() -> impl Strategy<Value = FieldType> {
    prop::sample::select(FieldType::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        field_type().prop_map(Op::Add),
        (0usize..12).prop_map(Op::Remove),
        (0usize..12, prop::option::of(0usize..12)).prop_map(|(a, b)| Op::Reorder(a, b)),
        (0usize..12).prop_map(Op::Duplicate),
    ]
}

proptest! {
    #[test]
    fn length_tracks_adds_and_removes(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = FormStore::empty();
        let mut expected = 0usize;

        for op in ops {
            match op {
                Op::Add(kind) => {
                    store.add_field(kind);
                    expected += 1;
                }
                Op::Remove(index) => {
                    let id = store.fields().get(index).map(|f| f.id);
                    if let Some(id) = id {
                        prop_assert!(store.remove_field(id));
                        expected -= 1;
                    }
                }
                Op::Reorder(from, to) => {
                    store.reorder(from, to);
                }
                Op::Duplicate(index) => {
                    let id = store.fields().get(index).map(|f| f.id);
                    if let Some(id) = id {
                        prop_assert!(store.duplicate_field(id).is_some());
                        expected += 1;
                    }
                }
            }

            prop_assert_eq!(store.len(), expected);
            let ids: HashSet<_> = store.fields().iter().map(|f| f.id).collect();
            prop_assert_eq!(ids.len(), store.len());
            if let Some(selected) = store.selected() {
                prop_assert!(store.field(selected).is_some());
            }
        }
    }

    #[test]
    fn reorder_is_a_permutation(from in 0usize..6, to in prop::option::of(0usize..6)) {
        let mut store = FormStore::empty();
        for kind in FieldType::ALL {
            store.add_field(kind);
        }
        let mut before: Vec<_> = store.fields().iter().map(|f| f.id).collect();
        store.reorder(from, to);
        let mut after: Vec<_> = store.fields().iter().map(|f| f.id).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn options_never_appear_on_non_select(kind in field_type()) {
        let mut store = FormStore::empty();
        let id = store.add_field(kind);
        let field = store.field(id).unwrap();
        prop_assert_eq!(field.options().is_empty(), kind != FieldType::Select);
    }
}
