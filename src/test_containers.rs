//! Cross-container invariants: signed-index normalization and ordered-map
//! insertion semantics, exercised at the level of the public container types
//! rather than the `containers::normalize_index` helper alone.

use crate::{BareItem, Dictionary, Item, List, ListEntry, Parameters};

fn int_item(n: i64) -> ListEntry {
    Item::new(BareItem::new_integer(n).unwrap()).into()
}

#[test]
fn list_get_by_index_matches_normalized_positive_index_for_every_i() {
    let list: List = (0..5).map(int_item).collect();
    let n = list.len() as isize;
    for i in -n..n {
        let expected = if i < 0 { n + i } else { i };
        assert_eq!(
            list.get_by_index(i),
            list.get_by_index(expected),
            "index {i} disagreed with its normalized form {expected}"
        );
    }
}

#[test]
fn dictionary_add_then_get_round_trips_and_preserves_position() {
    let dict = Dictionary::new()
        .add("a", int_item(1))
        .unwrap()
        .add("b", int_item(2))
        .unwrap();

    // Updating an existing key preserves its position.
    let updated = dict.add("a", int_item(42)).unwrap();
    assert_eq!(updated.get("a"), Some(&int_item(42)));
    assert_eq!(
        updated.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );

    // A brand new key is appended last.
    let extended = updated.add("c", int_item(3)).unwrap();
    assert_eq!(
        extended.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
}

#[test]
fn parameters_prepend_moves_existing_key_to_head() {
    let params = Parameters::new()
        .add("a", BareItem::new_integer(1).unwrap())
        .unwrap()
        .add("b", BareItem::new_integer(2).unwrap())
        .unwrap();
    let moved = params.prepend("b", BareItem::new_integer(9).unwrap()).unwrap();
    assert_eq!(
        moved.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        vec!["b", "a"]
    );
    assert_eq!(moved.get("b").unwrap().as_int(), Some(9));
}

#[test]
fn list_insert_rejects_out_of_range_index() {
    let list: List = (0..3).map(int_item).collect();
    assert!(list.insert(4, int_item(9)).is_err());
    assert!(list.insert(-4, int_item(9)).is_err());
}

#[test]
fn identity_short_circuit_returns_equal_instance_on_noop_merge() {
    let dict = Dictionary::new().add("a", int_item(1)).unwrap();
    let merged = dict.merge(&Dictionary::new());
    assert_eq!(dict, merged);
}
