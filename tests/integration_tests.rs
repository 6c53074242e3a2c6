use sfv::{parse_dictionary, parse_item, parse_list, BareItem, Dictionary, Item, ListEntry, SerializeValue};

#[test]
fn dictionary_end_to_end_scenario() {
    let dict = parse_dictionary(b"a=1, b=2;x=?0, c").unwrap();
    assert_eq!(
        dict.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
    match dict.get("c").unwrap() {
        ListEntry::Item(item) => assert_eq!(item.bare_item, BareItem::Boolean(true.into())),
        ListEntry::InnerList(_) => panic!("expected an Item"),
    }
    assert_eq!(dict.serialize_value(), "a=1, b=2;x=?0, c");
}

#[test]
fn list_of_tokens_end_to_end_scenario() {
    let list = parse_list(b"sugar, tea, rum").unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.serialize_value(), "sugar, tea, rum");
}

#[test]
fn inner_list_end_to_end_scenario() {
    let list = parse_list(b"(\"foo\" \"bar\");a=1").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.serialize_value(), "(\"foo\" \"bar\");a=1");
}

#[test]
fn byte_sequence_end_to_end_scenario() {
    let item = parse_item(b":cHJldGVuZCB0aGlzIGlzIGJpbmFyeQ==:").unwrap();
    assert_eq!(
        item.bare_item.as_byte_seq().unwrap(),
        b"pretend this is binary"
    );
}

#[test]
fn boolean_end_to_end_scenario() {
    assert_eq!(
        parse_item(b"?0").unwrap().bare_item,
        BareItem::Boolean(false.into())
    );
    assert!(parse_item(b"?2").is_err());
}

#[test]
fn dictionary_canonicalizes_comma_spacing() {
    let dict = parse_dictionary(b"a=1,b=2").unwrap();
    assert_eq!(dict.serialize_value(), "a=1, b=2");
}

#[test]
fn builds_a_dictionary_from_scratch_and_serializes_it() {
    let apple = Item::new(BareItem::new_string("apple").unwrap());
    let flag_true = Item::new(BareItem::new_boolean(true).unwrap());
    let flag_false = Item::new(BareItem::new_boolean(false).unwrap());

    let dict = Dictionary::new()
        .add("key1", apple)
        .unwrap()
        .add("key2", flag_true)
        .unwrap()
        .add("key3", flag_false)
        .unwrap();

    assert_eq!(
        dict.serialize_value(),
        "key1=\"apple\", key2, key3=?0"
    );
}

#[cfg(feature = "sf-date")]
#[test]
fn date_round_trips_through_parse_and_serialize() {
    let item = parse_item(b"@1659578233").unwrap();
    assert_eq!(item.bare_item.as_date(), Some(1_659_578_233));
    assert_eq!(item.serialize_value(), "@1659578233");
}

#[cfg(feature = "sf-display-string")]
#[test]
fn display_string_percent_encodes_non_ascii_on_serialize() {
    let item = Item::new(BareItem::new_display_string("caf\u{e9}").unwrap());
    assert_eq!(item.serialize_value(), "%\"caf%c3%a9\"");
    let parsed = parse_item(item.serialize_value().as_bytes()).unwrap();
    assert_eq!(parsed.bare_item.as_display_string(), Some("caf\u{e9}"));
}

#[test]
fn rejection_emits_a_debug_log_line_without_affecting_the_result() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert!(parse_item(b"?2").is_err());
}
