//! End-to-end serializer scenarios and the round-trip laws of the crate.

use crate::{parse_dictionary, parse_item, parse_list, BareItem, Dictionary, Item, List, SerializeValue};

fn roundtrip_item(input: &str) {
    let parsed = parse_item(input.as_bytes()).unwrap();
    let reparsed = parse_item(parsed.serialize_value().as_bytes()).unwrap();
    assert_eq!(parsed, reparsed, "parse(serialize(parse(I))) != parse(I) for {input:?}");
}

fn roundtrip_list(input: &str) {
    let parsed = parse_list(input.as_bytes()).unwrap();
    let reparsed = parse_list(parsed.serialize_value().as_bytes()).unwrap();
    assert_eq!(parsed, reparsed, "parse(serialize(parse(I))) != parse(I) for {input:?}");
}

#[test]
fn round_trip_law_holds_for_assorted_items() {
    for input in [
        "12.445;foo=bar",
        "\"a string\"",
        ":cHJldGVuZCB0aGlzIGlzIGJpbmFyeQ==:",
        "?1",
        "token;a;b=2",
    ] {
        roundtrip_item(input);
    }
}

#[test]
fn round_trip_law_holds_for_lists() {
    for input in [
        "sugar, tea, rum",
        "1;a=tok, (\"foo\" \"bar\");baz, ()",
    ] {
        roundtrip_list(input);
    }
}

#[test]
fn dictionary_round_trip_law_holds() {
    let parsed = parse_dictionary(b"a=1, b=2").unwrap();
    let reparsed = parse_dictionary(parsed.serialize_value().as_bytes()).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn serialize_parse_serialize_identity_for_constructed_values() {
    let item = Item::with_params(
        BareItem::new_integer(99).unwrap(),
        crate::Parameters::new()
            .add("key", BareItem::new_boolean(false).unwrap())
            .unwrap(),
    );
    let once = item.serialize_value();
    let twice = parse_item(once.as_bytes()).unwrap().serialize_value();
    assert_eq!(once, twice);
}

#[test]
fn empty_list_and_dictionary_serialize_to_empty_string() {
    assert_eq!(List::new().serialize_value(), "");
    assert_eq!(Dictionary::new().serialize_value(), "");
}

#[test]
fn dictionary_boolean_true_member_omits_value() {
    let dict = Dictionary::new()
        .add("a", Item::new(BareItem::new_boolean(true).unwrap()))
        .unwrap();
    assert_eq!(dict.serialize_value(), "a");
}

#[test]
fn decimal_always_emits_at_least_one_fractional_digit() {
    let item = Item::new(BareItem::new_integer(0).unwrap());
    assert_eq!(item.serialize_value(), "0");

    let decimal_item = Item::new(BareItem::new_decimal(rust_decimal::Decimal::new(2, 0)).unwrap());
    assert_eq!(decimal_item.serialize_value(), "2.0");
}

#[test]
fn string_escapes_quotes_and_backslashes_on_serialize() {
    let item = Item::new(BareItem::new_string("a \"quoted\" \\ value").unwrap());
    assert_eq!(item.serialize_value(), "\"a \\\"quoted\\\" \\\\ value\"");
}
