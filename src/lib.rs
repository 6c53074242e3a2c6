/*!
`sfv` is an implementation of *Structured Field Values for HTTP* as specified in
[RFC 8941](https://httpwg.org/specs/rfc8941.html), with optional support for the
`Date` and `Display String` bare item types added by
[RFC 9651](https://www.rfc-editor.org/rfc/rfc9651.html) (feature-gated, on by default).

# Data Structures

There are three types of structured fields:

- `Item` - a bare value (`Integer`, `Decimal`, `String`, `Token`, `ByteSequence`, `Boolean`,
  and with the RFC 9651 features enabled, `Date` and `DisplayString`) plus its `Parameters`.
- `List` - an ordered sequence of `Item`s and `InnerList`s.
- `Dictionary` - an insertion-ordered mapping of short textual keys to `Item`s or `InnerList`s.

`BareItem` is the value held by an `Item` or a `Parameters` entry. `Parameters` is an
ordered key-value map attached to an `Item` or `InnerList`. `InnerList` is itself an
ordered sequence of `Item`s, with its own `Parameters`. `ListEntry` represents either
an `Item` or an `InnerList` as a member of a `List` or `Dictionary`.

All of these types are value-like: mutating methods return a new instance rather than
modifying the receiver, and return the receiver unchanged when the requested mutation
would not change the canonical HTTP serialization.

# Examples

### Parsing

```
use sfv::{parse_item, parse_list, parse_dictionary};

let item = parse_item("12.445;foo=bar".as_bytes());
assert!(item.is_ok());

let list = parse_list("1;a=tok, (\"foo\" \"bar\");baz, ()".as_bytes());
assert!(list.is_ok());

let dict = parse_dictionary("a=?0, b, c; foo=bar, rating=1.5, fruits=(apple pear)".as_bytes());
assert!(dict.is_ok());
```

### Getting Parsed Value Members

```
use sfv::*;

let dict = parse_dictionary("u=2, n=(* foo 2)".as_bytes()).unwrap();

// Case 1 - handling value if it's an Item of Integer type
let u_val = match dict.get("u") {
    Some(ListEntry::Item(item)) => item.bare_item.as_int(),
    _ => None,
};
assert_eq!(u_val, Some(2));

// Case 2 - matching on all possible types
match dict.get("u") {
    Some(ListEntry::Item(item)) => match &item.bare_item {
        BareItem::Token(val) => println!("token: {}", val),
        BareItem::Integer(val) => println!("integer: {}", val),
        BareItem::Boolean(val) => println!("boolean: {}", val),
        BareItem::Decimal(val) => println!("decimal: {}", val),
        BareItem::String(val) => println!("string: {}", val),
        BareItem::ByteSeq(val) => println!("byte sequence: {:?}", val),
        _ => {}
    },
    Some(ListEntry::InnerList(inner_list)) => {
        println!("inner list: {:?}", inner_list.items);
    }
    None => panic!("key not found"),
}
```

### Structured Field Value Construction and Serialization

Creates an `Item` with empty parameters:
```
use sfv::{Item, BareItem, SerializeValue};
# fn main() -> Result<(), sfv::Error> {
let str_item = Item::new(BareItem::new_string("foo")?);
assert_eq!(str_item.serialize_value(), "\"foo\"");
# Ok(())
# }
```

Creates an `Item` field value with parameters:
```
use sfv::{Item, BareItem, SerializeValue, Parameters, FromPrimitive};
use rust_decimal::Decimal;

# fn main() -> Result<(), sfv::Error> {
let decimal = Decimal::from_f64(13.45655).unwrap();
let params = Parameters::new().add("key", BareItem::new_decimal(decimal)?)?;
let int_item = Item::with_params(BareItem::new_integer(99_i64)?, params);
assert_eq!(int_item.serialize_value(), "99;key=13.457");
# Ok(())
# }
```

Creates a `List` field value with an `Item` and a parametrized `InnerList` as members:
```
use sfv::{Item, BareItem, InnerList, List, ListEntry, SerializeValue, Parameters};

# fn main() -> Result<(), sfv::Error> {
let tok_item = BareItem::new_token("tok")?;
let str_item = Item::new(BareItem::new_string("foo")?);

let int_item_params = Parameters::new().add("key", BareItem::new_boolean(false)?)?;
let int_item = Item::with_params(BareItem::new_integer(99_i64)?, int_item_params);

let inner_list_params = Parameters::new().add("bar", BareItem::new_boolean(true)?)?;
let inner_list = InnerList::with_params(vec![int_item, str_item], inner_list_params);

let list: List = [ListEntry::Item(Item::new(tok_item)), ListEntry::InnerList(inner_list)]
    .into_iter()
    .collect();
assert_eq!(
    list.serialize_value(),
    "tok, (99;key=?0 \"foo\");bar"
);
# Ok(())
# }
```

Creates a `Dictionary` field value:
```
use sfv::{Item, BareItem, SerializeValue, Dictionary};

# fn main() -> Result<(), sfv::Error> {
let member1 = Item::new(BareItem::new_string("apple")?);
let member2 = Item::new(BareItem::new_boolean(true)?);
let member3 = Item::new(BareItem::new_boolean(false)?);

let dict = Dictionary::new()
    .add("key1", member1)?
    .add("key2", member2)?
    .add("key3", member3)?;

assert_eq!(
    dict.serialize_value(),
    "key1=\"apple\", key2, key3=?0"
);
# Ok(())
# }
```
*/

mod bare_item;
mod containers;
mod dictionary;
mod error;
mod inner_list;
mod item;
mod key;
mod list;
mod list_entry;
mod parameters;
mod parser;
mod ref_serializer;
mod serializer;
mod utils;

#[cfg(test)]
mod test_containers;
#[cfg(test)]
mod test_parser;
#[cfg(test)]
mod test_serializer;

pub use rust_decimal::prelude::{FromPrimitive, FromStr};

pub use bare_item::BareItem;
#[cfg(feature = "sf-date")]
pub use bare_item::BareItemDate;
#[cfg(feature = "sf-display-string")]
pub use bare_item::BareItemDisplayString;
pub use bare_item::{
    BareItemBoolean, BareItemByteSeq, BareItemDecimal, BareItemInteger, BareItemString,
    BareItemToken,
};
pub use dictionary::Dictionary;
pub use error::{Error, Offset};
pub use inner_list::InnerList;
pub use item::Item;
pub use key::Key;
pub use list::List;
pub use list_entry::ListEntry;
pub use parameters::Parameters;
pub use parser::{parse_dictionary, parse_item, parse_list};
pub use serializer::SerializeValue;
