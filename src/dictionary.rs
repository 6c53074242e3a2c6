use std::convert::TryInto;

use indexmap::IndexMap;

use crate::containers::normalize_index;
use crate::error::SFVResult;
use crate::key::Key;
use crate::parser;
use crate::serializer::Serializer;
use crate::{Error, ListEntry};

/// A `Dictionary` structured field value: an insertion-ordered mapping from
/// `Key` to (`Item` | `InnerList`), represented as `ListEntry`.
// sf-dictionary  = dict-member *( OWS "," OWS dict-member )
// dict-member    = member-name [ "=" member-value ]
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Dictionary(IndexMap<Key, ListEntry>);

impl Dictionary {
    /// Returns a new, empty `Dictionary`.
    pub fn new() -> Self {
        Dictionary(IndexMap::new())
    }

    pub(crate) fn from_entries(entries: Vec<(Key, ListEntry)>) -> Self {
        Dictionary(entries.into_iter().collect())
    }

    /// Parses `input` as a `Dictionary`.
    pub fn from_http_value(input: &[u8]) -> SFVResult<Dictionary> {
        parser::parse_dictionary(input)
    }

    /// Serializes `self` into its canonical textual form. Empty dictionaries
    /// serialize to the empty string.
    pub fn to_http_value(&self) -> String {
        let mut output = String::new();
        Serializer::serialize_dict(self, &mut output);
        output
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether the normalized signed `index` refers to an existing member.
    pub fn has_index(&self, index: isize) -> bool {
        normalize_index(self.0.len(), index).is_some()
    }

    /// Looks up a member by key.
    pub fn get(&self, key: &str) -> Option<&ListEntry> {
        self.0.get(key)
    }

    /// Returns the `(key, value)` pair at the normalized position of `index`.
    pub fn get_by_index(&self, index: isize) -> Option<(&Key, &ListEntry)> {
        normalize_index(self.0.len(), index).and_then(|i| self.0.get_index(i))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.0.keys()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &ListEntry)> {
        self.0.iter()
    }

    /// Inserts or updates `key`. If `key` already exists, its value is
    /// replaced in place (position preserved); otherwise it is appended.
    pub fn add(
        &self,
        key: impl TryInto<Key, Error = Error>,
        value: impl Into<ListEntry>,
    ) -> SFVResult<Self> {
        let key = key.try_into()?;
        let mut map = self.0.clone();
        map.insert(key, value.into());
        Ok(self.short_circuit(Dictionary(map)))
    }

    /// Removes `key` if present, then inserts it at the tail.
    pub fn append(
        &self,
        key: impl TryInto<Key, Error = Error>,
        value: impl Into<ListEntry>,
    ) -> SFVResult<Self> {
        let key = key.try_into()?;
        let mut map = self.0.clone();
        map.shift_remove(&key);
        map.insert(key, value.into());
        Ok(self.short_circuit(Dictionary(map)))
    }

    /// Removes `key` if present, then inserts it at the head.
    pub fn prepend(
        &self,
        key: impl TryInto<Key, Error = Error>,
        value: impl Into<ListEntry>,
    ) -> SFVResult<Self> {
        let key = key.try_into()?;
        let mut map = self.0.clone();
        map.shift_remove(&key);
        map.shift_insert(0, key, value.into());
        Ok(self.short_circuit(Dictionary(map)))
    }

    /// Removes zero or more keys. Unknown keys are ignored.
    pub fn remove<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = self.0.clone();
        for key in keys {
            map.shift_remove(key);
        }
        self.short_circuit(Dictionary(map))
    }

    /// Removes zero or more members by signed index. Indices are normalized
    /// against the original dictionary before any removal takes effect.
    pub fn remove_by_index(&self, indices: impl IntoIterator<Item = isize>) -> Self {
        let len = self.0.len();
        let mut to_remove: Vec<usize> = indices
            .into_iter()
            .filter_map(|i| normalize_index(len, i))
            .collect();
        to_remove.sort_unstable();
        to_remove.dedup();

        let mut map = self.0.clone();
        for position in to_remove.into_iter().rev() {
            map.shift_remove_index(position);
        }
        self.short_circuit(Dictionary(map))
    }

    /// Returns an empty `Dictionary`.
    pub fn clear(&self) -> Self {
        if self.0.is_empty() {
            self.clone()
        } else {
            Dictionary::new()
        }
    }

    /// Merges `other` into `self`; keys in `other` overwrite in place, new
    /// keys append in `other`'s order.
    pub fn merge(&self, other: &Self) -> Self {
        let mut map = self.0.clone();
        for (key, value) in &other.0 {
            map.insert(key.clone(), value.clone());
        }
        self.short_circuit(Dictionary(map))
    }

    fn short_circuit(&self, candidate: Self) -> Self {
        if candidate == *self {
            self.clone()
        } else {
            candidate
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Key, &'a ListEntry);
    type IntoIter = indexmap::map::Iter<'a, Key, ListEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BareItem, Item};

    fn item(n: i64) -> ListEntry {
        Item::new(BareItem::new_integer(n).unwrap()).into()
    }

    #[test]
    fn add_preserves_position_on_update() {
        let dict = Dictionary::new()
            .add("a", item(1))
            .unwrap()
            .add("b", item(2))
            .unwrap();
        let updated = dict.add("a", item(9)).unwrap();
        assert_eq!(
            updated.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(updated.get("a"), Some(&item(9)));
    }

    #[test]
    fn append_moves_existing_key_to_tail() {
        let dict = Dictionary::new()
            .add("a", item(1))
            .unwrap()
            .add("b", item(2))
            .unwrap();
        let appended = dict.append("a", item(9)).unwrap();
        assert_eq!(
            appended.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }

    #[test]
    fn get_by_index_supports_negative_index() {
        let dict = Dictionary::new()
            .add("a", item(1))
            .unwrap()
            .add("b", item(2))
            .unwrap();
        assert_eq!(dict.get_by_index(-1).map(|(k, _)| k.as_str()), Some("b"));
    }
}
