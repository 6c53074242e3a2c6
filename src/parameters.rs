use std::convert::TryInto;

use indexmap::IndexMap;

use crate::error::SFVResult;
use crate::key::Key;
use crate::{BareItem, Error};

/// Parameters of an `Item` or `InnerList`: an insertion-ordered key→`BareItem` mapping.
///
/// Parameters never nest: a `Parameters` value's members are bare items only.
/// All mutators return a new instance; if the mutation would leave the
/// HTTP-serialized form unchanged, the receiver is returned unchanged instead
/// (see the crate-level identity short-circuit).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameters(IndexMap<Key, BareItem>);

impl Parameters {
    /// Returns a new, empty `Parameters`.
    pub fn new() -> Self {
        Parameters(IndexMap::new())
    }

    pub(crate) fn from_entries(entries: Vec<(Key, BareItem)>) -> Self {
        Parameters(entries.into_iter().collect())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `key` is present.
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Looks up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&BareItem> {
        self.0.get(key)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.0.keys()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &BareItem)> {
        self.0.iter()
    }

    /// Inserts or updates `key`. If `key` already exists, its value is
    /// replaced in place (position preserved); otherwise it is appended.
    pub fn add(&self, key: impl TryInto<Key, Error = Error>, value: BareItem) -> SFVResult<Self> {
        let key = key.try_into()?;
        let mut map = self.0.clone();
        map.insert(key, value);
        Ok(self.short_circuit(Parameters(map)))
    }

    /// Removes `key` if present, then inserts it at the tail.
    pub fn append(
        &self,
        key: impl TryInto<Key, Error = Error>,
        value: BareItem,
    ) -> SFVResult<Self> {
        let key = key.try_into()?;
        let mut map = self.0.clone();
        map.shift_remove(&key);
        map.insert(key, value);
        Ok(self.short_circuit(Parameters(map)))
    }

    /// Removes `key` if present, then inserts it at the head.
    pub fn prepend(
        &self,
        key: impl TryInto<Key, Error = Error>,
        value: BareItem,
    ) -> SFVResult<Self> {
        let key = key.try_into()?;
        let mut map = self.0.clone();
        map.shift_remove(&key);
        map.shift_insert(0, key, value);
        Ok(self.short_circuit(Parameters(map)))
    }

    /// Removes zero or more keys. Unknown keys are ignored.
    pub fn remove<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = self.0.clone();
        for key in keys {
            map.shift_remove(key);
        }
        self.short_circuit(Parameters(map))
    }

    /// Returns an empty `Parameters`.
    pub fn clear(&self) -> Self {
        if self.0.is_empty() {
            self.clone()
        } else {
            Parameters::new()
        }
    }

    /// Merges `other` into `self`; keys in `other` overwrite in place, new
    /// keys append in `other`'s order.
    pub fn merge(&self, other: &Self) -> Self {
        let mut map = self.0.clone();
        for (key, value) in &other.0 {
            map.insert(key.clone(), value.clone());
        }
        self.short_circuit(Parameters(map))
    }

    fn short_circuit(&self, candidate: Self) -> Self {
        if candidate == *self {
            self.clone()
        } else {
            candidate
        }
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a Key, &'a BareItem);
    type IntoIter = indexmap::map::Iter<'a, Key, BareItem>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_updates_in_place() {
        let params = Parameters::new()
            .add("a", BareItem::new_integer(1).unwrap())
            .unwrap()
            .add("b", BareItem::new_integer(2).unwrap())
            .unwrap();
        let updated = params.add("a", BareItem::new_integer(3).unwrap()).unwrap();
        assert_eq!(
            updated.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(updated.get("a").unwrap().as_int(), Some(3));
    }

    #[test]
    fn append_moves_to_tail() {
        let params = Parameters::new()
            .add("a", BareItem::new_integer(1).unwrap())
            .unwrap()
            .add("b", BareItem::new_integer(2).unwrap())
            .unwrap();
        let appended = params.append("a", BareItem::new_integer(9).unwrap()).unwrap();
        assert_eq!(
            appended.keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }

    #[test]
    fn identity_short_circuit_on_noop_add() {
        let params = Parameters::new()
            .add("a", BareItem::new_integer(1).unwrap())
            .unwrap();
        let same = params.add("a", BareItem::new_integer(1).unwrap()).unwrap();
        assert_eq!(params, same);
    }

    #[test]
    fn rejects_bad_key() {
        assert!(Parameters::new()
            .add("Bad", BareItem::new_integer(1).unwrap())
            .is_err());
    }
}
