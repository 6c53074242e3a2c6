use crate::containers::normalize_index;
use crate::error::SFVResult;
use crate::parser;
use crate::serializer::Serializer;
use crate::{Error, Item, ListEntry};

/// A `List` structured field value: an ordered sequence of `Item`s and
/// `InnerList`s.
// sf-list       = list-member *( OWS "," OWS list-member )
// list-member   = sf-item / inner-list
#[derive(Debug, PartialEq, Clone, Default)]
pub struct List(Vec<ListEntry>);

impl List {
    /// Returns a new, empty `List`.
    pub fn new() -> Self {
        List(Vec::new())
    }

    pub(crate) fn from_entries(entries: Vec<ListEntry>) -> Self {
        List(entries)
    }

    /// Parses `input` as a `List`.
    pub fn from_http_value(input: &[u8]) -> SFVResult<List> {
        parser::parse_list(input)
    }

    /// Serializes `self` into its canonical textual form. Empty lists
    /// serialize to the empty string.
    pub fn to_http_value(&self) -> String {
        let mut output = String::new();
        Serializer::serialize_list(self, &mut output);
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

    /// Whether `index` (signed, see crate-level index normalization) refers
    /// to an existing member.
    pub fn has(&self, index: isize) -> bool {
        normalize_index(self.0.len(), index).is_some()
    }

    /// Returns the member at the normalized position of `index`, if any.
    pub fn get_by_index(&self, index: isize) -> Option<&ListEntry> {
        normalize_index(self.0.len(), index).map(|i| &self.0[i])
    }

    /// Iterates over members in order.
    pub fn iter(&self) -> impl Iterator<Item = &ListEntry> {
        self.0.iter()
    }

    /// Appends a member at the tail.
    pub fn push(&self, entry: impl Into<ListEntry>) -> Self {
        let mut items = self.0.clone();
        items.push(entry.into());
        List(items)
    }

    /// Prepends a member at the head.
    pub fn unshift(&self, entry: impl Into<ListEntry>) -> Self {
        let mut items = self.0.clone();
        items.insert(0, entry.into());
        List(items)
    }

    /// Inserts a member before the normalized position of `index`;
    /// `index == len()` appends at the tail.
    pub fn insert(&self, index: isize, entry: impl Into<ListEntry>) -> SFVResult<Self> {
        let len = self.0.len();
        let position = if index == len as isize {
            len
        } else {
            normalize_index(len, index).ok_or_else(|| Error::no_index(index))?
        };
        let mut items = self.0.clone();
        items.insert(position, entry.into());
        Ok(List(items))
    }

    /// Replaces the member at the normalized position of `index`.
    pub fn replace(&self, index: isize, entry: impl Into<ListEntry>) -> SFVResult<Self> {
        let position = normalize_index(self.0.len(), index).ok_or_else(|| Error::no_index(index))?;
        let mut items = self.0.clone();
        items[position] = entry.into();
        Ok(self.short_circuit(List(items)))
    }

    /// Removes zero or more members by signed index. Indices are normalized
    /// against the original list before any removal takes effect.
    pub fn remove_by_index(&self, indices: impl IntoIterator<Item = isize>) -> Self {
        let len = self.0.len();
        let mut to_remove: Vec<usize> = indices
            .into_iter()
            .filter_map(|i| normalize_index(len, i))
            .collect();
        to_remove.sort_unstable();
        to_remove.dedup();

        let mut items = self.0.clone();
        for position in to_remove.into_iter().rev() {
            items.remove(position);
        }
        self.short_circuit(List(items))
    }

    /// Returns an empty `List`.
    pub fn clear(&self) -> Self {
        if self.0.is_empty() {
            self.clone()
        } else {
            List::new()
        }
    }

    /// Returns a new `List` with `other`'s members appended after `self`'s.
    pub fn merge(&self, other: &Self) -> Self {
        if other.0.is_empty() {
            return self.clone();
        }
        let mut items = self.0.clone();
        items.extend(other.0.iter().cloned());
        List(items)
    }

    fn short_circuit(&self, candidate: Self) -> Self {
        if candidate == *self {
            self.clone()
        } else {
            candidate
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a ListEntry;
    type IntoIter = std::slice::Iter<'a, ListEntry>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<ListEntry> for List {
    fn from_iter<T: IntoIterator<Item = ListEntry>>(iter: T) -> Self {
        List(iter.into_iter().collect())
    }
}
