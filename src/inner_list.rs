use crate::containers::normalize_index;
use crate::error::SFVResult;
use crate::{Error, Item, Parameters};

/// An ordered sequence of `Item`s with its own `Parameters`.
// inner-list    = "(" *SP [ sf-item *( 1*SP sf-item ) *SP ] ")" parameters
#[derive(Debug, PartialEq, Clone)]
pub struct InnerList {
    /// `Item`s that the `InnerList` contains. Can be empty.
    pub items: Vec<Item>,
    /// `InnerList`'s associated parameters. Can be empty.
    pub params: Parameters,
}

impl InnerList {
    /// Returns new `InnerList` with empty `Parameters`.
    pub fn new(items: Vec<Item>) -> InnerList {
        InnerList {
            items,
            params: Parameters::new(),
        }
    }

    /// Returns new `InnerList` with specified `Parameters`.
    pub fn with_params(items: Vec<Item>, params: Parameters) -> InnerList {
        InnerList { items, params }
    }

    /// Returns a new `InnerList` with `items` in place of `self.items`. Returns
    /// `self` unchanged if `items` is structurally equal to the current one.
    pub fn with_items(&self, items: Vec<Item>) -> Self {
        if items == self.items {
            self.clone()
        } else {
            InnerList::with_params(items, self.params.clone())
        }
    }

    /// Returns a new `InnerList` with `params` in place of `self.params`.
    /// Returns `self` unchanged if `params` is structurally equal to the
    /// current one.
    pub fn with_parameters(&self, params: Parameters) -> Self {
        if params == self.params {
            self.clone()
        } else {
            InnerList::with_params(self.items.clone(), params)
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `index` (signed, see crate-level index normalization) refers
    /// to an existing item.
    pub fn has(&self, index: isize) -> bool {
        normalize_index(self.items.len(), index).is_some()
    }

    /// Returns the item at the normalized position of `index`, if any.
    pub fn get_by_index(&self, index: isize) -> Option<&Item> {
        normalize_index(self.items.len(), index).map(|i| &self.items[i])
    }

    /// Iterates over items in order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Appends an item at the tail, preserving `params`.
    pub fn push(&self, item: Item) -> Self {
        let mut items = self.items.clone();
        items.push(item);
        InnerList::with_params(items, self.params.clone())
    }

    /// Prepends an item at the head, preserving `params`.
    pub fn unshift(&self, item: Item) -> Self {
        let mut items = self.items.clone();
        items.insert(0, item);
        InnerList::with_params(items, self.params.clone())
    }

    /// Inserts an item before the normalized position of `index`;
    /// `index == len()` appends at the tail.
    pub fn insert(&self, index: isize, item: Item) -> SFVResult<Self> {
        let len = self.items.len();
        let position = if index == len as isize {
            len
        } else {
            normalize_index(len, index).ok_or_else(|| Error::no_index(index))?
        };
        let mut items = self.items.clone();
        items.insert(position, item);
        Ok(InnerList::with_params(items, self.params.clone()))
    }

    /// Replaces the item at the normalized position of `index`.
    pub fn replace(&self, index: isize, item: Item) -> SFVResult<Self> {
        let position = normalize_index(self.items.len(), index).ok_or_else(|| Error::no_index(index))?;
        let mut items = self.items.clone();
        items[position] = item;
        Ok(self.short_circuit(InnerList::with_params(items, self.params.clone())))
    }

    /// Removes zero or more items by signed index. Indices are normalized
    /// against the original `InnerList` before any removal takes effect.
    pub fn remove_by_index(&self, indices: impl IntoIterator<Item = isize>) -> Self {
        let len = self.items.len();
        let mut to_remove: Vec<usize> = indices
            .into_iter()
            .filter_map(|i| normalize_index(len, i))
            .collect();
        to_remove.sort_unstable();
        to_remove.dedup();

        let mut items = self.items.clone();
        for position in to_remove.into_iter().rev() {
            items.remove(position);
        }
        self.short_circuit(InnerList::with_params(items, self.params.clone()))
    }

    /// Returns an `InnerList` with no items, preserving `params`.
    pub fn clear(&self) -> Self {
        if self.items.is_empty() {
            self.clone()
        } else {
            InnerList::with_params(Vec::new(), self.params.clone())
        }
    }

    /// Returns a new `InnerList` with `other`'s items appended after
    /// `self`'s. `params` is kept from `self`.
    pub fn merge(&self, other: &Self) -> Self {
        if other.items.is_empty() {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.extend(other.items.iter().cloned());
        InnerList::with_params(items, self.params.clone())
    }

    fn short_circuit(&self, candidate: Self) -> Self {
        if candidate == *self {
            self.clone()
        } else {
            candidate
        }
    }
}

impl<'a> IntoIterator for &'a InnerList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BareItem;

    fn item(n: i64) -> Item {
        Item::new(BareItem::new_integer(n).unwrap())
    }

    #[test]
    fn with_items_short_circuits() {
        let items = vec![item(1)];
        let inner = InnerList::new(items.clone());
        let same = inner.with_items(items);
        assert_eq!(inner, same);
    }

    #[test]
    fn signed_index_wraps_from_end() {
        let inner = InnerList::new(vec![item(1), item(2), item(3)]);
        assert_eq!(inner.get_by_index(-1), inner.get_by_index(2));
        assert_eq!(inner.get_by_index(-3), inner.get_by_index(0));
        assert!(inner.get_by_index(-4).is_none());
        assert!(inner.get_by_index(3).is_none());
    }

    #[test]
    fn push_and_unshift_preserve_params() {
        let params = Parameters::new()
            .add("a", BareItem::new_boolean(true).unwrap())
            .unwrap();
        let inner = InnerList::with_params(vec![item(1)], params.clone());
        assert_eq!(inner.push(item(2)).params, params);
        assert_eq!(inner.unshift(item(0)).params, params);
    }

    #[test]
    fn insert_before_normalized_index() {
        let inner = InnerList::new(vec![item(1), item(3)]);
        let inserted = inner.insert(1, item(2)).unwrap();
        assert_eq!(inserted.len(), 3);
        assert_eq!(inserted.get_by_index(1), Some(&item(2)));
    }

    #[test]
    fn insert_rejects_out_of_range_index() {
        let inner = InnerList::new(vec![item(1), item(2)]);
        assert!(inner.insert(3, item(9)).is_err());
        assert!(inner.insert(-3, item(9)).is_err());
    }

    #[test]
    fn remove_by_index_removes_in_one_pass() {
        let inner = InnerList::new(vec![item(1), item(2), item(3)]);
        let removed = inner.remove_by_index([0, -1]);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.get_by_index(0), Some(&item(2)));
    }

    #[test]
    fn clear_preserves_params() {
        let params = Parameters::new()
            .add("a", BareItem::new_boolean(true).unwrap())
            .unwrap();
        let inner = InnerList::with_params(vec![item(1)], params.clone());
        let cleared = inner.clear();
        assert!(cleared.is_empty());
        assert_eq!(cleared.params, params);
    }

    #[test]
    fn merge_appends_other_items() {
        let a = InnerList::new(vec![item(1)]);
        let b = InnerList::new(vec![item(2), item(3)]);
        let merged = a.merge(&b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get_by_index(-1), Some(&item(3)));
    }
}
