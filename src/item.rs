use crate::error::SFVResult;
use crate::parser;
use crate::serializer::Serializer;
use crate::{BareItem, Parameters};

/// An `Item`: a bare value plus its `Parameters`.
// sf-item   = bare-item parameters
#[derive(Debug, PartialEq, Clone)]
pub struct Item {
    /// Value of `Item`.
    pub bare_item: BareItem,
    /// `Item`'s associated parameters. Can be empty.
    pub params: Parameters,
}

impl Item {
    /// Returns new `Item` with empty `Parameters`.
    pub fn new(bare_item: BareItem) -> Item {
        Item {
            bare_item,
            params: Parameters::new(),
        }
    }

    /// Returns new `Item` with specified `Parameters`.
    pub fn with_params(bare_item: BareItem, params: Parameters) -> Item {
        Item { bare_item, params }
    }

    /// Parses `input` as an `Item`.
    pub fn from_http_value(input: &[u8]) -> SFVResult<Item> {
        parser::parse_item(input)
    }

    /// Serializes `self` into its canonical textual form.
    pub fn to_http_value(&self) -> String {
        let mut output = String::new();
        Serializer::serialize_item(self, &mut output);
        output
    }

    /// Returns a new `Item` with `value` in place of `self.bare_item`, preserving
    /// `params`. Returns `self` unchanged if `value` is structurally equal to
    /// the current bare item.
    pub fn with_value(&self, value: BareItem) -> Self {
        if value == self.bare_item {
            self.clone()
        } else {
            Item::with_params(value, self.params.clone())
        }
    }

    /// Returns a new `Item` with `params` in place of `self.params`. Returns
    /// `self` unchanged if `params` is structurally equal to the current one.
    pub fn with_parameters(&self, params: Parameters) -> Self {
        if params == self.params {
            self.clone()
        } else {
            Item::with_params(self.bare_item.clone(), params)
        }
    }
}
