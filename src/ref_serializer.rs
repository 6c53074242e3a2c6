use crate::BareItem;

/// Borrowed counterpart of `BareItem`, used by the serializer to avoid
/// cloning owned values purely to write them out.
#[derive(Debug, PartialEq, Clone)]
pub(crate) enum RefBareItem<'a> {
    Integer(i64),
    Decimal(rust_decimal::Decimal),
    String(&'a str),
    ByteSeq(&'a [u8]),
    Boolean(bool),
    Token(&'a str),
    #[cfg(feature = "sf-date")]
    Date(i64),
    #[cfg(feature = "sf-display-string")]
    DisplayString(&'a str),
}

impl<'a> RefBareItem<'a> {
    pub(crate) fn write(&self, output: &mut String) {
        use crate::bare_item::SerializeBareItem;
        use crate::bare_item::{
            BareItemBoolean, BareItemByteSeq, BareItemDecimal, BareItemInteger, BareItemString,
            BareItemToken,
        };

        match self {
            RefBareItem::Integer(val) => BareItemInteger::serialize_ref(val, output),
            RefBareItem::Decimal(val) => BareItemDecimal::serialize_ref(val, output),
            RefBareItem::String(val) => BareItemString::serialize_ref(val, output),
            RefBareItem::ByteSeq(val) => BareItemByteSeq::serialize_ref(val, output),
            RefBareItem::Boolean(val) => BareItemBoolean::serialize_ref(*val, output),
            RefBareItem::Token(val) => BareItemToken::serialize_ref(val, output),
            #[cfg(feature = "sf-date")]
            RefBareItem::Date(val) => crate::bare_item::BareItemDate::serialize_ref(val, output),
            #[cfg(feature = "sf-display-string")]
            RefBareItem::DisplayString(val) => {
                crate::bare_item::BareItemDisplayString::serialize_ref(val, output)
            }
        }
    }
}

impl BareItem {
    /// Converts `BareItem` into the borrowed `RefBareItem` used by the
    /// parameter-serialization path.
    pub(crate) fn to_ref_bare_item(&self) -> RefBareItem {
        match self {
            BareItem::Integer(val) => RefBareItem::Integer(**val),
            BareItem::Decimal(val) => RefBareItem::Decimal(**val),
            BareItem::String(val) => RefBareItem::String(val),
            BareItem::ByteSeq(val) => RefBareItem::ByteSeq(val),
            BareItem::Boolean(val) => RefBareItem::Boolean(**val),
            BareItem::Token(val) => RefBareItem::Token(val),
            #[cfg(feature = "sf-date")]
            BareItem::Date(val) => RefBareItem::Date(**val),
            #[cfg(feature = "sf-display-string")]
            BareItem::DisplayString(val) => RefBareItem::DisplayString(val),
        }
    }
}
