mod boolean;
mod byte_sequence;
mod decimal;
#[cfg(feature = "sf-date")]
mod date;
#[cfg(feature = "sf-display-string")]
mod display_string;
mod integer;
mod string;
mod token;

use crate::error::SFVResult;
use crate::Error;
use rust_decimal::prelude::FromPrimitive;
use std::convert::{TryFrom, TryInto};

pub use self::boolean::BareItemBoolean;
pub use self::byte_sequence::BareItemByteSeq;
#[cfg(feature = "sf-date")]
pub use self::date::BareItemDate;
pub use self::decimal::BareItemDecimal;
#[cfg(feature = "sf-display-string")]
pub use self::display_string::BareItemDisplayString;
pub use self::integer::BareItemInteger;
pub use self::string::BareItemString;
pub use self::token::BareItemToken;

/// `BareItem` is used to construct `Item`s or `Parameters` values.
#[non_exhaustive]
#[derive(Debug, PartialEq, Clone)]
pub enum BareItem {
    /// Decimal number
    // sf-decimal  = ["-"] 1*12DIGIT "." 1*3DIGIT
    Decimal(BareItemDecimal),
    /// Integer number
    // sf-integer = ["-"] 1*15DIGIT
    Integer(BareItemInteger),
    // sf-string = DQUOTE *chr DQUOTE
    // chr       = unescaped / escaped
    // unescaped = %x20-21 / %x23-5B / %x5D-7E
    // escaped   = "\" ( DQUOTE / "\" )
    String(BareItemString),
    // ":" *(base64) ":"
    // base64    = ALPHA / DIGIT / "+" / "/" / "="
    ByteSeq(BareItemByteSeq),
    // sf-boolean = "?" boolean
    // boolean    = "0" / "1"
    Boolean(BareItemBoolean),
    // sf-token = ( ALPHA / "*" ) *( tchar / ":" / "/" )
    Token(BareItemToken),
    /// Seconds since the Unix epoch (RFC 9651).
    // sf-date = "@" sf-integer
    #[cfg(feature = "sf-date")]
    Date(BareItemDate),
    /// A Unicode string (RFC 9651).
    // sf-displaystring = "%" DQUOTE *( dchar / pct-encoded ) DQUOTE
    #[cfg(feature = "sf-display-string")]
    DisplayString(BareItemDisplayString),
}

impl BareItem {
    /// Creates a `BareItem::Decimal` from an `f64` input.
    /// ```
    /// # use sfv::BareItem;
    /// # fn main() -> Result<(), sfv::Error> {
    /// let value = BareItem::new_decimal_from_f64(13.37)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_decimal_from_f64(value: f64) -> SFVResult<BareItem> {
        let decimal = rust_decimal::Decimal::from_f64(value)
            .ok_or_else(|| Error::syntax("decimal: value can not represent a decimal", 0))?;

        Self::new_decimal(decimal)
    }

    /// Creates a `BareItem::Decimal` from a `rust_decimal::Decimal` input.
    /// ```
    /// # use sfv::BareItem;
    /// # use sfv::FromPrimitive;
    /// # fn main() -> Result<(), sfv::Error> {
    /// let decimal = rust_decimal::Decimal::from_f64(13.37).unwrap();
    /// let value = BareItem::new_decimal(decimal)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_decimal(value: rust_decimal::Decimal) -> SFVResult<BareItem> {
        let value: BareItemDecimal = value.try_into()?;
        Ok(BareItem::Decimal(value))
    }

    /// Creates a `BareItem::Integer` from an `i64` input.
    /// ```
    /// # use sfv::BareItem;
    /// # fn main() -> Result<(), sfv::Error> {
    /// let value = BareItem::new_integer(42)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_integer(value: i64) -> SFVResult<BareItem> {
        let value: BareItemInteger = value.try_into()?;
        Ok(BareItem::Integer(value))
    }

    /// Creates a `BareItem::String` from a `&str` input.
    /// ```
    /// # use sfv::BareItem;
    /// # fn main() -> Result<(), sfv::Error> {
    /// let value = BareItem::new_string("foo")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_string(value: &str) -> SFVResult<BareItem> {
        let value: BareItemString = value.try_into()?;
        Ok(BareItem::String(value))
    }

    /// Creates a `BareItem::ByteSeq` from a byte slice input.
    /// ```
    /// # use sfv::BareItem;
    /// # fn main() -> Result<(), sfv::Error> {
    /// let value = BareItem::new_byte_seq("hello".as_bytes())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_byte_seq(value: &[u8]) -> SFVResult<BareItem> {
        let value: BareItemByteSeq = value.into();
        Ok(BareItem::ByteSeq(value))
    }

    /// Creates a `BareItem::Boolean` from a `bool` input.
    /// ```
    /// # use sfv::BareItem;
    /// # fn main() -> Result<(), sfv::Error> {
    /// let value = BareItem::new_boolean(true)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_boolean(value: bool) -> SFVResult<BareItem> {
        let value: BareItemBoolean = value.into();
        Ok(BareItem::Boolean(value))
    }

    /// Creates a `BareItem::Token` from a `&str` input.
    /// ```
    /// # use sfv::BareItem;
    /// # fn main() -> Result<(), sfv::Error> {
    /// let value = BareItem::new_token("token")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new_token(value: &str) -> SFVResult<BareItem> {
        let value: BareItemToken = value.try_into()?;
        Ok(BareItem::Token(value))
    }

    /// Creates a `BareItem::Date` from a signed second count since the Unix epoch.
    #[cfg(feature = "sf-date")]
    pub fn new_date(value: i64) -> SFVResult<BareItem> {
        let value: BareItemDate = value.try_into()?;
        Ok(BareItem::Date(value))
    }

    /// Creates a `BareItem::DisplayString` from a `&str` input.
    #[cfg(feature = "sf-display-string")]
    pub fn new_display_string(value: &str) -> SFVResult<BareItem> {
        let value: BareItemDisplayString = value.try_into()?;
        Ok(BareItem::DisplayString(value))
    }
}

impl BareItem {
    /// If `BareItem` is a decimal, returns `Decimal`, otherwise returns `None`.
    pub fn as_decimal(&self) -> Option<rust_decimal::Decimal> {
        match self {
            BareItem::Decimal(val) => Some(val.0),
            _ => None,
        }
    }
    /// If `BareItem` is an integer, returns `i64`, otherwise returns `None`.
    pub fn as_int(&self) -> Option<i64> {
        match &self {
            BareItem::Integer(val) => Some(**val),
            _ => None,
        }
    }
    /// If `BareItem` is `String`, returns `&str`, otherwise returns `None`.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            BareItem::String(ref val) => Some(val),
            _ => None,
        }
    }
    /// If `BareItem` is a `ByteSeq`, returns `&Vec<u8>`, otherwise returns `None`.
    pub fn as_byte_seq(&self) -> Option<&Vec<u8>> {
        match *self {
            BareItem::ByteSeq(ref val) => Some(&val.0),
            _ => None,
        }
    }
    /// If `BareItem` is a `Boolean`, returns `bool`, otherwise returns `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BareItem::Boolean(val) => Some(val.0),
            _ => None,
        }
    }
    /// If `BareItem` is a `Token`, returns `&str`, otherwise returns `None`.
    pub fn as_token(&self) -> Option<&str> {
        match *self {
            BareItem::Token(ref val) => Some(val),
            _ => None,
        }
    }
    /// If `BareItem` is a `Date`, returns the second count since the Unix epoch, otherwise `None`.
    #[cfg(feature = "sf-date")]
    pub fn as_date(&self) -> Option<i64> {
        match self {
            BareItem::Date(val) => Some(val.0),
            _ => None,
        }
    }
    /// If `BareItem` is a `DisplayString`, returns `&str`, otherwise returns `None`.
    #[cfg(feature = "sf-display-string")]
    pub fn as_display_string(&self) -> Option<&str> {
        match *self {
            BareItem::DisplayString(ref val) => Some(val),
            _ => None,
        }
    }
}

impl BareItem {
    pub(crate) fn write(&self, output: &mut String) {
        match self {
            BareItem::Integer(val) => BareItemInteger::serialize_ref(val, output),
            BareItem::Decimal(val) => BareItemDecimal::serialize_ref(val, output),
            BareItem::String(val) => BareItemString::serialize_ref(val, output),
            BareItem::ByteSeq(val) => BareItemByteSeq::serialize_ref(val, output),
            BareItem::Boolean(val) => BareItemBoolean::serialize_ref(**val, output),
            BareItem::Token(val) => BareItemToken::serialize_ref(val, output),
            #[cfg(feature = "sf-date")]
            BareItem::Date(val) => BareItemDate::serialize_ref(val, output),
            #[cfg(feature = "sf-display-string")]
            BareItem::DisplayString(val) => BareItemDisplayString::serialize_ref(val, output),
        };
    }
}

impl TryFrom<i64> for BareItem {
    type Error = Error;
    /// Converts `i64` into `BareItem::Integer`.
    fn try_from(item: i64) -> Result<Self, Self::Error> {
        Self::new_integer(item)
    }
}

impl TryFrom<rust_decimal::Decimal> for BareItem {
    type Error = Error;
    /// Converts `rust_decimal::Decimal` into `BareItem::Decimal`.
    fn try_from(item: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        Self::new_decimal(item)
    }
}

impl TryFrom<f64> for BareItem {
    type Error = Error;

    /// Converts `f64` into `BareItem::Decimal`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new_decimal_from_f64(value)
    }
}

impl TryFrom<&[u8]> for BareItem {
    type Error = Error;

    /// Converts a byte slice into `BareItem::ByteSeq`.
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::new_byte_seq(value)
    }
}

impl TryFrom<bool> for BareItem {
    type Error = Error;

    /// Converts a `bool` into `BareItem::Boolean`.
    fn try_from(value: bool) -> Result<Self, Self::Error> {
        Self::new_boolean(value)
    }
}

/// Validates a bare item value and returns a new sanitized value
/// or passes back ownership of the existing value in case the input needs no change.
pub(crate) trait ValidateValue<'a, T> {
    fn validate(value: T) -> SFVResult<T>;
}

pub(crate) trait SerializeBareItem<T> {
    fn serialize_ref(value: T, output: &mut String);
}
