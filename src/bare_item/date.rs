use super::integer::{MAX_INTEGER, MIN_INTEGER};
use super::{SerializeBareItem, ValidateValue};
use crate::error::SFVResult;
use crate::Error;
use std::{convert::TryFrom, fmt, ops::Deref};

/// A (possibly negative) whole-second offset from the Unix epoch (1970-01-01T00:00:00Z),
/// per RFC 9651.
///
/// The ABNF for Dates is:
/// ```abnf,ignore,no_run
/// sf-date = "@" sf-integer
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BareItemDate(pub(crate) i64);

impl Deref for BareItemDate {
    type Target = i64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<i64> for BareItemDate {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = Self::validate(value)?;
        Ok(BareItemDate(value))
    }
}

impl ValidateValue<'_, i64> for BareItemDate {
    fn validate(value: i64) -> SFVResult<i64> {
        if !(MIN_INTEGER <= value && value <= MAX_INTEGER) {
            return Err(Error::syntax("date: seconds value is out of range", 0));
        }
        Ok(value)
    }
}

impl fmt::Display for BareItemDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl SerializeBareItem<&i64> for BareItemDate {
    fn serialize_ref(value: &i64, output: &mut String) {
        // https://www.rfc-editor.org/rfc/rfc9651.html#name-serializing-a-date
        output.push('@');
        output.push_str(&value.to_string());
    }
}
