use super::{SerializeBareItem, ValidateValue};
use crate::error::SFVResult;
use crate::Error;
use std::{convert::TryFrom, fmt, ops::Deref};

/// Integers have a range of -999,999,999,999,999 to 999,999,999,999,999 inclusive (i.e., up to fifteen digits, signed), for IEEE 754 compatibility.
///
/// The ABNF for Integers is:
/// ```abnf,ignore,no_run
/// sf-integer = ["-"] 1*15DIGIT
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BareItemInteger(pub(crate) i64);

pub(crate) const MIN_INTEGER: i64 = -999_999_999_999_999;
pub(crate) const MAX_INTEGER: i64 = 999_999_999_999_999;

impl Deref for BareItemInteger {
    type Target = i64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<i64> for BareItemInteger {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = Self::validate(value)?;
        Ok(BareItemInteger(value))
    }
}

impl ValidateValue<'_, i64> for BareItemInteger {
    fn validate(value: i64) -> SFVResult<i64> {
        if !(MIN_INTEGER <= value && value <= MAX_INTEGER) {
            return Err(Error::syntax("integer: value is out of range", 0));
        }

        Ok(value)
    }
}

impl fmt::Display for BareItemInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SerializeBareItem<&i64> for BareItemInteger {
    fn serialize_ref(value: &i64, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-integer
        output.push_str(&value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_values() {
        assert!(BareItemInteger::try_from(MAX_INTEGER).is_ok());
        assert!(BareItemInteger::try_from(MIN_INTEGER).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(BareItemInteger::try_from(MAX_INTEGER + 1).is_err());
        assert!(BareItemInteger::try_from(MIN_INTEGER - 1).is_err());
    }
}
