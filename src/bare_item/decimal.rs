use super::{SerializeBareItem, ValidateValue};
use crate::error::SFVResult;
use crate::Error;
use rust_decimal::prelude::ToPrimitive;
use std::{convert::TryFrom, fmt, ops::Deref};

/// Decimals are numbers with an integer and a fractional component. The integer component has at most 12 digits; the fractional component has at most three digits.
///
/// The ABNF for decimals is:
/// ```abnf,ignore,no_run
/// sf-decimal  = ["-"] 1*12DIGIT "." 1*3DIGIT
/// ```
///
/// Rounding (banker's, i.e. half-to-even) to three fractional digits happens here, at
/// construction time, so that any `BareItemDecimal` in memory is already canonical — the
/// text parser never hands this type more than three fractional digits to begin with.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct BareItemDecimal(pub(crate) rust_decimal::Decimal);

pub(crate) const MAX_INTEGER_DIGITS: u64 = 999_999_999_999;

impl TryFrom<rust_decimal::Decimal> for BareItemDecimal {
    type Error = Error;
    fn try_from(value: rust_decimal::Decimal) -> Result<Self, Self::Error> {
        let validated = Self::validate(value)?;
        Ok(BareItemDecimal(validated))
    }
}

impl ValidateValue<'_, rust_decimal::Decimal> for BareItemDecimal {
    fn validate(value: rust_decimal::Decimal) -> SFVResult<rust_decimal::Decimal> {
        let fraction_length = 3;

        let decimal = value.round_dp(fraction_length);
        let int_comp = decimal.trunc();
        let int_comp = int_comp
            .abs()
            .to_u64()
            .ok_or_else(|| Error::syntax("decimal: integer component > 12 digits", 0))?;

        if int_comp > MAX_INTEGER_DIGITS {
            return Err(Error::syntax("decimal: integer component > 12 digits", 0));
        }

        Ok(decimal)
    }
}

impl Deref for BareItemDecimal {
    type Target = rust_decimal::Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for BareItemDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SerializeBareItem<&rust_decimal::Decimal> for BareItemDecimal {
    fn serialize_ref(value: &rust_decimal::Decimal, output: &mut String) {
        // https://httpwg.org/specs/rfc8941.html#ser-decimal
        let decimal = value;

        if decimal.fract().is_zero() {
            output.push_str(&format!("{:.1}", &decimal));
        } else {
            output.push_str(&decimal.to_string());
        }
    }
}
