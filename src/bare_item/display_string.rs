use super::{SerializeBareItem, ValidateValue};
use crate::error::SFVResult;
use crate::Error;
use std::{convert::TryFrom, fmt, ops::Deref};

/// A Unicode string, per RFC 9651. Unlike [`super::string::BareItemString`], this variant is
/// not restricted to ASCII; non-ASCII code points (and `%`/`"`) are percent-encoded as UTF-8
/// bytes on the wire.
///
/// The ABNF for a Display String is:
/// ```abnf,ignore,no_run
/// sf-displaystring = "%" DQUOTE *( dchar / pct-encoded ) DQUOTE
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BareItemDisplayString(pub(crate) String);

impl Deref for BareItemDisplayString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<String> for BareItemDisplayString {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(BareItemDisplayString(value))
    }
}

impl TryFrom<&str> for BareItemDisplayString {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::validate(value)?;
        Ok(BareItemDisplayString(value.to_owned()))
    }
}

impl<'a> ValidateValue<'a, &'a str> for BareItemDisplayString {
    fn validate(value: &'a str) -> SFVResult<&'a str> {
        let has_control = value
            .chars()
            .any(|c| c == '\x7f' || ('\x00'..='\x1f').contains(&c));
        if has_control {
            return Err(Error::syntax(
                "display string: control character is not representable",
                0,
            ));
        }
        Ok(value)
    }
}

impl fmt::Display for BareItemDisplayString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SerializeBareItem<&str> for BareItemDisplayString {
    fn serialize_ref(value: &str, output: &mut String) {
        // https://www.rfc-editor.org/rfc/rfc9651.html#name-serializing-a-display-stri
        output.push('%');
        output.push('"');
        for byte in value.as_bytes() {
            match byte {
                b'%' | b'"' => {
                    output.push('%');
                    push_lowercase_hex(*byte, output);
                }
                0x20..=0x7e => output.push(*byte as char),
                _ => {
                    output.push('%');
                    push_lowercase_hex(*byte, output);
                }
            }
        }
        output.push('"');
    }
}

fn push_lowercase_hex(byte: u8, output: &mut String) {
    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
    output.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    output.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_ascii_unescaped() {
        let value = BareItemDisplayString::try_from("foo bar").unwrap();
        let mut out = String::new();
        BareItemDisplayString::serialize_ref(&value, &mut out);
        assert_eq!(out, "%\"foo bar\"");
    }

    #[test]
    fn percent_encodes_quote_and_percent() {
        let value = BareItemDisplayString::try_from("100% \"done\"").unwrap();
        let mut out = String::new();
        BareItemDisplayString::serialize_ref(&value, &mut out);
        assert_eq!(out, "%\"100%25 %22done%22\"");
    }

    #[test]
    fn percent_encodes_non_ascii_as_utf8_bytes() {
        let value = BareItemDisplayString::try_from("caf\u{e9}").unwrap();
        let mut out = String::new();
        BareItemDisplayString::serialize_ref(&value, &mut out);
        assert_eq!(out, "%\"caf%c3%a9\"");
    }

    #[test]
    fn rejects_control_characters() {
        assert!(BareItemDisplayString::try_from("a\nb").is_err());
    }
}
