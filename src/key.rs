use crate::utils::{is_key_char, is_key_start};
use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

/// The name of a `Dictionary` or `Parameters` entry.
///
/// The ABNF for a key is:
/// ```abnf,ignore,no_run
/// key = ( lcalpha / "*" ) *( lcalpha / DIGIT / "_" / "-" / "." / "*" )
/// lcalpha = %x61-7A ; a-z
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub(crate) fn validate(value: &str) -> Result<(), Error> {
        let mut chars = value.chars();
        match chars.next() {
            Some(c) if is_key_start(c) => {}
            Some(_) => return Err(Error::syntax("key: first character is not lcalpha or '*'", 0)),
            None => return Err(Error::syntax("key: key is empty", 0)),
        }
        if let Some((offset, _)) = value
            .char_indices()
            .skip(1)
            .find(|(_, c)| !is_key_char(*c))
        {
            return Err(Error::syntax("key: disallowed character", offset));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Key {
    type Error = Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::validate(value)?;
        Ok(Key(value.to_owned()))
    }
}

impl TryFrom<String> for Key {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Key(value))
    }
}

impl Deref for Key {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}
