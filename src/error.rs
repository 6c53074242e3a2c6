use std::fmt;

/// The offending key or index carried by [`Error::InvalidOffset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offset {
    /// A lookup by key (Dictionary, Parameters) that did not find a matching entry.
    Key(String),
    /// A lookup by signed index (List, InnerList) that normalized to nothing.
    Index(isize),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Offset::Key(key) => write!(f, "key {key:?}"),
            Offset::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// The two error kinds structured field values can raise.
///
/// Parsing and construction always produce at most one error; there is no
/// latent invalid state and no tolerant/partial-result parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input (textual or structural) violates RFC 8941 / RFC 9651.
    #[error("{message} at byte {offset}")]
    Syntax {
        message: &'static str,
        offset: usize,
    },
    /// A runtime lookup by key or signed index on an existing container missed.
    #[error("no such {0}")]
    InvalidOffset(Offset),
}

impl Error {
    pub(crate) fn syntax(message: &'static str, offset: usize) -> Error {
        Error::Syntax { message, offset }
    }

    pub(crate) fn no_key(key: impl Into<String>) -> Error {
        Error::InvalidOffset(Offset::Key(key.into()))
    }

    pub(crate) fn no_index(index: isize) -> Error {
        Error::InvalidOffset(Offset::Index(index))
    }
}

pub type SFVResult<T> = std::result::Result<T, Error>;
