/// `tchar` per RFC 8941, excluding the additional `:` and `/` that `sf-token` allows.
pub(crate) fn is_tchar(c: char) -> bool {
    matches!(c,
        '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
    ) || c.is_ascii_alphanumeric()
}

/// `lcalpha / DIGIT / "_" / "-" / "." / "*"`, the grammar for all key bytes after the first.
pub(crate) fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.' | '*')
}

/// First byte of a key: `lcalpha / "*"`.
pub(crate) fn is_key_start(c: char) -> bool {
    c.is_ascii_lowercase() || c == '*'
}

pub(crate) fn is_allowed_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}
