use std::convert::TryFrom;
use std::iter::Peekable;
use std::str::CharIndices;

use data_encoding::BASE64;

use crate::bare_item::BareItem;
use crate::error::SFVResult;
use crate::key::Key;
use crate::list_entry::ListEntry;
use crate::{Dictionary, InnerList, Item, List, Parameters};
use crate::{utils, Error};

/// Parses a Structured Field value of Item type.
/// # Examples
/// ```
/// # use sfv::parse_item;
/// let item = parse_item(b"12.445;foo=bar");
/// assert!(item.is_ok());
/// ```
pub fn parse_item(input: &[u8]) -> SFVResult<Item> {
    log::trace!("parse_item: {} bytes", input.len());
    let result = Cursor::new(input).and_then(|mut cur| {
        cur.consume_sp();
        let item = parse_item_inner(&mut cur)?;
        cur.consume_sp();
        cur.expect_end()?;
        Ok(item)
    });
    if let Err(ref err) = result {
        log::debug!("parse_item: rejected input, {err}");
    }
    result
}

/// Parses a Structured Field value of List type.
/// # Examples
/// ```
/// # use sfv::parse_list;
/// let list = parse_list(b"sugar, tea, rum");
/// assert!(list.is_ok());
/// ```
pub fn parse_list(input: &[u8]) -> SFVResult<List> {
    log::trace!("parse_list: {} bytes", input.len());
    let result = Cursor::new(input).and_then(|mut cur| {
        cur.consume_sp();
        let members = parse_members(&mut cur)?;
        Ok(List::from_entries(members))
    });
    if let Err(ref err) = result {
        log::debug!("parse_list: rejected input, {err}");
    }
    result
}

/// Parses a Structured Field value of Dictionary type.
/// # Examples
/// ```
/// # use sfv::parse_dictionary;
/// let dict = parse_dictionary(b"a=1, b;x=?0, c=(1 2)");
/// assert!(dict.is_ok());
/// ```
pub fn parse_dictionary(input: &[u8]) -> SFVResult<Dictionary> {
    log::trace!("parse_dictionary: {} bytes", input.len());
    let result = Cursor::new(input).and_then(|mut cur| {
        cur.consume_sp();
        let mut members = Vec::new();
        while cur.peek().is_some() {
            let key = parse_key(&mut cur)?;
            let entry = if cur.peek() == Some('=') {
                cur.next();
                parse_list_entry(&mut cur)?
            } else {
                let params = parse_parameters(&mut cur)?;
                ListEntry::Item(Item::with_params(BareItem::Boolean(true.into()), params))
            };
            members.push((key, entry));

            cur.consume_ows();
            if cur.peek().is_none() {
                return Ok(Dictionary::from_entries(members));
            }
            if cur.next() != Some(',') {
                return Err(Error::syntax(
                    "parse_dictionary: expected ',' between members",
                    cur.offset(),
                ));
            }
            cur.consume_ows();
            if cur.peek().is_none() {
                return Err(Error::syntax("parse_dictionary: trailing comma", cur.offset()));
            }
        }
        Ok(Dictionary::from_entries(members))
    });
    if let Err(ref err) = result {
        log::debug!("parse_dictionary: rejected input, {err}");
    }
    result
}

/// A positional cursor over the ASCII bytes of a Structured Field value.
struct Cursor<'a> {
    content: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> SFVResult<Self> {
        if !input.is_ascii() {
            return Err(Error::syntax("parse: input contains non-ASCII bytes", 0));
        }
        let content =
            std::str::from_utf8(input).map_err(|_| Error::syntax("parse: invalid UTF-8", 0))?;
        Ok(Cursor {
            content,
            chars: content.char_indices().peekable(),
        })
    }

    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.content.len(), |(index, _)| *index)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn consume_sp(&mut self) {
        while self.peek() == Some(' ') {
            self.next();
        }
    }

    fn consume_ows(&mut self) {
        self.consume_sp();
    }

    fn expect_end(&mut self) -> SFVResult<()> {
        if self.peek().is_some() {
            return Err(Error::syntax(
                "parse: trailing characters after parsed value",
                self.offset(),
            ));
        }
        Ok(())
    }
}

fn parse_members(cur: &mut Cursor) -> SFVResult<Vec<ListEntry>> {
    let mut members = Vec::new();
    while cur.peek().is_some() {
        members.push(parse_list_entry(cur)?);

        cur.consume_ows();
        if cur.peek().is_none() {
            return Ok(members);
        }
        if cur.next() != Some(',') {
            return Err(Error::syntax(
                "parse_list: expected ',' between members",
                cur.offset(),
            ));
        }
        cur.consume_ows();
        if cur.peek().is_none() {
            return Err(Error::syntax("parse_list: trailing comma", cur.offset()));
        }
    }
    Ok(members)
}

fn parse_list_entry(cur: &mut Cursor) -> SFVResult<ListEntry> {
    if cur.peek() == Some('(') {
        Ok(ListEntry::InnerList(parse_inner_list(cur)?))
    } else {
        Ok(ListEntry::Item(parse_item_inner(cur)?))
    }
}

fn parse_item_inner(cur: &mut Cursor) -> SFVResult<Item> {
    let bare_item = parse_bare_item(cur)?;
    let params = parse_parameters(cur)?;
    Ok(Item::with_params(bare_item, params))
}

fn parse_inner_list(cur: &mut Cursor) -> SFVResult<InnerList> {
    if cur.next() != Some('(') {
        return Err(Error::syntax(
            "parse_inner_list: expected '('",
            cur.offset(),
        ));
    }

    let mut items = Vec::new();
    loop {
        cur.consume_sp();
        if cur.peek() == Some(')') {
            cur.next();
            let params = parse_parameters(cur)?;
            return Ok(InnerList::with_params(items, params));
        }

        items.push(parse_item_inner(cur)?);

        match cur.peek() {
            Some(' ') | Some(')') => {}
            None => {
                return Err(Error::syntax(
                    "parse_inner_list: unterminated inner list",
                    cur.offset(),
                ))
            }
            _ => {
                return Err(Error::syntax(
                    "parse_inner_list: expected ' ' or ')' between items",
                    cur.offset(),
                ))
            }
        }
    }
}

fn parse_parameters(cur: &mut Cursor) -> SFVResult<Parameters> {
    let mut params = Vec::new();
    while cur.peek() == Some(';') {
        cur.next();
        cur.consume_sp();
        let key = parse_key(cur)?;
        let value = if cur.peek() == Some('=') {
            cur.next();
            parse_bare_item(cur)?
        } else {
            BareItem::Boolean(true.into())
        };
        // Duplicate keys: last value wins but `Parameters::from_entries`
        // (via `IndexMap`'s `insert` semantics) keeps the first-seen position.
        params.push((key, value));
    }
    Ok(Parameters::from_entries(params))
}

fn parse_key(cur: &mut Cursor) -> SFVResult<Key> {
    let start = cur.offset();
    match cur.peek() {
        Some(c) if utils::is_key_start(c) => {}
        Some(_) => {
            return Err(Error::syntax(
                "parse_key: first character is not lcalpha or '*'",
                start,
            ))
        }
        None => return Err(Error::syntax("parse_key: empty key", start)),
    }

    let end = loop {
        match cur.peek() {
            Some(c) if utils::is_key_char(c) => {
                cur.next();
            }
            _ => break cur.offset(),
        }
    };

    Key::try_from(&cur.content[start..end])
}

fn parse_bare_item(cur: &mut Cursor) -> SFVResult<BareItem> {
    let offset = cur.offset();
    match cur.peek() {
        Some('?') => parse_boolean(cur),
        Some('"') => parse_string(cur),
        Some(':') => parse_byte_sequence(cur),
        #[cfg(feature = "sf-date")]
        Some('@') => parse_date(cur),
        #[cfg(not(feature = "sf-date"))]
        Some('@') => Err(Error::syntax(
            "bare item: Date support is not enabled (feature `sf-date`)",
            offset,
        )),
        #[cfg(feature = "sf-display-string")]
        Some('%') => parse_display_string(cur),
        #[cfg(not(feature = "sf-display-string"))]
        Some('%') => Err(Error::syntax(
            "bare item: DisplayString support is not enabled (feature `sf-display-string`)",
            offset,
        )),
        Some(c) if c == '*' || c.is_ascii_alphabetic() => parse_token(cur),
        Some(c) if c == '-' || c.is_ascii_digit() => parse_number(cur),
        _ => Err(Error::syntax(
            "bare item: type cannot be identified from leading byte",
            offset,
        )),
    }
}

fn parse_boolean(cur: &mut Cursor) -> SFVResult<BareItem> {
    if cur.next() != Some('?') {
        return Err(Error::syntax(
            "parse_boolean: expected '?'",
            cur.offset(),
        ));
    }
    match cur.next() {
        Some('0') => Ok(BareItem::Boolean(false.into())),
        Some('1') => Ok(BareItem::Boolean(true.into())),
        _ => Err(Error::syntax(
            "parse_boolean: expected '0' or '1' after '?'",
            cur.offset(),
        )),
    }
}

fn parse_string(cur: &mut Cursor) -> SFVResult<BareItem> {
    if cur.next() != Some('"') {
        return Err(Error::syntax(
            "parse_string: expected opening '\"'",
            cur.offset(),
        ));
    }

    let mut value = String::new();
    loop {
        match cur.next() {
            Some('"') => return BareItem::new_string(&value),
            Some('\\') => match cur.next() {
                Some(c @ '"') | Some(c @ '\\') => value.push(c),
                Some(_) => {
                    return Err(Error::syntax(
                        "parse_string: disallowed character after '\\'",
                        cur.offset(),
                    ))
                }
                None => {
                    return Err(Error::syntax(
                        "parse_string: input ends with '\\'",
                        cur.offset(),
                    ))
                }
            },
            Some(c @ '\x20'..='\x7e') => value.push(c),
            Some(_) => {
                return Err(Error::syntax(
                    "parse_string: not a visible character",
                    cur.offset(),
                ))
            }
            None => return Err(Error::syntax("parse_string: no closing '\"'", cur.offset())),
        }
    }
}

fn parse_token(cur: &mut Cursor) -> SFVResult<BareItem> {
    let start = cur.offset();
    match cur.peek() {
        Some(c) if c == '*' || c.is_ascii_alphabetic() => {}
        _ => {
            return Err(Error::syntax(
                "parse_token: first character is not ALPHA or '*'",
                start,
            ))
        }
    }

    let end = loop {
        match cur.peek() {
            Some(c) if utils::is_tchar(c) || c == ':' || c == '/' => {
                cur.next();
            }
            _ => break cur.offset(),
        }
    };

    BareItem::new_token(&cur.content[start..end])
}

fn parse_byte_sequence(cur: &mut Cursor) -> SFVResult<BareItem> {
    if cur.next() != Some(':') {
        return Err(Error::syntax(
            "parse_byte_sequence: expected opening ':'",
            cur.offset(),
        ));
    }

    let start = cur.offset();
    let end = loop {
        match cur.peek() {
            Some(':') => break cur.offset(),
            Some(c) if utils::is_allowed_base64_char(c) => {
                cur.next();
            }
            _ => {
                return Err(Error::syntax(
                    "parse_byte_sequence: disallowed character",
                    cur.offset(),
                ))
            }
        }
    };
    cur.next(); // closing ':'

    let encoded = &cur.content[start..end];
    let decoded = BASE64
        .decode(encoded.as_bytes())
        .map_err(|_| Error::syntax("parse_byte_sequence: invalid base64", start))?;
    BareItem::new_byte_seq(&decoded)
}

#[cfg(feature = "sf-date")]
fn parse_date(cur: &mut Cursor) -> SFVResult<BareItem> {
    if cur.next() != Some('@') {
        return Err(Error::syntax(
            "parse_date: expected '@'",
            cur.offset(),
        ));
    }
    let seconds = parse_signed_integer(cur)?;
    BareItem::new_date(seconds)
}

#[cfg(feature = "sf-display-string")]
fn lowercase_hex_digit(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='f' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

#[cfg(feature = "sf-display-string")]
fn parse_display_string(cur: &mut Cursor) -> SFVResult<BareItem> {
    if cur.next() != Some('%') {
        return Err(Error::syntax(
            "parse_display_string: expected '%'",
            cur.offset(),
        ));
    }
    if cur.next() != Some('"') {
        return Err(Error::syntax(
            "parse_display_string: expected opening '\"'",
            cur.offset(),
        ));
    }

    let mut bytes = Vec::new();
    loop {
        match cur.next() {
            Some('"') => {
                let text = String::from_utf8(bytes).map_err(|_| {
                    Error::syntax("parse_display_string: invalid UTF-8 byte sequence", cur.offset())
                })?;
                return BareItem::new_display_string(&text);
            }
            Some('%') => {
                let hi = cur
                    .next()
                    .and_then(lowercase_hex_digit)
                    .ok_or_else(|| Error::syntax("parse_display_string: invalid %-escape", cur.offset()))?;
                let lo = cur
                    .next()
                    .and_then(lowercase_hex_digit)
                    .ok_or_else(|| Error::syntax("parse_display_string: invalid %-escape", cur.offset()))?;
                bytes.push(((hi << 4) | lo) as u8);
            }
            Some(c @ '\x20'..='\x7e') => bytes.push(c as u8),
            Some(_) => {
                return Err(Error::syntax(
                    "parse_display_string: control character outside of %-escape",
                    cur.offset(),
                ))
            }
            None => {
                return Err(Error::syntax(
                    "parse_display_string: no closing '\"'",
                    cur.offset(),
                ))
            }
        }
    }
}

fn parse_number(cur: &mut Cursor) -> SFVResult<BareItem> {
    let is_negative = cur.peek() == Some('-');
    if is_negative {
        cur.next();
    }

    match cur.peek() {
        Some(c) if c.is_ascii_digit() => {}
        _ => {
            return Err(Error::syntax(
                "parse_number: expected a digit",
                cur.offset(),
            ))
        }
    }

    let start = cur.offset();
    let mut is_integer = true;
    let mut dot_offset = None;
    loop {
        match cur.peek() {
            Some(c) if c.is_ascii_digit() => {
                cur.next();
            }
            Some('.') if is_integer => {
                if cur.offset() - start > 12 {
                    return Err(Error::syntax(
                        "parse_number: decimal has more than 12 integer digits",
                        cur.offset(),
                    ));
                }
                is_integer = false;
                dot_offset = Some(cur.offset());
                cur.next();
            }
            _ => break,
        }

        if is_integer && cur.offset() - start > 15 {
            return Err(Error::syntax(
                "parse_number: integer has more than 15 digits",
                cur.offset(),
            ));
        }
        if !is_integer && cur.offset() - start > 16 {
            return Err(Error::syntax(
                "parse_number: decimal has more than 3 fractional digits",
                cur.offset(),
            ));
        }
    }
    let end = cur.offset();
    let digits = &cur.content[start..end];

    if is_integer {
        let mut value: i64 = digits
            .parse()
            .map_err(|_| Error::syntax("parse_number: invalid integer", start))?;
        if is_negative {
            value = -value;
        }
        BareItem::new_integer(value)
    } else {
        let dot_offset = dot_offset.unwrap();
        let fractional_digits = end - dot_offset - 1;
        if fractional_digits == 0 {
            return Err(Error::syntax(
                "parse_number: decimal ends with '.'",
                cur.offset(),
            ));
        }
        if fractional_digits > 3 {
            return Err(Error::syntax(
                "parse_number: decimal has more than 3 fractional digits",
                cur.offset(),
            ));
        }
        let mut decimal = rust_decimal::Decimal::from_str_exact(digits)
            .map_err(|_| Error::syntax("parse_number: invalid decimal", start))?;
        if is_negative {
            decimal.set_sign_negative(true);
        }
        BareItem::new_decimal(decimal)
    }
}

fn parse_signed_integer(cur: &mut Cursor) -> SFVResult<i64> {
    match parse_number(cur)? {
        BareItem::Integer(value) => Ok(*value),
        _ => Err(Error::syntax(
            "parse_signed_integer: expected an integer",
            cur.offset(),
        )),
    }
}
