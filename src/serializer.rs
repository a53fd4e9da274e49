/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt::{self, Write};

use crate::segments::{Segment, SegmentKind};
use crate::tokenizer::{NumericValue, Token};

/// Trait for things that can serialize themselves in CSS syntax.
pub trait ToCss {
    /// Serialize `self` in CSS syntax, writing to `dest`.
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write;

    /// Serialize `self` in CSS syntax and return a string.
    ///
    /// (This is a convenience wrapper for `to_css` and probably should not be overridden.)
    #[inline]
    fn to_css_string(&self) -> String {
        let mut s = String::new();
        // Writing to a `String` never fails.
        let _ = self.to_css(&mut s);
        s
    }
}

fn write_numeric<W>(value: NumericValue, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    if value.has_sign && value.value.is_sign_positive() {
        dest.write_str("+")?;
    }
    if let Some(int_value) = value.int_value {
        return dest.write_str(itoa::Buffer::new().format(int_value));
    }
    let notation = if value.value == 0.0 && value.value.is_sign_negative() {
        // Negative zero
        dest.write_str("-0")?;
        dtoa_short::Notation {
            decimal_point: false,
            scientific: false,
        }
    } else {
        dtoa_short::write(dest, value.value)?
    };
    if value.value.fract() == 0. && !notation.decimal_point && !notation.scientific {
        dest.write_str(".0")?;
    }
    Ok(())
}

impl ToCss for Token {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match *self {
            Token::Ident(ref value) => serialize_identifier(value, dest)?,
            Token::AtKeyword(ref value) => {
                dest.write_str("@")?;
                serialize_identifier(value, dest)?;
            }
            Token::Hash(ref value) => {
                dest.write_str("#")?;
                serialize_name(value, dest)?;
            }
            Token::IDHash(ref value) => {
                dest.write_str("#")?;
                serialize_identifier(value, dest)?;
            }
            Token::QuotedString(ref value) => serialize_string(value, dest)?,
            Token::Url(ref value) => serialize_url(value, dest)?,
            Token::Delim(value) => dest.write_char(value)?,

            Token::Number(value) => write_numeric(value, dest)?,
            Token::Percentage(value) => {
                write_numeric(value, dest)?;
                dest.write_str("%")?;
            }
            Token::Dimension(value, ref unit) => {
                write_numeric(value, dest)?;
                // Disambiguate with scientific notation.
                if unit == "e" || unit == "E" || unit.starts_with("e-") || unit.starts_with("E-") {
                    dest.write_str("\\65 ")?;
                    serialize_name(&unit[1..], dest)?;
                } else {
                    serialize_identifier(unit, dest)?;
                }
            }

            Token::WhiteSpace => dest.write_str(" ")?,
            Token::Colon => dest.write_str(":")?,
            Token::Semicolon => dest.write_str(";")?,
            Token::Comma => dest.write_str(",")?,
            Token::IncludeMatch => dest.write_str("~=")?,
            Token::DashMatch => dest.write_str("|=")?,
            Token::PrefixMatch => dest.write_str("^=")?,
            Token::SuffixMatch => dest.write_str("$=")?,
            Token::SubstringMatch => dest.write_str("*=")?,
            Token::Column => dest.write_str("||")?,
            Token::CDO => dest.write_str("<!--")?,
            Token::CDC => dest.write_str("-->")?,

            Token::Function(ref name) => {
                serialize_identifier(name, dest)?;
                dest.write_str("(")?;
            }
            Token::ParenthesisBlock => dest.write_str("(")?,
            Token::SquareBracketBlock => dest.write_str("[")?,
            Token::CurlyBracketBlock => dest.write_str("{")?,

            Token::BadUrl => dest.write_str("url(<bad url>)")?,
            Token::BadString => dest.write_str("\"<bad string>\n")?,
            Token::CloseParenthesis => dest.write_str(")")?,
            Token::CloseSquareBracket => dest.write_str("]")?,
            Token::CloseCurlyBracket => dest.write_str("}")?,
            Token::EndOfFile => {}
        }
        Ok(())
    }
}

/// Write a segment back as CSS.
///
/// `Bytes` are written as is, URLs as `url("…")`.
impl<'i> ToCss for Segment<'i> {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match self.kind {
            SegmentKind::Bytes => dest.write_str(&self.data),
            SegmentKind::ImageUrl | SegmentKind::OtherUrl => serialize_url(&self.data, dest),
        }
    }
}

impl<'i> ToCss for [Segment<'i>] {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        for segment in self {
            segment.to_css(dest)?;
        }
        Ok(())
    }
}

fn hex_escape<W>(ascii_byte: u8, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    write!(dest, "\\{:x} ", ascii_byte)
}

fn char_escape<W>(ascii_byte: u8, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    dest.write_char('\\')?;
    dest.write_char(ascii_byte as char)
}

/// Write a CSS identifier, escaping characters as necessary.
pub fn serialize_identifier<W>(mut value: &str, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    if value.is_empty() {
        return Ok(());
    }

    if let Some(value) = value.strip_prefix("--") {
        dest.write_str("--")?;
        serialize_name(value, dest)
    } else if value == "-" {
        dest.write_str("\\-")
    } else {
        if value.as_bytes()[0] == b'-' {
            dest.write_str("-")?;
            value = &value[1..];
        }
        if let digit @ b'0'..=b'9' = value.as_bytes()[0] {
            hex_escape(digit, dest)?;
            value = &value[1..];
        }
        serialize_name(value, dest)
    }
}

/// Write a CSS name, like a custom property name.
///
/// You should only use this when you know what you're doing, when in doubt,
/// consider using `serialize_identifier`.
pub fn serialize_name<W>(value: &str, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    let mut chunk_start = 0;
    for (i, b) in value.bytes().enumerate() {
        let escaped = match_byte_escape(b);
        if let Some(escaped) = escaped {
            dest.write_str(&value[chunk_start..i])?;
            match escaped {
                Escape::Char(c) => char_escape(c, dest)?,
                Escape::Hex(c) => hex_escape(c, dest)?,
                Escape::Replacement => dest.write_char('\u{FFFD}')?,
            }
            chunk_start = i + 1;
        }
    }
    dest.write_str(&value[chunk_start..])
}

enum Escape {
    Char(u8),
    Hex(u8),
    Replacement,
}

#[inline]
fn match_byte_escape(b: u8) -> Option<Escape> {
    match b {
        b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'_' | b'-' => None,
        _ if !b.is_ascii() => None,
        b'\0' => Some(Escape::Replacement),
        b'\x01'..=b'\x1F' | b'\x7F' => Some(Escape::Hex(b)),
        _ => Some(Escape::Char(b)),
    }
}

/// Write `url(…)` around a double-quoted, escaped URL.
pub fn serialize_url<W>(value: &str, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    dest.write_str("url(")?;
    serialize_string(value, dest)?;
    dest.write_str(")")
}

/// Write a double-quoted CSS string token, escaping content as necessary.
pub fn serialize_string<W>(value: &str, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    dest.write_str("\"")?;
    CssStringWriter::new(dest).write_str(value)?;
    dest.write_str("\"")?;
    Ok(())
}

/// A `fmt::Write` adapter that escapes text for writing as a double-quoted CSS string.
/// Quotes are not included.
///
/// Typical usage:
///
/// ```rust
/// # use css_url_segmenter::CssStringWriter;
/// # use std::fmt::{self, Write};
/// fn write_foo<W>(foo: &str, dest: &mut W) -> fmt::Result where W: fmt::Write {
///     dest.write_str("\"")?;
///     {
///         let mut string_dest = CssStringWriter::new(dest);
///         string_dest.write_str(foo)?;
///     }
///     dest.write_str("\"")?;
///     Ok(())
/// }
/// # let mut s = String::new();
/// # write_foo("a\"b", &mut s).unwrap();
/// # assert_eq!(s, r#""a\"b""#);
/// ```
pub struct CssStringWriter<'a, W> {
    inner: &'a mut W,
}

impl<'a, W> CssStringWriter<'a, W>
where
    W: fmt::Write,
{
    /// Wrap a text writer to create a `CssStringWriter`.
    pub fn new(inner: &'a mut W) -> CssStringWriter<'a, W> {
        CssStringWriter { inner }
    }
}

impl<'a, W> fmt::Write for CssStringWriter<'a, W>
where
    W: fmt::Write,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut chunk_start = 0;
        for (i, b) in s.bytes().enumerate() {
            let escaped = match b {
                b'"' => Some("\\\""),
                b'\\' => Some("\\\\"),
                b'\0' => Some("\u{FFFD}"),
                b'\x01'..=b'\x1F' | b'\x7F' => None,
                _ => continue,
            };
            self.inner.write_str(&s[chunk_start..i])?;
            match escaped {
                Some(x) => self.inner.write_str(x)?,
                None => hex_escape(b, self.inner)?,
            };
            chunk_start = i + 1;
        }
        self.inner.write_str(&s[chunk_start..])
    }
}
