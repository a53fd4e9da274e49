/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// https://drafts.csswg.org/css-syntax/#tokenization

use thiserror::Error;

use self::Token::*;

pub(crate) const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// One of the pieces the CSS input is broken into.
///
/// Comments are not tokens: the tokenizer skips them,
/// and a `TokenSpan` starts after any comment that precedes its token.
#[derive(PartialEq, Debug, Clone)]
pub enum Token {
    /// A [`<ident-token>`](https://drafts.csswg.org/css-syntax/#ident-token-diagram)
    Ident(String),

    /// A [`<at-keyword-token>`](https://drafts.csswg.org/css-syntax/#at-keyword-token-diagram)
    ///
    /// The value does not include the `@` marker.
    AtKeyword(String),

    /// A [`<hash-token>`](https://drafts.csswg.org/css-syntax/#hash-token-diagram) with the type flag set to "unrestricted"
    ///
    /// The value does not include the `#` marker.
    Hash(String),

    /// A [`<hash-token>`](https://drafts.csswg.org/css-syntax/#hash-token-diagram) with the type flag set to "id"
    ///
    /// The value does not include the `#` marker.
    IDHash(String), // Hash that is a valid ID selector.

    /// A [`<string-token>`](https://drafts.csswg.org/css-syntax/#string-token-diagram)
    ///
    /// The value does not include the quotes.
    QuotedString(String),

    /// A [`<url-token>`](https://drafts.csswg.org/css-syntax/#url-token-diagram)
    ///
    /// The value does not include the `url(` `)` markers.
    /// `url( <string-token> )` is not a `Url` token, see `Function`.
    Url(String),

    /// A `<delim-token>`
    Delim(char),

    /// A [`<number-token>`](https://drafts.csswg.org/css-syntax/#number-token-diagram)
    Number(NumericValue),

    /// A [`<percentage-token>`](https://drafts.csswg.org/css-syntax/#percentage-token-diagram)
    ///
    /// The value is as written, `50%` has a value of 50.
    Percentage(NumericValue),

    /// A [`<dimension-token>`](https://drafts.csswg.org/css-syntax/#dimension-token-diagram)
    Dimension(NumericValue, String),

    /// A [`<whitespace-token>`](https://drafts.csswg.org/css-syntax/#whitespace-token-diagram)
    WhiteSpace,

    /// A `:` `<colon-token>`
    Colon, // :

    /// A `;` `<semicolon-token>`
    Semicolon, // ;

    /// A `,` `<comma-token>`
    Comma, // ,

    /// A `~=` [`<include-match-token>`](https://drafts.csswg.org/css-syntax/#include-match-token-diagram)
    IncludeMatch,

    /// A `|=` [`<dash-match-token>`](https://drafts.csswg.org/css-syntax/#dash-match-token-diagram)
    DashMatch,

    /// A `^=` [`<prefix-match-token>`](https://drafts.csswg.org/css-syntax/#prefix-match-token-diagram)
    PrefixMatch,

    /// A `$=` [`<suffix-match-token>`](https://drafts.csswg.org/css-syntax/#suffix-match-token-diagram)
    SuffixMatch,

    /// A `*=` [`<substring-match-token>`](https://drafts.csswg.org/css-syntax/#substring-match-token-diagram)
    SubstringMatch,

    /// A `||` [`<column-token>`](https://drafts.csswg.org/css-syntax/#column-token-diagram)
    Column,

    /// A `<!--` [`<CDO-token>`](https://drafts.csswg.org/css-syntax/#CDO-token-diagram)
    CDO,

    /// A `-->` [`<CDC-token>`](https://drafts.csswg.org/css-syntax/#CDC-token-diagram)
    CDC,

    /// A [`<function-token>`](https://drafts.csswg.org/css-syntax/#function-token-diagram)
    ///
    /// The value (name) does not include the `(` marker.
    Function(String),

    /// A `<(-token>`
    ParenthesisBlock,

    /// A `<[-token>`
    SquareBracketBlock,

    /// A `<{-token>`
    CurlyBracketBlock,

    /// A `<bad-url-token>`
    ///
    /// This token always indicates a parse error.
    BadUrl,

    /// A `<bad-string-token>`
    ///
    /// This token always indicates a parse error.
    BadString,

    /// A `<)-token>`
    CloseParenthesis,

    /// A `<]-token>`
    CloseSquareBracket,

    /// A `<}-token>`
    CloseCurlyBracket,

    /// The `<EOF-token>` that terminates every token stream.
    EndOfFile,
}

/// The numeric value of `Number`, `Percentage` and `Dimension` tokens.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct NumericValue {
    /// The value as a float
    pub value: f64,

    /// If the origin source did not include a fractional part or an exponent,
    /// the value as an integer.
    pub int_value: Option<i64>,

    /// Whether the number had a `+` or `-` sign.
    pub has_sign: bool,
}

impl NumericValue {
    /// Whether the token's type flag is "integer" rather than "number".
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.int_value.is_some()
    }
}

/// The kind of a token, without its payload.
///
/// The discriminants are stable and may be shared with other tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum TokenKind {
    Whitespace = 1,
    Cdo = 2,
    Cdc = 3,
    Colon = 4,
    Semicolon = 5,
    Comma = 6,
    OpenCurly = 7,
    CloseCurly = 8,
    OpenSquare = 9,
    CloseSquare = 10,
    OpenParen = 11,
    CloseParen = 12,
    IncludeMatch = 13,
    DashMatch = 14,
    PrefixMatch = 15,
    SuffixMatch = 16,
    SubstringMatch = 17,
    Column = 18,
    EofToken = 19,
    Delim = 20,
    Ident = 21,
    FunctionToken = 22,
    AtKeyword = 23,
    Hash = 24,
    String = 25,
    Url = 26,
    Number = 27,
    Percentage = 28,
    Dimension = 29,
    Error = 30,
}

impl Token {
    /// Return the kind discriminant of this token.
    pub fn kind(&self) -> TokenKind {
        match *self {
            WhiteSpace => TokenKind::Whitespace,
            CDO => TokenKind::Cdo,
            CDC => TokenKind::Cdc,
            Colon => TokenKind::Colon,
            Semicolon => TokenKind::Semicolon,
            Comma => TokenKind::Comma,
            CurlyBracketBlock => TokenKind::OpenCurly,
            CloseCurlyBracket => TokenKind::CloseCurly,
            SquareBracketBlock => TokenKind::OpenSquare,
            CloseSquareBracket => TokenKind::CloseSquare,
            ParenthesisBlock => TokenKind::OpenParen,
            CloseParenthesis => TokenKind::CloseParen,
            IncludeMatch => TokenKind::IncludeMatch,
            DashMatch => TokenKind::DashMatch,
            PrefixMatch => TokenKind::PrefixMatch,
            SuffixMatch => TokenKind::SuffixMatch,
            SubstringMatch => TokenKind::SubstringMatch,
            Column => TokenKind::Column,
            EndOfFile => TokenKind::EofToken,
            Delim(_) => TokenKind::Delim,
            Ident(_) => TokenKind::Ident,
            Function(_) => TokenKind::FunctionToken,
            AtKeyword(_) => TokenKind::AtKeyword,
            Hash(_) | IDHash(_) => TokenKind::Hash,
            QuotedString(_) => TokenKind::String,
            Url(_) => TokenKind::Url,
            Number(_) => TokenKind::Number,
            Percentage(_) => TokenKind::Percentage,
            Dimension(..) => TokenKind::Dimension,
            BadUrl | BadString => TokenKind::Error,
        }
    }

    /// The string payload of identifier-like and string-like tokens.
    pub fn string_value(&self) -> Option<&str> {
        match *self {
            Ident(ref value)
            | AtKeyword(ref value)
            | Hash(ref value)
            | IDHash(ref value)
            | QuotedString(ref value)
            | Url(ref value)
            | Function(ref value) => Some(value),
            _ => None,
        }
    }

    /// Return whether this token represents a parse error.
    ///
    /// `BadUrl` and `BadString` are tokenizer-level parse errors.
    pub fn is_parse_error(&self) -> bool {
        matches!(*self, BadUrl | BadString)
    }
}

/// A token together with the range of the preprocessed input it was consumed from.
///
/// Positions are counted in code points, from 0.
#[derive(PartialEq, Debug, Clone)]
pub struct TokenSpan {
    /// The token.
    pub token: Token,
    /// Where consumption of the token began.
    pub start: usize,
    /// Just past the last code point of the token.
    pub end: usize,
}

/// A malformed construct the tokenizer recovered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct LexicalError {
    /// What went wrong.
    pub kind: LexicalErrorKind,
    /// The code point index in the preprocessed input.
    pub position: usize,
}

/// The different kinds of `LexicalError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    /// A `/*` comment without a closing `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// End of input inside a quoted string.
    #[error("unterminated string")]
    UnterminatedString,
    /// An unescaped newline inside a quoted string.
    #[error("newline in string")]
    NewlineInString,
    /// End of input inside an unquoted `url(`.
    #[error("unterminated url")]
    UnterminatedUrl,
    /// A quote, parenthesis, non-printable code point or inner whitespace in an unquoted `url(`.
    #[error("invalid url")]
    InvalidUrl,
    /// A backslash followed by a newline, or by the end of input.
    #[error("invalid escape")]
    InvalidEscape,
    /// A number whose representation could not be parsed.
    #[error("invalid number")]
    InvalidNumber,
    /// A number too large to be represented.
    #[error("number out of range")]
    NumberOutOfRange,
}

/// Tokenize `input` to completion.
///
/// The input should already be preprocessed, see `preprocess`.
/// The returned tokens always end with exactly one `Token::EndOfFile`.
pub fn tokenize(input: &[char]) -> (Vec<TokenSpan>, Vec<LexicalError>) {
    let mut tokenizer = Tokenizer::new(input);
    let tokens = tokenizer.by_ref().collect();
    (tokens, tokenizer.into_errors())
}

/// A pull tokenizer over a sequence of code points.
///
/// Yields `TokenSpan`s, the last of which is `Token::EndOfFile`.
#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a [char],

    /// Counted in code points. From 0.
    position: usize,

    errors: Vec<LexicalError>,

    reached_eof: bool,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    #[inline]
    pub fn new(input: &'a [char]) -> Tokenizer<'a> {
        Tokenizer {
            input,
            position: 0,
            errors: Vec::new(),
            reached_eof: false,
        }
    }

    /// The current position, counted in code points.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The errors recorded so far.
    #[inline]
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Consume the tokenizer and return the errors it recorded.
    #[inline]
    pub fn into_errors(self) -> Vec<LexicalError> {
        self.errors
    }

    #[inline]
    fn next_char(&self) -> Option<char> {
        self.char_at(0)
    }

    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len())
    }

    #[inline]
    fn starts_with(&self, needle: &str) -> bool {
        needle
            .chars()
            .enumerate()
            .all(|(offset, c)| self.char_at(offset) == Some(c))
    }

    #[inline]
    fn error(&mut self, kind: LexicalErrorKind, position: usize) {
        self.errors.push(LexicalError { kind, position })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = TokenSpan;

    fn next(&mut self) -> Option<TokenSpan> {
        if self.reached_eof {
            return None;
        }
        consume_comments(self);
        let start = self.position;
        let token = next_token(self);
        if token == EndOfFile {
            self.reached_eof = true;
        }
        Some(TokenSpan {
            token,
            start,
            end: self.position,
        })
    }
}

fn next_token(tokenizer: &mut Tokenizer) -> Token {
    let c = match tokenizer.next_char() {
        Some(c) => c,
        None => return EndOfFile,
    };
    match c {
        ' ' | '\t' | '\n' | '\r' | '\x0C' => {
            consume_whitespace(tokenizer);
            WhiteSpace
        }
        '"' | '\'' => consume_string(tokenizer, c),
        '#' => {
            if is_name_code_point(tokenizer.char_at(1))
                || is_valid_escape(tokenizer.char_at(1), tokenizer.char_at(2))
            {
                let is_id = would_start_identifier(
                    tokenizer.char_at(1),
                    tokenizer.char_at(2),
                    tokenizer.char_at(3),
                );
                tokenizer.advance(1);
                let name = consume_name(tokenizer);
                if is_id {
                    IDHash(name)
                } else {
                    Hash(name)
                }
            } else {
                tokenizer.advance(1);
                Delim(c)
            }
        }
        '$' => consume_match(tokenizer, c, SuffixMatch),
        '*' => consume_match(tokenizer, c, SubstringMatch),
        '^' => consume_match(tokenizer, c, PrefixMatch),
        '~' => consume_match(tokenizer, c, IncludeMatch),
        '|' => {
            if tokenizer.starts_with("||") {
                tokenizer.advance(2);
                Column
            } else {
                consume_match(tokenizer, c, DashMatch)
            }
        }
        '(' => {
            tokenizer.advance(1);
            ParenthesisBlock
        }
        ')' => {
            tokenizer.advance(1);
            CloseParenthesis
        }
        '[' => {
            tokenizer.advance(1);
            SquareBracketBlock
        }
        ']' => {
            tokenizer.advance(1);
            CloseSquareBracket
        }
        '{' => {
            tokenizer.advance(1);
            CurlyBracketBlock
        }
        '}' => {
            tokenizer.advance(1);
            CloseCurlyBracket
        }
        ',' => {
            tokenizer.advance(1);
            Comma
        }
        ':' => {
            tokenizer.advance(1);
            Colon
        }
        ';' => {
            tokenizer.advance(1);
            Semicolon
        }
        '+' | '.' => {
            if starts_number(tokenizer) {
                consume_numeric(tokenizer)
            } else {
                tokenizer.advance(1);
                Delim(c)
            }
        }
        '-' => {
            if starts_number(tokenizer) {
                consume_numeric(tokenizer)
            } else if tokenizer.starts_with("-->") {
                tokenizer.advance(3);
                CDC
            } else if would_start_identifier(
                Some(c),
                tokenizer.char_at(1),
                tokenizer.char_at(2),
            ) {
                consume_ident_like(tokenizer)
            } else {
                tokenizer.advance(1);
                Delim(c)
            }
        }
        '<' => {
            if tokenizer.starts_with("<!--") {
                tokenizer.advance(4);
                CDO
            } else {
                tokenizer.advance(1);
                Delim(c)
            }
        }
        '@' => {
            if would_start_identifier(
                tokenizer.char_at(1),
                tokenizer.char_at(2),
                tokenizer.char_at(3),
            ) {
                tokenizer.advance(1);
                AtKeyword(consume_name(tokenizer))
            } else {
                tokenizer.advance(1);
                Delim(c)
            }
        }
        '\\' => {
            if is_valid_escape(Some(c), tokenizer.char_at(1)) {
                consume_ident_like(tokenizer)
            } else {
                let position = tokenizer.position;
                tokenizer.error(LexicalErrorKind::InvalidEscape, position);
                tokenizer.advance(1);
                Delim(c)
            }
        }
        '0'..='9' => consume_numeric(tokenizer),
        _ if is_name_start_code_point(Some(c)) => consume_ident_like(tokenizer),
        _ => {
            tokenizer.advance(1);
            Delim(c)
        }
    }
}

fn consume_comments(tokenizer: &mut Tokenizer) {
    while tokenizer.starts_with("/*") {
        let start = tokenizer.position;
        tokenizer.advance(2); // consume "/*"
        loop {
            match tokenizer.next_char() {
                Some('*') if tokenizer.char_at(1) == Some('/') => {
                    tokenizer.advance(2);
                    break;
                }
                Some(_) => tokenizer.advance(1),
                None => {
                    tokenizer.error(LexicalErrorKind::UnterminatedComment, start);
                    return;
                }
            }
        }
    }
}

fn consume_whitespace(tokenizer: &mut Tokenizer) {
    while is_whitespace(tokenizer.next_char()) {
        tokenizer.advance(1)
    }
}

#[inline]
fn consume_match(tokenizer: &mut Tokenizer, c: char, token: Token) -> Token {
    if tokenizer.char_at(1) == Some('=') {
        tokenizer.advance(2);
        token
    } else {
        tokenizer.advance(1);
        Delim(c)
    }
}

fn consume_string(tokenizer: &mut Tokenizer, quote: char) -> Token {
    let start = tokenizer.position;
    tokenizer.advance(1); // Skip the initial quote
    let mut value = String::new();
    loop {
        match tokenizer.next_char() {
            None => {
                tokenizer.error(LexicalErrorKind::UnterminatedString, start);
                return QuotedString(value);
            }
            Some(c) if c == quote => {
                tokenizer.advance(1);
                return QuotedString(value);
            }
            // The newline is not consumed: it starts the next token.
            Some('\n' | '\r' | '\x0C') => {
                let position = tokenizer.position;
                tokenizer.error(LexicalErrorKind::NewlineInString, position);
                return BadString;
            }
            Some('\\') => match tokenizer.char_at(1) {
                // Escaped EOF, do nothing.
                None => tokenizer.advance(1),
                // Escaped newline
                Some('\r') if tokenizer.char_at(2) == Some('\n') => tokenizer.advance(3),
                Some('\n' | '\r' | '\x0C') => tokenizer.advance(2),
                Some(_) => {
                    tokenizer.advance(1);
                    value.push(consume_escape(tokenizer))
                }
            },
            Some(c) => {
                tokenizer.advance(1);
                value.push(c)
            }
        }
    }
}

#[inline]
fn is_whitespace(c: Option<char>) -> bool {
    matches!(c, Some(' ' | '\t' | '\n' | '\r' | '\x0C'))
}

#[inline]
fn is_newline(c: Option<char>) -> bool {
    matches!(c, Some('\n' | '\r' | '\x0C'))
}

#[inline]
fn is_digit(c: Option<char>) -> bool {
    matches!(c, Some('0'..='9'))
}

#[inline]
fn is_name_start_code_point(c: Option<char>) -> bool {
    match c {
        Some('a'..='z' | 'A'..='Z' | '_') => true,
        Some(c) => !c.is_ascii(),
        None => false,
    }
}

#[inline]
fn is_name_code_point(c: Option<char>) -> bool {
    is_name_start_code_point(c) || matches!(c, Some('0'..='9' | '-'))
}

#[inline]
fn is_non_printable(c: char) -> bool {
    matches!(c, '\x00'..='\x08' | '\x0B' | '\x0E'..='\x1F' | '\x7F')
}

// https://drafts.csswg.org/css-syntax/#starts-with-a-valid-escape
#[inline]
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && !is_newline(second)
}

// https://drafts.csswg.org/css-syntax/#would-start-an-identifier
fn would_start_identifier(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some('-') => {
            is_name_start_code_point(second) || second == Some('-') || is_valid_escape(second, third)
        }
        Some('\\') => is_valid_escape(first, second),
        _ => is_name_start_code_point(first),
    }
}

// https://drafts.csswg.org/css-syntax/#starts-with-a-number
fn starts_number(tokenizer: &Tokenizer) -> bool {
    match tokenizer.next_char() {
        Some('+' | '-') => {
            is_digit(tokenizer.char_at(1))
                || (tokenizer.char_at(1) == Some('.') && is_digit(tokenizer.char_at(2)))
        }
        Some('.') => is_digit(tokenizer.char_at(1)),
        c => is_digit(c),
    }
}

fn consume_ident_like(tokenizer: &mut Tokenizer) -> Token {
    let value = consume_name(tokenizer);
    if tokenizer.next_char() != Some('(') {
        return Ident(value);
    }
    tokenizer.advance(1);
    if value.eq_ignore_ascii_case("url") {
        // Leave at most one whitespace before a quoted argument.
        while is_whitespace(tokenizer.next_char()) && is_whitespace(tokenizer.char_at(1)) {
            tokenizer.advance(1)
        }
        let quoted = match (tokenizer.next_char(), tokenizer.char_at(1)) {
            (Some('"' | '\''), _) => true,
            (first, Some('"' | '\'')) => is_whitespace(first),
            _ => false,
        };
        if !quoted {
            return consume_url(tokenizer);
        }
    }
    Function(value)
}

fn consume_name(tokenizer: &mut Tokenizer) -> String {
    let mut value = String::new();
    loop {
        match tokenizer.next_char() {
            c @ Some(_) if is_name_code_point(c) => {
                tokenizer.advance(1);
                value.extend(c)
            }
            Some('\\') if !is_newline(tokenizer.char_at(1)) => {
                tokenizer.advance(1);
                value.push(consume_escape(tokenizer))
            }
            _ => return value,
        }
    }
}

fn consume_digits(tokenizer: &mut Tokenizer, repr: &mut String) {
    while let Some(c @ '0'..='9') = tokenizer.next_char() {
        tokenizer.advance(1);
        repr.push(c)
    }
}

fn consume_numeric(tokenizer: &mut Tokenizer) -> Token {
    let value = consume_number(tokenizer);
    if would_start_identifier(
        tokenizer.next_char(),
        tokenizer.char_at(1),
        tokenizer.char_at(2),
    ) {
        Dimension(value, consume_name(tokenizer))
    } else if tokenizer.next_char() == Some('%') {
        tokenizer.advance(1);
        Percentage(value)
    } else {
        Number(value)
    }
}

fn consume_number(tokenizer: &mut Tokenizer) -> NumericValue {
    // Parse [+-]?\d*(\.\d+)?([eE][+-]?\d+)?
    // But this is always called so that there is at least one digit in \d*(\.\d+)?
    let start = tokenizer.position;
    let mut repr = String::new();
    let mut is_integer = true;
    let has_sign = match tokenizer.next_char() {
        Some(sign @ ('+' | '-')) => {
            tokenizer.advance(1);
            repr.push(sign);
            true
        }
        _ => false,
    };
    consume_digits(tokenizer, &mut repr);
    if tokenizer.next_char() == Some('.') && is_digit(tokenizer.char_at(1)) {
        is_integer = false;
        tokenizer.advance(1);
        repr.push('.');
        consume_digits(tokenizer, &mut repr);
    }
    if matches!(tokenizer.next_char(), Some('e' | 'E'))
        && (is_digit(tokenizer.char_at(1))
            || (matches!(tokenizer.char_at(1), Some('+' | '-')) && is_digit(tokenizer.char_at(2))))
    {
        is_integer = false;
        tokenizer.advance(1);
        repr.push('e');
        if let Some(sign @ ('+' | '-')) = tokenizer.next_char() {
            tokenizer.advance(1);
            repr.push(sign);
        }
        consume_digits(tokenizer, &mut repr);
    }

    let negative = repr.starts_with('-');
    let value = match repr.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(_) => {
            tokenizer.error(LexicalErrorKind::NumberOutOfRange, start);
            if negative {
                f64::MIN
            } else {
                f64::MAX
            }
        }
        Err(_) => {
            tokenizer.error(LexicalErrorKind::InvalidNumber, start);
            0.
        }
    };
    let int_value = if is_integer {
        Some(repr.parse::<i64>().unwrap_or_else(|_| {
            tokenizer.error(LexicalErrorKind::NumberOutOfRange, start);
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }))
    } else {
        None
    };
    NumericValue {
        value,
        int_value,
        has_sign,
    }
}

// Assumes that "url(" and any whitespace that follows it have not been consumed
// beyond the first non-quote code point.
fn consume_url(tokenizer: &mut Tokenizer) -> Token {
    consume_whitespace(tokenizer);
    let mut value = String::new();
    loop {
        let position = tokenizer.position;
        match tokenizer.next_char() {
            None => {
                tokenizer.error(LexicalErrorKind::UnterminatedUrl, position);
                return BadUrl;
            }
            Some(')') => {
                tokenizer.advance(1);
                return Url(value);
            }
            c @ Some(_) if is_whitespace(c) => {
                consume_whitespace(tokenizer);
                return match tokenizer.next_char() {
                    Some(')') => {
                        tokenizer.advance(1);
                        Url(value)
                    }
                    None => {
                        let position = tokenizer.position;
                        tokenizer.error(LexicalErrorKind::UnterminatedUrl, position);
                        BadUrl
                    }
                    Some(_) => {
                        tokenizer.error(LexicalErrorKind::InvalidUrl, position);
                        consume_bad_url(tokenizer)
                    }
                };
            }
            Some('"' | '\'' | '(') => {
                tokenizer.error(LexicalErrorKind::InvalidUrl, position);
                return consume_bad_url(tokenizer);
            }
            Some(c) if is_non_printable(c) => {
                tokenizer.error(LexicalErrorKind::InvalidUrl, position);
                return consume_bad_url(tokenizer);
            }
            Some('\\') => {
                if is_newline(tokenizer.char_at(1)) {
                    tokenizer.error(LexicalErrorKind::InvalidUrl, position);
                    return consume_bad_url(tokenizer);
                }
                tokenizer.advance(1);
                value.push(consume_escape(tokenizer))
            }
            Some(c) => {
                tokenizer.advance(1);
                value.push(c)
            }
        }
    }
}

fn consume_bad_url(tokenizer: &mut Tokenizer) -> Token {
    // Consume up to the closing )
    while let Some(c) = tokenizer.next_char() {
        tokenizer.advance(1);
        match c {
            ')' => break,
            '\\' => tokenizer.advance(1), // Skip an escaped ')' or '\'
            _ => (),
        }
    }
    BadUrl
}

// Assumes that the U+005C REVERSE SOLIDUS (\) has already been consumed
// and that the next input character has already been verified
// to not be a newline.
fn consume_escape(tokenizer: &mut Tokenizer) -> char {
    let c = match tokenizer.next_char() {
        Some(c) => c,
        None => {
            // Escaped EOF
            let position = tokenizer.position - 1;
            tokenizer.error(LexicalErrorKind::InvalidEscape, position);
            return REPLACEMENT_CHARACTER;
        }
    };
    tokenizer.advance(1);
    let first_digit = match c.to_digit(16) {
        Some(digit) => digit,
        None => return c,
    };
    let mut value = first_digit;
    let mut digits = 1;
    while digits < 6 {
        match tokenizer.next_char().and_then(|c| c.to_digit(16)) {
            Some(digit) => {
                tokenizer.advance(1);
                value = value * 16 + digit;
                digits += 1;
            }
            None => break,
        }
    }
    match tokenizer.next_char() {
        Some('\r') if tokenizer.char_at(1) == Some('\n') => tokenizer.advance(2),
        c if is_whitespace(c) => tokenizer.advance(1),
        _ => (),
    }
    match char::from_u32(value) {
        Some(c) if value != 0 => c,
        _ => REPLACEMENT_CHARACTER,
    }
}
