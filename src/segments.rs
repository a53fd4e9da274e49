/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::borrow::Cow;
use std::ops::Range;

use smallvec::SmallVec;
use thiserror::Error;

use crate::classify::UrlClassifier;
use crate::from_bytes::codepoints_with_offsets;
use crate::preprocess::preprocess_with_offsets;
use crate::tokenizer::{tokenize, Token, TokenSpan};

/// What a `Segment` holds.
///
/// The discriminants are stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SegmentKind {
    /// Part of the stylesheet, to be emitted as is.
    Bytes = 0,
    /// The URL of an image.
    ///
    /// When included in CSS output, it must be wrapped in `url(…)`,
    /// with or without quotes.
    ImageUrl = 1,
    /// Like `ImageUrl`, but for anything else. In practice a font.
    OtherUrl = 2,
}

/// A contiguous piece of a stylesheet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment<'i> {
    /// Whether this is raw text or a URL.
    pub kind: SegmentKind,

    /// For `Bytes`, the source text itself.
    /// For URLs, the URL with escapes decoded,
    /// without the `url(` `)` markers or the quotes.
    pub data: Cow<'i, str>,

    /// The byte range of the input this segment stands for.
    ///
    /// For a URL this covers the whole construct, from `url(` to `)`.
    pub source_range: Range<usize>,
}

impl<'i> Segment<'i> {
    /// The URL, if this is an `ImageUrl` or `OtherUrl` segment.
    pub fn url(&self) -> Option<&str> {
        match self.kind {
            SegmentKind::Bytes => None,
            SegmentKind::ImageUrl | SegmentKind::OtherUrl => Some(&*self.data),
        }
    }
}

/// The token stream could not be segmented.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The tokenizer did not end its output with exactly one end-of-file token.
    #[error("token stream is not terminated by a single end-of-file token")]
    MissingEndOfFile,
}

/// Chop a stylesheet into segments, classifying URLs with the default table.
///
/// See `segment_css_with`.
pub fn segment_css(css: &str) -> Result<Vec<Segment<'_>>, SegmentError> {
    segment_css_with(css, &UrlClassifier::default())
}

/// Chop a stylesheet into segments.
///
/// Each segment is either a slice of `css` or an image or other URL (in practice a font).
/// The `source_range`s of the segments partition `css`, in order.
/// This can be used to modify the URLs, for example to point them at a CDN.
/// When combining the segments back into a stylesheet, the caller must emit `url()`
/// around the URLs, and chooses the quoting: `url("…")`, `url('…')` or `url(…)`.
///
/// Malformed input never causes an error: it ends up in `Bytes` segments.
#[tracing::instrument(level = "debug", skip_all, fields(len = css.len()))]
pub fn segment_css_with<'i>(
    css: &'i str,
    classifier: &UrlClassifier,
) -> Result<Vec<Segment<'i>>, SegmentError> {
    let (mut codepoints, mut offsets) = codepoints_with_offsets(css);
    preprocess_with_offsets(&mut codepoints, &mut offsets);
    let (tokens, errors) = tokenize(&codepoints);
    for error in &errors {
        tracing::trace!(position = error.position, kind = %error.kind, "lexical error");
    }

    let end_of_file_count = tokens
        .iter()
        .filter(|span| span.token == Token::EndOfFile)
        .count();
    match tokens.last() {
        Some(last) if last.token == Token::EndOfFile && end_of_file_count == 1 => {}
        _ => return Err(SegmentError::MissingEndOfFile),
    }

    let mut segmenter = Segmenter {
        css,
        offsets: &offsets,
        classifier,
        segments: Vec::new(),
        emitted_up_to: 0,
        blocks: SmallVec::new(),
        property: None,
        property_candidate: None,
        pending_font_face: false,
    };
    let mut index = 0;
    while index < tokens.len() {
        match find_url(&tokens, index) {
            Some((url, last)) => {
                segmenter.push_url(url, tokens[index].start, tokens[last].end);
                index = last + 1;
            }
            None => {
                segmenter.track(&tokens[index].token);
                index += 1;
            }
        }
    }
    segmenter.push_bytes_up_to(css.len());

    tracing::debug!(
        segments = segmenter.segments.len(),
        errors = errors.len(),
        "segmented stylesheet"
    );
    Ok(segmenter.segments)
}

/// If a URL starts at `tokens[index]`, return it and the index of its last token.
///
/// That is either a `Url` token, or `url(` followed by a string and `)`,
/// with optional whitespace around the string.
fn find_url(tokens: &[TokenSpan], index: usize) -> Option<(&str, usize)> {
    match tokens[index].token {
        Token::Url(ref url) => Some((url.as_str(), index)),
        Token::Function(ref name) if name.eq_ignore_ascii_case("url") => {
            let string_index = skip_whitespace(tokens, index + 1);
            let url = match tokens.get(string_index)?.token {
                Token::QuotedString(ref url) => url,
                _ => return None,
            };
            let close_index = skip_whitespace(tokens, string_index + 1);
            match tokens.get(close_index)?.token {
                Token::CloseParenthesis => Some((url.as_str(), close_index)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn skip_whitespace(tokens: &[TokenSpan], mut index: usize) -> usize {
    while let Some(&TokenSpan {
        token: Token::WhiteSpace,
        ..
    }) = tokens.get(index)
    {
        index += 1
    }
    index
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockType {
    Parenthesis,
    SquareBracket,
    CurlyBracket { font_face: bool },
}

struct Segmenter<'i, 'a> {
    css: &'i str,
    /// Byte offset in `css` of each preprocessed code point, plus one for the end.
    offsets: &'a [usize],
    classifier: &'a UrlClassifier,
    segments: Vec<Segment<'i>>,
    /// Byte offset up to which `css` is covered by `segments`.
    emitted_up_to: usize,
    blocks: SmallVec<[BlockType; 16]>,
    /// The name of the declaration whose value we are in, if any.
    property: Option<String>,
    /// An identifier that would become `property` if followed by a colon.
    property_candidate: Option<String>,
    /// An `@font-face` keyword was seen, its block has not started yet.
    pending_font_face: bool,
}

impl<'i, 'a> Segmenter<'i, 'a> {
    fn in_font_face(&self) -> bool {
        self.blocks
            .iter()
            .any(|block| *block == BlockType::CurlyBracket { font_face: true })
    }

    fn at_declaration_level(&self) -> bool {
        matches!(
            self.blocks.last(),
            None | Some(BlockType::CurlyBracket { .. })
        )
    }

    fn push_bytes_up_to(&mut self, end: usize) {
        let start = self.emitted_up_to;
        if end > start {
            self.segments.push(Segment {
                kind: SegmentKind::Bytes,
                data: Cow::Borrowed(&self.css[start..end]),
                source_range: start..end,
            });
            self.emitted_up_to = end;
        }
    }

    fn push_url(&mut self, url: &str, start: usize, end: usize) {
        let (start, end) = (self.offsets[start], self.offsets[end]);
        self.push_bytes_up_to(start);
        let kind = self
            .classifier
            .classify(self.property.as_deref(), self.in_font_face());
        self.segments.push(Segment {
            kind,
            data: Cow::Owned(url.to_owned()),
            source_range: start..end,
        });
        self.emitted_up_to = end;
        self.property_candidate = None;
    }

    fn track(&mut self, token: &Token) {
        match *token {
            Token::WhiteSpace | Token::EndOfFile => return,
            Token::AtKeyword(ref name) => {
                self.pending_font_face = name.eq_ignore_ascii_case("font-face");
            }
            Token::CurlyBracketBlock => {
                let font_face = self.pending_font_face;
                self.blocks.push(BlockType::CurlyBracket { font_face });
                self.pending_font_face = false;
                self.property = None;
            }
            Token::Function(_) | Token::ParenthesisBlock => self.blocks.push(BlockType::Parenthesis),
            Token::SquareBracketBlock => self.blocks.push(BlockType::SquareBracket),
            Token::CloseParenthesis => self.close(BlockType::Parenthesis),
            Token::CloseSquareBracket => self.close(BlockType::SquareBracket),
            Token::CloseCurlyBracket => {
                if let Some(BlockType::CurlyBracket { .. }) = self.blocks.last() {
                    let _ = self.blocks.pop();
                    self.property = None;
                    self.pending_font_face = false;
                }
            }
            Token::Semicolon if self.at_declaration_level() => {
                self.property = None;
                self.pending_font_face = false;
            }
            Token::Ident(ref name) if self.at_declaration_level() => {
                self.property_candidate = Some(name.clone());
                return;
            }
            Token::Colon if self.at_declaration_level() && self.property.is_none() => {
                self.property = self.property_candidate.take();
            }
            _ => {}
        }
        self.property_candidate = None;
    }

    fn close(&mut self, block: BlockType) {
        // An unmatched closing token is not a block boundary.
        if self.blocks.last() == Some(&block) {
            let _ = self.blocks.pop();
        }
    }
}
