/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

#![crate_name = "css_url_segmenter"]
#![crate_type = "rlib"]
#![deny(missing_docs)]

/*!

A [CSS Syntax Level 3](https://drafts.csswg.org/css-syntax/) tokenizer
that finds the URLs in a stylesheet, for rewriting them without parsing
or re-serializing the rest of it.

# Input

`segment_css` takes a `&str`.
If you have bytes (from a file, the network, or something),
see the `decode_stylesheet_bytes` function.
Invalid UTF-8 in the bytes is replaced with U+FFFD, which takes three bytes,
so segment ranges then index the decoded text and not the original bytes.

# Output

A list of `Segment`s, in order, whose `source_range`s partition the input.
`SegmentKind::Bytes` segments are slices of the input to be emitted unchanged.
`SegmentKind::ImageUrl` and `SegmentKind::OtherUrl` segments hold a URL,
with escapes decoded and without the `url(` `)` markers or quotes.
URLs inside `@font-face` rules are `OtherUrl`, everything else is
classified from the property it appears in, see `UrlClassifier`.

```rust
use css_url_segmenter::{segment_css, SegmentKind, ToCss};

let css = "a { background: url(bg.png) } @font-face { src: url('f.woff') }";
let mut segments = segment_css(css).unwrap();
for segment in &mut segments {
    if segment.kind != SegmentKind::Bytes {
        segment.data = format!("https://cdn.example/{}", segment.data).into();
    }
}
assert_eq!(
    segments.to_css_string(),
    "a { background: url(\"https://cdn.example/bg.png\") } \
     @font-face { src: url(\"https://cdn.example/f.woff\") }"
);
```

# Tokens

The tokenizer is usable on its own: `preprocess` a `Vec<char>`,
then `tokenize` it, or drive a `Tokenizer` as an iterator.
Malformed input never stops tokenization: it produces `BadUrl` or `BadString`
tokens and `LexicalError`s on the side.

*/

pub use crate::classify::UrlClassifier;
pub use crate::from_bytes::decode_stylesheet_bytes;
pub use crate::preprocess::preprocess;
pub use crate::segments::{segment_css, segment_css_with, Segment, SegmentError, SegmentKind};
pub use crate::serializer::{
    serialize_identifier, serialize_name, serialize_string, serialize_url, CssStringWriter, ToCss,
};
pub use crate::tokenizer::{
    tokenize, LexicalError, LexicalErrorKind, NumericValue, Token, TokenKind, TokenSpan, Tokenizer,
};

mod classify;
mod from_bytes;
mod preprocess;
mod segments;
mod serializer;
mod tokenizer;

#[cfg(test)]
mod tests;
