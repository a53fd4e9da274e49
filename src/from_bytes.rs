/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::borrow::Cow;

/// Decode the bytes of a UTF-8 stylesheet.
///
/// Invalid sequences, including UTF-8 encoded surrogates, are replaced with U+FFFD.
/// The result borrows from `css` when it is already well-formed,
/// and segments computed from it partition the decoded text rather than `css`.
pub fn decode_stylesheet_bytes(css: &[u8]) -> Cow<'_, str> {
    // http://dev.w3.org/csswg/css-syntax/#the-input-byte-stream
    let decoded = String::from_utf8_lossy(css);
    if let Cow::Owned(_) = decoded {
        tracing::debug!(len = css.len(), "stylesheet is not valid UTF-8, replaced invalid bytes");
    }
    decoded
}

/// Split `css` into code points, along with the byte offset of each.
///
/// The offsets have one extra trailing entry equal to `css.len()`.
pub(crate) fn codepoints_with_offsets(css: &str) -> (Vec<char>, Vec<usize>) {
    let mut codepoints = Vec::with_capacity(css.len());
    let mut offsets = Vec::with_capacity(css.len() + 1);
    for (offset, c) in css.char_indices() {
        codepoints.push(c);
        offsets.push(offset);
    }
    offsets.push(css.len());
    (codepoints, offsets)
}
