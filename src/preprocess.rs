/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::tokenizer::REPLACEMENT_CHARACTER;

/// [Preprocess the input stream](https://drafts.csswg.org/css-syntax/#input-preprocessing)
///
/// Replaces `\r\n` and lone `\r` with `\n`, and NUL with U+FFFD, in place.
/// Surrogates cannot occur in a `char` sequence:
/// decoding bytes with `decode_stylesheet_bytes` already replaced them.
pub fn preprocess(codepoints: &mut Vec<char>) {
    normalize(codepoints, None)
}

/// Like `preprocess`, but keeps `offsets` in lockstep with `codepoints`.
///
/// `offsets[i]` is where code point `i` starts in the original input,
/// and `offsets` has one extra trailing entry for the end of the input.
/// A `\r\n` pair collapses into one `\n` that starts at the `\r`.
pub(crate) fn preprocess_with_offsets(codepoints: &mut Vec<char>, offsets: &mut Vec<usize>) {
    debug_assert_eq!(codepoints.len() + 1, offsets.len());
    normalize(codepoints, Some(offsets))
}

fn normalize(codepoints: &mut Vec<char>, mut offsets: Option<&mut Vec<usize>>) {
    let len = codepoints.len();
    let mut read = 0;
    let mut write = 0;
    while read < len {
        if let Some(offsets) = offsets.as_deref_mut() {
            offsets[write] = offsets[read];
        }
        codepoints[write] = match codepoints[read] {
            '\r' => {
                if codepoints.get(read + 1) == Some(&'\n') {
                    read += 1;
                }
                '\n'
            }
            '\0' => REPLACEMENT_CHARACTER,
            c => c,
        };
        read += 1;
        write += 1;
    }
    codepoints.truncate(write);
    if let Some(offsets) = offsets {
        offsets[write] = offsets[len];
        offsets.truncate(write + 1);
    }
}
