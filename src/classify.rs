/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::borrow::Cow;
use std::collections::HashMap;

use phf::phf_set;

use crate::segments::SegmentKind;

/// Properties whose `url()` values are images.
///
/// Keys are ASCII lowercase.
static IMAGE_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "background",
    "background-image",
    "border-image",
    "border-image-source",
    "content",
    "cursor",
    "list-style",
    "list-style-image",
    "mask",
    "mask-border",
    "mask-border-source",
    "mask-image",
    "shape-outside",
    "-webkit-border-image",
    "-webkit-mask",
    "-webkit-mask-box-image",
    "-webkit-mask-box-image-source",
    "-webkit-mask-image",
};

/// Decides whether a URL found in a declaration is an image or another resource.
///
/// URLs inside `@font-face` are always `SegmentKind::OtherUrl`, regardless of this table.
/// Outside of it, the property name is looked up (ASCII case-insensitively)
/// in the extra entries given with `with_property`, then in the built-in table of
/// image-bearing properties. Anything else defaults to `SegmentKind::ImageUrl`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "HashMap<String, SegmentKind>")
)]
pub struct UrlClassifier {
    properties: HashMap<String, SegmentKind>,
}

impl UrlClassifier {
    /// Add or override the kind of URLs found in the value of `property`.
    pub fn with_property(mut self, property: &str, kind: SegmentKind) -> Self {
        let _ = self.properties.insert(property.to_ascii_lowercase(), kind);
        self
    }

    /// The kind of URLs in the value of `property`, if it is known.
    pub fn property_kind(&self, property: &str) -> Option<SegmentKind> {
        let mut buffer = [0; MAX_PROPERTY_LENGTH];
        let lowercase = to_ascii_lowercase(property, &mut buffer);
        if let Some(&kind) = self.properties.get(&*lowercase) {
            return Some(kind);
        }
        if IMAGE_PROPERTIES.contains(&*lowercase) {
            return Some(SegmentKind::ImageUrl);
        }
        None
    }

    /// Classify a URL given its surrounding context.
    pub fn classify(&self, property: Option<&str>, in_font_face: bool) -> SegmentKind {
        if in_font_face {
            return SegmentKind::OtherUrl;
        }
        property
            .and_then(|property| self.property_kind(property))
            .unwrap_or(SegmentKind::ImageUrl)
    }
}

/// Longer names than this are lowercased on the heap.
const MAX_PROPERTY_LENGTH: usize = 32;

/// ASCII-lowercase `input` into `buffer` when it fits.
///
/// Borrows `input` when it has no uppercase letters.
fn to_ascii_lowercase<'a>(
    input: &'a str,
    buffer: &'a mut [u8; MAX_PROPERTY_LENGTH],
) -> Cow<'a, str> {
    let first_uppercase = match input.bytes().position(|byte| byte.is_ascii_uppercase()) {
        Some(position) => position,
        None => return Cow::Borrowed(input),
    };
    if input.len() > buffer.len() {
        return Cow::Owned(input.to_ascii_lowercase());
    }
    let buffer = &mut buffer[..input.len()];
    buffer.copy_from_slice(input.as_bytes());
    buffer[first_uppercase..].make_ascii_lowercase();
    // Lowercasing ASCII bytes keeps the buffer valid UTF-8.
    match std::str::from_utf8(buffer) {
        Ok(lowercase) => Cow::Borrowed(lowercase),
        Err(_) => Cow::Owned(input.to_ascii_lowercase()),
    }
}

impl From<HashMap<String, SegmentKind>> for UrlClassifier {
    fn from(properties: HashMap<String, SegmentKind>) -> Self {
        properties
            .into_iter()
            .fold(UrlClassifier::default(), |classifier, (property, kind)| {
                classifier.with_property(&property, kind)
            })
    }
}
