/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::borrow::Cow;

use difference::Changeset;
use serde_json::{self, json, Value};

use super::{
    decode_stylesheet_bytes, preprocess, segment_css, segment_css_with, serialize_identifier,
    serialize_string, tokenize, LexicalError, LexicalErrorKind, NumericValue, Segment,
    SegmentKind, ToCss, Token, TokenKind, TokenSpan, Tokenizer, UrlClassifier,
};
use crate::from_bytes::codepoints_with_offsets;
use crate::preprocess::preprocess_with_offsets;

fn almost_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (&Value::Number(ref a), &Value::Number(ref b)) => {
            let a = a.as_f64().unwrap();
            let b = b.as_f64().unwrap();
            (a - b).abs() <= a.abs() * 1e-6
        }

        (&Value::Bool(a), &Value::Bool(b)) => a == b,
        (&Value::String(ref a), &Value::String(ref b)) => a == b,
        (&Value::Array(ref a), &Value::Array(ref b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(ref a, ref b)| almost_equals(*a, *b))
        }
        (&Value::Object(_), &Value::Object(_)) => panic!("Not implemented"),
        (&Value::Null, &Value::Null) => true,
        _ => false,
    }
}

fn assert_json_eq(results: Value, expected: Value, message: &str) {
    if !almost_equals(&results, &expected) {
        println!(
            "{}",
            Changeset::new(
                &serde_json::to_string_pretty(&results).unwrap(),
                &serde_json::to_string_pretty(&expected).unwrap(),
                "\n",
            )
        );
        panic!("{}", message)
    }
}

fn run_raw_json_tests<F: Fn(Value, Value)>(json_data: &str, run: F) {
    let items = match serde_json::from_str(json_data) {
        Ok(Value::Array(items)) => items,
        other => panic!("Invalid JSON: {:?}", other),
    };
    assert!(items.len() % 2 == 0);
    let mut input = None;
    for item in items.into_iter() {
        match (&input, item) {
            (&None, json_obj) => input = Some(json_obj),
            (&Some(_), expected) => {
                let input = input.take().unwrap();
                run(input, expected)
            }
        };
    }
}

fn run_json_tests<F: Fn(&str) -> Value>(json_data: &str, parse: F) {
    run_raw_json_tests(json_data, |input, expected| match input {
        Value::String(input) => {
            let result = parse(&input);
            assert_json_eq(result, expected, &input);
        }
        _ => panic!("Unexpected JSON"),
    });
}

fn preprocessed_tokens(input: &str) -> (Vec<TokenSpan>, Vec<LexicalError>) {
    let mut codepoints = input.chars().collect();
    preprocess(&mut codepoints);
    tokenize(&codepoints)
}

fn tokens_of(input: &str) -> Vec<Token> {
    preprocessed_tokens(input)
        .0
        .into_iter()
        .map(|span| span.token)
        .collect()
}

fn errors_of(input: &str) -> Vec<LexicalError> {
    preprocessed_tokens(input).1
}

fn integer(value: i64) -> NumericValue {
    NumericValue {
        value: value as f64,
        int_value: Some(value),
        has_sign: false,
    }
}

#[test]
fn component_tokens() {
    run_json_tests(include_str!("url-segmentation-tests/tokens.json"), |input| {
        let mut tokens = tokens_of(input);
        assert_eq!(tokens.pop(), Some(Token::EndOfFile));
        Value::Array(tokens.iter().map(token_to_json).collect())
    });
}

#[test]
fn segments() {
    run_json_tests(include_str!("url-segmentation-tests/segments.json"), |input| {
        let segments = segment_css(input).unwrap();
        Value::Array(segments.iter().map(segment_to_json).collect())
    });
}

#[test]
fn segments_from_bytes() {
    run_raw_json_tests(
        include_str!("url-segmentation-tests/segments_from_bytes.json"),
        |input, expected| {
            let bytes: Vec<u8> = match input {
                Value::Array(bytes) => bytes
                    .iter()
                    .map(|b| b.as_u64().unwrap() as u8)
                    .collect(),
                _ => panic!("Unexpected JSON"),
            };
            let css = decode_stylesheet_bytes(&bytes);
            let segments = segment_css(&css).unwrap();
            let result = Value::Array(segments.iter().map(segment_to_json).collect());
            assert_json_eq(result, expected, &format!("{:?}", bytes));
        },
    );
}

#[test]
fn end_of_file_is_last_and_unique() {
    for input in &["", "a", "/* unterminated", "url(x", "\"abc", "{[("] {
        let tokens = tokens_of(input);
        assert_eq!(tokens.last(), Some(&Token::EndOfFile), "{:?}", input);
        assert_eq!(
            tokens.iter().filter(|t| **t == Token::EndOfFile).count(),
            1,
            "{:?}",
            input
        );
    }
}

#[test]
fn tokenizer_is_an_iterator() {
    let codepoints: Vec<char> = "a b".chars().collect();
    let mut tokenizer = Tokenizer::new(&codepoints);
    assert_eq!(tokenizer.position(), 0);
    assert_eq!(
        tokenizer.next().map(|span| span.token),
        Some(Token::Ident("a".into()))
    );
    assert_eq!(tokenizer.position(), 1);
    assert_eq!(tokenizer.by_ref().count(), 3);
    assert_eq!(tokenizer.next(), None);
    assert!(tokenizer.errors().is_empty());
}

#[test]
fn token_spans() {
    let (tokens, errors) = preprocessed_tokens("a  /**/b");
    assert!(errors.is_empty());
    let spans: Vec<_> = tokens.iter().map(|span| (span.start, span.end)).collect();
    // The comment belongs to neither token.
    assert_eq!(spans, vec![(0, 1), (1, 3), (7, 8), (8, 8)]);
}

#[test]
fn token_kinds() {
    assert_eq!(Token::WhiteSpace.kind(), TokenKind::Whitespace);
    assert_eq!(Token::Url("x".into()).kind() as u8, 26);
    assert_eq!(Token::IDHash("x".into()).kind(), TokenKind::Hash);
    assert_eq!(Token::Hash("1".into()).kind(), TokenKind::Hash);
    assert_eq!(Token::BadUrl.kind(), TokenKind::Error);
    assert_eq!(Token::BadString.kind(), TokenKind::Error);
    assert_eq!(Token::EndOfFile.kind() as u8, 19);
    assert_eq!(Token::Dimension(integer(1), "px".into()).kind() as u8, 29);

    assert!(Token::BadUrl.is_parse_error());
    assert!(!Token::Url("x".into()).is_parse_error());
    assert_eq!(Token::Function("url".into()).string_value(), Some("url"));
    assert_eq!(Token::Colon.string_value(), None);
}

#[test]
fn numbers() {
    assert_eq!(
        tokens_of("+3"),
        vec![
            Token::Number(NumericValue {
                value: 3.,
                int_value: Some(3),
                has_sign: true,
            }),
            Token::EndOfFile,
        ]
    );
    assert_eq!(
        tokens_of("2.5em"),
        vec![
            Token::Dimension(
                NumericValue {
                    value: 2.5,
                    int_value: None,
                    has_sign: false,
                },
                "em".into()
            ),
            Token::EndOfFile,
        ]
    );
    assert_eq!(
        tokens_of("100%"),
        vec![Token::Percentage(integer(100)), Token::EndOfFile]
    );
}

#[test]
fn numbers_out_of_range() {
    let (tokens, errors) = preprocessed_tokens("1e999");
    assert_eq!(
        tokens[0].token,
        Token::Number(NumericValue {
            value: f64::MAX,
            int_value: None,
            has_sign: false,
        })
    );
    assert_eq!(
        errors,
        vec![LexicalError {
            kind: LexicalErrorKind::NumberOutOfRange,
            position: 0,
        }]
    );

    let (tokens, errors) = preprocessed_tokens("99999999999999999999");
    match tokens[0].token {
        Token::Number(value) => assert_eq!(value.int_value, Some(i64::MAX)),
        ref other => panic!("unexpected token {:?}", other),
    }
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexicalErrorKind::NumberOutOfRange);
}

#[test]
fn lexical_errors() {
    fn kinds_and_positions(input: &str) -> Vec<(LexicalErrorKind, usize)> {
        errors_of(input)
            .into_iter()
            .map(|error| (error.kind, error.position))
            .collect()
    }

    assert_eq!(
        kinds_and_positions("a /* b"),
        vec![(LexicalErrorKind::UnterminatedComment, 2)]
    );
    assert_eq!(
        kinds_and_positions("\"abc"),
        vec![(LexicalErrorKind::UnterminatedString, 0)]
    );
    assert_eq!(
        kinds_and_positions("\"a\nb\""),
        vec![
            (LexicalErrorKind::NewlineInString, 2),
            (LexicalErrorKind::UnterminatedString, 4),
        ]
    );
    assert_eq!(
        kinds_and_positions("url(x"),
        vec![(LexicalErrorKind::UnterminatedUrl, 5)]
    );
    assert_eq!(
        kinds_and_positions("url(a b)"),
        vec![(LexicalErrorKind::InvalidUrl, 5)]
    );
    assert_eq!(
        kinds_and_positions("url(a'b)"),
        vec![(LexicalErrorKind::InvalidUrl, 5)]
    );
    assert_eq!(
        kinds_and_positions("\\\n"),
        vec![(LexicalErrorKind::InvalidEscape, 0)]
    );
    assert!(kinds_and_positions("a{b:url(c)}").is_empty());

    assert_eq!(
        LexicalError {
            kind: LexicalErrorKind::UnterminatedUrl,
            position: 5,
        }
        .to_string(),
        "unterminated url at position 5"
    );
}

#[test]
fn bad_string_does_not_swallow_the_newline() {
    assert_eq!(
        tokens_of("'a\nb"),
        vec![
            Token::BadString,
            Token::WhiteSpace,
            Token::Ident("b".into()),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn escapes() {
    assert_eq!(
        tokens_of("\\0 \\110000 \\D800 x"),
        vec![Token::Ident("\u{FFFD}\u{FFFD}\u{FFFD}x".into()), Token::EndOfFile]
    );
    assert_eq!(
        tokens_of("'\\\na'"),
        vec![Token::QuotedString("a".into()), Token::EndOfFile]
    );
    assert_eq!(
        tokens_of("url(\\29 )"),
        vec![Token::Url(")".into()), Token::EndOfFile]
    );
}

#[test]
fn preprocessing() {
    let mut codepoints = vec!['a', '\r', '\n', 'b', '\r', '\0', '\x0C'];
    preprocess(&mut codepoints);
    assert_eq!(codepoints, vec!['a', '\n', 'b', '\n', '\u{FFFD}', '\x0C']);
}

#[test]
fn preprocessing_keeps_offsets() {
    let (mut codepoints, mut offsets) = codepoints_with_offsets("é\r\nb\r");
    assert_eq!(offsets, vec![0, 2, 3, 4, 5, 6]);
    preprocess_with_offsets(&mut codepoints, &mut offsets);
    assert_eq!(codepoints, vec!['é', '\n', 'b', '\n']);
    assert_eq!(offsets, vec![0, 2, 4, 5, 6]);
}

#[test]
fn decode_bytes() {
    assert!(matches!(decode_stylesheet_bytes(b"a{}"), Cow::Borrowed("a{}")));
    assert_eq!(decode_stylesheet_bytes(b"a\xFFb"), "a\u{FFFD}b");
    // An encoded surrogate is three invalid bytes.
    assert_eq!(
        decode_stylesheet_bytes(b"\xED\xA0\x80"),
        "\u{FFFD}\u{FFFD}\u{FFFD}"
    );

    // Ranges index the decoded text, where U+FFFD takes three bytes.
    let css = decode_stylesheet_bytes(b"a{b:url(x\xFF)}");
    assert_eq!(css.len(), 14);
    let segments = segment_css(&css).unwrap();
    assert_eq!(segments[1].source_range, 4..13);
    assert_eq!(segments[2].source_range, 13..14);
}

#[test]
fn quoted_and_unquoted_urls() {
    for css in &["a{b:url(foo.png)}", "a{b:url('foo.png')}", "a{b:url( \"foo.png\" )}"] {
        let segments = segment_css(css).unwrap();
        let urls: Vec<_> = segments.iter().filter_map(|s| s.url()).collect();
        assert_eq!(urls, vec!["foo.png"], "{:?}", css);
        assert_eq!(segments[0].data, "a{b:");
    }
}

#[test]
fn empty_stylesheet() {
    assert_eq!(segment_css(""), Ok(vec![]));
}

#[test]
fn segment_source_ranges() {
    let css = "a{\r\nb:url(x)\r\n}";
    let segments = segment_css(css).unwrap();
    let ranges: Vec<_> = segments
        .iter()
        .map(|segment| (segment.kind, segment.source_range.clone()))
        .collect();
    assert_eq!(
        ranges,
        vec![
            (SegmentKind::Bytes, 0..6),
            (SegmentKind::ImageUrl, 6..12),
            (SegmentKind::Bytes, 12..15),
        ]
    );
    assert_eq!(&css[6..12], "url(x)");
    assert!(matches!(segments[0].data, Cow::Borrowed("a{\r\nb:")));
    assert_eq!(segments[1].url(), Some("x"));
    assert_eq!(segments[2].url(), None);
}

#[test]
fn null_in_url() {
    let css = "a{b:url(x\0y)}";
    let segments = segment_css(css).unwrap();
    assert_eq!(segments[1].url(), Some("x\u{FFFD}y"));
    assert_eq!(segments[1].source_range, 4..12);
}

#[test]
fn custom_classifier() {
    let classifier = UrlClassifier::default()
        .with_property("Behavior", SegmentKind::OtherUrl)
        .with_property("src", SegmentKind::OtherUrl);
    let segments = segment_css_with(
        "a{behavior:url(x.htc);BACKGROUND:url(y.png)}",
        &classifier,
    )
    .unwrap();
    let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Bytes,
            SegmentKind::OtherUrl,
            SegmentKind::Bytes,
            SegmentKind::ImageUrl,
            SegmentKind::Bytes,
        ]
    );
}

#[test]
fn classifier_lookup() {
    let classifier = UrlClassifier::default();
    assert_eq!(
        classifier.property_kind("Background-Image"),
        Some(SegmentKind::ImageUrl)
    );
    assert_eq!(classifier.property_kind("behavior"), None);
    assert_eq!(
        classifier.classify(Some("behavior"), false),
        SegmentKind::ImageUrl
    );
    assert_eq!(classifier.classify(None, false), SegmentKind::ImageUrl);
    assert_eq!(
        classifier.classify(Some("background"), true),
        SegmentKind::OtherUrl
    );

    let classifier = classifier.with_property("background", SegmentKind::OtherUrl);
    assert_eq!(
        classifier.classify(Some("BACKGROUND"), false),
        SegmentKind::OtherUrl
    );
}

#[test]
fn classifier_lookup_case_folding() {
    let long = "-x-some-vendor-specific-image-property";
    assert!(long.len() > 32);
    let classifier = UrlClassifier::default().with_property(long, SegmentKind::OtherUrl);
    assert_eq!(
        classifier.property_kind(&long.to_ascii_uppercase()),
        Some(SegmentKind::OtherUrl)
    );
    assert_eq!(
        classifier.property_kind("-WEBKIT-MASK-BOX-IMAGE-SOURCE"),
        Some(SegmentKind::ImageUrl)
    );
    assert_eq!(classifier.property_kind("Cursor"), Some(SegmentKind::ImageUrl));
    assert_eq!(classifier.property_kind("CURSOR\u{E9}"), None);
    assert_eq!(classifier.property_kind(""), None);
}

#[test]
fn selector_colon_is_not_a_property() {
    let classifier = UrlClassifier::default().with_property("a", SegmentKind::OtherUrl);
    let segments = segment_css_with("a:hover{b:url(q)}", &classifier).unwrap();
    assert_eq!(segments[1].kind, SegmentKind::ImageUrl);
    let segments = segment_css_with("a:url(q)", &classifier).unwrap();
    assert_eq!(segments[1].kind, SegmentKind::OtherUrl);
}

#[cfg(feature = "serde")]
#[test]
fn classifier_from_json() {
    let classifier: UrlClassifier =
        serde_json::from_value(json!({ "Behavior": "OtherUrl" })).unwrap();
    assert_eq!(
        classifier,
        UrlClassifier::default().with_property("behavior", SegmentKind::OtherUrl)
    );
}

#[test]
fn rewrite_urls() {
    let mut segments = segment_css("@font-face{src:url(a.woff)}b{background:url('c d.png')}").unwrap();
    for segment in &mut segments {
        if let Some(url) = segment.url() {
            segment.data = Cow::Owned(format!("/cdn/{}", url));
        }
    }
    assert_eq!(
        segments.to_css_string(),
        "@font-face{src:url(\"/cdn/a.woff\")}b{background:url(\"/cdn/c d.png\")}"
    );
}

#[test]
fn serializer() {
    fn css(token: Token) -> String {
        token.to_css_string()
    }
    assert_eq!(css(Token::Ident("1a".into())), "\\31 a");
    assert_eq!(css(Token::Ident("a b".into())), "a\\ b");
    assert_eq!(css(Token::AtKeyword("media".into())), "@media");
    assert_eq!(css(Token::Hash("1a".into())), "#1a");
    assert_eq!(css(Token::IDHash("x".into())), "#x");
    assert_eq!(css(Token::QuotedString("a\"b\\c".into())), "\"a\\\"b\\\\c\"");
    assert_eq!(css(Token::Url("x y".into())), "url(\"x y\")");
    assert_eq!(css(Token::Function("url".into())), "url(");
    assert_eq!(css(Token::Delim('>')), ">");
    assert_eq!(
        css(Token::Number(NumericValue {
            value: 3.,
            int_value: Some(3),
            has_sign: true,
        })),
        "+3"
    );
    assert_eq!(
        css(Token::Number(NumericValue {
            value: 3.5,
            int_value: None,
            has_sign: false,
        })),
        "3.5"
    );
    assert_eq!(css(Token::Percentage(integer(50))), "50%");
    assert_eq!(css(Token::Dimension(integer(10), "px".into())), "10px");
    assert_eq!(css(Token::Dimension(integer(10), "e".into())), "10\\65 ");
    assert_eq!(css(Token::EndOfFile), "");

    let mut s = String::new();
    serialize_identifier("--x", &mut s).unwrap();
    serialize_identifier(" ", &mut s).unwrap();
    serialize_identifier("-", &mut s).unwrap();
    serialize_identifier("-1", &mut s).unwrap();
    assert_eq!(s, "--x\\ \\--\\31 ");

    let mut s = String::new();
    serialize_string("a\nb\0", &mut s).unwrap();
    assert_eq!(s, "\"a\\a b\u{FFFD}\"");
}

#[test]
fn segment_serialization() {
    let segments = vec![
        Segment {
            kind: SegmentKind::Bytes,
            data: "a{b:".into(),
            source_range: 0..4,
        },
        Segment {
            kind: SegmentKind::ImageUrl,
            data: "x\"y".into(),
            source_range: 4..12,
        },
        Segment {
            kind: SegmentKind::Bytes,
            data: "}".into(),
            source_range: 12..13,
        },
    ];
    assert_eq!(segments.to_css_string(), "a{b:url(\"x\\\"y\")}");
}

#[cfg(not(feature = "skip_long_tests"))]
mod properties {
    use proptest::prelude::*;

    use super::{preprocess, preprocessed_tokens, segment_css, SegmentKind, Token};

    const FRAGMENTS: &[&str] = &[
        "url(", "URL( ", ")", "'", "\"", "a", "background", "src", ":", ";", "{", "}", "(",
        "[", "]", "@font-face", "@media", " ", "\t", "\r\n", "\r", "\n", "\0", "\\", "41",
        "/*", "*/", "é", "1e5", "-", "+", ".", "%", "#", ",", "<!--", "-->",
    ];

    fn stylesheet() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(FRAGMENTS.to_vec()), 0..40)
            .prop_map(|fragments| fragments.concat())
    }

    proptest! {
        #[test]
        fn segments_partition_the_input(css in stylesheet()) {
            let segments = segment_css(&css).unwrap();
            let mut position = 0;
            for segment in &segments {
                prop_assert_eq!(segment.source_range.start, position);
                prop_assert!(segment.source_range.end > segment.source_range.start);
                let source = &css[segment.source_range.clone()];
                match segment.kind {
                    SegmentKind::Bytes => prop_assert_eq!(&*segment.data, source),
                    SegmentKind::ImageUrl | SegmentKind::OtherUrl => {
                        prop_assert!(source.ends_with(')'))
                    }
                }
                position = segment.source_range.end;
            }
            prop_assert_eq!(position, css.len());
        }

        #[test]
        fn arbitrary_text_partitions(css in any::<String>()) {
            let segments = segment_css(&css).unwrap();
            let covered: usize = segments.iter().map(|s| s.source_range.len()).sum();
            prop_assert_eq!(covered, css.len());
        }

        #[test]
        fn preprocessing_is_idempotent(css in stylesheet()) {
            let mut once: Vec<char> = css.chars().collect();
            preprocess(&mut once);
            let mut twice = once.clone();
            preprocess(&mut twice);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn token_spans_are_contiguous_and_end_with_eof(css in stylesheet()) {
            let (tokens, _) = preprocessed_tokens(&css);
            let last = tokens.last().unwrap();
            prop_assert_eq!(&last.token, &Token::EndOfFile);
            prop_assert_eq!(
                tokens.iter().filter(|span| span.token == Token::EndOfFile).count(),
                1
            );
            let mut position = 0;
            for span in &tokens {
                // Only comments may sit between two tokens.
                prop_assert!(span.start >= position);
                prop_assert!(span.end >= span.start);
                position = span.end;
            }
        }
    }
}

fn numeric_to_json(value: NumericValue) -> Vec<Value> {
    vec![
        match value.int_value {
            Some(i) => json!(i),
            None => json!(value.value),
        },
        json!(if value.is_integer() { "integer" } else { "number" }),
    ]
}

fn token_to_json(token: &Token) -> Value {
    fn numeric(name: &str, value: NumericValue) -> Vec<Value> {
        let mut json = vec![json!(name)];
        json.extend(numeric_to_json(value));
        json
    }

    match *token {
        Token::Ident(ref value) => json!(["ident", value]),
        Token::AtKeyword(ref value) => json!(["at-keyword", value]),
        Token::Hash(ref value) => json!(["hash", value, "unrestricted"]),
        Token::IDHash(ref value) => json!(["hash", value, "id"]),
        Token::QuotedString(ref value) => json!(["string", value]),
        Token::Url(ref value) => json!(["url", value]),
        Token::Delim(value) => json!(value.to_string()),

        Token::Number(value) => Value::Array(numeric("number", value)),
        Token::Percentage(value) => Value::Array(numeric("percentage", value)),
        Token::Dimension(value, ref unit) => {
            let mut json = numeric("dimension", value);
            json.push(json!(unit));
            Value::Array(json)
        }

        Token::WhiteSpace => json!(" "),
        Token::Colon => json!(":"),
        Token::Semicolon => json!(";"),
        Token::Comma => json!(","),
        Token::IncludeMatch => json!("~="),
        Token::DashMatch => json!("|="),
        Token::PrefixMatch => json!("^="),
        Token::SuffixMatch => json!("$="),
        Token::SubstringMatch => json!("*="),
        Token::Column => json!("||"),
        Token::CDO => json!("<!--"),
        Token::CDC => json!("-->"),

        Token::Function(ref name) => json!(["function", name]),
        Token::ParenthesisBlock => json!("("),
        Token::SquareBracketBlock => json!("["),
        Token::CurlyBracketBlock => json!("{"),
        Token::BadUrl => json!(["error", "bad-url"]),
        Token::BadString => json!(["error", "bad-string"]),
        Token::CloseParenthesis => json!(")"),
        Token::CloseSquareBracket => json!("]"),
        Token::CloseCurlyBracket => json!("}"),
        Token::EndOfFile => json!(["error", "eof"]),
    }
}

fn segment_to_json(segment: &Segment) -> Value {
    let kind = match segment.kind {
        SegmentKind::Bytes => "bytes",
        SegmentKind::ImageUrl => "image-url",
        SegmentKind::OtherUrl => "other-url",
    };
    json!([kind, segment.data])
}
