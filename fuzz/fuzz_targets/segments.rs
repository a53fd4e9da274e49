#![no_main]

use css_url_segmenter::*;

const DEBUG: bool = false;

fn fuzz(data: &[u8]) {
    let css = decode_stylesheet_bytes(data);
    let segments = segment_css(&css).unwrap();
    if DEBUG {
        println!("IN: {:?}", css);
        println!("OUT: {:?}", segments);
    }

    let mut position = 0;
    for segment in &segments {
        assert_eq!(segment.source_range.start, position, "Segments should be contiguous");
        if segment.kind == SegmentKind::Bytes {
            assert_eq!(&*segment.data, &css[segment.source_range.clone()]);
        }
        position = segment.source_range.end;
    }
    assert_eq!(position, css.len(), "Segments should cover the input");

    // Re-segmenting the serialization finds the same URLs.
    let serialization = segments.to_css_string();
    let urls: Vec<_> = segments.iter().filter_map(|s| s.url()).collect();
    let resegmented = segment_css(&serialization).unwrap();
    let reurls: Vec<_> = resegmented.iter().filter_map(|s| s.url()).collect();
    if DEBUG {
        println!("SERIALIZED: {:?}", serialization);
    }
    assert_eq!(urls.len(), reurls.len());
}

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    fuzz(data);
});
