#![no_main]

use libfuzzer_sys::fuzz_target;
use wpt_decoder::Decoder;
use wpt_wire::marker::PATH_START_MARKER;

// Fuzz target: Decoder::new on arbitrary bytes.
//
// Catches:
// - Panics in the scanner or entry bookkeeping
// - Content slices escaping the blob or overlapping a header
// - Content containing a line that starts with '#'
// - Lookups disagreeing with enumeration order
fuzz_target!(|data: &[u8]| {
    let decoder = Decoder::new(data);
    assert_eq!(decoder.blob().as_ptr(), data.as_ptr());

    let mut prev_end = 0;
    for entry in &decoder {
        assert!(data[entry.header_offset()..].starts_with(PATH_START_MARKER));
        assert!(entry.header_offset() >= prev_end);
        assert!(!entry.name().contains(&b'\n'));

        let range = entry.content_range();
        assert!(range.end <= data.len());
        assert_eq!(&data[range.clone()], entry.content());
        assert_eq!(data[range.start - 1], b'\n');

        for line in entry.content().split(|&b| b == b'\n') {
            assert_ne!(line.first(), Some(&b'#'));
        }
        prev_end = range.end;
    }

    for entry in &decoder {
        let found = decoder.get(entry.name()).expect("enumerated name must resolve");
        let first = decoder.find(entry.name()).unwrap();
        assert_eq!(found.as_ptr(), first.content().as_ptr());
        assert_eq!(found.len(), first.content().len());
    }
});
