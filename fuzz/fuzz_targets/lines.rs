#![no_main]

use libfuzzer_sys::fuzz_target;
use wpt_wire::lines;

// Fuzz target: the line scanner.
//
// Lines must tile the blob exactly: contiguous offsets, no gaps, no overlap,
// and only the last line may be unterminated.
fuzz_target!(|data: &[u8]| {
    let mut pos = 0;
    let mut saw_unterminated = false;
    for line in lines(data) {
        assert!(!saw_unterminated, "line after an unterminated line");
        assert_eq!(line.offset, pos);
        assert!(!line.bytes.contains(&b'\n'));
        assert_eq!(&data[line.offset..line.offset + line.bytes.len()], line.bytes);
        saw_unterminated = !line.terminated;
        let _ = line.kind();
        let _ = line.header_rejection();
        pos = line.end();
    }
    assert_eq!(pos, data.len());
});
