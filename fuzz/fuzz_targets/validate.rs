#![no_main]

use libfuzzer_sys::fuzz_target;
use wpt_decoder::{Decoder, Finding, validate};

// Fuzz target: the validator agrees with the decoder.
fuzz_target!(|data: &[u8]| {
    let report = validate(data);
    let decoder = Decoder::new(data);

    assert_eq!(report.entries, decoder.len());
    assert_eq!(
        report.findings.contains(&Finding::NoEntries),
        decoder.is_empty()
    );
    for finding in &report.findings {
        if let Finding::IgnoredContent { offset, len } = finding {
            assert!(*len > 0);
            assert!(offset + len <= data.len());
        }
    }
});
