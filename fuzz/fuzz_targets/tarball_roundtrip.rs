#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wpt_decoder::Decoder;

#[derive(Arbitrary, Debug)]
struct Path {
    name: String,
    points: Vec<String>,
    metadata: bool,
}

// Fuzz target: build a well-formed tarball, decode it, compare.
//
// Names lose any '\n'. Content lines lose any '\n' and a leading '#'.
// With those two rules every path must come back byte-identical.
fuzz_target!(|paths: Vec<Path>| {
    let mut blob = Vec::new();
    let mut expected = Vec::new();

    for path in &paths {
        let name = path.name.replace('\n', "");
        let mut content = Vec::new();
        for point in &path.points {
            let line = point.replace('\n', "");
            let line = line.trim_start_matches('#');
            content.extend_from_slice(line.as_bytes());
            content.push(b'\n');
        }

        blob.extend_from_slice(b"#PATH-POINTS-START ");
        blob.extend_from_slice(name.as_bytes());
        blob.push(b'\n');
        blob.extend_from_slice(&content);
        if path.metadata {
            blob.extend_from_slice(b"#PATH.JERRYIO-DATA {}\n");
        }
        expected.push((name, content));
    }

    let decoder = Decoder::new(&blob);
    assert_eq!(decoder.len(), expected.len());
    for (entry, (name, content)) in decoder.iter().zip(&expected) {
        assert_eq!(entry.name(), name.as_bytes());
        assert_eq!(entry.content(), content.as_slice());
    }
});
