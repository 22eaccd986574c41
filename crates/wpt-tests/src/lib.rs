//! Shared fixtures for the WPT integration tests and benches.
//!
//! Golden files live in `tests/golden/`. Synthetic tarballs are built in
//! memory with [`synthetic_tarball`] so benches can scale the input without
//! committing large files.

#![warn(clippy::pedantic)]

use std::fmt::Write as _;
use std::path::Path;

use wpt_decoder::Decoder;

/// Metadata line a path planner appends after each path.
pub const PLANNER_METADATA: &str = "#PATH.JERRYIO-DATA {\"appVersion\":\"0.4.1\"}";

/// Read a golden fixture from `tests/golden/<name>`.
///
/// # Panics
///
/// Panics if the fixture cannot be read.
#[must_use]
pub fn golden(name: &str) -> Vec<u8> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join("tests/golden").join(name);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// Build a tarball of `paths` entries named `Path 1`..`Path N`, each with
/// `points` content lines followed by a planner metadata line.
#[must_use]
pub fn synthetic_tarball(paths: usize, points: usize) -> Vec<u8> {
    let mut out = String::new();
    for p in 1..=paths {
        let _ = writeln!(out, "#PATH-POINTS-START Path {p}");
        for i in 0..points {
            let _ = writeln!(out, "{}, {}.5, 120", p * 10, i);
        }
        out.push_str(PLANNER_METADATA);
        out.push('\n');
    }
    out.into_bytes()
}

/// One line per entry: index, name, header and content offsets, content
/// length and line count. Used for snapshots.
#[must_use]
pub fn describe(decoder: &Decoder<'_>) -> String {
    let mut out = String::new();
    for (idx, entry) in decoder.iter().enumerate() {
        let content = entry.content();
        let _ = writeln!(
            out,
            "{idx}: {:?} header@{} content@{}..{} ({} bytes, {} lines)",
            entry.name_lossy(),
            entry.header_offset(),
            entry.content_offset(),
            entry.content_range().end,
            content.len(),
            content.iter().filter(|&&b| b == b'\n').count()
        );
    }
    out
}
