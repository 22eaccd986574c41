/// Implementation of `wpt inspect`.
///
/// Reads a tarball, decodes it, and prints a structured summary to stdout.
/// Optionally shows content (`--show-body`) or a raw hex dump
/// (`--show-hex`). When `--entry N` is given, only the entry at index N is
/// shown.
///
/// # Output format
///
/// ```text
/// Tarball: 2 paths, 3 reserved lines, 812 bytes
/// Entry 0: "Path 1" header@0 content@26 (142 bytes, 6 lines)
/// Entry 1: "Path 2" header@210 content@236 (97 bytes, 4 lines)
/// ---
/// 1 finding, run `wpt validate` for details
/// ```
use std::fmt::Write as _;

use anyhow::Result;
use wpt_decoder::validate;
use wpt_wire::{LineKind, lines};

use crate::{InspectArgs, open_decoder, read_blob};

/// Run the `wpt inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn run(args: &InspectArgs, verbose: bool) -> Result<()> {
    let blob = read_blob(&args.file)?;
    let decoder = open_decoder(&blob, verbose);

    let reserved = lines(&blob)
        .filter(|line| line.kind() == LineKind::Reserved)
        .count();

    println!(
        "Tarball: {} path{}, {reserved} reserved line{}, {} bytes",
        decoder.len(),
        plural(decoder.len()),
        plural(reserved),
        blob.len()
    );

    for (idx, entry) in decoder.iter().enumerate() {
        // When --entry N is specified, skip all other indices.
        if let Some(target) = args.entry
            && idx != target
        {
            continue;
        }

        let content = entry.content();
        println!(
            "Entry {idx}: {:?} header@{} content@{} ({} bytes, {} line{})",
            entry.name_lossy(),
            entry.header_offset(),
            entry.content_offset(),
            content.len(),
            line_count(content),
            plural(line_count(content))
        );

        if args.show_body {
            let body = String::from_utf8_lossy(content);
            let truncated: String = body.chars().take(80).collect();
            let ellipsis = if body.chars().count() > 80 { "…" } else { "" };
            println!("         Body:    {truncated:?}{ellipsis}");
        }

        if args.show_hex {
            println!("         Hex dump:");
            for row in hex_dump(content) {
                println!("           {row}");
            }
        }
    }

    let report = validate(&blob);
    println!("---");
    match report.findings.len() {
        0 => println!("no findings"),
        n => println!("{n} finding{}, run `wpt validate` for details", plural(n)),
    }

    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Number of lines in `content`; a final unterminated line counts.
fn line_count(content: &[u8]) -> usize {
    lines(content).count()
}

/// 16-bytes-per-row hex dump: offset, hex bytes, printable ASCII.
fn hex_dump(raw: &[u8]) -> Vec<String> {
    raw.chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let offset = i * 16;
            let hex = chunk
                .iter()
                .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                    if !s.is_empty() {
                        s.push(' ');
                    }
                    let _ = write!(s, "{b:02x}");
                    s
                });
            let ascii: String = chunk
                .iter()
                .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
                .collect();
            format!("{offset:04x}  {hex:<48}  {ascii}")
        })
        .collect()
}
