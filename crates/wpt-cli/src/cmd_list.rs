/// Implementation of `wpt list`.
///
/// # Output format
///
/// ```text
/// 0  "Path 1"  142 bytes @ 26
/// 1  "Path 2"  97 bytes @ 236
/// ```
///
/// With `--json`, a JSON array of objects with `index`, `name`,
/// `header_offset`, `content_offset`, and `content_len`.
use anyhow::{Context, Result};
use serde::Serialize;

use crate::{ListArgs, open_decoder, read_blob};

/// JSON shape of one entry.
#[derive(Serialize)]
struct EntrySummary {
    index: usize,
    name: String,
    header_offset: usize,
    content_offset: usize,
    content_len: usize,
}

/// Run the `wpt list` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or JSON serialization fails.
pub fn run(args: &ListArgs, verbose: bool) -> Result<()> {
    let blob = read_blob(&args.file)?;
    let decoder = open_decoder(&blob, verbose);

    if verbose {
        eprintln!(
            "{}: {} bytes, {} path{}",
            args.file.display(),
            blob.len(),
            decoder.len(),
            if decoder.len() == 1 { "" } else { "s" }
        );
    }

    if args.json {
        let summaries: Vec<EntrySummary> = decoder
            .iter()
            .enumerate()
            .map(|(index, entry)| EntrySummary {
                index,
                name: entry.name_lossy().into_owned(),
                header_offset: entry.header_offset(),
                content_offset: entry.content_offset(),
                content_len: entry.content().len(),
            })
            .collect();
        let json =
            serde_json::to_string_pretty(&summaries).context("cannot serialize entry list")?;
        println!("{json}");
        return Ok(());
    }

    for (idx, entry) in decoder.iter().enumerate() {
        println!(
            "{idx}  {:?}  {} bytes @ {}",
            entry.name_lossy(),
            entry.content().len(),
            entry.content_offset()
        );
    }

    Ok(())
}
