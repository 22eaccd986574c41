/// Implementation of `wpt get`.
///
/// Writes the content of the first path named `<name>` verbatim, line
/// terminators included, to stdout or to `-o <file>`. A missing name is an
/// error (exit code 1); with `--verbose` the decoder also reports the miss
/// on stderr the way firmware would (`[wpt] ERROR: Path not found: <name>`).
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use wpt_decoder::DecodeError;

use crate::{GetArgs, open_decoder, read_blob};

/// Run the `wpt get` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, no path has the requested
/// name, or the output cannot be written.
pub fn run(args: &GetArgs, verbose: bool) -> Result<()> {
    let blob = read_blob(&args.file)?;
    let decoder = open_decoder(&blob, verbose);

    let content = decoder
        .get(&args.name)
        .ok_or_else(|| DecodeError::PathNotFound {
            name: args.name.clone(),
        })
        .with_context(|| format!("in {}", args.file.display()))?;

    if let Some(path) = &args.output {
        fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        io::stdout()
            .lock()
            .write_all(content)
            .context("cannot write to stdout")?;
    }

    Ok(())
}
