/// WPT command-line tool: list, extract, inspect, and validate waypoint
/// tarballs (blobs of `#PATH-POINTS-START <name>` sections).
///
/// # Command overview
///
/// ```text
/// wpt <COMMAND> [OPTIONS]
///
/// Commands:
///   list       Print one line per path (or JSON with --json)
///   get        Write one path's content to stdout or a file
///   inspect    Print a human-readable per-path summary
///   validate   Lint a tarball for rejected headers, duplicates, orphans
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Report lookup misses and extra details on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Success                                        |
/// | 1    | Error (I/O failure, missing path, invalid file) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wpt_decoder::{Decoder, StderrSink};

mod cmd_get;
mod cmd_inspect;
mod cmd_list;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The WPT (waypoint tarball) command-line tool.
#[derive(Parser)]
#[command(name = "wpt", version, about = "Waypoint tarball CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Report lookup misses on stderr and print extra details.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print one line per path in a tarball.
    List(ListArgs),
    /// Write the content of one path to stdout or a file.
    Get(GetArgs),
    /// Print a human-readable summary of each path in a tarball.
    Inspect(InspectArgs),
    /// Lint a tarball for rejected headers, duplicates, and orphaned bytes.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `wpt list`.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the tarball file.
    pub file: PathBuf,

    /// Emit a JSON array instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `wpt get`.
///
/// The name is matched byte for byte: no trimming, case-sensitive. Quote
/// names that contain spaces (`wpt get paths.txt "Path 1"`).
#[derive(clap::Args)]
pub struct GetArgs {
    /// Path to the tarball file.
    pub file: PathBuf,

    /// Name of the path to extract.
    pub name: String,

    /// Write the content to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `wpt inspect`.
///
/// ```text
/// ┌─────────────┬─────────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                              │
/// ├─────────────┼─────────────────────────────────────────────────────┤
/// │ --show-body │ Include first 80 chars of content (UTF-8 lossy)     │
/// │ --show-hex  │ Include 16-byte-per-line hex dump of content        │
/// │ --entry N   │ Show only the entry at index N                      │
/// └─────────────┴─────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the tarball file.
    pub file: PathBuf,

    /// Show content (first 80 characters, UTF-8 lossy).
    #[arg(long)]
    pub show_body: bool,

    /// Show raw hex dump of content (16 bytes per line).
    #[arg(long)]
    pub show_hex: bool,

    /// Inspect only the entry at this zero-based index.
    #[arg(long)]
    pub entry: Option<usize>,
}

/// Arguments for `wpt validate`.
///
/// Exits with code 0 when the tarball has no error-level findings, and
/// with code 1 otherwise. `--strict` also fails on warnings.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the tarball file.
    pub file: PathBuf,

    /// Treat warnings as errors.
    #[arg(long)]
    pub strict: bool,
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Read a tarball from disk.
fn read_blob(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Build a decoder over `blob`, reporting misses on stderr when verbose.
fn open_decoder(blob: &[u8], verbose: bool) -> Decoder<'_> {
    let decoder = Decoder::new(blob);
    if verbose {
        decoder.with_sink(Arc::new(StderrSink::default()))
    } else {
        decoder
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List(args) => cmd_list::run(&args, cli.verbose),
        Commands::Get(args) => cmd_get::run(&args, cli.verbose),
        Commands::Inspect(args) => cmd_inspect::run(&args, cli.verbose),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
