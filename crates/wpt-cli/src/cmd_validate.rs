/// Implementation of `wpt validate`.
///
/// Lints a tarball and prints one line per check or finding. The command
/// exits with code 0 when no error-level finding is present, and with code
/// 1 otherwise. `--strict` also fails on warnings.
///
/// # Clean output
///
/// ```text
/// ✓ Paths: 2 paths decoded
/// ✓ Headers: every marker line forms a valid header
/// ✓ Names: all path names are unique
/// ```
///
/// # Output with findings
///
/// ```text
/// ✗ line 3 (offset 23): rejected path header: marker is not followed by a single space
/// ! offset 42: 2 byte(s) belong to no path
/// ```
use anyhow::{Result, anyhow};
use wpt_decoder::{Finding, Report, Severity, validate};

use crate::{ValidateArgs, read_blob};

/// Run the `wpt validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, if the report contains an
/// error-level finding, or if it contains a warning and `--strict` is set.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let blob = read_blob(&args.file)?;
    let report = validate(&blob);

    for line in render(&report) {
        println!("{line}");
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if errors > 0 || (args.strict && warnings > 0) {
        return Err(anyhow!(
            "validation failed: {errors} error(s), {warnings} warning(s)"
        ));
    }
    Ok(())
}

/// Render a report as `✓` check lines when clean, or one `✗`/`!` line per
/// finding otherwise.
fn render(report: &Report) -> Vec<String> {
    if report.findings.is_empty() {
        return vec![
            format!(
                "✓ Paths: {} path{} decoded",
                report.entries,
                if report.entries == 1 { "" } else { "s" }
            ),
            "✓ Headers: every marker line forms a valid header".to_string(),
            "✓ Names: all path names are unique".to_string(),
        ];
    }

    report
        .findings
        .iter()
        .map(|finding| format!("{} {finding}", glyph(finding)))
        .collect()
}

fn glyph(finding: &Finding) -> &'static str {
    match finding.severity() {
        Severity::Error => "✗",
        Severity::Warning => "!",
    }
}
