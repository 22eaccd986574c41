use std::fmt;

use wpt_wire::{HeaderRejection, LineKind, lines};

use crate::decoder::Decoder;

/// How bad a [`Finding`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The blob decodes, but probably not the way its author intended.
    Warning,
    /// Part of the blob, or all of it, yields no entry.
    Error,
}

/// One problem found by [`validate`].
///
/// ```text
/// ┌──────────────────┬──────────┬─────────────────────────────────────────┐
/// │ Variant          │ Severity │ Meaning                                 │
/// ├──────────────────┼──────────┼─────────────────────────────────────────┤
/// │ RejectedHeader   │ Error    │ marker present but header not accepted  │
/// │ NoEntries        │ Error    │ blob decodes to zero entries            │
/// │ DuplicateName    │ Warning  │ later entry unreachable by name         │
/// │ CarriageReturn   │ Warning  │ name ends in '\r' (CRLF-authored file)  │
/// │ IgnoredContent   │ Warning  │ content bytes that belong to no entry   │
/// └──────────────────┴──────────┴─────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    RejectedHeader {
        /// 1-based line number.
        line: usize,
        offset: usize,
        reason: HeaderRejection,
    },
    NoEntries,
    DuplicateName {
        name: String,
        first: usize,
        duplicate: usize,
    },
    CarriageReturn {
        index: usize,
        name: String,
    },
    IgnoredContent {
        offset: usize,
        len: usize,
    },
}

impl Finding {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::RejectedHeader { .. } | Self::NoEntries => Severity::Error,
            Self::DuplicateName { .. } | Self::CarriageReturn { .. } | Self::IgnoredContent { .. } => {
                Severity::Warning
            }
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RejectedHeader {
                line,
                offset,
                reason,
            } => write!(f, "line {line} (offset {offset}): rejected path header: {reason}"),
            Self::NoEntries => f.write_str("no path header found"),
            Self::DuplicateName {
                name,
                first,
                duplicate,
            } => write!(
                f,
                "entry {duplicate}: duplicate path name {name:?} (first defined by entry {first})"
            ),
            Self::CarriageReturn { index, name } => {
                write!(f, "entry {index}: path name {name:?} ends with '\\r'")
            }
            Self::IgnoredContent { offset, len } => {
                write!(f, "offset {offset}: {len} byte(s) belong to no path")
            }
        }
    }
}

/// Result of [`validate`]: entry count plus every finding, in blob order
/// for line-level findings followed by entry-level ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    /// `true` when no finding is an [`Severity::Error`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
    }
}

/// Lint a blob.
///
/// Decoding itself never fails; this pass explains what the lenient
/// decoder silently skipped, so a packing mistake shows up at build time
/// instead of as a missing path on the field.
#[must_use]
pub fn validate(blob: &[u8]) -> Report {
    let mut findings = Vec::new();

    // Content is accepted only while an entry is open and no reserved line
    // has closed it. Runs of unaccepted content are coalesced.
    let mut accepting = false;
    let mut ignored: Option<(usize, usize)> = None;

    for (idx, line) in lines(blob).enumerate() {
        let kind = line.kind();
        if kind == LineKind::Content && !accepting {
            let start = ignored.map_or(line.offset, |(start, _)| start);
            ignored = Some((start, line.end()));
            continue;
        }

        if let Some((offset, end)) = ignored.take() {
            findings.push(Finding::IgnoredContent {
                offset,
                len: end - offset,
            });
        }

        match kind {
            LineKind::Header { .. } => accepting = true,
            LineKind::Reserved => {
                accepting = false;
                if let Some(reason) = line.header_rejection() {
                    findings.push(Finding::RejectedHeader {
                        line: idx + 1,
                        offset: line.offset,
                        reason,
                    });
                }
            }
            LineKind::Content => {}
        }
    }

    if let Some((offset, end)) = ignored {
        findings.push(Finding::IgnoredContent {
            offset,
            len: end - offset,
        });
    }

    let decoder = Decoder::new(blob);
    if decoder.is_empty() {
        findings.push(Finding::NoEntries);
    }

    for (index, entry) in decoder.iter().enumerate() {
        if let Some(first) = decoder.iter().position(|e| e.name() == entry.name())
            && first != index
        {
            findings.push(Finding::DuplicateName {
                name: entry.name_lossy().into_owned(),
                first,
                duplicate: index,
            });
        }
        if entry.name().last() == Some(&b'\r') {
            findings.push(Finding::CarriageReturn {
                index,
                name: entry.name_lossy().into_owned(),
            });
        }
    }

    Report {
        entries: decoder.len(),
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_blob_is_valid() {
        let report = validate(b"#PATH-POINTS-START a\n1, 2\n#PATH-POINTS-START b\n3, 4\n#END\n");
        assert_eq!(report.entries, 2);
        assert!(report.findings.is_empty());
        assert!(report.is_valid());
    }

    #[test]
    fn empty_blob_has_no_entries() {
        let report = validate(b"");
        assert_eq!(report.findings, vec![Finding::NoEntries]);
        assert!(!report.is_valid());
    }

    #[test]
    fn missing_separator_is_reported_with_line_number() {
        let report = validate(b"#PATH-POINTS-START a\n1\n#PATH-POINTS-START\n2\n");
        assert_eq!(
            report.findings,
            vec![
                Finding::RejectedHeader {
                    line: 3,
                    offset: 23,
                    reason: HeaderRejection::MissingSeparator,
                },
                Finding::IgnoredContent { offset: 42, len: 2 },
            ]
        );
        assert_eq!(report.entries, 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn unterminated_header_is_reported() {
        let report = validate(b"#PATH-POINTS-START Path 1");
        assert_eq!(
            report.findings,
            vec![
                Finding::RejectedHeader {
                    line: 1,
                    offset: 0,
                    reason: HeaderRejection::Unterminated,
                },
                Finding::NoEntries,
            ]
        );
    }

    #[test]
    fn preamble_and_orphans_are_coalesced() {
        let report = validate(b"x\ny\n#PATH-POINTS-START a\n1\n#\nz\n\n");
        assert_eq!(
            report.findings,
            vec![
                Finding::IgnoredContent { offset: 0, len: 4 },
                Finding::IgnoredContent { offset: 29, len: 3 },
            ]
        );
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 2);
    }

    #[test]
    fn duplicates_are_warnings() {
        let report = validate(b"#PATH-POINTS-START a\n1\n#PATH-POINTS-START a\n2\n");
        assert_eq!(
            report.findings,
            vec![Finding::DuplicateName {
                name: "a".into(),
                first: 0,
                duplicate: 1,
            }]
        );
        assert!(report.is_valid());
    }

    #[test]
    fn crlf_names_are_flagged() {
        let report = validate(b"#PATH-POINTS-START a\r\n1, 2\r\n");
        assert_eq!(
            report.findings,
            vec![Finding::CarriageReturn {
                index: 0,
                name: "a\r".into(),
            }]
        );
    }

    #[test]
    fn display_strings() {
        let finding = Finding::RejectedHeader {
            line: 2,
            offset: 10,
            reason: HeaderRejection::MissingSeparator,
        };
        assert_eq!(
            finding.to_string(),
            "line 2 (offset 10): rejected path header: marker is not followed by a single space"
        );
        assert_eq!(
            Finding::IgnoredContent { offset: 0, len: 4 }.to_string(),
            "offset 0: 4 byte(s) belong to no path"
        );
        assert_eq!(Finding::NoEntries.severity(), Severity::Error);
        assert!(Severity::Error > Severity::Warning);
    }
}
