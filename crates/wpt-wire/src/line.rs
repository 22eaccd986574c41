use std::iter::FusedIterator;

use crate::marker::{
    self, HeaderRejection, LINE_TERMINATOR, NAME_SEPARATOR, PATH_START_MARKER, RESERVED_PREFIX,
};

/// One line of a tarball blob, borrowed from the blob.
///
/// `bytes` never includes the terminator. `terminated` records whether a
/// `'\n'` followed, so the full on-wire extent is
/// `offset..offset + bytes.len() + terminated`.
///
/// ```text
///   blob:  #PATH-POINTS-START a\n1, 2, 3\n4, 5, 6
///          └──── line 0 ──────┘└─ 1 ──┘└─ 2 ──┘ (unterminated)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    /// Byte offset of the first byte of the line within the blob.
    pub offset: usize,

    /// Line bytes, terminator excluded.
    pub bytes: &'a [u8],

    /// Whether a `'\n'` follows `bytes` in the blob.
    pub terminated: bool,
}

/// Classification of a [`Line`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens a new entry named `name`.
    Header { name: &'a [u8] },

    /// Starts with '#' but is not a header. Separator/terminator only.
    Reserved,

    /// Payload of the currently open entry, if any.
    Content,
}

impl<'a> Line<'a> {
    /// Offset one past the last byte of the line, terminator included.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.bytes.len() + usize::from(self.terminated)
    }

    /// The line as it appears in the blob, terminator included.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        self.end() - self.offset
    }

    /// Classify the line.
    ///
    /// Only column 0 matters: a leading space in front of '#' makes the
    /// line ordinary content. A line matching the header pattern but lacking
    /// its terminator is reserved, not a header.
    #[must_use]
    pub fn kind(&self) -> LineKind<'a> {
        if self.bytes.first() != Some(&RESERVED_PREFIX) {
            return LineKind::Content;
        }
        match marker::header_name(self.bytes) {
            Some(name) if self.terminated => LineKind::Header { name },
            _ => LineKind::Reserved,
        }
    }

    /// For a line that starts with the marker but failed to become a header,
    /// report why. `None` for accepted headers and for lines that do not
    /// start with the marker at all.
    #[must_use]
    pub fn header_rejection(&self) -> Option<HeaderRejection> {
        let rest = self.bytes.strip_prefix(PATH_START_MARKER)?;
        match rest.first() {
            Some(&NAME_SEPARATOR) if self.terminated => None,
            Some(&NAME_SEPARATOR) => Some(HeaderRejection::Unterminated),
            _ => Some(HeaderRejection::MissingSeparator),
        }
    }
}

/// Forward iterator over the lines of a blob.
///
/// Splits at `'\n'` only. An empty blob yields nothing; a blob ending in
/// `'\n'` does not yield a trailing empty line.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    buf: &'a [u8],
    pos: usize,
}

/// Iterate the lines of `buf`.
#[must_use]
pub fn lines(buf: &[u8]) -> Lines<'_> {
    Lines { buf, pos: 0 }
}

impl Lines<'_> {
    /// Offset of the next line to be yielded (or `buf.len()` when done).
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.buf.get(self.pos..).filter(|r| !r.is_empty())?;

        let (bytes, terminated) = match rest.iter().position(|&b| b == LINE_TERMINATOR) {
            Some(i) => (&rest[..i], true),
            None => (rest, false),
        };

        let line = Line {
            offset: self.pos,
            bytes,
            terminated,
        };
        self.pos = line.end();
        Some(line)
    }
}

impl FusedIterator for Lines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(buf: &[u8]) -> Vec<Line<'_>> {
        lines(buf).collect()
    }

    #[test]
    fn empty_blob_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn single_newline_is_one_empty_line() {
        let got = collect(b"\n");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].bytes, b"");
        assert!(got[0].terminated);
        assert_eq!(got[0].end(), 1);
    }

    #[test]
    fn carriage_return_is_not_a_terminator() {
        let got = collect(b"a\r\nb\r");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].bytes, b"a\r");
        assert_eq!(got[1].bytes, b"b\r");
        assert!(!got[1].terminated);
    }

    #[test]
    fn offsets_cover_the_whole_blob() {
        let buf = b"#PATH-POINTS-START a\n1, 2, 3\n4, 5, 6";
        let got = collect(buf);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].offset, 0);
        assert_eq!(got[1].offset, 21);
        assert_eq!(got[2].offset, 29);
        assert_eq!(got[2].end(), buf.len());
        assert_eq!(got[1].raw_len(), 8);

        // Lines are contiguous: each starts where the previous ended.
        for pair in got.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset);
        }
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let got = collect(b"a\nb\n");
        assert_eq!(got.len(), 2);
        assert!(got[1].terminated);
    }

    #[test]
    fn iterator_is_fused() {
        let mut it = lines(b"x");
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert_eq!(it.position(), 1);
    }

    #[test]
    fn classify_header() {
        let got = collect(b"#PATH-POINTS-START path 1\n");
        assert_eq!(got[0].kind(), LineKind::Header { name: b"path 1" });
        assert_eq!(got[0].header_rejection(), None);
    }

    #[test]
    fn classify_unterminated_header_as_reserved() {
        let got = collect(b"#PATH-POINTS-START Path 1");
        assert_eq!(got[0].kind(), LineKind::Reserved);
        assert_eq!(
            got[0].header_rejection(),
            Some(HeaderRejection::Unterminated)
        );
    }

    #[test]
    fn classify_missing_separator_as_reserved() {
        let cases: [&[u8]; 3] = [
            b"#PATH-POINTS-START\n",
            b"#PATH-POINTS-START",
            b"#PATH-POINTS-STARTed\n",
        ];
        for buf in cases {
            let got = collect(buf);
            assert_eq!(got[0].kind(), LineKind::Reserved);
            assert_eq!(
                got[0].header_rejection(),
                Some(HeaderRejection::MissingSeparator)
            );
        }
    }

    #[test]
    fn classify_other_hash_lines_as_reserved() {
        let cases: [&[u8]; 4] = [
            b"#\n",
            b"#END",
            b"##PATH-POINTS-START \n",
            b"#PATH.JERRYIO-DATA {}\n",
        ];
        for buf in cases {
            let got = collect(buf);
            assert_eq!(got[0].kind(), LineKind::Reserved, "{buf:?}");
            assert_eq!(got[0].header_rejection(), None);
        }
    }

    #[test]
    fn classify_indented_hash_as_content() {
        let got = collect(b" #PATH-POINTS-START x\n");
        assert_eq!(got[0].kind(), LineKind::Content);
        assert_eq!(got[0].header_rejection(), None);
    }

    #[test]
    fn classify_empty_line_as_content() {
        let got = collect(b"\n");
        assert_eq!(got[0].kind(), LineKind::Content);
    }
}
