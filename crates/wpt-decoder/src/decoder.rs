use std::borrow::Cow;
use std::fmt;
use std::ops::{Index, Range};
use std::sync::Arc;

use wpt_wire::{LineKind, lines};

use crate::diagnostics::DiagnosticSink;
use crate::error::DecodeError;

/// One decoded path: a name and its content, both borrowed from the blob.
///
/// ```text
///   header_offset
///   │                   content_offset
///   ▼                   ▼
///   #PATH-POINTS-START a\n1, 2, 3\n4, 5, 6\n#PATH.JERRYIO-DATA ...
///                      ▲  └──── content ────┘
///                      name
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathEntry<'a> {
    name: &'a [u8],
    content: &'a [u8],
    header_offset: usize,
    content_offset: usize,
}

impl<'a> PathEntry<'a> {
    /// Raw name bytes, exactly as written after `#PATH-POINTS-START `.
    #[must_use]
    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    /// Name as text, replacing invalid UTF-8 with U+FFFD.
    #[must_use]
    pub fn name_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.name)
    }

    /// Content bytes, line terminators included.
    #[must_use]
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    /// Offset of the header line within the blob.
    #[must_use]
    pub fn header_offset(&self) -> usize {
        self.header_offset
    }

    /// Offset of the first content byte within the blob.
    #[must_use]
    pub fn content_offset(&self) -> usize {
        self.content_offset
    }

    /// Blob range covered by the content.
    #[must_use]
    pub fn content_range(&self) -> Range<usize> {
        self.content_offset..self.content_offset + self.content.len()
    }
}

/// Decoder over a borrowed tarball blob.
///
/// The blob is scanned once, eagerly, in the constructor. Every name and
/// content handed out afterwards is a sub-slice of that same blob: nothing
/// is copied and the decoder cannot outlive the bytes it borrows.
///
/// Scanning walks the blob line by line (split at `'\n'` only):
///
///   1. **Header** (`#PATH-POINTS-START <name>\n`): closes the open entry
///      and opens a new one whose content starts after the `'\n'`.
///   2. **Reserved** (any other line starting with `'#'`): closes the open
///      entry's content. Following content lines belong to nothing until
///      the next header.
///   3. **Content** (anything else): extends the open entry's content over
///      the line, terminator included.
///
/// Construction never fails. A blob without a valid header yields an empty
/// decoder; use [`try_new`](Self::try_new) to treat that as an error.
///
/// Lookups are linear in entry order and the first matching name wins.
/// Duplicates are kept and reachable through [`entries`](Self::entries).
///
/// # Example
///
/// ```rust
/// use wpt_decoder::Decoder;
///
/// let blob: &[u8] = b"#PATH-POINTS-START Path 1\n0, 0, 80\n24, 0, 80\n#PATH.JERRYIO-DATA {}\n";
/// let decoder = Decoder::new(blob);
///
/// assert!(decoder.has("Path 1"));
/// assert_eq!(decoder.get("Path 1"), Some(&b"0, 0, 80\n24, 0, 80\n"[..]));
/// assert_eq!(&decoder["missing"], b"");
/// ```
pub struct Decoder<'a> {
    blob: &'a [u8],
    entries: Vec<PathEntry<'a>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

/// An entry whose header has been seen but whose content is still growing.
struct OpenEntry<'a> {
    name: &'a [u8],
    header_offset: usize,
    content_start: usize,
    content_end: usize,
    closed: bool,
}

impl<'a> OpenEntry<'a> {
    fn finish(self, blob: &'a [u8]) -> PathEntry<'a> {
        PathEntry {
            name: self.name,
            content: &blob[self.content_start..self.content_end],
            header_offset: self.header_offset,
            content_offset: self.content_start,
        }
    }
}

impl<'a> Decoder<'a> {
    /// Scan `blob` and build the entry list.
    #[must_use]
    pub fn new(blob: &'a [u8]) -> Self {
        Self {
            blob,
            entries: Self::scan(blob),
            sink: None,
        }
    }

    /// Like [`new`](Self::new), but rejects a blob that holds no entry.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NoEntries`] if no valid header line exists.
    pub fn try_new(blob: &'a [u8]) -> Result<Self, DecodeError> {
        let decoder = Self::new(blob);
        if decoder.is_empty() {
            return Err(DecodeError::NoEntries { len: blob.len() });
        }
        Ok(decoder)
    }

    /// Attach a sink that receives a message for every lookup miss.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    fn scan(blob: &'a [u8]) -> Vec<PathEntry<'a>> {
        let mut entries = Vec::new();
        let mut open: Option<OpenEntry<'a>> = None;

        for line in lines(blob) {
            match line.kind() {
                LineKind::Header { name } => {
                    if let Some(prev) = open.take() {
                        entries.push(prev.finish(blob));
                    }
                    open = Some(OpenEntry {
                        name,
                        header_offset: line.offset,
                        content_start: line.end(),
                        content_end: line.end(),
                        closed: false,
                    });
                }
                LineKind::Reserved => {
                    if let Some(entry) = open.as_mut() {
                        entry.closed = true;
                    }
                }
                LineKind::Content => {
                    if let Some(entry) = open.as_mut()
                        && !entry.closed
                    {
                        entry.content_end = line.end();
                    }
                }
            }
        }

        entries.extend(open.map(|entry| entry.finish(blob)));
        entries
    }

    /// The blob this decoder borrows.
    #[must_use]
    pub fn blob(&self) -> &'a [u8] {
        self.blob
    }

    /// All entries, in blob order.
    #[must_use]
    pub fn entries(&self) -> &[PathEntry<'a>] {
        &self.entries
    }

    /// Iterate entries in blob order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathEntry<'a>> {
        self.entries.iter()
    }

    /// Iterate entry names in blob order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.entries.iter().map(PathEntry::name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the blob held no valid header.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose name equals `name` byte for byte.
    pub fn find(&self, name: impl AsRef<[u8]>) -> Option<&PathEntry<'a>> {
        let name = name.as_ref();
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Whether some entry is named exactly `name`. No trimming, no case
    /// folding, no line-terminator normalization.
    pub fn has(&self, name: impl AsRef<[u8]>) -> bool {
        self.find(name).is_some()
    }

    /// Content of the first entry named `name`.
    ///
    /// Returns `None` on a miss and reports `Path not found: <name>` to the
    /// attached sink. Repeated lookups of a present name return the same
    /// slice (same pointer, same length).
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&'a [u8]> {
        let name = name.as_ref();
        match self.find(name) {
            Some(entry) => Some(entry.content),
            None => {
                self.report_miss(name);
                None
            }
        }
    }

    /// Content of the first entry named `name`, as a `Result`.
    ///
    /// The sink is not notified; the error carries the name instead.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::PathNotFound`] if no entry has that name.
    pub fn try_get(&self, name: impl AsRef<[u8]>) -> Result<&'a [u8], DecodeError> {
        let name = name.as_ref();
        self.find(name)
            .map(PathEntry::content)
            .ok_or_else(|| DecodeError::PathNotFound {
                name: String::from_utf8_lossy(name).into_owned(),
            })
    }

    fn report_miss(&self, name: &[u8]) {
        if let Some(sink) = &self.sink {
            sink.warn(&format!(
                "Path not found: {}",
                String::from_utf8_lossy(name)
            ));
        }
    }
}

/// `decoder["name"]` is [`get`](Decoder::get) with the empty slice standing
/// in for a miss.
impl Index<&str> for Decoder<'_> {
    type Output = [u8];

    fn index(&self, name: &str) -> &Self::Output {
        self.get(name).unwrap_or(&[])
    }
}

impl<'d, 'a> IntoIterator for &'d Decoder<'a> {
    type Item = &'d PathEntry<'a>;
    type IntoIter = std::slice::Iter<'d, PathEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("blob_len", &self.blob.len())
            .field("entries", &self.entries)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
