// The marker is matched as raw bytes, never as text. A blob authored on
// Windows still carries `\r` before each `\n`, and nothing here strips it.

/// Path-start marker: ASCII "#PATH-POINTS-START".
///
/// Must sit at column 0 of a line and be followed by exactly one
/// [`NAME_SEPARATOR`] before the path name.
pub const PATH_START_MARKER: &[u8] = b"#PATH-POINTS-START";

/// The single space between the marker and the path name.
pub const NAME_SEPARATOR: u8 = b' ';

/// First byte of every header and reserved line.
pub const RESERVED_PREFIX: u8 = b'#';

/// Line terminator. `\r` is an ordinary byte.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Header line layout.
///
/// ```text
/// ┌────────┬──────────┬──────────────────────────────────────┐
/// │ Offset │ Size     │ Description                          │
/// ├────────┼──────────┼──────────────────────────────────────┤
/// │ 0x00   │ 18 bytes │ Marker: "#PATH-POINTS-START"         │
/// │ 0x12   │ 1 byte   │ Separator: ' ' (0x20)                │
/// │ 0x13   │ n bytes  │ Name, raw bytes up to the terminator │
/// │ 0x13+n │ 1 byte   │ Terminator: '\n' (mandatory)         │
/// └────────┴──────────┴──────────────────────────────────────┘
/// ```
///
/// Returns the name if `line` (terminator already stripped) carries the
/// marker and separator. Termination is checked by the caller, see
/// [`Line::kind`](crate::Line::kind).
#[must_use]
pub fn header_name(line: &[u8]) -> Option<&[u8]> {
    let rest = line.strip_prefix(PATH_START_MARKER)?;
    match rest.split_first() {
        Some((&NAME_SEPARATOR, name)) => Some(name),
        _ => None,
    }
}

/// Why a line that begins with [`PATH_START_MARKER`] was not accepted as a
/// header. Such lines degrade to reserved lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeaderRejection {
    /// The marker is followed by end-of-line or by a byte other than ' '.
    #[error("marker is not followed by a single space")]
    MissingSeparator,

    /// The header is the final line of the blob and has no '\n'.
    #[error("header line is not newline-terminated")]
    Unterminated,
}
