/// Errors surfaced by the strict decoder entry points.
///
/// The lenient API (`Decoder::new`, `get`, indexing) never returns these:
/// malformed input degrades to fewer entries and a miss degrades to the
/// empty sentinel. Callers that would rather propagate with `?` use
/// `Decoder::try_new` and `Decoder::try_get`.
///
/// ```text
///   DecodeError
///   ├── PathNotFound   ← try_get on a name no entry carries
///   └── NoEntries      ← try_new on a blob without a valid header
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// No entry carries this name. The name is rendered lossily when it is
    /// not valid UTF-8.
    #[error("path not found: {name}")]
    PathNotFound { name: String },

    /// The blob holds no valid `#PATH-POINTS-START <name>\n` header.
    #[error("no path header found in {len}-byte blob")]
    NoEntries { len: usize },
}
