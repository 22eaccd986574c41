use std::io::Write as _;
use std::sync::{Mutex, PoisonError};

/// Receiver for non-fatal decoder diagnostics.
///
/// The decoder reports lookup misses here (`Path not found: <name>`).
/// Attaching a sink changes observability only; lookups return the same
/// results with or without one.
///
/// Implementations must not panic and should not block for long: `warn`
/// runs inline on the lookup path.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a `Decoder` holding one can be
/// shared across threads for concurrent lookups.
pub trait DiagnosticSink: Send + Sync {
    /// Record a warning-level message.
    fn warn(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn warn(&self, message: &str) {
        self(message);
    }
}

/// Writes each message to stderr as `[<tag>] ERROR: <message>`.
///
/// Write failures are swallowed.
#[derive(Clone, Copy, Debug)]
pub struct StderrSink {
    tag: &'static str,
}

impl StderrSink {
    /// Create a sink that prefixes messages with `[tag]`.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new("wpt")
    }
}

impl DiagnosticSink for StderrSink {
    fn warn(&self, message: &str) {
        let _ = writeln!(std::io::stderr().lock(), "[{}] ERROR: {message}", self.tag);
    }
}

/// In-memory sink that keeps every message, oldest first.
///
/// Suitable for tests and for hosts that surface diagnostics on their own
/// schedule. A poisoned lock is recovered rather than propagated, so a
/// panicking reader elsewhere never turns a lookup into a panic.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use wpt_decoder::{Decoder, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let decoder = Decoder::new(b"#PATH-POINTS-START a\n1, 2, 3\n").with_sink(sink.clone());
///
/// assert!(decoder.get("b").is_none());
/// assert_eq!(sink.messages(), vec!["Path not found: b".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Return `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every recorded message.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_owned());
    }
}
