#![warn(clippy::pedantic)]

pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod validate;

pub use decoder::{Decoder, PathEntry};
pub use diagnostics::{DiagnosticSink, MemorySink, StderrSink};
pub use error::DecodeError;
pub use validate::{Finding, Report, Severity, validate};
