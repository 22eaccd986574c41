#![warn(clippy::pedantic)]

pub mod line;
pub mod marker;

pub use line::{Line, LineKind, Lines, lines};
pub use marker::HeaderRejection;
