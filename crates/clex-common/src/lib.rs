//! Common data structures for clex.
//!
//! - `Span`: a byte range inside a source buffer
//! - `Location`: a 1-based line/column pair for reporting

mod location;
mod span;

pub use location::Location;
pub use span::{BytePos, Span};
