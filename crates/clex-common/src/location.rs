//! Line and column reporting.

use serde::Serialize;
use std::fmt;

/// A 1-based line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const START: Location = Location { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Compute the location of byte offset `pos` by counting newlines before it.
    ///
    /// Offsets past the end of `source` are clamped to its length.
    pub fn of_offset(source: &str, pos: usize) -> Self {
        let prefix = &source.as_bytes()[..pos.min(source.len())];
        let line = prefix.iter().filter(|&&b| b == b'\n').count() as u32 + 1;
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |nl| nl + 1);
        Self {
            line,
            column: (prefix.len() - line_start) as u32 + 1,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
