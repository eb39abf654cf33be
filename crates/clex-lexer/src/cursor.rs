//! Scan position over a source buffer.

use clex_common::{Location, Span};

/// A byte cursor over an immutable buffer.
///
/// Tracks the current line and the offset where that line starts, so tokens
/// get their line and column without rescanning the buffer. The position only
/// moves forward, except through [`Cursor::reset`].
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
    line_start: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, (self.pos - self.line_start) as u32 + 1)
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The unscanned remainder of the buffer.
    pub fn rest(&self) -> &'src [u8] {
        &self.source.as_bytes()[self.pos..]
    }

    /// The byte `n` positions ahead of the cursor.
    pub fn peek(&self, n: usize) -> Option<u8> {
        self.rest().get(n).copied()
    }

    pub fn first(&self) -> Option<u8> {
        self.peek(0)
    }

    pub fn second(&self) -> Option<u8> {
        self.peek(1)
    }

    /// The full character under the cursor.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Slice `len` bytes starting at the cursor, with its span.
    pub fn slice(&self, len: usize) -> (&'src str, Span) {
        let end = (self.pos + len).min(self.source.len());
        (&self.source[self.pos..end], Span::from_usize(self.pos, end))
    }

    /// Move forward `len` bytes, keeping line tracking up to date.
    pub fn advance(&mut self, len: usize) {
        let end = (self.pos + len).min(self.source.len());
        let skipped = &self.source.as_bytes()[self.pos..end];
        for (i, &b) in skipped.iter().enumerate() {
            if b == b'\n' {
                self.line += 1;
                self.line_start = self.pos + i + 1;
            }
        }
        self.pos = end;
    }

    /// Count the bytes from the cursor that satisfy `pred`, starting `from` bytes ahead.
    pub fn count_while(&self, from: usize, mut pred: impl FnMut(u8) -> bool) -> usize {
        self.rest()
            .iter()
            .skip(from)
            .take_while(|&&b| pred(b))
            .count()
    }

    /// Rewind to the start of the buffer.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
        self.line_start = 0;
    }
}
