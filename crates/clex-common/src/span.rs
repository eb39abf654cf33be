//! Byte positions and spans inside a source buffer.
//! 源码缓冲区中的字节位置和范围。

use serde::Serialize;
use std::fmt;

/// A byte offset into a source buffer.
/// 源码缓冲区中的字节偏移。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BytePos(pub u32);

impl BytePos {
    /// The largest offset a `BytePos` can hold. Buffers longer than this
    /// cannot be addressed.
    pub const MAX_OFFSET: usize = u32::MAX as usize;

    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        debug_assert!(pos <= BytePos::MAX_OFFSET, "offset {pos} does not fit in a BytePos");
        BytePos(pos as u32)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.to_usize()
    }
}

/// A half-open byte range `start..end` inside a source buffer.
/// 源码缓冲区中的半开字节区间 `start..end`。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: BytePos,
    /// Exclusive. / 不包含。
    pub end: BytePos,
}

impl Span {
    pub fn new(start: BytePos, end: BytePos) -> Self {
        debug_assert!(start <= end, "span start after end");
        Span { start, end }
    }

    pub fn from_usize(start: usize, end: usize) -> Self {
        Span::new(BytePos::from(start), BytePos::from(end))
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.to_usize()..self.end.to_usize()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
