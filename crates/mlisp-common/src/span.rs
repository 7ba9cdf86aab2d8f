//! Byte ranges into a source string.
//! 源码中的字节区间。

use std::fmt;
use std::ops::Range;

/// A byte offset into a source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl BytePos {
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(u32::try_from(pos).unwrap_or(u32::MAX))
    }
}

/// The half-open byte range `start..end` covered by a token or a form.
/// 词法单元或表单覆盖的半开字节区间。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: BytePos,
    pub end: BytePos,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: BytePos(0),
        end: BytePos(0),
    };

    pub fn new(start: BytePos, end: BytePos) -> Self {
        Span { start, end }
    }

    /// The empty span sitting at `pos`.
    pub fn point(pos: BytePos) -> Self {
        Span::new(pos, pos)
    }

    /// The smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn len(&self) -> usize {
        self.range().len()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start.to_usize()..self.end.to_usize()
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start.into(), range.end.into())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_covers_both() {
        let a = Span::from(2..5);
        let b = Span::from(7..9);
        assert_eq!(a.to(b).range(), 2..9);
        assert_eq!(b.to(a).len(), 7);
    }

    #[test]
    fn point_is_empty() {
        let p = Span::point(BytePos(4));
        assert!(p.is_empty());
        assert_eq!(p.range(), 4..4);
        assert!(Span::DUMMY.is_empty());
    }
}
