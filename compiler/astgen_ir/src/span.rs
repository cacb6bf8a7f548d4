//! Byte ranges into DSL lines.
//!
//! A DSL program is processed line by line, so a span is a byte range inside
//! a single line. The line number travels separately with parse errors.

use std::fmt;

/// Byte range `[start, end)` inside one DSL line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for tokens synthesized outside any line.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Span of a logos token range.
    ///
    /// Offsets beyond `u32::MAX` saturate; a single DSL line never gets there.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        }
    }

    /// Zero-width span at `offset`, used for end-of-line positions.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span containing both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Shift both ends by `offset` bytes.
    ///
    /// Used when the right-hand side of a rule is scanned on its own and its
    /// spans must be reported relative to the whole line.
    #[inline]
    #[must_use]
    pub fn shifted(self, offset: u32) -> Span {
        Span {
            start: self.start.saturating_add(offset),
            end: self.end.saturating_add(offset),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_points() {
        let range = Span::from_range(4..9);
        assert_eq!(range.len(), 5);
        assert!(!range.is_empty());
        assert!(Span::point(3).is_empty());
    }

    #[test]
    fn merge_covers_both() {
        let merged = Span::new(10, 20).merge(Span::new(15, 30));
        assert_eq!(merged, Span::new(10, 30));
    }

    #[test]
    fn shift_moves_both_ends() {
        assert_eq!(Span::new(2, 5).shifted(10), Span::new(12, 15));
    }
}
