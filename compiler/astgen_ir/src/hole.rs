//! Holes: positional placeholders `#1`, `#2`, ... inside templates.

use std::fmt;
use std::num::NonZeroU32;

/// Placeholder `#n` referring to the n-th value substituted at emission time.
///
/// Holes are numbered from one, so a constructed `Hole` is always valid.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Hole(NonZeroU32);

impl Hole {
    /// Create a hole; `None` for `#0`.
    #[inline]
    pub fn new(number: u32) -> Option<Hole> {
        NonZeroU32::new(number).map(Hole)
    }

    /// The one-based hole number.
    #[inline]
    pub fn number(self) -> u32 {
        self.0.get()
    }

    /// Zero-based index into the list of substituted values.
    #[inline]
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_hole() {
        assert!(Hole::new(0).is_none());
    }

    #[test]
    fn hole_renders_with_marker() {
        let hole = Hole::new(3).unwrap();
        assert_eq!(hole.to_string(), "#3");
        assert_eq!(hole.index(), 2);
    }
}
