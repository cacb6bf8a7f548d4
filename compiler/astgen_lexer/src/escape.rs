//! Escape sequence processing for string literals.
//!
//! Recognized escapes: `\n`, `\r`, `\t`. Any other escaped character stands
//! for itself, so `\"` is a quote and `\\` a backslash.

#[inline]
pub(crate) fn resolve_escape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_escape_known() {
        assert_eq!(resolve_escape('n'), '\n');
        assert_eq!(resolve_escape('r'), '\r');
        assert_eq!(resolve_escape('t'), '\t');
    }

    #[test]
    fn test_resolve_escape_literal() {
        assert_eq!(resolve_escape('"'), '"');
        assert_eq!(resolve_escape('\\'), '\\');
        assert_eq!(resolve_escape('q'), 'q');
    }
}
