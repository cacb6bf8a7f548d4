use std::fmt;

/// Stable identifier of a diagnostic.
///
/// The leading digit names the phase that reports it: `E0` scanner, `E1`
/// grammar, `E2` hierarchy analysis, `E3` Java generation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// String literal runs to the end of the line
    E0001,
    /// Unknown symbol
    E0002,
    /// `#` not followed by a number
    E0003,
    /// Hole numbered zero
    E0004,
    /// Unterminated native code block
    E0005,
    /// Number literal out of range
    E0006,

    // Grammar Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected descriptor
    E1002,
    /// More than one descriptor alongside a list descriptor
    E1003,
    /// Node name must start with a capital letter
    E1004,
    /// Tag, parameters or data in a plain children list
    E1005,
    /// Empty child has siblings
    E1006,
    /// Missing `<-`
    E1007,
    /// Literal rule is missing a part
    E1008,
    /// Literal rule has too many parts
    E1009,
    /// Duplicate alternative in an abstract rule
    E1010,
    /// Left side of a rule is not a type name
    E1011,
    /// Malformed language switch
    E1012,

    // Semantic Errors (E2xxx)
    /// Unresolved type reference
    E2001,
    /// Cyclic hierarchy
    E2002,
    /// Type declared twice in one scope
    E2003,

    // Generation Errors (E3xxx)
    /// Child type not declared
    E3001,
    /// Hole number beyond available values
    E3002,
    /// Type name clashes with a name the generated code relies on
    E3003,
}

impl ErrorCode {
    /// Reported by the scanner phase (`E0...`).
    pub fn is_scanner_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Reported by the grammar phase (`E1...`).
    pub fn is_grammar_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Reported by the semantic phase (`E2...`).
    pub fn is_semantic_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Reported by the generation phase (`E3...`).
    pub fn is_generation_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    /// Code as printed in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Scanner
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            // Grammar
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            // Semantic
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            // Generation
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
