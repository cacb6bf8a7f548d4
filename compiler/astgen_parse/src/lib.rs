//! Grammar parser for the astgen rule DSL.
//!
//! Input is line oriented. Each line is one of:
//!
//! ```text
//! // comment                         ignored, as are blank lines
//! java:                              switch the active language scope
//! Addition <- Expression, Expression node rule
//! Expression <- Addition | Subtraction
//!                                    abstract node rule
//! IntegerLiteral <- $int$, $String.valueOf(#)$, $Integer.parseInt(#)$, $NumberFormatException$
//!                                    literal rule
//! ```
//!
//! Parsing is a single left-to-right pass with one token of lookahead. The
//! first error aborts the whole program.

mod cursor;
mod error;
mod grammar;
mod instruction;

pub use error::{ParseError, ParseErrorKind};
pub use grammar::{parse_descriptor_list, parse_literal_rule, parse_node_rule};
pub use instruction::{parse_program, InstructionParser};
