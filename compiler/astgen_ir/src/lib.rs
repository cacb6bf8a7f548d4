//! Intermediate representation for the astgen DSL compiler.
//!
//! Holds everything the later phases share:
//!
//! ```text
//! Span, Token, TokenList        (scanner output)
//! Hole, Descriptor, Child       (right-hand side of a rule)
//! Node, Literal, Rule           (one parsed DSL line)
//! Instruction<T>, Program       (rules tagged with their language scope)
//! ```
//!
//! Every value here except [`Program`] is immutable once built.

mod descriptor;
mod hole;
mod instruction;
mod program;
mod rule;
mod span;
mod token;

pub use descriptor::{Child, Data, Descriptor, DescriptorAttribute};
pub use hole::Hole;
pub use instruction::{Instruction, COMMON_LANGUAGE};
pub use program::Program;
pub use rule::{Literal, Node, Rule};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
