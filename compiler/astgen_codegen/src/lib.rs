//! Java source generation for astgen rules.
//!
//! ```text
//! Instruction<Rule> + Environment
//!        ↓
//!     generate          (one Klass tree per rule)
//!        ↓
//!   CompilationUnit     (license, package, imports, declaration)
//!        ↓
//!      String           (file contents)
//! ```
//!
//! Output depends only on the rule and the environment; imports are kept
//! sorted, so generating twice gives byte-identical text.

mod error;
mod generator;
pub mod java;
mod naming;
mod source;
pub mod template;
mod unit;

pub use error::GenerationError;
pub use generator::{generate, generate_language};
pub use source::SourceBuilder;
pub use unit::CompilationUnit;
