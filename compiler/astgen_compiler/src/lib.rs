//! Portable astgen compiler driver.
//!
//! Runs the whole pipeline on a string and returns the generated files in
//! memory; reading rules and writing files is left to the caller.
//!
//! ```text
//! astgen_lexer, astgen_parse, astgen_analyzer, astgen_codegen
//!                          ↓
//!                  astgen_compiler  ← this crate
//!                          ↓
//!                       astgenc
//! ```

mod error;
mod output;
mod pipeline;

pub use error::CompileError;
pub use output::{CompileOutput, GeneratedFile};
pub use pipeline::{compile, CompileConfig};
