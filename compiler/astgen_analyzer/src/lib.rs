//! Hierarchy analysis for one language scope, and the environment the code
//! generator reads from.
//!
//! An [`Analyzer`] is built for a single language. It sees the rules of that
//! language plus the rules of `common`, resolves abstract rules into base
//! types, and computes every type's ancestor chain up front.

mod analyzer;
mod env;
mod error;
mod license;

pub use analyzer::{Analyzer, Origin};
pub use env::{BaseEnvironment, Environment, PreparedEnvironment};
pub use error::SemanticError;
pub use license::License;
