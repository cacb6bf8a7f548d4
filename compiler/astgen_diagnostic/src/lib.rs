//! Diagnostics for the astgen DSL compiler.
//!
//! Every phase reports failures through its own error enum. Each of those
//! converts into a [`Diagnostic`] carrying:
//! - an [`ErrorCode`] for searchability
//! - the [`Component`] that raised it
//! - a message
//! - the DSL line and the span inside that line, when known
//!
//! There are no warnings. Any diagnostic aborts the run.

mod diagnostic;
mod error_code;

pub use diagnostic::{Component, Diagnostic};
pub use error_code::ErrorCode;
