use std::fmt;

use astgen_ir::Span;

use crate::ErrorCode;

/// The pipeline stage a diagnostic originates from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Component {
    Scanner,
    Parser,
    Analyzer,
    Generator,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Scanner => "scanner",
            Component::Parser => "parser",
            Component::Analyzer => "analyzer",
            Component::Generator => "generator",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiler error ready to be shown to the user.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Stable code, e.g. `E2001`.
    pub code: ErrorCode,
    /// Originating component.
    pub component: Component,
    /// Main error message.
    pub message: String,
    /// 1-based DSL line, when the error is tied to one.
    pub line: Option<u32>,
    /// Location inside `line`.
    pub span: Option<Span>,
    /// Extra lines printed after the headline.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Diagnostic with an empty message.
    pub fn error(code: ErrorCode, component: Component) -> Self {
        Diagnostic {
            code,
            component,
            message: String::new(),
            line: None,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the DSL line number.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach the location inside the line.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Append a `= note:` line.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// `error[E1003] parser: message`, the one-line summary.
    pub fn headline(&self) -> String {
        format!("error[{}] {}: {}", self.code, self.component, self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline())?;

        match (self.line, self.span) {
            (Some(line), Some(span)) => write!(f, "\n  --> line {line}, {span}")?,
            (Some(line), None) => write!(f, "\n  --> line {line}")?,
            (None, Some(span)) => write!(f, "\n  --> {span}")?,
            (None, None) => {}
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
