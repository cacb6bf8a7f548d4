//! Line-level parsing: language switches and `Type <- ...` rules.

use astgen_ir::{Instruction, Program, Rule, Span, TokenKind};
use astgen_lexer::{tokenize, tokenize_at};
use tracing::{debug, trace};

use crate::grammar::{parse_literal_rule, parse_node_rule};
use crate::{ParseError, ParseErrorKind};

const ARROW: &str = "<-";

/// Feeds DSL lines into a [`Program`], one at a time.
///
/// Tracks the active language scope and the current line number. Rules
/// parsed before any `name:` switch belong to `common`.
pub struct InstructionParser<'p> {
    program: &'p mut Program,
    language: String,
    line: u32,
}

impl<'p> InstructionParser<'p> {
    pub fn new(program: &'p mut Program) -> Self {
        InstructionParser {
            program,
            language: String::new(),
            line: 0,
        }
    }

    /// The active language scope; empty until the first switch.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of lines parsed so far.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Parse one line.
    ///
    /// Returns the appended instruction, or `None` for blank lines, comments
    /// and language switches.
    pub fn parse(&mut self, line: &str) -> Result<Option<&Instruction<Rule>>, ParseError> {
        self.line += 1;
        let number = self.line;
        trace!(line = number, text = line, "instruction");

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            return Ok(None);
        }
        if !trimmed.contains(ARROW) {
            if let Some(name) = trimmed.strip_suffix(':') {
                self.switch_language(name.trim(), line)
                    .map_err(|error| error.with_line(number))?;
                return Ok(None);
            }
        }

        let rule = parse_rule(line).map_err(|error| error.with_line(number))?;
        self.program
            .add(Instruction::new(self.language.as_str(), rule));
        Ok(self.program.all_rules().last())
    }

    fn switch_language(&mut self, name: &str, line: &str) -> Result<(), ParseError> {
        let valid = name.starts_with(|c: char| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(ParseError::new(
                ParseErrorKind::InvalidLanguageName {
                    name: name.to_string(),
                },
                Span::from_range(0..line.len()),
            ));
        }
        debug!(language = name, "language switch");
        self.language = name.to_string();
        Ok(())
    }
}

/// Parse `Left <- Right` into a rule.
///
/// The leading token of the right-hand side picks the rule kind: a native
/// code block or string starts a literal, anything else a node rule.
fn parse_rule(line: &str) -> Result<Rule, ParseError> {
    let Some(arrow) = line.find(ARROW) else {
        return Err(ParseError::new(
            ParseErrorKind::MissingArrow,
            Span::from_range(0..line.len()),
        ));
    };

    let left = tokenize(&line[..arrow])?;
    let (name, name_span) = match (left.get(0), left.get(1)) {
        (Some(first), Some(second)) if second.kind == TokenKind::Eof => match &first.kind {
            TokenKind::Identifier(name) => (name.as_str(), first.span),
            other => return Err(expected_type_name(other, first.span)),
        },
        (Some(first), _) => return Err(expected_type_name(&first.kind, first.span)),
        (None, _) => return Err(expected_type_name(&TokenKind::Eof, Span::point(0))),
    };

    let right_start = arrow + ARROW.len();
    let offset = u32::try_from(right_start).unwrap_or(u32::MAX);
    let right = tokenize_at(&line[right_start..], offset)?;

    if right.get(0).is_some_and(|token| token.kind.is_template()) {
        parse_literal_rule(name, name_span, &right).map(Rule::Literal)
    } else {
        parse_node_rule(name, name_span, &right).map(Rule::Node)
    }
}

#[cold]
fn expected_type_name(found: &TokenKind, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::ExpectedTypeName {
            found: found.describe(),
        },
        span,
    )
}

/// Parse a whole DSL source into a [`Program`].
///
/// Stops at the first error; no partial program is returned.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let mut program = Program::new();
    let mut parser = InstructionParser::new(&mut program);
    for line in source.lines() {
        parser.parse(line)?;
    }
    debug!(rules = program.len(), "parsed program");
    Ok(program)
}
