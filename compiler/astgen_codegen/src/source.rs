//! Indented text output for generated Java sources.

/// Accumulates lines of generated source.
///
/// Blank lines never carry indentation, so generated files contain no
/// trailing whitespace.
#[derive(Debug, Default)]
pub struct SourceBuilder {
    /// Nesting depth, four spaces per level.
    indent: usize,
    output: String,
}

impl SourceBuilder {
    pub fn new() -> Self {
        SourceBuilder {
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "unbalanced dedent");
        self.indent = self.indent.saturating_sub(1);
    }

    fn pad(&mut self) {
        self.output.extend(std::iter::repeat("    ").take(self.indent));
    }

    /// Write a line at the current indentation.
    pub fn writeln(&mut self, s: &str) {
        if !s.is_empty() {
            self.pad();
            self.output.push_str(s);
        }
        self.output.push('\n');
    }

    /// Write several lines at the current indentation.
    pub fn write_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        for line in lines {
            self.writeln(line.as_ref());
        }
    }

    /// Blank line.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `header {`, then indent.
    pub fn open(&mut self, header: &str) {
        self.writeln(&format!("{header} {{"));
        self.indent();
    }

    /// Dedent, then write `}`.
    pub fn close(&mut self) {
        self.dedent();
        self.writeln("}");
    }

    /// Consume the builder and return the generated text.
    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks() {
        let mut out = SourceBuilder::new();
        out.open("class Outer");
        out.open("void run()");
        out.writeln("return;");
        out.close();
        out.close();
        assert_eq!(
            out.finish(),
            "class Outer {\n    void run() {\n        return;\n    }\n}\n"
        );
    }

    #[test]
    fn blank_lines_are_not_indented() {
        let mut out = SourceBuilder::new();
        out.open("class A");
        out.writeln("");
        out.newline();
        out.close();
        assert_eq!(out.finish(), "class A {\n\n\n}\n");
    }
}
