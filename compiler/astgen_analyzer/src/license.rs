//! License text placed at the top of every generated file.

/// License header text, stored as lines without trailing whitespace.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct License {
    lines: Vec<String>,
}

impl License {
    /// Build from raw text. Leading and trailing blank lines are dropped.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(|line| line.trim_end().to_string()).collect();
        let start = lines.iter().position(|line| !line.is_empty());
        let end = lines.iter().rposition(|line| !line.is_empty());
        let lines = match (start, end) {
            (Some(start), Some(end)) => lines[start..=end].to_vec(),
            _ => Vec::new(),
        };
        License { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for License {
    fn default() -> Self {
        License::new("The MIT License (MIT)")
    }
}
