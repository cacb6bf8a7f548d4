//! Result types for the compiler pipeline.

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedFile {
    /// Path relative to the output root, e.g. `org/example/common/Name.java`.
    pub path: String,
    /// File contents.
    pub content: String,
}

/// Everything a successful run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOutput {
    /// Language scopes found in the rules, sorted.
    pub languages: Vec<String>,
    /// Generated files, grouped by language in `languages` order, rules in
    /// declaration order within a language.
    pub files: Vec<GeneratedFile>,
}
