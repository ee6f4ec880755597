//! Description extraction from a file's leading comment
//!
//! A description is the first comment found in the opening lines of a file,
//! read with the comment grammar registered for the file's extension and
//! escaped for markdown.
//!
//! # Behaviour
//!
//! - A `#!` shebang on the first line is ignored.
//! - Only [`BUFFER_LINES`] lines are considered.
//! - Unknown extensions try `//` comments and then `#` comments.
//! - Denylisted extensions (images, fonts, PDFs) are never opened.
//! - Directories are described by the `README.md` they contain.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, TocError};
use crate::escape::escape_markdown;
use crate::file_utils::{BUFFER_LINES, file_extension, read_leading_lines};
use crate::grammar::GrammarRegistry;

/// File consulted for a directory's description.
pub const DIRECTORY_README: &str = "README.md";

/// Extracts descriptions using a fixed [`GrammarRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct DescriptionExtractor<'r> {
    registry: &'r GrammarRegistry,
}

impl DescriptionExtractor<'static> {
    /// An extractor backed by the builtin registry.
    pub fn builtin() -> Self {
        Self::new(GrammarRegistry::builtin())
    }
}

impl Default for DescriptionExtractor<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'r> DescriptionExtractor<'r> {
    pub fn new(registry: &'r GrammarRegistry) -> Self {
        Self { registry }
    }

    pub(crate) fn registry(&self) -> &'r GrammarRegistry {
        self.registry
    }

    /// Describe the file at `path`.
    ///
    /// Returns an empty string when the file has no leading comment or its
    /// extension is denylisted. Errors are [`TocError::Read`], which callers
    /// walking a tree treat as "no description".
    pub fn describe_file(&self, path: &Path) -> Result<String> {
        let extension = file_extension(path);
        if self.registry.is_denylisted(&extension) {
            return Ok(String::new());
        }

        let lines = read_leading_lines(path).map_err(|source| TocError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.describe_lines(&extension, &lines))
    }

    /// Describe a file that the caller knows must exist.
    ///
    /// Any read failure becomes [`TocError::Required`], which is not
    /// recoverable.
    pub fn describe_required_file(&self, path: &Path) -> Result<String> {
        self.describe_file(path).map_err(|err| match err {
            TocError::Read { path, source } => TocError::Required { path, source },
            other => other,
        })
    }

    /// Describe a directory by the `README.md` inside it.
    ///
    /// A missing README is not an error and yields an empty description.
    pub fn describe_directory(&self, dir: &Path) -> Result<String> {
        let readme = dir.join(DIRECTORY_README);
        if !readme.is_file() {
            debug!(dir = %dir.display(), "no README to describe directory");
            return Ok(String::new());
        }
        self.describe_file(&readme)
    }

    /// Run the grammar for `extension` over already-read `lines`.
    ///
    /// `lines` must already have had any shebang removed; at most
    /// [`BUFFER_LINES`] of them are used.
    pub fn describe_lines<S: AsRef<str>>(&self, extension: &str, lines: &[S]) -> String {
        let lines = &lines[..lines.len().min(BUFFER_LINES)];
        self.registry
            .grammar_for(extension)
            .iter()
            .find_map(|strategy| strategy.read(lines))
            .map(|description| escape_markdown(&description))
            .unwrap_or_default()
    }
}

/// Describe `path` with the builtin registry.
pub fn extract_description(path: &Path) -> Result<String> {
    DescriptionExtractor::builtin().describe_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{COMMENT_TABLE, CommentStrategy};
    use std::fs;
    use tempfile::TempDir;

    fn describe(name: &str, content: &str) -> String {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        extract_description(&path).unwrap()
    }

    #[test]
    fn test_rust_line_comment() {
        assert_eq!(
            describe("main.rs", "// CLI entry point\nfn main() {}\n"),
            "CLI entry point"
        );
    }

    #[test]
    fn test_rust_inner_doc_comment_reads_as_slashes() {
        // `//` is tried before `//!`, so the `!` stays in the text
        assert_eq!(
            describe("lib.rs", "//! Library root\npub mod a;\n"),
            "! Library root"
        );
    }

    #[test]
    fn test_python_docstring_single_line() {
        assert_eq!(
            describe("readme.py", "\"\"\"One-line description\"\"\"\n\nimport os\n"),
            "One-line description"
        );
    }

    #[test]
    fn test_python_hash_before_docstring() {
        assert_eq!(
            describe("tool.py", "# Tool helpers\n\"\"\"Docstring\"\"\"\n"),
            "Tool helpers"
        );
    }

    #[test]
    fn test_shebang_does_not_change_description() {
        let with = describe("run.sh", "#!/bin/bash\n# Deploy the site\necho hi\n");
        let without = describe("run.sh", "# Deploy the site\necho hi\n");
        assert_eq!(with, without);
        assert_eq!(with, "Deploy the site");
    }

    #[test]
    fn test_shebang_python_docstring() {
        assert_eq!(
            describe("cli.py", "#!/usr/bin/env python3\n\"\"\"Command line tool\"\"\"\n"),
            "Command line tool"
        );
    }

    #[test]
    fn test_block_comment_when_no_line_comment() {
        assert_eq!(
            describe("util.c", "/* Utility\n * functions */\nint x;\n"),
            r"Utility \* functions "
        );
    }

    #[test]
    fn test_shebang_is_ignored_for_every_grammar() {
        let dir = TempDir::new().unwrap();
        for (ext, grammar) in COMMENT_TABLE {
            for strategy in grammar.iter() {
                let comment = match *strategy {
                    CommentStrategy::LinePrefix(prefix) => format!("{} Sets things up\n", prefix),
                    CommentStrategy::DelimitedBlock { start, end } => {
                        format!("{} Sets things up {}\n", start, end)
                    }
                };
                let plain = dir.path().join(format!("plain.{}", ext));
                let shebang = dir.path().join(format!("shebang.{}", ext));
                fs::write(&plain, format!("{}body\n", comment)).unwrap();
                fs::write(&shebang, format!("#!/usr/bin/env x\n{}body\n", comment)).unwrap();

                let without = extract_description(&plain).unwrap();
                let with = extract_description(&shebang).unwrap();
                assert_eq!(with, without, "{} with {:?}", ext, strategy);
                assert!(!without.is_empty(), "{} with {:?}", ext, strategy);
            }
        }
    }

    #[test]
    fn test_unclosed_block_yields_nothing_without_later_strategy() {
        // Neither `(**` nor `(*` closes and nothing follows them
        assert_eq!(describe("m.ml", "(* open\nlet x = 1\n"), "");
    }

    #[test]
    fn test_unclosed_block_falls_through_to_next_strategy() {
        let extractor = DescriptionExtractor::builtin();
        assert_eq!(
            extractor.describe_lines("php", &["/* never closed", "# hash note", "x"]),
            "hash note"
        );
    }

    #[test]
    fn test_ocaml_doc_comment() {
        assert_eq!(describe("m.ml", "(** Module doc *)\nlet x = 1\n"), "Module doc ");
        assert_eq!(describe("m.fs", "(** Module doc *)\nlet x = 1\n"), "Module doc ");
        assert_eq!(describe("p.ml", "(* Plain note *)\nlet x = 1\n"), "Plain note ");
    }

    #[test]
    fn test_unknown_extension_uses_default_grammar() {
        assert_eq!(describe("Makefile", "# Build rules\nall:\n"), "Build rules");
        assert_eq!(describe("notes.txt", "// odd notes\n"), "odd notes");
    }

    #[test]
    fn test_comment_must_come_within_buffer() {
        let content = "a\nb\nc\nd\ne\nf\n# too late\n";
        assert_eq!(describe("late.sh", content), "");
    }

    #[test]
    fn test_description_is_escaped() {
        assert_eq!(
            describe("x.py", "# Parse *args and **kwargs\n"),
            r"Parse \*args and \*\*kwargs"
        );
    }

    #[test]
    fn test_markdown_heading_readme() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# Build scripts\n\nMore text\n").unwrap();
        let extractor = DescriptionExtractor::builtin();
        assert_eq!(
            extractor.describe_directory(dir.path()).unwrap(),
            "Build scripts"
        );
    }

    #[test]
    fn test_directory_without_readme_is_empty() {
        let dir = TempDir::new().unwrap();
        let extractor = DescriptionExtractor::builtin();
        assert_eq!(extractor.describe_directory(dir.path()).unwrap(), "");
    }

    #[test]
    fn test_denylisted_extension_is_not_opened() {
        // The file does not exist, so opening it would fail
        let result = extract_description(Path::new("/nonexistent/font.eot"));
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_missing_file_is_recoverable() {
        let err = extract_description(Path::new("/nonexistent/file.rs")).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_required_file_failure_is_fatal() {
        let extractor = DescriptionExtractor::builtin();
        let err = extractor
            .describe_required_file(Path::new("/nonexistent/file.rs"))
            .unwrap_err();
        assert!(matches!(err, TocError::Required { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_describe_lines_limits_buffer() {
        let extractor = DescriptionExtractor::builtin();
        let lines = ["", "", "", "", "", "", "# seventh"];
        assert_eq!(extractor.describe_lines("sh", &lines), "");
    }
}
