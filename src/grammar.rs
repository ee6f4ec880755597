//! Comment grammars and the extension registry
//!
//! Every supported file type maps to an ordered list of [`CommentStrategy`]
//! values. The extractor tries them in order and keeps the first non-empty
//! result, so the order of each grammar is part of the observable output:
//! grammars that accept both a line style and a block style list the more
//! common one first. OCaml-style `(** *)` comes before `(* *)`, since every
//! doc comment also opens a plain block.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::readers::{read_delimited_block, read_line_prefix};

/// One way of reading a leading comment out of a line buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStrategy {
    /// A run of contiguous lines that all start with the prefix.
    LinePrefix(&'static str),
    /// A single block opened by `start` and closed by `end`.
    DelimitedBlock {
        start: &'static str,
        end: &'static str,
    },
}

impl CommentStrategy {
    /// Try to read a comment from `lines`.
    ///
    /// Returns `None` when the strategy does not match or the match is empty,
    /// which lets the next strategy of the grammar have a go.
    pub fn read<S: AsRef<str>>(&self, lines: &[S]) -> Option<String> {
        let text = match *self {
            CommentStrategy::LinePrefix(prefix) => read_line_prefix(lines, prefix),
            CommentStrategy::DelimitedBlock { start, end } => read_delimited_block(lines, start, end),
        };
        text.filter(|t| !t.is_empty())
    }
}

const fn line(prefix: &'static str) -> CommentStrategy {
    CommentStrategy::LinePrefix(prefix)
}

const fn block(start: &'static str, end: &'static str) -> CommentStrategy {
    CommentStrategy::DelimitedBlock { start, end }
}

const SLASHES: CommentStrategy = line("//");
const HASH: CommentStrategy = line("#");
const SEMICOLON: CommentStrategy = line(";");
const PERCENT: CommentStrategy = line("%");
const DASHES: CommentStrategy = line("--");
const QUOTE: CommentStrategy = line("\"");
const C_BLOCK: CommentStrategy = block("/*", "*/");
const JAVA_DOC: CommentStrategy = block("/**", "*/");
const OCAML_BLOCK: CommentStrategy = block("(*", "*)");
const OCAML_DOC: CommentStrategy = block("(**", "*)");
const HTML_BLOCK: CommentStrategy = block("<!--", "-->");
const LISP_BLOCK: CommentStrategy = block("#|", "|#");

/// Used for any extension without an entry of its own.
pub const DEFAULT_GRAMMAR: &[CommentStrategy] = &[SLASHES, HASH];

const PERL_STYLE: &[CommentStrategy] = &[HASH];
const C_STYLE: &[CommentStrategy] = &[SLASHES, C_BLOCK];
const JAVA_STYLE: &[CommentStrategy] = &[SLASHES, C_BLOCK, JAVA_DOC];
const XML_STYLE: &[CommentStrategy] = &[HTML_BLOCK];
const LISP_STYLE: &[CommentStrategy] = &[SEMICOLON, LISP_BLOCK];
const CLOJURE_STYLE: &[CommentStrategy] = &[SEMICOLON];
const HASKELL_STYLE: &[CommentStrategy] = &[DASHES, block("{-", "-}")];
const PERCENT_STYLE: &[CommentStrategy] = &[PERCENT];
const FSHARP_STYLE: &[CommentStrategy] = &[SLASHES, OCAML_DOC, OCAML_BLOCK];
const QUOTE_STYLE: &[CommentStrategy] = &[QUOTE];

/// Extension and grammar pairs. Several extensions share one grammar slice.
pub(crate) const COMMENT_TABLE: &[(&str, &[CommentStrategy])] = &[
    ("bash", PERL_STYLE),
    ("c", C_STYLE),
    ("cl", LISP_STYLE), // common lisp
    ("clj", CLOJURE_STYLE),
    ("coffee", PERL_STYLE),
    ("cpp", C_STYLE),
    ("cr", PERL_STYLE), // crystal
    ("cs", C_STYLE),
    ("css", &[C_BLOCK]),
    ("cxx", C_STYLE),
    ("d", &[SLASHES, C_BLOCK, block("/+", "+/")]),
    ("dart", C_STYLE),
    ("edn", CLOJURE_STYLE),
    ("el", CLOJURE_STYLE), // emacs lisp
    ("elm", HASKELL_STYLE),
    ("erl", PERCENT_STYLE),
    ("ex", PERL_STYLE),
    ("exs", PERL_STYLE),
    ("fish", PERL_STYLE),
    ("fs", FSHARP_STYLE),
    ("fsi", FSHARP_STYLE),
    ("fsx", FSHARP_STYLE),
    ("groovy", C_STYLE),
    ("hs", HASKELL_STYLE),
    ("html", XML_STYLE),
    ("hx", C_STYLE), // haxe
    ("java", JAVA_STYLE),
    ("jl", &[HASH, block("#=", "=#")]), // julia
    ("js", C_STYLE),
    ("jsp", JAVA_STYLE),
    ("kt", JAVA_STYLE),
    ("lisp", LISP_STYLE),
    ("lua", &[DASHES, block("--[[", "]]")]),
    ("m", C_STYLE), // objective-c
    ("matlab", PERCENT_STYLE),
    ("md", PERL_STYLE),
    ("ml", &[OCAML_DOC, OCAML_BLOCK]),
    ("nim", &[HASH, block("#[", "]#")]),
    ("php", &[SLASHES, C_BLOCK, HASH]),
    ("pl", PERL_STYLE),
    ("ps1", &[HASH, block("<#", "#>")]), // powershell
    ("py", &[HASH, block("\"\"\"", "\"\"\"")]),
    ("r", PERL_STYLE),
    ("rb", &[HASH, block("=begin", "=end")]),
    ("res", C_STYLE), // rescript
    ("resi", C_STYLE),
    ("rkt", &[SEMICOLON, LISP_BLOCK, line("#;")]), // racket
    ("rs", &[SLASHES, C_BLOCK, block("/*!", "*/"), line("//!")]),
    ("rss", XML_STYLE),
    ("sass", C_STYLE),
    ("scala", C_STYLE),
    ("scm", LISP_STYLE), // scheme
    ("scss", C_STYLE),
    ("sh", PERL_STYLE),
    ("sql", &[DASHES]),
    ("st", QUOTE_STYLE), // smalltalk
    ("swift", C_STYLE),
    ("tex", PERCENT_STYLE),
    ("ts", C_STYLE),
    ("vb", &[line("'"), line("REM")]),
    ("vim", QUOTE_STYLE),
    ("xml", XML_STYLE),
    ("yaml", PERL_STYLE),
    ("yml", PERL_STYLE),
    ("zig", &[line("///"), SLASHES]),
    ("zsh", PERL_STYLE),
];

/// Binary formats that never carry a readable comment.
const UNCOMMENTED_EXTENSIONS: &[&str] = &["eot", "woff", "ttf", "jpeg", "gif", "jpg", "pdf", "png"];

/// Read-only lookup from file extension to comment grammar.
#[derive(Debug, Clone)]
pub struct GrammarRegistry {
    grammars: HashMap<&'static str, &'static [CommentStrategy]>,
    denylist: &'static [&'static str],
}

impl GrammarRegistry {
    /// Build a registry from the builtin tables.
    pub fn new() -> Self {
        Self {
            grammars: COMMENT_TABLE.iter().copied().collect(),
            denylist: UNCOMMENTED_EXTENSIONS,
        }
    }

    /// The process-wide registry, built on first use.
    pub fn builtin() -> &'static GrammarRegistry {
        static REGISTRY: LazyLock<GrammarRegistry> = LazyLock::new(GrammarRegistry::new);
        &REGISTRY
    }

    /// Strategies to try for `extension`, falling back to [`DEFAULT_GRAMMAR`].
    ///
    /// ```
    /// use toc::grammar::{CommentStrategy, GrammarRegistry, DEFAULT_GRAMMAR};
    ///
    /// let registry = GrammarRegistry::builtin();
    /// assert_eq!(registry.grammar_for("sql"), &[CommentStrategy::LinePrefix("--")]);
    /// assert_eq!(registry.grammar_for("unknown"), DEFAULT_GRAMMAR);
    /// ```
    pub fn grammar_for(&self, extension: &str) -> &'static [CommentStrategy] {
        self.lookup(extension).unwrap_or(DEFAULT_GRAMMAR)
    }

    /// Whether files with `extension` must never be opened for a description.
    pub fn is_denylisted(&self, extension: &str) -> bool {
        self.denylist
            .iter()
            .any(|denied| denied.eq_ignore_ascii_case(extension))
    }

    fn lookup(&self, extension: &str) -> Option<&'static [CommentStrategy]> {
        if let Some(grammar) = self.grammars.get(extension) {
            return Some(*grammar);
        }
        self.grammars
            .get(extension.to_ascii_lowercase().as_str())
            .copied()
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}
