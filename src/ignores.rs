//! Gitignore-style filtering of walked paths
//!
//! Rules come from a builtin list, the root `.gitignore`, the `ignore`
//! patterns of `.toc.yaml`, and any nested `.gitignore` found while walking.
//! Each source keeps its own matcher; a path is ignored when any matcher
//! ignores it. Paths are always `/`-separated and relative to the walk root.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::debug;

use crate::error::Result;

/// Patterns that are never part of a table of contents.
pub const BUILTIN_IGNORES: &[&str] = &[
    ".git",
    ".gitkeep",
    ".gitignore",
    ".gitattributes",
    ".dockerignore",
    "node_modules",
    "README.md",
    "TOC.md",
];

pub const GITIGNORE_FILE: &str = ".gitignore";

/// One set of rules, scoped to the directory its patterns are relative to.
struct ScopedMatcher {
    /// Relative directory, `""` for the walk root.
    scope: String,
    matcher: Gitignore,
}

impl ScopedMatcher {
    fn covers(&self, rel_path: &str) -> bool {
        self.scope.is_empty()
            || rel_path
                .strip_prefix(self.scope.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Accumulated ignore rules for one walk.
#[derive(Default)]
pub struct IgnoreRules {
    matchers: Vec<ScopedMatcher>,
}

impl IgnoreRules {
    /// Empty rules that ignore nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin patterns, `root/.gitignore` when present, and the
    /// configured extra patterns.
    pub fn for_root<S: AsRef<str>>(root: &Path, extra_patterns: &[S]) -> Result<Self> {
        let mut rules = Self::new();
        rules.add_patterns(BUILTIN_IGNORES)?;
        let root_gitignore = root.join(GITIGNORE_FILE);
        if root_gitignore.is_file() {
            rules.add_file(&root_gitignore, "")?;
        }
        rules.add_patterns(extra_patterns)?;
        Ok(rules)
    }

    /// Add patterns relative to the walk root.
    pub fn add_patterns<S: AsRef<str>>(&mut self, patterns: &[S]) -> Result<()> {
        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            builder.add_line(None, pattern.as_ref())?;
        }
        self.push("", builder.build()?);
        Ok(())
    }

    /// Add the rules of the gitignore file at `path`, whose directory is
    /// `scope` relative to the walk root.
    pub fn add_file(&mut self, path: &Path, scope: &str) -> Result<()> {
        let mut builder = GitignoreBuilder::new(scope);
        if let Some(err) = builder.add(path) {
            return Err(err.into());
        }
        debug!(path = %path.display(), "added ignore file");
        self.push(scope, builder.build()?);
        Ok(())
    }

    fn push(&mut self, scope: &str, matcher: Gitignore) {
        if matcher.is_empty() {
            return;
        }
        self.matchers.push(ScopedMatcher {
            scope: scope.to_string(),
            matcher,
        });
    }

    /// Whether the entry at `rel_path` should be left out. The root itself
    /// (`""`) is never ignored.
    pub fn matches(&self, rel_path: &str, is_dir: bool) -> bool {
        if rel_path.is_empty() {
            return false;
        }
        self.matchers.iter().any(|scoped| {
            scoped.covers(rel_path) && scoped.matcher.matched(rel_path, is_dir).is_ignore()
        })
    }

    /// Number of rule sources added so far.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
