//! RecordCollector - walks a directory and records a description per entry

use std::path::Path;

use tracing::{debug, info};

use crate::comments::DescriptionExtractor;
use crate::config::TocConfig;
use crate::error::Result;
use crate::file_utils::file_extension;
use crate::ignores::{GITIGNORE_FILE, IgnoreRules};

use super::record::{Record, Records, insert_record};
use super::traversal::{WalkControl, WalkEntry, walk};

/// Descriptions for well-known files that rarely carry a comment of their
/// own, keyed by path suffix. Configured `defaultDescriptions` are checked
/// after these and win on conflict.
pub const BUILTIN_DESCRIPTIONS: &[(&str, &str)] = &[
    (".circleci/config.yml", "CircleCI configuration"),
    ("dune", "Dune build"),
    (".fsproj", "F# project"),
    (".csproj", "F# project"),
    ("package.json", "npm configuration"),
    ("go.mod", "Go dependency management"),
    ("go.sum", "Lockfile for go.mod"),
    (
        ".toc.yaml",
        "[toc](https://github.com/darklang/toc) configuration",
    ),
];

/// Walks a directory tree and produces one [`Record`] per listed entry.
pub struct RecordCollector<'a> {
    config: &'a TocConfig,
    extractor: DescriptionExtractor<'a>,
}

impl<'a> RecordCollector<'a> {
    pub fn new(config: &'a TocConfig) -> Self {
        Self {
            config,
            extractor: DescriptionExtractor::builtin(),
        }
    }

    pub fn with_extractor(mut self, extractor: DescriptionExtractor<'a>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Walk `root` and collect records for every entry that is not ignored.
    ///
    /// The root itself is recorded under `""`.
    pub fn collect(&self, root: &Path) -> Result<Records> {
        let mut ignores = IgnoreRules::for_root(root, &self.config.ignore)?;
        let mut records = Records::new();
        walk(root, |entry| self.visit(entry, &mut ignores, &mut records))?;
        info!(root = %root.display(), records = records.len(), "collected records");
        Ok(records)
    }

    fn visit(
        &self,
        entry: &WalkEntry<'_>,
        ignores: &mut IgnoreRules,
        records: &mut Records,
    ) -> Result<WalkControl> {
        let rel_path = entry.rel_path;

        // Nested ignore files were loaded when their directory was entered.
        // The root one was loaded up front.
        if !entry.is_dir && entry.name == GITIGNORE_FILE && rel_path != GITIGNORE_FILE {
            return Ok(WalkControl::Continue);
        }

        if ignores.matches(rel_path, entry.is_dir) {
            debug!(path = rel_path, "ignored");
            return Ok(WalkControl::SkipSubtree);
        }

        let description = self.describe(entry)?;
        insert_record(records, Record::new(rel_path, description, entry.is_dir));

        if entry.is_dir && self.config.hides_contents_of(rel_path) {
            debug!(path = rel_path, "not listing directory contents");
            return Ok(WalkControl::SkipSubtree);
        }

        // Load before any child is visited: siblings sorting ahead of
        // `.gitignore` are still covered by it.
        if entry.is_dir && !rel_path.is_empty() {
            let gitignore = entry.path.join(GITIGNORE_FILE);
            if gitignore.is_file() {
                ignores.add_file(&gitignore, rel_path)?;
            }
        }
        Ok(WalkControl::Continue)
    }

    fn describe(&self, entry: &WalkEntry<'_>) -> Result<String> {
        if let Some(description) = self.config.descriptions.get(entry.rel_path) {
            return Ok(description.clone());
        }
        if let Some(description) = self.default_description(entry.rel_path) {
            return Ok(description.to_string());
        }
        if self
            .extractor
            .registry()
            .is_denylisted(&file_extension(entry.path))
        {
            return Ok(String::new());
        }

        let described = if entry.is_dir {
            self.extractor.describe_directory(entry.path)
        } else {
            self.extractor.describe_file(entry.path)
        };
        match described {
            Ok(description) => Ok(description),
            Err(err) if err.is_recoverable() => {
                debug!(path = entry.rel_path, error = %err, "no description");
                Ok(String::new())
            }
            Err(err) => Err(err),
        }
    }

    /// The last matching suffix among the builtin and then configured
    /// default descriptions.
    fn default_description(&self, rel_path: &str) -> Option<&str> {
        BUILTIN_DESCRIPTIONS
            .iter()
            .map(|(suffix, description)| (*suffix, *description))
            .chain(
                self.config
                    .default_descriptions
                    .iter()
                    .map(|(suffix, description)| (suffix.as_str(), description.as_str())),
            )
            .filter(|(suffix, _)| rel_path.ends_with(suffix))
            .map(|(_, description)| description)
            .last()
    }
}

/// Collect records for `root` with the builtin grammar registry.
pub fn collect_records(root: &Path, config: &TocConfig) -> Result<Records> {
    RecordCollector::new(config).collect(root)
}
