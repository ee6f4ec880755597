//! toc - A markdown table of contents for a repository, built from the
//! leading comment of every file

pub mod comments;
pub mod config;
pub mod error;
pub mod escape;
pub mod file_utils;
pub mod generate;
pub mod grammar;
pub mod ignores;
pub mod output;
pub mod readers;
pub mod stats;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use comments::{DescriptionExtractor, extract_description};
pub use config::{TocConfig, load_config};
pub use error::{Result, TocError};
pub use escape::escape_markdown;
pub use generate::{TableOfContents, toc_path};
pub use grammar::{CommentStrategy, GrammarRegistry};
pub use ignores::IgnoreRules;
pub use output::{TOC_FILE, print_error, print_json, print_status, render_toc};
pub use stats::{Stats, print_missing};
pub use tree::{Layout, RecordCollector, Records, WalkControl, build_layout, collect_records};
