//! Error types shared across the crate

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while collecting and laying out the table of contents.
#[derive(Error, Debug)]
pub enum TocError {
    /// A single file could not be read. Callers walking a tree treat this as
    /// "no description" for that entry.
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file the caller named explicitly could not be read.
    #[error("cannot read required file '{}': {}", .path.display(), .source)]
    Required {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory could not be listed during the walk.
    #[error("cannot walk into '{}': {}", .path.display(), .source)]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated `TOC.md` could not be written.
    #[error("cannot write '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `.toc.yaml` exists but could not be read or parsed.
    #[error("invalid configuration in '{}': {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },

    /// A `.gitignore` file or configured ignore pattern was malformed.
    #[error("invalid ignore rules: {0}")]
    Ignore(#[from] ignore::Error),

    /// A record was laid out before its parent directory.
    #[error("directory or file wasn't reported: {0}")]
    OrphanedPath(String),
}

impl TocError {
    /// Whether the error only affects one entry and the walk may continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TocError::Read { .. })
    }
}

pub type Result<T> = std::result::Result<T, TocError>;
