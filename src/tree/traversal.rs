//! Depth-first directory traversal with visitor-controlled pruning.
//!
//! The driver visits the root and then every entry below it, children in
//! file-name order. The visitor decides per entry whether the traversal
//! descends further by returning a [`WalkControl`].

use std::fs;
use std::path::Path;

use crate::error::{Result, TocError};

/// What the traversal should do after visiting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    Continue,
    /// Do not visit anything below this entry. Has no effect on files.
    SkipSubtree,
}

/// One entry handed to the visitor.
#[derive(Debug, Clone, Copy)]
pub struct WalkEntry<'a> {
    /// Filesystem path, the walk root joined with `rel_path`.
    pub path: &'a Path,
    /// `/`-separated path relative to the walk root; `""` for the root.
    pub rel_path: &'a str,
    pub name: &'a str,
    /// True for real directories. Symlinks are never reported as
    /// directories, so they are not followed.
    pub is_dir: bool,
}

/// Walk `root` depth-first, calling `visit` for every entry including the
/// root itself.
///
/// Failing to list a directory aborts the walk with [`TocError::Walk`].
pub fn walk<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&WalkEntry<'_>) -> Result<WalkControl>,
{
    let metadata = fs::metadata(root).map_err(|source| TocError::Walk {
        path: root.to_path_buf(),
        source,
    })?;
    let entry = WalkEntry {
        path: root,
        rel_path: "",
        name: "",
        is_dir: metadata.is_dir(),
    };
    walk_entry(&entry, &mut visit)
}

fn walk_entry<F>(entry: &WalkEntry<'_>, visit: &mut F) -> Result<()>
where
    F: FnMut(&WalkEntry<'_>) -> Result<WalkControl>,
{
    let control = visit(entry)?;
    if !entry.is_dir || control == WalkControl::SkipSubtree {
        return Ok(());
    }

    let walk_error = |source| TocError::Walk {
        path: entry.path.to_path_buf(),
        source,
    };
    let mut children = fs::read_dir(entry.path)
        .map_err(walk_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(walk_error)?;
    children.sort_by_key(|child| child.file_name());

    for child in children {
        let file_type = child.file_type().map_err(walk_error)?;
        let name = child.file_name().to_string_lossy().into_owned();
        let rel_path = child_path(entry.rel_path, &name);
        let path = child.path();
        let child_entry = WalkEntry {
            path: &path,
            rel_path: &rel_path,
            name: &name,
            is_dir: file_type.is_dir(),
        };
        walk_entry(&child_entry, visit)?;
    }
    Ok(())
}

/// Join a relative parent path and a child name with `/`.
pub fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
