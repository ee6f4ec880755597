//! Layout - nested tree built from flat walk records

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, TocError};

use super::record::Records;

/// One node of the table of contents tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub name: String,
    /// `/`-separated path relative to the root; `""` for the root.
    pub path: String,
    pub description: String,
    pub is_dir: bool,
    /// Children keyed by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Layout>,
}

impl Layout {
    /// An empty root node. It has no name and is never rendered itself.
    pub fn root() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            description: "root".to_string(),
            is_dir: true,
            children: BTreeMap::new(),
        }
    }

    /// Children in display order: the entries named by `show_first` in the
    /// order given, then the remaining non-dotfiles, then the remaining
    /// dotfiles, each group sorted by name.
    ///
    /// `show_first` holds paths relative to the root, so an entry only
    /// takes priority among its own siblings.
    pub fn ordered_children<S: AsRef<str>>(&self, show_first: &[S]) -> Vec<&Layout> {
        let prioritized: Vec<&Layout> = show_first
            .iter()
            .filter_map(|path| self.child_at(path.as_ref()))
            .fold(Vec::new(), |mut acc, child| {
                if !acc.iter().any(|seen: &&Layout| seen.name == child.name) {
                    acc.push(child);
                }
                acc
            });
        let is_prioritized =
            |child: &Layout| prioritized.iter().any(|first| first.name == child.name);

        let (dotfiles, regular): (Vec<&Layout>, Vec<&Layout>) = self
            .children
            .values()
            .filter(|child| !is_prioritized(*child))
            .partition(|child| child.name.starts_with('.'));

        prioritized
            .iter()
            .copied()
            .chain(regular)
            .chain(dotfiles)
            .collect()
    }

    /// The direct child whose relative path is `path`.
    fn child_at(&self, path: &str) -> Option<&Layout> {
        let name = if self.path.is_empty() {
            path
        } else {
            path.strip_prefix(self.path.as_str())?.strip_prefix('/')?
        };
        self.children.get(name)
    }
}

/// Nest flat `records` into a tree rooted at a synthetic `root` node.
///
/// Records are attached in path order, so every parent is placed before its
/// children. A record whose parent directory was never recorded is an error.
pub fn build_layout(records: &Records) -> Result<Layout> {
    let mut root = Layout::root();

    for (path, record) in records {
        if path.is_empty() {
            continue;
        }
        let mut segments: Vec<&str> = path.split('/').collect();
        let name = segments.pop().unwrap_or_default();

        let mut parent = &mut root;
        for segment in segments {
            parent = parent
                .children
                .get_mut(segment)
                .ok_or_else(|| TocError::OrphanedPath(path.clone()))?;
        }
        parent.children.insert(
            name.to_string(),
            Layout {
                name: name.to_string(),
                path: path.clone(),
                description: record.description.clone(),
                is_dir: record.is_dir,
                children: BTreeMap::new(),
            },
        );
    }

    Ok(root)
}
