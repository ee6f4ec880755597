//! Per-entry results of a walk

use std::collections::BTreeMap;

use serde::Serialize;

/// What was learned about one walked entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// `/`-separated path relative to the walk root; `""` is the root.
    pub path: String,
    /// Description shown in the table of contents, possibly empty.
    pub description: String,
    pub is_dir: bool,
}

impl Record {
    pub fn new(path: impl Into<String>, description: impl Into<String>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            is_dir,
        }
    }
}

/// All records of a walk, keyed and ordered by relative path.
pub type Records = BTreeMap<String, Record>;

/// Store `record` under its own path.
pub fn insert_record(records: &mut Records, record: Record) {
    records.insert(record.path.clone(), record);
}
