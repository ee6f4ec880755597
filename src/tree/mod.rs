//! Directory walking and tree building
//!
//! Building a table of contents happens in two passes:
//!
//! - `RecordCollector`: walks the directory depth-first and records a
//!   description for every entry that is not ignored
//! - `build_layout`: nests the flat records into a [`Layout`] tree

mod layout;
mod record;
mod traversal;
mod walker;

pub use layout::{Layout, build_layout};
pub use record::{Record, Records, insert_record};
pub use traversal::{WalkControl, WalkEntry, child_path, walk};
pub use walker::{BUILTIN_DESCRIPTIONS, RecordCollector, collect_records};
