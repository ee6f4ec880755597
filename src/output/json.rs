//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::stats::Stats;
use crate::tree::Layout;

/// The table of contents and its statistics, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub toc: &'a Layout,
    pub stats: &'a Stats,
}

impl<'a> JsonReport<'a> {
    pub fn new(toc: &'a Layout, stats: &'a Stats) -> Self {
        Self { toc, stats }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Print the layout and statistics as pretty-printed JSON to stdout.
pub fn print_json(layout: &Layout, stats: &Stats) -> io::Result<()> {
    let json = JsonReport::new(layout, stats)
        .to_json()
        .map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
