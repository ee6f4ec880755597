//! Missing-description statistics collection and display
//!
//! Counts the directories and files rendered without a description and
//! remembers their paths for `--show-missing`.

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Entries rendered without a description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub missing_dirs: usize,
    pub missing_files: usize,
    /// Relative paths in render order
    pub missing: Vec<String>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_missing_dir(&mut self, path: &str) {
        self.missing_dirs += 1;
        self.missing.push(path.to_string());
    }

    pub fn add_missing_file(&mut self, path: &str) {
        self.missing_files += 1;
        self.missing.push(path.to_string());
    }

    /// Whether every rendered entry has a description.
    pub fn is_complete(&self) -> bool {
        self.missing_dirs == 0 && self.missing_files == 0
    }

    /// Missing paths in byte-wise sorted order.
    pub fn sorted_missing(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self.missing.iter().map(String::as_str).collect();
        missing.sort_unstable();
        missing
    }
}

/// Print the sorted missing paths to stdout, one per line, indented by two
/// spaces.
pub fn print_missing(stats: &Stats, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut path_color = ColorSpec::new();
    path_color.set_fg(Some(Color::Yellow));

    for path in stats.sorted_missing() {
        write!(stdout, "  ")?;
        stdout.set_color(&path_color)?;
        write!(stdout, "{}", path)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }
    Ok(())
}
