//! Markdown output formatting
//!
//! This module provides `MarkdownRenderer`, which turns a [`Layout`] into the
//! text of `TOC.md`: a nested list of links with descriptions, followed by a
//! footer summarising how many entries still lack a description.

use crate::config::TocConfig;
use crate::stats::Stats;
use crate::tree::Layout;

/// Name of the generated file inside the documented directory.
pub const TOC_FILE: &str = "TOC.md";

const GENERATED_BY: &str = "*Generated by [toc](https://github.com/darklang/toc)*";

/// Descriptions that would push a line to this width move to their own line.
const LINE_WIDTH: usize = 80;

/// Markdown renderer - outputs the layout as a nested markdown list.
pub struct MarkdownRenderer<'a> {
    show_first: &'a [String],
    output: String,
    stats: Stats,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(config: &'a TocConfig) -> Self {
        Self {
            show_first: &config.show_first,
            output: String::new(),
            stats: Stats::new(),
        }
    }

    /// Render `layout` and the footer, returning the statistics and the text.
    pub fn render(mut self, layout: &Layout) -> (Stats, String) {
        for child in layout.ordered_children(self.show_first) {
            self.render_node(child, 0);
        }
        self.write_footer();
        (self.stats, self.output)
    }

    fn render_node(&mut self, node: &Layout, indent: usize) {
        if node.description.is_empty() {
            if node.is_dir {
                self.stats.add_missing_dir(&node.path);
            } else {
                self.stats.add_missing_file(&node.path);
            }
        }

        let indent_str = " ".repeat(indent);
        self.output.push_str(&indent_str);
        self.output.push_str("- [");
        self.output.push_str(&node.name);
        self.output.push_str("](");
        self.output.push_str(&node.path);
        self.output.push_str("):");
        if fits_on_line(node, indent) {
            self.output.push(' ');
        } else {
            self.output.push('\n');
            self.output.push_str(&indent_str);
            self.output.push_str("  ");
        }
        self.output.push_str(&node.description);
        self.output.push('\n');

        for child in node.ordered_children(self.show_first) {
            self.render_node(child, indent + 2);
        }
    }

    fn write_footer(&mut self) {
        self.output.push_str("\n\n");
        self.output.push_str(GENERATED_BY);
        self.output.push_str(" - *");
        if self.stats.is_complete() {
            self.output
                .push_str("the table of contents is fully specified!*\n\n");
        } else {
            self.output.push_str(&format!(
                "{} dirs and {} files still need descriptions*\n\n",
                self.stats.missing_dirs, self.stats.missing_files
            ));
        }
    }
}

/// Whether the description stays on the same line as the link.
fn fits_on_line(node: &Layout, indent: usize) -> bool {
    node.description.is_empty()
        || node.description.len() + indent + node.name.len() + node.path.len() + 8 < LINE_WIDTH
}

/// Render `layout` as the text of `TOC.md`.
pub fn render_toc(layout: &Layout, config: &TocConfig) -> (Stats, String) {
    MarkdownRenderer::new(config).render(layout)
}
