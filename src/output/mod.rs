//! Table of contents formatting and display
//!
//! - `markdown` - the `TOC.md` renderer
//! - `json` - JSON output of the same tree
//! - `utils` - coloured status lines for the console

mod json;
mod markdown;
mod utils;

pub use json::{JsonReport, print_json};
pub use markdown::{MarkdownRenderer, TOC_FILE, render_toc};
pub use utils::{print_error, print_status, write_status};
