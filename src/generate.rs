//! The whole pipeline for one directory: configuration, walk, layout,
//! rendering, and writing or checking `TOC.md`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{TocConfig, load_config};
use crate::error::{Result, TocError};
use crate::output::{TOC_FILE, render_toc};
use crate::stats::Stats;
use crate::tree::{Layout, RecordCollector, build_layout};

/// A freshly generated table of contents.
#[derive(Debug, Clone)]
pub struct TableOfContents {
    pub layout: Layout,
    pub stats: Stats,
    /// The complete text of `TOC.md`.
    pub markdown: String,
}

impl TableOfContents {
    /// Generate the table of contents for `dir`, reading `dir/.toc.yaml`.
    pub fn generate(dir: &Path) -> Result<Self> {
        let config = load_config(dir)?;
        Self::generate_with(dir, &config)
    }

    pub fn generate_with(dir: &Path, config: &TocConfig) -> Result<Self> {
        let records = RecordCollector::new(config).collect(dir)?;
        let layout = build_layout(&records)?;
        let (stats, markdown) = render_toc(&layout, config);
        Ok(Self {
            layout,
            stats,
            markdown,
        })
    }

    /// Write `dir/TOC.md`, replacing any existing file.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = toc_path(dir);
        fs::write(&path, &self.markdown).map_err(|source| TocError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote table of contents");
        Ok(path)
    }

    /// Whether `dir/TOC.md` holds exactly this rendering. A missing or
    /// unreadable file is out of date.
    pub fn is_current(&self, dir: &Path) -> bool {
        fs::read(toc_path(dir)).is_ok_and(|current| current == self.markdown.as_bytes())
    }
}

/// Location of the generated file for `dir`.
pub fn toc_path(dir: &Path) -> PathBuf {
    dir.join(TOC_FILE)
}
