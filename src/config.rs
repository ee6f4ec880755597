//! `.toc.yaml` configuration
//!
//! The file lives in the root of the directory being documented. Every key
//! is optional:
//!
//! ```yaml
//! descriptions:          # exact relative path -> description
//!   src/legacy: Old code kept for reference
//! defaultDescriptions:   # path suffix -> description, when the file has none
//!   .lock: Dependency lockfile
//! noDirectoryContents:   # directories listed but not descended into
//!   - vendor
//! ignore:                # extra gitignore-style patterns
//!   - "*.tmp"
//! showFirst:             # listed before their siblings, in this order
//!   - src
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TocError};

/// Name of the configuration file inside the documented directory.
pub const CONFIG_FILE: &str = ".toc.yaml";

/// User configuration for one documented directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocConfig {
    /// Directories whose own entry is listed but whose contents are not.
    pub no_directory_contents: BTreeSet<String>,
    /// Additional ignore patterns with gitignore semantics.
    pub ignore: Vec<String>,
    /// Descriptions for exact relative paths. These win over everything.
    pub descriptions: BTreeMap<String, String>,
    /// Descriptions for any path ending with the key, used instead of
    /// reading the file.
    pub default_descriptions: BTreeMap<String, String>,
    /// Relative paths shown before their siblings, in this order.
    pub show_first: Vec<String>,
}

impl TocConfig {
    /// Parse configuration from YAML text. An empty document is the default
    /// configuration.
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Whether `path` is listed in `noDirectoryContents`.
    pub fn hides_contents_of(&self, path: &str) -> bool {
        self.no_directory_contents.contains(path)
    }

    /// Position of `path` in `showFirst`, if it is listed.
    pub fn priority_of(&self, path: &str) -> Option<usize> {
        self.show_first.iter().position(|p| p == path)
    }
}

/// Load `.toc.yaml` from `dir`.
///
/// A missing file gives the default configuration; a file that exists but
/// cannot be read or parsed is an error.
pub fn load_config(dir: &Path) -> Result<TocConfig> {
    let path = dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(TocConfig::default());
        }
        Err(err) => {
            return Err(TocError::Config {
                path,
                message: err.to_string(),
            });
        }
    };

    let config = TocConfig::from_yaml(&text).map_err(|err| TocError::Config {
        path: path.clone(),
        message: err.to_string(),
    })?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}
