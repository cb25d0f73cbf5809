//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! root = "public"   # contains images/, javascripts/, stylesheets/
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};

const ROOT: FieldPath = FieldPath::new("assets.root");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Asset tree root (relative to project root).
    pub root: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "public".into(),
        }
    }
}

impl AssetsConfig {
    /// Resolve `root` against the project root.
    pub fn normalize(&mut self, project_root: &Path) {
        self.root = crate::utils::path::normalize_path(&project_root.join(&self.root));
    }

    /// Validate before normalization (an empty root would become the project root).
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.root.as_os_str().is_empty() {
            diag.error_with_hint(ROOT, "must not be empty", "the default is \"public\"");
        }
    }
}
