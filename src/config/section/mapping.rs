//! `[mapping]` section configuration.
//!
//! Chooses where the mapping is persisted. A non-empty `json` selects the
//! JSON file and the package settings are ignored.
//!
//! # Example
//!
//! ```toml
//! [mapping]
//! json = "build/assets.json"        # flat JSON lookup table
//!
//! # or generate a Go package instead:
//! package = "github.com/acme/web/assets"
//! package_relative = "assets"       # wins over `package`
//! source_root = "~/go/src"          # default: $GOPATH/src
//! formatter = ["gofmt", "-w"]       # run on the generated file
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::expand_home;

const PACKAGE_RELATIVE: FieldPath = FieldPath::new("mapping.package_relative");
const FORMATTER: FieldPath = FieldPath::new("mapping.formatter");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// JSON output file. Empty means "generate a Go package".
    pub json: PathBuf,

    /// Go import path of the generated package.
    pub package: String,

    /// Package directory relative to the project root.
    pub package_relative: String,

    /// Root that `package` is joined onto.
    pub source_root: Option<PathBuf>,

    /// Formatter command; the generated file path is appended.
    pub formatter: Vec<String>,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            json: PathBuf::new(),
            package: String::new(),
            package_relative: String::new(),
            source_root: None,
            formatter: vec!["gofmt".into(), "-w".into()],
        }
    }
}

impl MappingConfig {
    pub fn has_json(&self) -> bool {
        !self.json.as_os_str().is_empty()
    }

    pub fn has_package(&self) -> bool {
        !self.package.trim().is_empty() || !self.package_relative.trim().is_empty()
    }

    /// Resolve the `json` path against the project root.
    pub fn normalize(&mut self, project_root: &Path) {
        if self.has_json() {
            let json = expand_home(&self.json);
            self.json = if json.is_relative() {
                project_root.join(json)
            } else {
                json
            };
        }
    }

    /// Directory that `package` import paths live under.
    ///
    /// `source_root` when set, else the first `$GOPATH` entry + `src`,
    /// else `~/go/src`.
    pub fn source_root(&self) -> PathBuf {
        if let Some(root) = self.source_root.as_deref().filter(|p| !p.as_os_str().is_empty()) {
            return expand_home(root);
        }

        std::env::var_os("GOPATH")
            .and_then(|v| std::env::split_paths(&v).next())
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| expand_home(Path::new("~/go")))
            .join("src")
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if Path::new(self.package_relative.trim()).is_absolute() {
            diag.error_with_hint(
                PACKAGE_RELATIVE,
                "must be a relative path",
                "use `package` for packages outside the project",
            );
        }

        if self.formatter.iter().any(|arg| arg.trim().is_empty()) {
            diag.error(FORMATTER, "contains an empty argument");
            return;
        }

        // Only the Go package output runs the formatter
        if !self.has_json()
            && let Some(program) = self.formatter.first()
            && which::which(program).is_err()
        {
            diag.hint(FORMATTER, format!("`{program}` not found, the build will fail"));
        }
    }
}
