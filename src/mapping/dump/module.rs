//! Generated Go package holding the mapping.
//!
//! # Target resolution
//!
//! First match wins:
//!
//! | Setting                  | Package clause        | Destination                              |
//! |--------------------------|-----------------------|------------------------------------------|
//! | `package_relative = dir` | `dir` (verbatim)      | `<root>/dir/assets_gen.go`               |
//! | `package = a/b/c`        | `c` (last segment)    | `<source_root>/a/b/c/assets_gen.go`      |
//! | neither, `.` or `main`   | `main`                | `<cwd>/assets_gen.go`                    |

use std::path::{Path, PathBuf};

use super::{ModuleTemplate, write_atomic};
use crate::config::MappingConfig;
use crate::mapping::{MappingError, MappingSet};
use crate::utils::exec::Cmd;

/// File name of the generated module.
pub const MODULE_FILE: &str = "assets_gen.go";

/// Package name used when no package is configured.
const DEFAULT_PACKAGE: &str = "main";

/// Where the module goes and what it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTarget {
    /// Declared package name.
    pub package: String,
    /// Destination file.
    pub path: PathBuf,
}

impl ModuleTarget {
    /// Resolve the target from configuration.
    ///
    /// `root` anchors `package_relative`; the default package lands in `cwd`.
    pub fn resolve(config: &MappingConfig, root: &Path, cwd: &Path) -> Self {
        let relative = config.package_relative.trim();
        if !relative.is_empty() {
            return Self {
                package: relative.to_string(),
                path: root.join(relative).join(MODULE_FILE),
            };
        }

        let package = config.package.trim().trim_matches('/');
        if package.is_empty() || package == "." || package == DEFAULT_PACKAGE {
            return Self {
                package: DEFAULT_PACKAGE.to_string(),
                path: cwd.join(MODULE_FILE),
            };
        }

        let name = package.rsplit('/').next().unwrap_or(package);
        Self {
            package: name.to_string(),
            path: config.source_root().join(package).join(MODULE_FILE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModuleDumper {
    target: ModuleTarget,
    template: ModuleTemplate,
    /// Formatter command; the destination path is appended. Empty skips it.
    formatter: Vec<String>,
}

impl ModuleDumper {
    pub fn new(target: ModuleTarget, template: ModuleTemplate, formatter: Vec<String>) -> Self {
        Self {
            target,
            template,
            formatter,
        }
    }

    pub fn target(&self) -> &ModuleTarget {
        &self.target
    }

    /// Sort, render, write, then run the formatter on the written file.
    ///
    /// A formatter failure leaves the written file in place.
    pub fn dump(&self, set: &mut MappingSet) -> Result<PathBuf, MappingError> {
        set.set_module_name(&self.target.package);
        set.sort();

        let source = self.template.render(set)?;
        write_atomic(&self.target.path, source.as_bytes())?;
        self.format()?;

        crate::log!("saved"; "assets mapping go file: {}", self.target.path.display());
        Ok(self.target.path.clone())
    }

    fn format(&self) -> Result<(), MappingError> {
        if self.formatter.is_empty() {
            crate::debug!("module"; "no formatter configured, skipping");
            return Ok(());
        }

        let path = &self.target.path;
        let cmd = Cmd::from_slice(&self.formatter).arg(path);
        let tool = cmd.program_name();
        let fail = |message: String| MappingError::FormatTool {
            tool: tool.clone(),
            path: path.clone(),
            message,
        };

        cmd.resolve()
            .map_err(|e| fail(format!("`{tool}` not found: {e}")))?;
        cmd.run().map_err(|e| fail(format!("{e:#}")))?;
        Ok(())
    }
}
