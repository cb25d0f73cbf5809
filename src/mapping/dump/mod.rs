//! Mapping persistence.
//!
//! Exactly two strategies exist, selected once per build:
//!
//! | Dumper   | Selected when                | Artifact                       |
//! |----------|------------------------------|--------------------------------|
//! | `Json`   | `mapping.json` is non-empty  | flat JSON object               |
//! | `Module` | otherwise                    | Go source file + formatter run |

mod json;
mod module;
mod template;

pub use json::JsonDumper;
pub use module::{ModuleDumper, ModuleTarget};
pub use template::ModuleTemplate;

use std::fs;
use std::path::{Path, PathBuf};

use super::{MappingError, MappingSet};
use crate::config::MappingConfig;

/// The persistence strategy for one build.
#[derive(Debug)]
pub enum Dumper {
    Json(JsonDumper),
    Module(ModuleDumper),
}

impl Dumper {
    /// Choose the dumper for this build.
    ///
    /// A configured JSON path always wins; package settings are then ignored.
    /// `root` and `cwd` anchor module destinations, see [`ModuleTarget::resolve`].
    pub fn select(config: &MappingConfig, root: &Path, cwd: &Path) -> Self {
        if config.has_json() {
            if config.has_package() {
                crate::debug!("mapping"; "json output configured, ignoring package settings");
            }
            return Self::Json(JsonDumper::new(&config.json));
        }

        let target = ModuleTarget::resolve(config, root, cwd);
        Self::Module(ModuleDumper::new(
            target,
            ModuleTemplate::go(),
            config.formatter.clone(),
        ))
    }

    /// Short name for log lines.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Module(_) => "module",
        }
    }

    /// Destination file of the artifact.
    pub fn target_path(&self) -> &Path {
        match self {
            Self::Json(d) => d.path(),
            Self::Module(d) => &d.target().path,
        }
    }

    /// Persist the mapping, returning the written path.
    pub fn dump(&self, set: &mut MappingSet) -> Result<PathBuf, MappingError> {
        match self {
            Self::Json(d) => d.dump(set),
            Self::Module(d) => d.dump(set),
        }
    }
}

/// Write `content` to `path` through a sibling temporary file.
///
/// Missing parent directories are created. The final name only ever holds
/// a complete file.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<(), MappingError> {
    let write_err = |e| MappingError::Write(path.to_path_buf(), e);

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_name = format!(".{file_name}.tmp");
    let tmp = match parent {
        Some(parent) => parent.join(tmp_name),
        None => PathBuf::from(tmp_name),
    };

    if let Err(e) = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}
