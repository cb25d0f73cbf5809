//! Flat JSON lookup table.
//!
//! ```json
//! {
//!   "images/logo.png": "images/fp0123...logo.png",
//!   "javascripts/app/main.js": "javascripts/app/fp4567...main.js"
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::write_atomic;
use crate::mapping::{MappingError, MappingSet};

#[derive(Debug, Clone)]
pub struct JsonDumper {
    path: PathBuf,
}

impl JsonDumper {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode and write the mapping, replacing any existing file.
    pub fn dump(&self, set: &MappingSet) -> Result<PathBuf, MappingError> {
        let json = encode(set)?;
        write_atomic(&self.path, json.as_bytes())?;
        crate::log!("json"; "saved assets mapping json file: {}", self.path.display());
        Ok(self.path.clone())
    }
}

/// Collapse the entries into one object and pretty-print it.
///
/// Keys come out sorted. When a canonical path appears more than once the
/// entry that came last in the set wins.
fn encode(set: &MappingSet) -> Result<String, MappingError> {
    let mut table = BTreeMap::new();
    for entry in set {
        table.insert(entry.canonical.as_str(), entry.fingerprinted.as_str());
    }

    let dupes = set.len() - table.len();
    if dupes > 0 {
        crate::debug!("json"; "{} duplicate canonical path(s) collapsed, last entry wins", dupes);
    }

    let mut json = serde_json::to_string_pretty(&table)?;
    json.push('\n');
    Ok(json)
}
