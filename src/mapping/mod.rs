//! Canonical → fingerprinted asset mapping.
//!
//! # Module Structure
//!
//! ```text
//! mapping/
//! ├── classify   # Path Classifier (pure)
//! ├── scan       # Tree Walker over the asset root
//! ├── dump/      # Persistence strategies (json, go module)
//! ├── error      # MappingError
//! └── mod.rs     # MappingEntry, MappingSet (this file)
//! ```
//!
//! One build creates an empty [`MappingSet`], fills it during the scan,
//! hands it to exactly one [`Dumper`] and drops it.

mod classify;
pub mod dump;
mod error;
mod scan;

pub use classify::classify;
#[cfg(test)]
pub use classify::FINGERPRINT_TAG;
pub use dump::Dumper;
pub use error::MappingError;
pub use scan::scan_assets;

/// A single `canonical → fingerprinted` record.
///
/// Both paths are `/`-separated and relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Stable, hash-free identity referenced by application code.
    pub canonical: String,
    /// On-disk path including the fingerprint prefix.
    pub fingerprinted: String,
}

impl MappingEntry {
    pub fn new(canonical: impl Into<String>, fingerprinted: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            fingerprinted: fingerprinted.into(),
        }
    }
}

/// Ordered collection of mapping entries for one build.
///
/// Entries keep traversal order until [`sort`](Self::sort) is called.
/// Duplicate canonical paths are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct MappingSet {
    entries: Vec<MappingEntry>,
    /// Declared module name, set by the Go module dumper.
    module_name: Option<String>,
}

impl MappingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, canonical: impl Into<String>, fingerprinted: impl Into<String>) {
        self.entries.push(MappingEntry::new(canonical, fingerprinted));
    }

    /// Stable sort by ascending canonical path.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| a.canonical.cmp(&b.canonical));
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    pub fn set_module_name(&mut self, name: impl Into<String>) {
        self.module_name = Some(name.into());
    }

    /// Number of entries whose canonical path already appeared earlier.
    pub fn duplicate_count(&self) -> usize {
        let mut seen = std::collections::HashSet::with_capacity(self.entries.len());
        self.entries
            .iter()
            .filter(|e| !seen.insert(e.canonical.as_str()))
            .count()
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
