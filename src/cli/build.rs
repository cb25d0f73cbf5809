//! Mapping build orchestration.
//!
//! Build pipeline phases:
//! - **Scan** - Walk the asset root and classify every file
//! - **Select** - Pick the JSON or Go module dumper from config
//! - **Dump** - Persist the mapping (and run the formatter for Go output)
//!
//! Any failure aborts the build; nothing is persisted after a failed scan.

use crate::{
    config::ProjectConfig,
    core::BuildMode,
    debug, log,
    mapping::{Dumper, MappingSet, scan_assets},
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Build the asset mapping from the current directory.
///
/// Returns the written artifact path, or `None` for a dry run.
pub fn build_mappings(config: &ProjectConfig, mode: BuildMode, dry: bool) -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    build_mappings_in(config, mode, dry, &cwd)
}

/// Build the asset mapping; the default Go package is written to `cwd`.
fn build_mappings_in(
    config: &ProjectConfig,
    mode: BuildMode,
    dry: bool,
    cwd: &Path,
) -> Result<Option<PathBuf>> {
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }
    log!("build"; "{} build", mode);

    let root = &config.assets.root;
    let mut mapping = scan_assets(root)
        .with_context(|| format!("Failed to scan assets in {}", root.display()))?;

    if mapping.is_empty() {
        log!("scan"; "no fingerprinted assets in {}", root.display());
    } else {
        log!("scan"; "{} mapped in {}", plural_count(mapping.len(), "asset"), root.display());
    }
    let dupes = mapping.duplicate_count();
    if dupes > 0 {
        log!("scan"; "{} share a canonical path", plural_count(dupes, "asset"));
    }

    if dry {
        print_mapping(&mut mapping);
        return Ok(None);
    }

    let dumper = Dumper::select(&config.mapping, config.get_root(), cwd);
    log!("build"; "{} output -> {}", dumper.name(), dumper.target_path().display());

    let path = dumper
        .dump(&mut mapping)
        .with_context(|| format!("Failed to save assets mapping ({})", dumper.name()))?;
    Ok(Some(path))
}

/// Print the sorted mapping without writing anything.
fn print_mapping(mapping: &mut MappingSet) {
    mapping.sort();
    for entry in mapping.iter() {
        println!("{} -> {}", entry.canonical, entry.fingerprinted);
    }
}
