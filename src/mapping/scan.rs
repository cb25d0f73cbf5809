//! Asset tree walking.

use std::fs;
use std::io;
use std::path::Path;

use jwalk::{Parallelism, WalkDir};

use super::{MappingError, MappingSet, classify};

/// Walk `root` and collect every fingerprinted asset.
///
/// Directory entries are visited in sorted order, so repeated scans of an
/// unchanged tree yield the same sequence. Directories themselves never
/// match; every other entry goes through [`classify`].
///
/// Any traversal error aborts the scan and the partial set is discarded.
///
/// ```text
/// public/
/// ├── README.md                        -> (skipped, not a category)
/// ├── images/
/// │   └── fp<33>logo.png               -> images/logo.png
/// └── javascripts/app/
///     ├── fp<33>main.js                -> javascripts/app/main.js
///     └── vendor.js                    -> (skipped, no fingerprint)
/// ```
pub fn scan_assets(root: &Path) -> Result<MappingSet, MappingError> {
    let meta = fs::metadata(root).map_err(|e| MappingError::Traversal(root.to_path_buf(), e))?;
    if !meta.is_dir() {
        return Err(MappingError::Traversal(
            root.to_path_buf(),
            io::Error::other("not a directory"),
        ));
    }

    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial);

    let mut set = MappingSet::new();
    for entry in walker {
        let mut entry = entry.map_err(|err| traversal_error(root, err))?;

        // jwalk yields unreadable directories as entries, not as errors
        if let Some(err) = entry.read_children_error.take() {
            return Err(traversal_error(&entry.path(), err));
        }

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        if let Some(mapped) = classify(rel) {
            crate::debug!("scan"; "{} -> {}", mapped.canonical, mapped.fingerprinted);
            set.push(mapped.canonical, mapped.fingerprinted);
        }
    }

    Ok(set)
}

fn traversal_error(fallback: &Path, err: jwalk::Error) -> MappingError {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    let kind = err.io_error().map_or(io::ErrorKind::Other, io::Error::kind);
    MappingError::Traversal(path, io::Error::new(kind, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::FINGERPRINT_TAG;
    use std::fs;
    use tempfile::TempDir;

    fn fp(hash_char: char, name: &str) -> String {
        let hash: String = std::iter::repeat_n(hash_char, 33).collect();
        format!("{FINGERPRINT_TAG}{hash}{name}")
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_scan_collects_fingerprinted_assets() {
        let dir = TempDir::new().unwrap();
        let logo = fp('A', "-logo.png");
        let main = fp('B', "main.js");

        touch(dir.path(), &format!("images/{logo}"));
        touch(dir.path(), &format!("javascripts/app/{main}"));
        touch(dir.path(), "README.md");

        let mut set = scan_assets(dir.path()).unwrap();
        set.sort();

        let pairs: Vec<_> = set
            .iter()
            .map(|e| (e.canonical.clone(), e.fingerprinted.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("images/-logo.png".to_string(), format!("images/{logo}")),
                ("javascripts/app/main.js".to_string(), format!("javascripts/app/{main}")),
            ]
        );
    }

    #[test]
    fn test_scan_skips_unmapped_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), &format!("fonts/{}", fp('C', "a.woff")));
        touch(dir.path(), "stylesheets/plain.css");
        touch(dir.path(), "stylesheets/fpshort.css");
        touch(dir.path(), &fp('D', "root.js"));
        // directory named like a fingerprinted file is not an entry
        fs::create_dir_all(dir.path().join("images").join(fp('E', "dir.png"))).unwrap();

        let set = scan_assets(dir.path()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_scan_includes_hidden_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), &format!("stylesheets/.cache/{}", fp('F', "x.css")));

        let set = scan_assets(dir.path()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().canonical, "stylesheets/.cache/x.css");
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let dir = TempDir::new().unwrap();
        for c in ['Z', 'M', 'A'] {
            touch(dir.path(), &format!("images/{}", fp(c, "x.png")));
        }

        let first: Vec<_> = scan_assets(dir.path()).unwrap().iter().cloned().collect();
        let second: Vec<_> = scan_assets(dir.path()).unwrap().iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_subdir_fails() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), &format!("images/{}", fp('A', "logo.png")));
        touch(dir.path(), &format!("javascripts/locked/{}", fp('B', "main.js")));

        let locked = dir.path().join("javascripts/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root ignores directory permissions
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = scan_assets(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(MappingError::Traversal(path, _)) => assert!(path.ends_with("javascripts/locked")),
            other => panic!("expected traversal error, got {other:?}"),
        }
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let err = scan_assets(&dir.path().join("public")).unwrap_err();
        assert!(matches!(err, MappingError::Traversal(..)));
    }

    #[test]
    fn test_scan_file_root_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("public");
        fs::write(&file, "not a dir").unwrap();

        let err = scan_assets(&file).unwrap_err();
        assert!(matches!(err, MappingError::Traversal(..)));
    }
}
