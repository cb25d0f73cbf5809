//! Path classification (pure, no side effects).
//!
//! Decides whether a file under the asset root belongs in the mapping and
//! computes its canonical path.
//!
//! ```text
//! javascripts/app/fp<33 bytes>main.js
//! └─category─┘    └──35-byte prefix──┘
//!
//! canonical:     javascripts/app/main.js
//! fingerprinted: javascripts/app/fp<33 bytes>main.js
//! ```

use std::path::Path;

use super::MappingEntry;
use crate::utils::path::to_slash;

/// Top-level directories whose files are mapped.
pub const CATEGORIES: [&str; 3] = ["images", "javascripts", "stylesheets"];

/// Literal tag that starts every fingerprinted base name.
pub const FINGERPRINT_TAG: &str = "fp";

/// Byte length of the fingerprint prefix (tag + opaque hash).
pub const FINGERPRINT_LEN: usize = 35;

/// Classify a file by its path relative to the asset root.
///
/// Returns `None` (silently) when the file is outside the mapped
/// categories, sits directly in the root, or its base name does not carry
/// a fingerprint prefix followed by a non-empty original name.
pub fn classify(rel_path: &Path) -> Option<MappingEntry> {
    let fingerprinted = to_slash(rel_path)?;
    let (dir, file_name) = fingerprinted.rsplit_once('/')?;

    let category = dir.split('/').next()?;
    if !CATEGORIES.contains(&category) {
        return None;
    }

    let original = strip_fingerprint(file_name)?;
    let canonical = format!("{dir}/{original}");

    Some(MappingEntry {
        canonical,
        fingerprinted,
    })
}

/// Strip the fingerprint prefix from a base name.
///
/// The prefix must be ASCII and leave at least one byte behind.
fn strip_fingerprint(file_name: &str) -> Option<&str> {
    if !file_name.starts_with(FINGERPRINT_TAG) || file_name.len() <= FINGERPRINT_LEN {
        return None;
    }
    let (prefix, original) = file_name.split_at_checked(FINGERPRINT_LEN)?;
    prefix.is_ascii().then_some(original)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HASH: &str = "0123456789abcdef0123456789abcdef0"; // 33 bytes

    fn fp(name: &str) -> String {
        format!("{FINGERPRINT_TAG}{HASH}{name}")
    }

    fn rel(parts: &[&str]) -> PathBuf {
        parts.iter().collect()
    }

    #[test]
    fn test_prefix_width() {
        assert_eq!(fp("").len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_classify_nested_script() {
        let name = fp("main.js");
        let entry = classify(&rel(&["javascripts", "app", &name])).unwrap();

        assert_eq!(entry.canonical, "javascripts/app/main.js");
        assert_eq!(entry.fingerprinted, format!("javascripts/app/{name}"));
    }

    #[test]
    fn test_classify_every_category() {
        for category in CATEGORIES {
            let name = fp("-logo.png");
            let entry = classify(&rel(&[category, &name])).unwrap();
            assert_eq!(entry.canonical, format!("{category}/-logo.png"));
        }
    }

    #[test]
    fn test_classify_rejects_other_top_level() {
        assert!(classify(&rel(&["fonts", &fp("a.woff")])).is_none());
        assert!(classify(&rel(&["Images", &fp("a.png")])).is_none());
        assert!(classify(&rel(&["vendor", "images", &fp("a.png")])).is_none());
    }

    #[test]
    fn test_classify_rejects_root_files() {
        assert!(classify(Path::new("README.md")).is_none());
        assert!(classify(&rel(&[&fp("stray.js")])).is_none());
    }

    #[test]
    fn test_classify_rejects_unfingerprinted_names() {
        // no tag
        assert!(classify(&rel(&["images", "logo.png"])).is_none());
        // shorter than the prefix
        assert!(classify(&rel(&["images", "fpshort.png"])).is_none());
        // exactly the prefix: nothing left as the original name
        assert!(classify(&rel(&["images", &fp("")])).is_none());
        // long enough but wrong tag
        let untagged = format!("xx{HASH}logo.png");
        assert!(classify(&rel(&["images", &untagged])).is_none());
    }

    #[test]
    fn test_classify_rejects_non_ascii_prefix() {
        // multi-byte char straddling byte 35
        let name = format!("fp{}é{}", &HASH[..32], "logo.png");
        assert!(classify(&rel(&["images", &name])).is_none());
    }

    #[test]
    fn test_classify_keeps_unicode_original_name() {
        let name = fp("café.css");
        let entry = classify(&rel(&["stylesheets", &name])).unwrap();
        assert_eq!(entry.canonical, "stylesheets/café.css");
    }
}
