//! Pluralization utilities.

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "asset")` -> `"0 assets"`
/// - `plural_count(1, "asset")` -> `"1 asset"`
/// - `plural_count(5, "entry")` -> `"5 entrys"` (only regular nouns)
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
