//! Build mode passed down from the CLI.

use std::fmt;

/// Build mode configuration.
///
/// Accepted by the build entry point and reported in logs. Mapping
/// construction and persistence behave the same in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMode {
    /// Whether this build targets a production deployment.
    pub production: bool,
}

impl BuildMode {
    /// Production build (`assetmap build`).
    pub const PRODUCTION: Self = Self { production: true };

    /// Development build (`assetmap build --dev`).
    pub const DEVELOPMENT: Self = Self { production: false };

    /// Select the mode from the `--dev` flag.
    #[inline]
    pub const fn from_dev_flag(dev: bool) -> Self {
        if dev { Self::DEVELOPMENT } else { Self::PRODUCTION }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.production { "production" } else { "development" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dev_flag() {
        assert_eq!(BuildMode::from_dev_flag(false), BuildMode::PRODUCTION);
        assert_eq!(BuildMode::from_dev_flag(true), BuildMode::DEVELOPMENT);
        assert_eq!(BuildMode::DEVELOPMENT.to_string(), "development");
    }
}
