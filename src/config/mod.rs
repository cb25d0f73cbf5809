//! Project configuration management for `assetmap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── assets     # [assets]
//! │   └── mapping    # [mapping]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! The config file is optional. Without one every field takes its default
//! and the current directory is the project root. CLI flags override file
//! values.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AssetsConfig, MappingConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing assetmap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Asset tree settings
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Output settings
    #[serde(default)]
    pub mapping: MappingConfig,
}

impl ProjectConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. A missing default
    /// config is fine; a missing `--config` path is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, root) = match find_config_file(cli.config_file(), &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
                config.config_path = Some(crate::utils::path::normalize_path(&path));
                (config, root)
            }
            None if cli.has_explicit_config() => {
                bail!(ConfigError::Io(
                    cli.config_file().to_path_buf(),
                    io::Error::from(io::ErrorKind::NotFound)
                ));
            }
            None => {
                crate::debug!("config"; "no {} found, using defaults", cli.config_file().display());
                (Self::default(), cwd)
            }
        };

        config.finalize(&root, &cli.command)?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply CLI options, validate, then resolve paths against `root`.
    fn finalize(&mut self, root: &Path, command: &Commands) -> Result<()> {
        match command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
        }

        // Validate raw values: normalization hides an empty or absolute path
        self.validate()?;

        let root = crate::utils::path::normalize_path(root);
        self.assets.normalize(&root);
        self.mapping.normalize(&root);
        self.root = root;
        Ok(())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.assets.root, args.root.as_ref());
        Self::update_option(&mut self.mapping.json, args.json.as_ref());
        Self::update_option(&mut self.mapping.package, args.package.as_ref());
        Self::update_option(
            &mut self.mapping.package_relative,
            args.package_relative.as_ref(),
        );

        if let Some(formatter) = &args.formatter {
            self.mapping.formatter = formatter.split_whitespace().map(String::from).collect();
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.assets.validate(&mut diag);
        self.mapping.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    fn build(args: BuildArgs) -> Commands {
        Commands::Build { build_args: args }
    }

    #[test]
    fn test_from_str_defaults() {
        let config = ProjectConfig::from_str("").unwrap();
        assert_eq!(config.assets.root, PathBuf::from("public"));
        assert!(!config.mapping.has_json());
        assert_eq!(config.mapping.formatter, ["gofmt", "-w"]);
    }

    #[test]
    fn test_from_str_sections() {
        let config = ProjectConfig::from_str(
            r#"
            [assets]
            root = "dist/public"

            [mapping]
            package_relative = "assets"
            formatter = ["goimports", "-w"]
            "#,
        )
        .unwrap();

        assert_eq!(config.assets.root, PathBuf::from("dist/public"));
        assert_eq!(config.mapping.package_relative, "assets");
        assert_eq!(config.mapping.formatter, ["goimports", "-w"]);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let err = ProjectConfig::from_str("[assets\nroot = 1").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown_fields() {
        let (config, ignored) = ProjectConfig::parse_with_ignored(
            r#"
            [mapping]
            json = "assets.json"
            jsonn = "typo.json"
            "#,
        )
        .unwrap();

        assert!(config.mapping.has_json());
        assert_eq!(ignored, vec!["mapping.jsonn".to_string()]);
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("assetmap.toml");
        let cli = Cli::try_parse_from([
            OsStr::new("assetmap"),
            OsStr::new("-C"),
            missing.as_os_str(),
            OsStr::new("build"),
        ])
        .unwrap();

        let err = ProjectConfig::load(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(path, _)) if *path == missing
        ));
    }

    #[test]
    fn test_finalize_applies_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::from_str(
            r#"
            [mapping]
            package = "github.com/acme/web/assets"
            "#,
        )
        .unwrap();

        let args = BuildArgs {
            root: Some("static".into()),
            json: Some("out/map.json".into()),
            formatter: Some("gofmt -s -w".into()),
            ..BuildArgs::default()
        };
        config.finalize(dir.path(), &build(args)).unwrap();

        let root = crate::utils::path::normalize_path(dir.path());
        assert_eq!(config.get_root(), root.as_path());
        assert_eq!(config.assets.root, root.join("static"));
        assert_eq!(config.mapping.json, root.join("out/map.json"));
        assert_eq!(config.mapping.package, "github.com/acme/web/assets");
        assert_eq!(config.mapping.formatter, ["gofmt", "-s", "-w"]);
    }

    #[test]
    fn test_finalize_empty_formatter_disables_it() {
        let dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::default();
        let args = BuildArgs {
            formatter: Some(String::new()),
            ..BuildArgs::default()
        };
        config.finalize(dir.path(), &build(args)).unwrap();
        assert!(config.mapping.formatter.is_empty());
    }

    #[test]
    fn test_finalize_reports_validation_errors() {
        let dir = TempDir::new().unwrap();
        let mut config = ProjectConfig::from_str(
            r#"
            [assets]
            root = ""

            [mapping]
            package_relative = "/abs"
            "#,
        )
        .unwrap();

        let err = config
            .finalize(dir.path(), &build(BuildArgs::default()))
            .unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }
}
