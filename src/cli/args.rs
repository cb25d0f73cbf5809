//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Default config file name, searched upward from the current directory.
pub const DEFAULT_CONFIG: &str = "assetmap.toml";

/// Asset mapping builder CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: assetmap.toml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print every mapped asset and other debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file name to search for.
    pub fn config_file(&self) -> &Path {
        self.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG))
    }

    /// Whether `--config` was given, even with the default name.
    pub fn has_explicit_config(&self) -> bool {
        self.config.is_some()
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan the asset tree and write the mapping
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Build command arguments. Each one overrides its config counterpart.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Development build (accepted for pipeline compatibility, no effect on output)
    #[arg(long)]
    pub dev: bool,

    /// Print the mapping instead of writing it
    #[arg(long)]
    pub dry: bool,

    /// Asset root directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Write a JSON mapping to this file (takes precedence over --package)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub json: Option<PathBuf>,

    /// Go import path of the generated package (placed under the source root)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Package directory relative to the project root, also used as package name
    #[arg(long)]
    pub package_relative: Option<String>,

    /// Formatter command run on the generated file, e.g. "gofmt -w" ("" disables)
    #[arg(long)]
    pub formatter: Option<String>,
}
