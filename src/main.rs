//! assetmap - Map fingerprinted asset paths back to their canonical names.

mod cli;
mod config;
mod core;
mod logger;
mod mapping;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_mappings};
use config::ProjectConfig;
use core::BuildMode;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ProjectConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { build_args } => {
            let mode = BuildMode::from_dev_flag(build_args.dev);
            build_mappings(&config, mode, build_args.dry).map(|_| ())
        }
    }
}
