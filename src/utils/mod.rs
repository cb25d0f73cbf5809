//! Shared utilities.
//!
//! - [`exec`]: external command runner (formatter step)
//! - [`path`]: path normalization and `/`-joined relative paths
//! - [`plural`]: count formatting for log lines

pub mod exec;
pub mod path;
mod plural;

pub use plural::plural_count;
