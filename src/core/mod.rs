//! Core types shared across the codebase.

mod driver;

pub use driver::BuildMode;
