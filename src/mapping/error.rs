//! Mapping build error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a mapping build.
///
/// Every variant is fatal for the build step; nothing is retried.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("cannot walk asset directory `{}`", .0.display())]
    Traversal(PathBuf, #[source] std::io::Error),

    #[error("cannot encode the assets mapping as json")]
    Encoding(#[from] serde_json::Error),

    #[error("cannot write assets mapping file `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("cannot render assets mapping module: {0}")]
    Render(String),

    #[error("formatter `{tool}` failed on `{}`\n{message}", .path.display())]
    FormatTool {
        tool: String,
        path: PathBuf,
        message: String,
    },
}
