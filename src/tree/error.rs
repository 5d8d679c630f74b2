//! Errors raised while rendering a tree

use std::path::PathBuf;

use snafu::Snafu;

/// A failed read during traversal. The first one aborts the whole render.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RenderError {
    #[snafu(display("cannot read directory '{}': {source}", path.display()))]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("cannot stat '{}': {source}", path.display()))]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl RenderError {
    /// The path whose listing or metadata lookup failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            RenderError::ReadDir { path, .. } | RenderError::Metadata { path, .. } => path,
        }
    }
}
