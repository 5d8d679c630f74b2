//! tree-exporter - render a workspace as a plain-text tree, without the noise

pub mod collate;
pub mod log_level;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod tree;
pub mod workspace;

pub use log_level::LogLevel;
pub use tree::{Denylist, DirectoryEntry, RenderError, TreeRenderer, render};
pub use workspace::{CommandError, Workspace, generate_tree};
