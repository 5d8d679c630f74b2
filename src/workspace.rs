//! Workspace selection and the generate-tree command

use std::path::{Path, PathBuf};

use snafu::{OptionExt, ResultExt, Snafu};
use tracing::{debug, info};

use crate::tree::{RenderError, render};

/// Open workspace folders, in the order the host lists them.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    folders: Vec<PathBuf>,
}

impl Workspace {
    pub fn new(folders: Vec<PathBuf>) -> Self {
        Self { folders }
    }

    /// Workspace made of the current directory, or empty if it is unavailable.
    pub fn from_current_dir() -> Self {
        match std::env::current_dir() {
            Ok(dir) => Self::new(vec![dir]),
            Err(e) => {
                debug!("cannot determine current directory: {e}");
                Self::default()
            }
        }
    }

    pub fn folders(&self) -> &[PathBuf] {
        &self.folders
    }

    /// The folder a tree is generated for: always the first one.
    pub fn first_root(&self) -> Result<&Path, CommandError> {
        self.folders
            .first()
            .map(PathBuf::as_path)
            .context(NoWorkspaceSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum CommandError {
    #[snafu(display("No workspace folder open"))]
    NoWorkspace,
    #[snafu(display("{source}"))]
    Render { source: RenderError },
}

/// Render the tree of the workspace's first folder.
///
/// No traversal starts when the workspace is empty.
pub fn generate_tree(workspace: &Workspace) -> Result<String, CommandError> {
    let root = workspace.first_root()?;
    debug!("generating file tree for {}", root.display());

    let tree = render(root).context(RenderSnafu)?;
    info!("File tree generated successfully");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    #[test]
    fn test_empty_workspace_is_no_workspace() {
        let err = generate_tree(&Workspace::default()).unwrap_err();
        assert!(matches!(err, CommandError::NoWorkspace));
        assert_eq!(err.to_string(), "No workspace folder open");
    }

    #[test]
    fn test_first_root() {
        assert!(matches!(
            Workspace::default().first_root(),
            Err(CommandError::NoWorkspace)
        ));

        let workspace = Workspace::new(vec![PathBuf::from("one"), PathBuf::from("two")]);
        assert_eq!(workspace.first_root().unwrap(), Path::new("one"));
    }

    #[test]
    fn test_uses_first_folder_only() {
        let first = TestTree::new();
        first.add_file("first.txt", "");
        let second = TestTree::new();
        second.add_file("second.txt", "");

        let workspace = Workspace::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(generate_tree(&workspace).unwrap(), "└── first.txt\n");
    }

    #[test]
    fn test_render_failure_names_path() {
        let tree = TestTree::new();
        let missing = tree.path().join("gone");

        let err = generate_tree(&Workspace::new(vec![missing.clone()])).unwrap_err();
        match err {
            CommandError::Render { source } => assert_eq!(source.path(), missing),
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_current_dir_has_one_folder() {
        let workspace = Workspace::from_current_dir();
        assert_eq!(workspace.folders().len(), 1);
    }
}
