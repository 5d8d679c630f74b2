//! TreeRenderer - renders a directory as an indented ASCII tree

use std::fs;
use std::path::{Path, PathBuf};

use snafu::ResultExt;
use tracing::{debug, error};

use super::error::{MetadataSnafu, ReadDirSnafu, RenderError};
use super::filter::Denylist;
use super::traversal::{branch_glyph, calculate_child_prefix, read_sorted_entries};

/// Depth-first renderer producing one line per non-excluded descendant.
///
/// Directory symlinks are followed, except when they resolve to a directory
/// already on the current descent path: such an entry is still listed but
/// its contents are not repeated.
pub struct TreeRenderer {
    denylist: Denylist,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self {
            denylist: Denylist::new(),
        }
    }

    /// Render every descendant of `root`. The root itself gets no line.
    ///
    /// The first listing or metadata failure aborts the whole render.
    pub fn render(&self, root: &Path) -> Result<String, RenderError> {
        let canonical_root = fs::canonicalize(root).context(ReadDirSnafu { path: root })?;
        let mut ancestors = vec![canonical_root];
        let mut output = String::new();

        self.render_dir(root, "", &mut ancestors, &mut output)
            .inspect_err(|e| error!("Error processing directory {}: {e}", e.path().display()))?;
        Ok(output)
    }

    fn render_dir(
        &self,
        path: &Path,
        prefix: &str,
        ancestors: &mut Vec<PathBuf>,
        output: &mut String,
    ) -> Result<(), RenderError> {
        let entries: Vec<_> = read_sorted_entries(path)?
            .into_iter()
            .filter(|entry| !self.denylist.is_excluded(&entry.name))
            .collect();
        debug!("{}: {} entries", path.display(), entries.len());

        let count = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i == count - 1;

            output.push_str(prefix);
            output.push_str(branch_glyph(is_last));
            output.push_str(&entry.name);
            output.push('\n');

            if !entry.is_dir {
                continue;
            }

            let canonical =
                fs::canonicalize(&entry.path).context(MetadataSnafu { path: &entry.path })?;
            if ancestors.contains(&canonical) {
                debug!("not descending into cycle at {}", entry.path.display());
                continue;
            }

            ancestors.push(canonical);
            let child_prefix = calculate_child_prefix(prefix, is_last);
            self.render_dir(&entry.path, &child_prefix, ancestors, output)?;
            ancestors.pop();
        }

        Ok(())
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the tree under `root` with the fixed denylist.
pub fn render(root: &Path) -> Result<String, RenderError> {
    TreeRenderer::new().render(root)
}
