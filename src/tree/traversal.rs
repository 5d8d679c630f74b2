//! Per-level traversal steps: listing, classification, ordering, and glyphs.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use snafu::ResultExt;

use crate::collate;

use super::error::{MetadataSnafu, ReadDirSnafu, RenderError};

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// One child of a listed directory, classified as directory or file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List the children of `dir`, classify them, and return them in display order.
///
/// Metadata lookups follow symlinks and run in parallel; nothing is ordered
/// until every sibling has been classified.
pub fn read_sorted_entries(dir: &Path) -> Result<Vec<DirectoryEntry>, RenderError> {
    let paths = fs::read_dir(dir)
        .context(ReadDirSnafu { path: dir })?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .context(ReadDirSnafu { path: dir })?;

    let mut entries = paths
        .into_par_iter()
        .map(|path| -> Result<DirectoryEntry, RenderError> {
            let metadata = fs::metadata(&path).context(MetadataSnafu { path: &path })?;
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            Ok(DirectoryEntry {
                name,
                path,
                is_dir: metadata.is_dir(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort_by(display_order);
    Ok(entries)
}

/// Directories before files, then collated by name.
pub fn display_order(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| collate::compare(&a.name, &b.name))
}

pub fn branch_glyph(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for child entries
pub fn calculate_child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, SPACE_INDENT)
    } else {
        format!("{}{}", current_prefix, PIPE_INDENT)
    }
}
