//! Directory tree rendering
//!
//! Walks a directory depth-first and renders every descendant as one line of
//! an indented ASCII tree, skipping the fixed noise denylist.

mod error;
mod filter;
mod traversal;
mod walker;

pub use error::RenderError;
pub use filter::{DENYLIST_PATTERNS, Denylist};
pub use traversal::{DirectoryEntry, display_order, read_sorted_entries};
pub use walker::{TreeRenderer, render};
