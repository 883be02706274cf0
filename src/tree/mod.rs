//! Recursive directory-tree operations
//!
//! Enumeration feeds the archiver; deletion feeds the cleanup pass.

mod remove;
mod walk;

pub use remove::{remove_tree, RemovalTally};
pub use walk::list_files;
