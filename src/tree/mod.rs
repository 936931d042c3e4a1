//! Directory tree building and ordering
//!
//! - `TreeWalker` builds the full, size-annotated tree in memory
//! - `sort_tree` reorders it in place
//! - `TreeSummary` counts what was kept

mod config;
mod filter;
mod node;
mod sort;
mod summary;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use filter::IgnoreFilter;
pub use node::{TreeNode, Truncation};
pub use sort::{SortKey, SortOrder, sort_tree};
pub use summary::TreeSummary;
pub use utils::{display_name, format_size};
pub use walker::TreeWalker;
