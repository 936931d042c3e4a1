//! Canopy - a directory tree with sizes, sorting and ignore patterns

pub mod error;
pub mod output;
pub mod settings;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{BuildError, FailureClass, RecoverableKind, SettingsError, classify};
pub use output::{OutputConfig, TreeFormatter, print_json, to_json};
pub use settings::{DEFAULT_IGNORE_PATTERNS, Settings, SettingsStore};
pub use tree::{
    IgnoreFilter, SortKey, SortOrder, TreeNode, TreeSummary, TreeWalker, Truncation,
    WalkerConfig, format_size, sort_tree,
};
