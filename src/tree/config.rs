//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directories at this depth are listed but not expanded. The root is depth 0.
    pub max_depth: Option<usize>,
    /// Substrings; an entry whose name contains any of them is skipped.
    pub ignore_patterns: Vec<String>,
    /// Silence the per-entry failure log lines. The tree is unaffected.
    pub suppress_errors: bool,
}
