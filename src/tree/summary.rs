//! Aggregate counts over a built tree

use serde::Serialize;

use super::node::TreeNode;

/// Totals reported after the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    /// Directories below the root, at any depth.
    pub directories: usize,
    /// Leaf entries (files and symlinks), at any depth.
    pub files: usize,
    /// The root's aggregated size.
    pub total_size: u64,
}

impl TreeSummary {
    pub fn collect(root: &TreeNode) -> Self {
        let mut summary = Self {
            total_size: root.aggregate_size(),
            ..Default::default()
        };
        let mut pending: Vec<&TreeNode> = root.children().iter().collect();
        while let Some(node) = pending.pop() {
            if node.is_dir() {
                summary.directories += 1;
                pending.extend(node.children());
            } else {
                summary.files += 1;
            }
        }
        summary
    }
}
