//! In-memory tree representation

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Why a directory was listed without its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Truncation {
    /// The depth cap was reached; the directory was not enumerated.
    DepthLimit,
    /// Enumeration failed and the failure was absorbed.
    Unreadable,
}

/// One filesystem entry. Directories own their children exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        /// `None` when the length could not be read.
        size: Option<u64>,
    },
    Dir {
        name: String,
        path: PathBuf,
        /// Sum of the retained children's sizes.
        size: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        truncated: Option<Truncation>,
        children: Vec<TreeNode>,
    },
    Symlink {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "Option::is_none")]
        target: Option<PathBuf>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
            TreeNode::Symlink { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
            TreeNode::Symlink { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Size used for ordering and display. Unknown file sizes stay `None`;
    /// symlinks weigh nothing.
    pub fn size(&self) -> Option<u64> {
        match self {
            TreeNode::File { size, .. } => *size,
            TreeNode::Dir { size, .. } => Some(*size),
            TreeNode::Symlink { .. } => Some(0),
        }
    }

    /// Contribution to the parent's aggregate. Unknown sizes count as zero.
    pub fn aggregate_size(&self) -> u64 {
        self.size().unwrap_or(0)
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            _ => &[],
        }
    }

    pub fn truncation(&self) -> Option<Truncation> {
        match self {
            TreeNode::Dir { truncated, .. } => *truncated,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_size_aggregates_as_zero() {
        let node = TreeNode::File {
            name: "locked".to_string(),
            path: PathBuf::from("locked"),
            size: None,
        };
        assert_eq!(node.size(), None);
        assert_eq!(node.aggregate_size(), 0);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let node = TreeNode::Dir {
            name: "deep".to_string(),
            path: PathBuf::from("deep"),
            size: 0,
            truncated: Some(Truncation::DepthLimit),
            children: Vec::new(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "dir");
        assert_eq!(json["truncated"], "depth_limit");
        assert!(json["children"].as_array().unwrap().is_empty());
    }
}
