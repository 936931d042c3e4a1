//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::tree::{TreeNode, TreeSummary};

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a TreeNode,
    summary: TreeSummary,
}

/// Render the tree and its summary as pretty-printed JSON.
pub fn to_json(node: &TreeNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        root: node,
        summary: TreeSummary::collect(node),
    })
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let json = to_json(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
