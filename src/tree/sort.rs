//! Child ordering

use std::cmp::Ordering;

use clap::ValueEnum;

use super::node::TreeNode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Byte-wise order of the entry name
    #[default]
    Name,
    /// Entry size, ties broken by name
    Size,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[default]
    #[value(name = "asc", alias = "ascending")]
    Ascending,
    #[value(name = "desc", alias = "descending")]
    Descending,
}

fn compare(a: &TreeNode, b: &TreeNode, key: SortKey) -> Ordering {
    // Lossy names can collide; the raw file name keeps the order total.
    let by_name = || {
        a.name()
            .as_bytes()
            .cmp(b.name().as_bytes())
            .then_with(|| a.path().file_name().cmp(&b.path().file_name()))
    };
    match key {
        SortKey::Name => by_name(),
        // Unknown sizes sort below zero.
        SortKey::Size => a.size().cmp(&b.size()).then_with(by_name),
    }
}

/// Order every directory's children in place, at every level.
///
/// Siblings are ordered among themselves; directories and files are not
/// grouped. Descending order swaps the operands, so name tie-breaks flip too.
pub fn sort_tree(root: &mut TreeNode, key: SortKey, order: SortOrder) {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if let TreeNode::Dir { children, .. } = node {
            match order {
                SortOrder::Ascending => children.sort_by(|a, b| compare(a, b, key)),
                SortOrder::Descending => children.sort_by(|a, b| compare(b, a, key)),
            }
            pending.extend(children.iter_mut());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn file(name: &str, size: Option<u64>) -> TreeNode {
        TreeNode::File {
            name: name.to_string(),
            path: PathBuf::from(name),
            size,
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> TreeNode {
        let size = children.iter().map(TreeNode::aggregate_size).sum();
        TreeNode::Dir {
            name: name.to_string(),
            path: PathBuf::from(name),
            size,
            truncated: None,
            children,
        }
    }

    fn names(node: &TreeNode) -> Vec<&str> {
        node.children().iter().map(TreeNode::name).collect()
    }

    fn sample() -> TreeNode {
        dir(
            ".",
            vec![
                file("b.txt", Some(5)),
                dir("src", vec![file("z.rs", Some(1)), file("a.rs", Some(9))]),
                file("B.txt", Some(5)),
                file("a.txt", Some(50)),
                file("locked", None),
            ],
        )
    }

    #[test]
    fn test_sort_by_name_is_bytewise() {
        let mut tree = sample();
        sort_tree(&mut tree, SortKey::Name, SortOrder::Ascending);
        assert_eq!(names(&tree), ["B.txt", "a.txt", "b.txt", "locked", "src"]);
        assert_eq!(names(&tree.children()[4]), ["a.rs", "z.rs"]);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let mut tree = sample();
        sort_tree(&mut tree, SortKey::Name, SortOrder::Descending);
        assert_eq!(names(&tree), ["src", "locked", "b.txt", "a.txt", "B.txt"]);
        assert_eq!(names(&tree.children()[0]), ["z.rs", "a.rs"]);
    }

    #[test]
    fn test_sort_by_size_breaks_ties_by_name() {
        let mut tree = sample();
        sort_tree(&mut tree, SortKey::Size, SortOrder::Ascending);
        assert_eq!(names(&tree), ["locked", "B.txt", "b.txt", "src", "a.txt"]);
        assert_eq!(names(&tree.children()[3]), ["z.rs", "a.rs"]);
    }

    #[test]
    fn test_sort_by_size_descending_swaps_tie_break() {
        let mut tree = sample();
        sort_tree(&mut tree, SortKey::Size, SortOrder::Descending);
        assert_eq!(names(&tree), ["a.txt", "src", "b.txt", "B.txt", "locked"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        for key in [SortKey::Name, SortKey::Size] {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                let mut once = sample();
                sort_tree(&mut once, key, order);
                let mut twice = once.clone();
                sort_tree(&mut twice, key, order);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_sort_by_name_orders_undecodable_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = |bytes: &[u8]| TreeNode::File {
            name: OsStr::from_bytes(bytes).to_string_lossy().to_string(),
            path: PathBuf::from("dir").join(OsStr::from_bytes(bytes)),
            size: Some(1),
        };
        let mut tree = dir(".", vec![raw(b"\xfe"), raw(b"\xff")]);
        let raw_names = |tree: &TreeNode| -> Vec<Vec<u8>> {
            tree.children()
                .iter()
                .map(|c| c.path().file_name().unwrap().as_bytes().to_vec())
                .collect()
        };

        sort_tree(&mut tree, SortKey::Name, SortOrder::Descending);
        assert_eq!(raw_names(&tree), [b"\xff".to_vec(), b"\xfe".to_vec()]);

        sort_tree(&mut tree, SortKey::Name, SortOrder::Ascending);
        assert_eq!(raw_names(&tree), [b"\xfe".to_vec(), b"\xff".to_vec()]);

        sort_tree(&mut tree, SortKey::Size, SortOrder::Descending);
        assert_eq!(raw_names(&tree), [b"\xff".to_vec(), b"\xfe".to_vec()]);
    }

    #[test]
    fn test_sort_preserves_children() {
        let mut tree = sample();
        let mut before: Vec<String> = names(&tree).iter().map(|s| s.to_string()).collect();
        sort_tree(&mut tree, SortKey::Size, SortOrder::Descending);
        let mut after: Vec<String> = names(&tree).iter().map(|s| s.to_string()).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}
