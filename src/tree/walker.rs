//! TreeWalker - builds the full, size-annotated tree in memory

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use std::vec;

use log::{debug, error, warn};

use crate::error::{BuildError, FailureClass, classify};

use super::config::WalkerConfig;
use super::filter::IgnoreFilter;
use super::node::{Truncation, TreeNode};
use super::utils::display_name;

/// A directory whose entries are still being visited.
struct Frame {
    name: String,
    path: PathBuf,
    depth: usize,
    entries: vec::IntoIter<DirEntry>,
    children: Vec<TreeNode>,
}

impl Frame {
    fn new(name: String, path: PathBuf, depth: usize, entries: Vec<DirEntry>) -> Self {
        Self {
            name,
            path,
            depth,
            entries: entries.into_iter(),
            children: Vec::new(),
        }
    }

    fn finish(self) -> TreeNode {
        let size = self.children.iter().map(TreeNode::aggregate_size).sum();
        TreeNode::Dir {
            name: self.name,
            path: self.path,
            size,
            truncated: None,
            children: self.children,
        }
    }
}

enum Visit {
    /// A directory to descend into.
    Expand(Frame),
    /// A finished node: file, symlink, or childless directory.
    Done(TreeNode),
}

fn childless_dir(name: String, path: PathBuf, reason: Truncation) -> TreeNode {
    TreeNode::Dir {
        name,
        path,
        size: 0,
        truncated: Some(reason),
        children: Vec::new(),
    }
}

/// Walks a directory depth-first and builds an owned [`TreeNode`].
///
/// Traversal uses an explicit stack of open directories, so nesting depth is
/// bounded by memory rather than the call stack. Symlinks are recorded but
/// never followed.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: IgnoreFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = IgnoreFilter::new(config.ignore_patterns.iter().cloned());
        Self { config, filter }
    }

    /// Build the tree rooted at `root`.
    ///
    /// Only problems with `root` itself are returned as errors. Failures
    /// below it leave an empty directory in place and are logged unless
    /// `suppress_errors` is set.
    pub fn walk(&self, root: &Path) -> Result<TreeNode, BuildError> {
        let meta = fs::metadata(root).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => BuildError::NotFound(root.to_path_buf()),
            _ => BuildError::ReadRoot {
                path: root.to_path_buf(),
                source,
            },
        })?;
        if !meta.is_dir() {
            return Err(BuildError::NotADirectory(root.to_path_buf()));
        }

        let name = display_name(root);
        if self.at_max_depth(0) {
            return Ok(childless_dir(
                name,
                root.to_path_buf(),
                Truncation::DepthLimit,
            ));
        }

        let entries = self
            .read_entries(root)
            .map_err(|source| BuildError::ReadRoot {
                path: root.to_path_buf(),
                source,
            })?;

        Ok(self.drain(Frame::new(name, root.to_path_buf(), 0, entries)))
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    /// Visit every entry below `root`, attaching finished directories to
    /// their parents as they complete.
    fn drain(&self, root: Frame) -> TreeNode {
        let mut stack: Vec<Frame> = Vec::new();
        let mut current = root;

        loop {
            match current.entries.next() {
                Some(entry) => match self.visit_entry(entry, current.depth + 1) {
                    Visit::Expand(child) => stack.push(std::mem::replace(&mut current, child)),
                    Visit::Done(node) => current.children.push(node),
                },
                None => {
                    let node = current.finish();
                    match stack.pop() {
                        Some(parent) => {
                            current = parent;
                            current.children.push(node);
                        }
                        None => return node,
                    }
                }
            }
        }
    }

    fn visit_entry(&self, entry: DirEntry, depth: usize) -> Visit {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(err) => {
                self.report(&path, &err);
                return Visit::Done(TreeNode::File {
                    name,
                    path,
                    size: None,
                });
            }
        };

        if file_type.is_symlink() {
            let target = fs::read_link(&path).ok();
            return Visit::Done(TreeNode::Symlink { name, path, target });
        }

        if file_type.is_dir() {
            return self.descend(name, path, depth);
        }

        let size = match entry.metadata() {
            Ok(meta) => Some(meta.len()),
            Err(err) => {
                self.report(&path, &err);
                None
            }
        };
        Visit::Done(TreeNode::File { name, path, size })
    }

    fn descend(&self, name: String, path: PathBuf, depth: usize) -> Visit {
        if self.at_max_depth(depth) {
            debug!("{}: depth limit reached", path.display());
            return Visit::Done(childless_dir(name, path, Truncation::DepthLimit));
        }

        match self.read_entries(&path) {
            Ok(entries) => Visit::Expand(Frame::new(name, path, depth, entries)),
            Err(err) => {
                self.report(&path, &err);
                Visit::Done(childless_dir(name, path, Truncation::Unreadable))
            }
        }
    }

    /// List a directory, dropping ignored names, in raw name order.
    /// The directory handle is closed before returning.
    fn read_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            match entry {
                Ok(entry) => {
                    if !self.filter.is_ignored(&entry.file_name().to_string_lossy()) {
                        entries.push(entry);
                    }
                }
                Err(err) => self.report(path, &err),
            }
        }
        entries.sort_by_key(|e| e.file_name());
        Ok(entries)
    }

    fn report(&self, path: &Path, err: &io::Error) {
        if self.config.suppress_errors {
            return;
        }
        match classify(err) {
            FailureClass::Recoverable(kind) => {
                warn!("{}: {}", path.display(), kind.describe());
            }
            FailureClass::Unexpected => {
                error!("{}: {}", path.display(), err);
            }
        }
    }
}
