//! Tree formatter for console output
//!
//! `TreeFormatter` renders a complete `TreeNode` either into a plain string
//! or to stdout with colors. Both paths share one writer over `WriteColor`.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{TreeNode, TreeSummary, Truncation, format_size};

use super::config::OutputConfig;
use super::utils::{connector, continuation_prefix, plural, size_label};

const UNREADABLE_MARKER: &str = "[error opening dir]";

/// Formatter for connector-drawn tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render without colors. `header` is printed as the first line.
    pub fn format(&self, node: &TreeNode, header: &str) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail.
        let _ = self.write_tree(&mut out, node, header);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    pub fn print(&self, node: &TreeNode, header: &str) -> io::Result<TreeSummary> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_tree(&mut stdout, node, header)
    }

    /// Write the header, one line per descendant, then the summary.
    pub fn write_tree<W: WriteColor>(
        &self,
        out: &mut W,
        root: &TreeNode,
        header: &str,
    ) -> io::Result<TreeSummary> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", header)?;
        out.reset()?;
        if self.config.show_size {
            write!(out, " {}", size_label(root.size()))?;
        }
        writeln!(out)?;

        // Depth-first, children pushed in reverse so the first pops first.
        let mut pending: Vec<(&TreeNode, String, bool)> = Vec::new();
        push_children(&mut pending, root, String::new());

        while let Some((node, prefix, is_last)) = pending.pop() {
            self.write_entry(out, node, &prefix, is_last)?;
            push_children(&mut pending, node, continuation_prefix(&prefix, is_last));
        }

        let summary = TreeSummary::collect(root);
        writeln!(out)?;
        writeln!(out, "{}", self.summary_line(&summary))?;
        Ok(summary)
    }

    pub fn summary_line(&self, summary: &TreeSummary) -> String {
        let mut line = format!(
            "{}, {}",
            plural(summary.directories, "directory", "directories"),
            plural(summary.files, "file", "files"),
        );
        if self.config.show_size {
            line.push_str(&format!(", {} total", format_size(summary.total_size)));
        }
        line
    }

    fn write_entry<W: WriteColor>(
        &self,
        out: &mut W,
        node: &TreeNode,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        write!(out, "{}{}", prefix, connector(is_last))?;

        match node {
            TreeNode::File { name, .. } => {
                write!(out, "{}", name)?;
            }
            TreeNode::Dir {
                name, truncated, ..
            } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(out, "{}/", name)?;
                out.reset()?;
                if *truncated == Some(Truncation::Unreadable) {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                    write!(out, " {}", UNREADABLE_MARKER)?;
                    out.reset()?;
                }
            }
            TreeNode::Symlink { name, target, .. } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                write!(out, "{}", name)?;
                out.reset()?;
                if let Some(target) = target {
                    write!(out, " -> {}", target.display())?;
                }
            }
        }

        if self.config.show_size {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, " {}", size_label(node.size()))?;
            out.reset()?;
        }
        writeln!(out)
    }
}

fn push_children<'a>(
    pending: &mut Vec<(&'a TreeNode, String, bool)>,
    node: &'a TreeNode,
    prefix: String,
) {
    let children = node.children();
    for (i, child) in children.iter().enumerate().rev() {
        pending.push((child, prefix.clone(), i + 1 == children.len()));
    }
}
