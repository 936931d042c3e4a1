//! Shared utility functions for output formatting

use crate::tree::format_size;

pub const TEE: &str = "├── ";
pub const CORNER: &str = "└── ";

/// Connector drawn before an entry's name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { CORNER } else { TEE }
}

/// Prefix for the descendants of an entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Size label shown after a name; `?` when the size could not be read.
pub fn size_label(size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!("({})", format_size(bytes)),
        None => "(?)".to_string(),
    }
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuation_prefix() {
        assert_eq!(continuation_prefix("", true), "    ");
        assert_eq!(continuation_prefix("", false), "│   ");
        assert_eq!(continuation_prefix("│   ", true), "│       ");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(Some(1536)), "(1.5 KB)");
        assert_eq!(size_label(None), "(?)");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "file", "files"), "1 file");
        assert_eq!(plural(0, "file", "files"), "0 files");
    }
}
