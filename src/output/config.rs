//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Suffix each line with the entry's size and report the total.
    pub show_size: bool,
}
