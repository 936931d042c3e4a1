//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors, prefixes, labels
//! - `tree` - Console tree formatter
//! - `json` - JSON output

mod config;
mod json;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use tree::TreeFormatter;
pub use utils::{continuation_prefix, size_label};
