//! CLI entry point for canopy

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use canopy::{
    OutputConfig, Settings, SettingsStore, SortKey, SortOrder, TreeFormatter, TreeWalker,
    WalkerConfig, print_json, sort_tree,
};
use clap::{Parser, ValueEnum};
use log::warn;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "A directory tree with sizes, sorting and ignore patterns")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip entries whose name contains PATTERN (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Do not apply the saved default ignore patterns
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Save the -I patterns as the default ignore patterns and exit
    #[arg(long = "save-ignores")]
    save_ignores: bool,

    /// Show sizes next to names and the total size
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Sort entries by
    #[arg(long = "sort", value_enum, default_value = "name")]
    sort: SortKey,

    /// Sort direction
    #[arg(long = "order", value_enum, default_value = "asc")]
    order: SortOrder,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N", allow_hyphen_values = true)]
    level: Option<String>,

    /// Do not report unreadable entries
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

/// Parse the depth limit. Anything that is not a non-negative integer means
/// no limit.
fn parse_level(raw: Option<&str>) -> Option<usize> {
    let raw = raw?;
    match raw.trim().parse::<usize>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("invalid level '{}', showing all levels", raw);
            None
        }
    }
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet { "off" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| writeln!(buf, "canopy: {}", record.args()))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.quiet);

    let store = SettingsStore::default_location();

    if args.save_ignores {
        let settings = Settings {
            ignore_patterns: args.ignore.clone(),
        };
        if let Err(e) = store.save(&settings) {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
        println!(
            "saved {} ignore patterns to {}",
            settings.ignore_patterns.len(),
            store.path().display()
        );
        return;
    }

    let mut ignore_patterns = if args.no_default_ignores {
        Vec::new()
    } else {
        store.load_or_default().ignore_patterns
    };
    ignore_patterns.extend(args.ignore.iter().cloned());

    let walker_config = WalkerConfig {
        max_depth: parse_level(args.level.as_deref()),
        ignore_patterns,
        suppress_errors: args.quiet,
    };

    let mut tree = match TreeWalker::new(walker_config).walk(&args.path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    sort_tree(&mut tree, args.sort, args.order);

    let result = if args.json {
        print_json(&tree)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            show_size: args.size,
        };
        TreeFormatter::new(output_config)
            .print(&tree, &args.path.display().to_string())
            .map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), None);
        assert_eq!(parse_level(Some("0")), Some(0));
        assert_eq!(parse_level(Some(" 3 ")), Some(3));
        assert_eq!(parse_level(Some("-1")), None);
        assert_eq!(parse_level(Some("deep")), None);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "canopy", "-s", "--sort", "size", "--order", "desc", "-I", "a", "-I", "b", "-L",
            "2", "dir",
        ])
        .unwrap();
        assert!(args.size);
        assert_eq!(args.sort, SortKey::Size);
        assert_eq!(args.order, SortOrder::Descending);
        assert_eq!(args.ignore, ["a", "b"]);
        assert_eq!(args.level.as_deref(), Some("2"));
        assert_eq!(args.path, PathBuf::from("dir"));
    }

    #[test]
    fn test_negative_level_is_accepted_as_value() {
        let args = Args::try_parse_from(["canopy", "-L", "-1"]).unwrap();
        assert_eq!(args.level.as_deref(), Some("-1"));
        assert_eq!(parse_level(args.level.as_deref()), None);
    }
}
