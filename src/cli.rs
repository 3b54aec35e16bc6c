//! Command-line interface for forg.
//!
//! This module handles:
//! - Argument parsing into an immutable [`Config`]
//! - Help and version screens
//! - The run orchestration tying walker, mover, and reporting together
//!
//! Parsing is deliberately lenient: a bad or missing flag value falls back
//! to its default with a warning on stderr, and unknown flags are reported
//! without aborting. The parser never fails.

use crate::category::{Category, CategoryTable};
use crate::mover::{Mover, OrganizeError, OrganizeResult, RunStats};
use crate::output::OutputFormatter;
use crate::walker;
use colored::*;
use std::path::Path;

/// Run configuration, immutable after parsing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix prepended to every category folder name.
    pub prefix: String,
    /// Emit per-file skip/move diagnostics.
    pub verbose: bool,
    /// Compute and print intended moves without touching the filesystem.
    pub dry_run: bool,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Maximum traversal depth, counting the working directory as 1.
    pub depth: usize,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print version and exit.
    pub show_version: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            verbose: false,
            dry_run: false,
            recursive: false,
            depth: 1,
            show_help: false,
            show_version: false,
        }
    }
}

impl Config {
    /// Parses command-line tokens (without the program name).
    ///
    /// Never fails: invalid values warn and leave the default in place,
    /// unknown flags warn and are skipped.
    pub fn parse(args: &[String]) -> Self {
        let mut config = Config::default();
        let mut i = 0;

        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => config.show_help = true,
                "--version" => config.show_version = true,
                "-v" | "--verbose" => config.verbose = true,
                "-n" | "--dry-run" => config.dry_run = true,
                "-r" | "--recursive" => config.recursive = true,
                "-d" | "--depth" => {
                    i += 1;
                    match args.get(i) {
                        Some(value) => match value.parse::<usize>() {
                            Ok(depth) if depth >= 1 => config.depth = depth,
                            Ok(_) => {
                                OutputFormatter::warning("depth must be >= 1, using default");
                            }
                            Err(_) => {
                                OutputFormatter::warning("invalid depth value, using default");
                            }
                        },
                        None => {
                            OutputFormatter::warning("missing value for --depth, using default");
                        }
                    }
                }
                "-p" | "--prefix" => {
                    i += 1;
                    match args.get(i) {
                        Some(value) => config.prefix = value.clone(),
                        None => {
                            OutputFormatter::warning("missing value for --prefix, ignoring");
                        }
                    }
                }
                unknown => {
                    OutputFormatter::warning(&format!("Unknown option: {}", unknown));
                    eprintln!(
                        "Use '{} --help' for usage information.",
                        env!("CARGO_PKG_NAME")
                    );
                }
            }
            i += 1;
        }

        config
    }
}

/// Prints the usage screen, including the category overview.
pub fn print_help(table: &CategoryTable) {
    println!(
        "{}",
        format!(
            "File Organizer - {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
        .bold()
    );
    println!();
    println!("Organizes files in the current directory into categorized subfolders.");
    println!();
    println!("{}", "Usage:".bold());
    println!("  {} [options]", env!("CARGO_PKG_NAME"));
    println!();
    println!("{}", "Options:".bold());
    println!("  -r, --recursive            Enable recursive directory traversal");
    println!("  -d, --depth <number>       Maximum depth for recursion (default: 1)");
    println!("  -p, --prefix <text>        Add a prefix to category folder names");
    println!("  -v, --verbose              Show detailed progress information");
    println!("  -n, --dry-run              Preview changes without making them");
    println!("  -h, --help                 Show this help message");
    println!("      --version              Show version information");
    println!();
    println!("{}", "Examples:".bold());
    println!("  {:<30} # Organize top-level files only", env!("CARGO_PKG_NAME"));
    println!(
        "  {:<30} # Organize all files recursively",
        concat!(env!("CARGO_PKG_NAME"), " -r")
    );
    println!(
        "  {:<30} # Organize files up to 2 levels deep",
        concat!(env!("CARGO_PKG_NAME"), " -r --depth 2")
    );
    println!(
        "  {:<30} # Organize with 'backup_' prefix",
        concat!(env!("CARGO_PKG_NAME"), " -p backup_")
    );
    println!(
        "  {:<30} # Preview without moving anything",
        concat!(env!("CARGO_PKG_NAME"), " -n -v")
    );
    println!();
    println!("{}", "Categories:".bold());
    for (category, extensions) in table.entries() {
        let shown = extensions.len().min(5);
        let mut line = extensions[..shown].join(", ");
        if extensions.len() > shown {
            line.push_str(&format!(" + {} more", extensions.len() - shown));
        }
        println!("  {}: {}", category.dir_name().blue(), line);
    }
    println!(
        "  {}: Files with unrecognized extensions",
        Category::Others.dir_name().blue()
    );
}

/// Prints the program name and version.
pub fn print_version() {
    println!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Organizes the files under `base_path` according to `config`.
///
/// Walks the directory, executes (or previews) the moves, and prints the
/// summary. Per-file and per-directory failures are reported and tallied in
/// the returned [`RunStats`]; only an unreadable `base_path` is fatal.
///
/// `program_name` is the file name the binary was invoked as, used for
/// self-exclusion during traversal.
pub fn run(config: &Config, base_path: &Path, program_name: &str) -> OrganizeResult<RunStats> {
    // An unreadable working directory is the one unrecoverable condition.
    base_path
        .read_dir()
        .map_err(|e| OrganizeError::UnreadableRoot {
            path: base_path.to_path_buf(),
            source: e,
        })?;

    OutputFormatter::info(&format!("Organizing files in: {}", base_path.display()));
    if config.recursive {
        OutputFormatter::info(&format!(
            "Recursive mode enabled (max depth: {})",
            config.depth
        ));
    }
    if !config.prefix.is_empty() {
        OutputFormatter::info(&format!("Using prefix: {}", config.prefix));
    }
    if config.dry_run {
        OutputFormatter::dry_run_notice("No changes will be made");
    }
    println!();

    let table = CategoryTable::new();
    let outcome = walker::collect_files(base_path, &table, config, program_name);

    let mut stats = RunStats::new();
    stats.skipped = outcome.skipped;
    stats.errors = outcome.errors;

    if outcome.moves.is_empty() {
        println!("{}", "No files to organize.".yellow());
        report_tallies(&stats);
        return Ok(stats);
    }

    Mover::new(base_path, config).execute(&outcome.moves, &mut stats);

    println!();
    println!("{}", "Organization complete!".green().bold());
    println!();

    let rows: Vec<(&str, usize)> = Category::ALL
        .iter()
        .map(|category| (category.dir_name(), stats.moved_for(*category)))
        .filter(|(_, count)| *count > 0)
        .collect();
    OutputFormatter::summary_table(&rows, stats.total_moved());

    report_tallies(&stats);

    if config.dry_run {
        println!();
        OutputFormatter::success("Dry run complete. No files were modified.");
    }

    Ok(stats)
}

fn report_tallies(stats: &RunStats) {
    if stats.skipped > 0 {
        println!();
        OutputFormatter::warning(&format!("Skipped: {} files/directories", stats.skipped));
    }
    if stats.errors > 0 {
        println!();
        OutputFormatter::error(&format!("Errors: {}", stats.errors));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Config::parse(&owned)
    }

    #[test]
    fn test_parse_defaults() {
        let config = parse(&[]);
        assert_eq!(config.prefix, "");
        assert!(!config.verbose);
        assert!(!config.dry_run);
        assert!(!config.recursive);
        assert_eq!(config.depth, 1);
        assert!(!config.show_help);
        assert!(!config.show_version);
    }

    #[test]
    fn test_parse_boolean_flags() {
        let config = parse(&["-v", "-n", "-r"]);
        assert!(config.verbose);
        assert!(config.dry_run);
        assert!(config.recursive);

        let config = parse(&["--verbose", "--dry-run", "--recursive"]);
        assert!(config.verbose);
        assert!(config.dry_run);
        assert!(config.recursive);
    }

    #[test]
    fn test_parse_help_and_version() {
        assert!(parse(&["-h"]).show_help);
        assert!(parse(&["--help"]).show_help);
        assert!(parse(&["--version"]).show_version);
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(parse(&["-d", "3"]).depth, 3);
        assert_eq!(parse(&["--depth", "2"]).depth, 2);
    }

    #[test]
    fn test_parse_depth_invalid_falls_back() {
        assert_eq!(parse(&["--depth", "abc"]).depth, 1);
        assert_eq!(parse(&["--depth", "0"]).depth, 1);
        assert_eq!(parse(&["--depth", "-2"]).depth, 1);
    }

    #[test]
    fn test_parse_depth_missing_value_falls_back() {
        assert_eq!(parse(&["--depth"]).depth, 1);
    }

    #[test]
    fn test_parse_depth_consumes_invalid_token() {
        // The bad value must not be re-parsed as a flag.
        let config = parse(&["--depth", "abc", "-v"]);
        assert_eq!(config.depth, 1);
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse(&["-p", "backup_"]).prefix, "backup_");
        assert_eq!(parse(&["--prefix", "sorted_"]).prefix, "sorted_");
    }

    #[test]
    fn test_parse_prefix_missing_value() {
        assert_eq!(parse(&["--prefix"]).prefix, "");
    }

    #[test]
    fn test_parse_unknown_flag_does_not_abort() {
        let config = parse(&["--bogus", "-v"]);
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_combined_options() {
        let config = parse(&["-p", "sorted_", "-v", "-r", "-d", "4"]);
        assert_eq!(config.prefix, "sorted_");
        assert!(config.verbose);
        assert!(config.recursive);
        assert_eq!(config.depth, 4);
    }
}
