//! Directory traversal and skip rules.
//!
//! Enumerates the files to organize, either the immediate children of the
//! working directory (default) or a depth-bounded recursive walk. Produces
//! one [`PendingMove`] per eligible regular file; directories and files
//! matching the skip rules are filtered out, and the running program itself
//! is never touched.

use crate::category::{Category, CategoryTable};
use crate::cli::Config;
use crate::output::OutputFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// Names that are never processed: version-control and IDE directories,
/// build output, and OS metadata files.
const SKIP_NAMES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    ".vscode",
    ".idea",
    ".vs",
    "build",
    "dist",
    "node_modules",
    ".cache",
    "__pycache__",
    ".DS_Store",
    "Thumbs.db",
    ".Spotlight-V100",
    ".Trashes",
];

/// Returns true when a file or directory name matches the skip rules.
///
/// Any name starting with `.` is skipped, plus an explicit list of
/// version-control, build, and OS metadata names.
pub fn should_skip(name: &str) -> bool {
    name.starts_with('.') || SKIP_NAMES.contains(&name)
}

/// A planned but not-yet-executed move of one file into a category folder.
#[derive(Debug, Clone)]
pub struct PendingMove {
    /// Full path of the file to move.
    pub source: PathBuf,
    /// Bare file name, kept for reporting and collision handling.
    pub file_name: String,
    /// Target category determining the destination folder.
    pub category: Category,
}

/// Result of a traversal: the planned moves plus skip/error tallies.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    /// Planned moves in directory-enumeration order (not sorted).
    pub moves: Vec<PendingMove>,
    /// Files excluded by the skip rules.
    pub skipped: usize,
    /// Directories or entries that could not be read.
    pub errors: usize,
}

/// Collects all files to organize under `root`.
///
/// In non-recursive mode only the immediate children of `root` are visited.
/// In recursive mode subdirectories are traversed while the current depth is
/// below `config.depth`, counting `root` itself as depth 1. Directories
/// matching the skip rules are pruned before recursion. An unreadable
/// directory is reported and counted but never aborts the walk.
pub fn collect_files(
    root: &Path,
    table: &CategoryTable,
    config: &Config,
    program_name: &str,
) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();
    visit_dir(root, 1, table, config, program_name, &mut outcome);
    outcome
}

fn visit_dir(
    dir: &Path,
    current_depth: usize,
    table: &CategoryTable,
    config: &Config,
    program_name: &str,
    outcome: &mut WalkOutcome,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            OutputFormatter::error(&format!(
                "Error accessing directory {}: {}",
                dir.display(),
                e
            ));
            outcome.errors += 1;
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                OutputFormatter::error(&format!(
                    "Error reading entry in {}: {}",
                    dir.display(),
                    e
                ));
                outcome.errors += 1;
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        // Follows symlinks, so a link to a directory is handled as one.
        let is_dir = entry.path().is_dir();

        if is_dir {
            if should_skip(&name) {
                if config.verbose {
                    OutputFormatter::skip(&format!("Skipping: {}", entry.path().display()));
                }
                continue;
            }
            if config.recursive && current_depth < config.depth {
                visit_dir(
                    &entry.path(),
                    current_depth + 1,
                    table,
                    config,
                    program_name,
                    outcome,
                );
            } else if config.verbose {
                OutputFormatter::skip(&format!("Skipping directory: {}", name));
            }
            continue;
        }

        // The tool must never relocate its own binary.
        if name == program_name || name == env!("CARGO_PKG_NAME") {
            if config.verbose {
                OutputFormatter::skip(&format!("Skipping program file: {}", name));
            }
            continue;
        }

        if should_skip(&name) {
            if config.verbose {
                OutputFormatter::skip(&format!("Skipping: {}", name));
            }
            outcome.skipped += 1;
            continue;
        }

        let category = table.classify(&name);
        outcome.moves.push(PendingMove {
            source: entry.path(),
            file_name: name,
            category,
        });
    }
}
