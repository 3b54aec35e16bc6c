//! Move execution: destination folders, collision handling, statistics.
//!
//! Consumes the [`PendingMove`](crate::walker::PendingMove) list produced by
//! the walker, one file at a time and in the order received. Every per-file
//! failure is reported and tallied; nothing short of that aborts the run.

use crate::category::Category;
use crate::cli::Config;
use crate::output::OutputFormatter;
use crate::walker::PendingMove;
use colored::*;
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while organizing files.
#[derive(Debug)]
pub enum OrganizeError {
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailed {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// The working directory itself cannot be read. The only fatal case.
    UnreadableRoot {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailed {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::UnreadableRoot { path, source } => {
                write!(f, "Cannot read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Per-run statistics, built incrementally during the move phase.
#[derive(Debug, Default)]
pub struct RunStats {
    moved: HashMap<Category, usize>,
    /// Files excluded by the skip rules.
    pub skipped: usize,
    /// Traversal, directory-creation, and move failures.
    pub errors: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one moved (or previewed) file for a category.
    pub fn record_move(&mut self, category: Category) {
        *self.moved.entry(category).or_insert(0) += 1;
    }

    /// Moved count for a single category.
    pub fn moved_for(&self, category: Category) -> usize {
        self.moved.get(&category).copied().unwrap_or(0)
    }

    /// Total number of moved files across all categories.
    pub fn total_moved(&self) -> usize {
        self.moved.values().sum()
    }
}

/// Maximum numbered collision suffixes tried before the timestamp fallback.
const MAX_COLLISION_ATTEMPTS: u32 = 1000;

/// Splits a file name into (base, extension-with-dot) for suffix insertion.
///
/// A leading dot does not count as an extension separator, so `archive` and
/// `.hidden` both come back with an empty extension part.
fn split_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => file_name.split_at(pos),
        _ => (file_name, ""),
    }
}

/// Computes a destination path in `dir` that does not collide with an
/// existing file.
///
/// Tries the plain name first, then `base_1.ext`, `base_2.ext`, and so on.
/// After [`MAX_COLLISION_ATTEMPTS`] numbered tries it falls back to a
/// millisecond-timestamp suffix so the loop always terminates.
///
/// # Examples
///
/// ```no_run
/// use forg::mover::unique_target_path;
/// use std::path::Path;
///
/// let target = unique_target_path(Path::new("Documents"), "notes.txt");
/// ```
pub fn unique_target_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (base, ext) = split_name(file_name);

    for counter in 1..=MAX_COLLISION_ATTEMPTS {
        let path = dir.join(format!("{}_{}{}", base, counter, ext));
        if !path.exists() {
            return path;
        }
    }

    let timestamp = chrono::Utc::now().timestamp_millis();
    dir.join(format!("{}_{}{}", base, timestamp, ext))
}

/// Executes (or previews) the planned moves against a base directory.
pub struct Mover<'a> {
    base_path: &'a Path,
    config: &'a Config,
}

impl<'a> Mover<'a> {
    pub fn new(base_path: &'a Path, config: &'a Config) -> Self {
        Self { base_path, config }
    }

    /// Processes all pending moves in order, updating `stats` as it goes.
    ///
    /// For each file: ensure the destination folder exists, pick a
    /// collision-free target path, then rename. In dry-run mode only the
    /// intended mapping is printed and no part of the filesystem is touched.
    pub fn execute(&self, moves: &[PendingMove], stats: &mut RunStats) {
        // The bar would fight with the per-file From/To lines in verbose
        // mode, and a dry run is instant anyway.
        let bar = if !self.config.verbose && !self.config.dry_run {
            Some(OutputFormatter::create_progress_bar(moves.len() as u64))
        } else {
            None
        };

        for pending in moves {
            self.process_one(pending, stats, bar.as_ref());
            if let Some(pb) = &bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = &bar {
            pb.finish_and_clear();
        }
    }

    fn process_one(&self, pending: &PendingMove, stats: &mut RunStats, bar: Option<&ProgressBar>) {
        let folder_name = format!("{}{}", self.config.prefix, pending.category.dir_name());
        let target_dir = self.base_path.join(&folder_name);

        if !self.config.dry_run
            && let Err(e) = fs::create_dir_all(&target_dir)
        {
            let error = OrganizeError::DirectoryCreationFailed {
                path: target_dir,
                source: e,
            };
            Self::emit_error(bar, &error.to_string());
            stats.errors += 1;
            return;
        }

        let target_path = unique_target_path(&target_dir, &pending.file_name);

        if self.config.verbose {
            println!("  {} {}", "Moving:".green(), pending.file_name);
            println!("    {} {}", "From:".green(), pending.source.display());
            println!("    {} {}", "To:  ".green(), target_path.display());
        }

        if self.config.dry_run {
            Self::emit(
                bar,
                format!("  → {} -> {}", pending.file_name, folder_name)
                    .blue()
                    .to_string(),
            );
            stats.record_move(pending.category);
            return;
        }

        match fs::rename(&pending.source, &target_path) {
            Ok(()) => {
                Self::emit(
                    bar,
                    format!(
                        "  {} {} -> {}",
                        "✓".green(),
                        pending.file_name,
                        folder_name
                    ),
                );
                stats.record_move(pending.category);
            }
            Err(e) => {
                let error = OrganizeError::FileMoveFailed {
                    source: pending.source.clone(),
                    destination: target_path,
                    source_error: e,
                };
                Self::emit_error(bar, &error.to_string());
                stats.errors += 1;
            }
        }
    }

    /// Routes a status line through the progress bar when one is active.
    fn emit(bar: Option<&ProgressBar>, line: String) {
        match bar {
            Some(pb) => pb.println(line),
            None => println!("{}", line),
        }
    }

    fn emit_error(bar: Option<&ProgressBar>, message: &str) {
        match bar {
            Some(pb) => pb.println(format!("  {} {}", "✗".red(), message)),
            None => OutputFormatter::error(message),
        }
    }
}
