//! Output formatting and styling.
//!
//! Centralizes all terminal output: colored status lines, the progress bar
//! shown during the move phase, and the final summary table. Status lines go
//! to stdout; warnings and errors go to stderr so they survive redirection.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Manages CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message to stderr in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message to stderr in yellow.
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message.yellow());
    }

    /// Prints an info message in blue.
    pub fn info(message: &str) {
        println!("{}", message.blue());
    }

    /// Prints a skip diagnostic in yellow (verbose mode).
    pub fn skip(message: &str) {
        println!("{}", message.yellow());
    }

    /// Prints a dry-run notice in yellow.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Creates a progress bar for the move phase.
    ///
    /// Per-file indicator lines should be emitted through
    /// [`ProgressBar::println`] so the bar stays pinned at the bottom.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints the per-category summary table.
    ///
    /// `rows` are (folder name, moved count) pairs already in display order;
    /// zero rows are expected to be filtered out by the caller.
    pub fn summary_table(rows: &[(&str, usize)], total: usize) {
        // At least as wide as the "Category" header itself.
        let width = rows
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!("{:<width$}  {}", "Category".bold(), "Files".bold());
        println!("{}", "-".repeat(width + 7));

        for (name, count) in rows {
            println!("{:<width$}  {}", name, count.to_string().green());
        }

        println!("{}", "-".repeat(width + 7));
        println!(
            "{:<width$}  {}",
            "Total".bold(),
            total.to_string().green().bold()
        );
    }
}
