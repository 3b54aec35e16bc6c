//! forg - organize files into categorized subfolders
//!
//! This library provides the pieces behind the `forg` command-line tool:
//! classifying files by extension, walking a directory tree up to a bounded
//! depth, and moving files into category subfolders with collision handling.

pub mod category;
pub mod cli;
pub mod mover;
pub mod output;
pub mod walker;

pub use category::{Category, CategoryTable};
pub use cli::Config;
pub use mover::{Mover, OrganizeError, OrganizeResult, RunStats};
pub use walker::{PendingMove, WalkOutcome};
