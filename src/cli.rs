//! Command-line interface definitions.
//!
//! The CLI is deliberately thin: it validates nothing itself beyond
//! argument shape, hands the root path to the finder, and gates removal
//! behind a confirmation prompt.
//!
//! ```bash
//! # Report duplicates under a directory
//! dupsweep ~/Downloads
//!
//! # Find and delete, with confirmation
//! dupsweep ~/Downloads --delete
//!
//! # Non-interactive deletion for scripts
//! dupsweep ~/Downloads --delete --yes
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Find duplicate files by content hash and optionally delete the newer copy.
///
/// Files are compared by SHA-256 digest; within each byte-identical pair the
/// file with the newer creation timestamp is flagged, the older one is kept.
#[derive(Debug, Parser)]
#[command(name = "dupsweep")]
#[command(author, version, about)]
pub struct Cli {
    /// Directory to scan for duplicates
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Delete flagged duplicates after the scan (prompts for confirmation)
    #[arg(long)]
    pub delete: bool,

    /// Skip the confirmation prompt (implies non-interactive use)
    #[arg(long, requires = "delete")]
    pub yes: bool,

    /// Worker pool size (defaults to available parallelism)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
