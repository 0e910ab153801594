//! dupsweep - concurrent duplicate file finder.
//!
//! Scans a directory tree, identifies byte-identical files via SHA-256, and
//! optionally deletes the newer copy of each duplicate pair. Hashing runs in
//! parallel across directories; duplicate bookkeeping goes through a single
//! mutex-guarded digest index owned by the scan.

pub mod actions;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod scanner;

use anyhow::Result;
use dialoguer::Confirm;

use crate::actions::remove_files;
use crate::cli::Cli;
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;

/// Run the application: scan, report, and (when requested) remove.
///
/// Returns the exit code to terminate with. Fatal errors (invalid root,
/// prompt failure) propagate as `Err`; file-level trouble only downgrades
/// the exit code to [`ExitCode::PartialSuccess`].
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let mut config = FinderConfig::default();
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    let finder = DuplicateFinder::new(config);
    let (duplicates, summary) = finder.find_duplicates(&cli.path)?;

    for path in &duplicates {
        println!("{}", path.display());
    }

    if duplicates.is_empty() {
        println!("No duplicate files found.");
        return Ok(if summary.failed_files > 0 {
            ExitCode::PartialSuccess
        } else {
            ExitCode::NoDuplicates
        });
    }
    println!("Found {} duplicate files.", summary.duplicate_count);

    let mut removal_failed = false;
    if cli.delete {
        let confirmed = cli.yes
            || Confirm::new()
                .with_prompt(format!(
                    "Remove {} duplicate files?",
                    summary.duplicate_count
                ))
                .default(false)
                .interact()?;

        if confirmed {
            let result = remove_files(&duplicates);
            println!("Removed {} files.", result.removed_count());
            for (path, reason) in &result.failures {
                eprintln!("failed to remove {}: {}", path.display(), reason);
            }
            removal_failed = result.has_failures();
        } else {
            println!("No files were removed.");
        }
    }

    Ok(if summary.failed_files > 0 || removal_failed {
        ExitCode::PartialSuccess
    } else {
        ExitCode::Success
    })
}
