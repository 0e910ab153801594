//! Batch removal of flagged duplicate files.
//!
//! This is an unconditional delete primitive: the confirmation gate lives
//! in the CLI layer, never here. Deletion is independent per file; one
//! failure never aborts the batch.

use std::fs;
use std::path::{Path, PathBuf};

/// Results of a batch removal.
#[derive(Debug, Default)]
pub struct BatchRemoveResult {
    /// Paths that were successfully deleted.
    pub removed: Vec<PathBuf>,
    /// Failed deletions as (path, reason) pairs, in input order.
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchRemoveResult {
    /// Number of files successfully deleted.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Whether any deletion failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Delete every path in `paths`, collecting per-file successes and failures.
pub fn remove_files<P: AsRef<Path>>(paths: &[P]) -> BatchRemoveResult {
    let mut result = BatchRemoveResult::default();

    for path in paths {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => {
                log::info!("removed {}", path.display());
                result.removed.push(path.to_path_buf());
            }
            Err(err) => {
                log::error!("could not remove {}: {}", path.display(), err);
                result.failures.push((path.to_path_buf(), err.to_string()));
            }
        }
    }

    result
}
