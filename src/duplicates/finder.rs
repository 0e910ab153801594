//! Duplicate finder: parallel hashing with a shared digest index.
//!
//! # Overview
//!
//! The pipeline has one phase: every directory in the tree becomes a work
//! unit, units are fanned out onto a rayon thread pool, and each worker
//! hashes its unit's files and merges results into a [`DigestIndex`] shared
//! across all workers. Hashing (the expensive, I/O-bound part) runs fully
//! parallel; only the index bookkeeping is serialized behind one lock.
//!
//! Which copy of a colliding pair is "the duplicate" is decided purely by
//! creation timestamp: the strictly newer file is flagged, the older file
//! stays as the kept original. Processing order never influences the
//! outcome — see [`pick_duplicate`].
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::duplicates::{DuplicateFinder, FinderConfig};
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::new(FinderConfig::default().with_threads(4));
//! let (duplicates, summary) = finder.find_duplicates(Path::new("."))?;
//! println!("{} duplicates in {} files", summary.duplicate_count, summary.total_files);
//! # Ok::<(), dupsweep::duplicates::FinderError>(())
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::scanner::{creation_time, digest_file, digest_to_hex, Digest, DirUnit, Walker};

/// Errors that abort a duplicate scan before any file is processed.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The root path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for a duplicate scan.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Worker pool size. `None` uses the host's available parallelism.
    pub threads: Option<usize>,
}

impl FinderConfig {
    /// Set the worker pool size (clamped to at least 1).
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1)
        })
    }
}

/// Counters describing what a scan saw and decided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total regular files encountered.
    pub total_files: usize,
    /// Files successfully hashed.
    pub hashed_files: usize,
    /// Files excluded because hashing failed.
    pub failed_files: usize,
    /// Collisions skipped because a timestamp lookup failed.
    pub skipped_pairs: usize,
    /// Number of paths flagged as duplicates.
    pub duplicate_count: usize,
}

/// Which side of a digest collision gets flagged as the duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flagged {
    /// The newly-encountered file is the duplicate.
    Candidate,
    /// The already-indexed file is the duplicate; the candidate is kept.
    Indexed,
}

/// Decide which of a colliding pair is the duplicate.
///
/// Pure tie-break policy: the strictly newer file is flagged. On exactly
/// equal timestamps the newly-encountered file is flagged, so the indexed
/// original survives.
#[must_use]
pub fn pick_duplicate(indexed: SystemTime, candidate: SystemTime) -> Flagged {
    if indexed > candidate {
        Flagged::Indexed
    } else {
        Flagged::Candidate
    }
}

/// Outcome of offering one hashed file to the index.
#[derive(Debug)]
enum Observation {
    /// First file seen with this digest; it became the original.
    Inserted,
    /// Collision resolved: `flagged` is the duplicate, `kept` the original.
    Duplicate { flagged: PathBuf, kept: PathBuf },
    /// Collision could not be resolved because a timestamp lookup failed.
    TimestampUnavailable,
}

/// Shared digest → first-seen-path map, owned by one scan invocation.
///
/// The whole check-or-insert-or-resolve sequence runs under a single lock,
/// so collision decisions are atomic with respect to every worker. When the
/// indexed file loses a collision (it is the newer one), the entry is
/// replaced by the kept path, keeping the invariant that the index always
/// maps a digest to the surviving original.
#[derive(Debug, Default)]
struct DigestIndex {
    inner: Mutex<HashMap<Digest, PathBuf>>,
}

impl DigestIndex {
    fn new() -> Self {
        Self::default()
    }

    /// Offer a hashed file to the index, resolving any collision.
    ///
    /// Timestamps are looked up inside the critical section, after hashing;
    /// a file that vanished in between fails here and the pair is skipped
    /// rather than guessed at.
    fn observe(&self, digest: Digest, candidate: &Path) -> Observation {
        let mut map = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match map.entry(digest) {
            Entry::Vacant(slot) => {
                slot.insert(candidate.to_path_buf());
                Observation::Inserted
            }
            Entry::Occupied(mut slot) => {
                let indexed = slot.get().clone();

                let candidate_created = match creation_time(candidate) {
                    Ok(t) => t,
                    Err(err) => {
                        log::warn!("timestamp lookup failed, skipping pair: {}", err);
                        return Observation::TimestampUnavailable;
                    }
                };
                let indexed_created = match creation_time(&indexed) {
                    Ok(t) => t,
                    Err(err) => {
                        log::warn!("timestamp lookup failed, skipping pair: {}", err);
                        return Observation::TimestampUnavailable;
                    }
                };

                match pick_duplicate(indexed_created, candidate_created) {
                    Flagged::Candidate => Observation::Duplicate {
                        flagged: candidate.to_path_buf(),
                        kept: indexed,
                    },
                    Flagged::Indexed => {
                        slot.insert(candidate.to_path_buf());
                        Observation::Duplicate {
                            flagged: indexed,
                            kept: candidate.to_path_buf(),
                        }
                    }
                }
            }
        }
    }
}

/// Per-unit results, merged into the aggregate once all units finish.
#[derive(Debug, Default)]
struct UnitOutcome {
    duplicates: Vec<PathBuf>,
    hashed: usize,
    failed: usize,
    skipped_pairs: usize,
}

/// Orchestrates a duplicate scan over a directory tree.
#[derive(Debug)]
pub struct DuplicateFinder {
    config: FinderConfig,
}

impl DuplicateFinder {
    /// Create a finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Create a finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Scan the tree rooted at `root` and return the flagged duplicate
    /// paths plus scan counters.
    ///
    /// The returned list's order reflects worker-completion order and is
    /// not stable across runs. No files are touched; removal is a separate
    /// step (see [`crate::actions::remove_files`]).
    ///
    /// # Errors
    ///
    /// Fails up front if `root` is missing or not a directory, or if the
    /// worker pool cannot be built. File-level errors never abort the scan.
    pub fn find_duplicates(
        &self,
        root: &Path,
    ) -> Result<(Vec<PathBuf>, ScanSummary), FinderError> {
        let metadata =
            fs::metadata(root).map_err(|_| FinderError::NotFound(root.to_path_buf()))?;
        if !metadata.is_dir() {
            return Err(FinderError::NotADirectory(root.to_path_buf()));
        }

        let units: Vec<DirUnit> = Walker::new(root).units().collect();
        log::debug!("scanning {} directories under {}", units.len(), root.display());

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.effective_threads())
            .build()?;

        let index = DigestIndex::new();
        let outcomes: Vec<UnitOutcome> = pool.install(|| {
            units
                .par_iter()
                .map(|unit| process_unit(unit, &index))
                .collect()
        });

        let mut duplicates = Vec::new();
        let mut summary = ScanSummary::default();
        for outcome in outcomes {
            summary.hashed_files += outcome.hashed;
            summary.failed_files += outcome.failed;
            summary.skipped_pairs += outcome.skipped_pairs;
            duplicates.extend(outcome.duplicates);
        }
        summary.total_files = summary.hashed_files + summary.failed_files;
        summary.duplicate_count = duplicates.len();

        log::info!(
            "scan complete: {} files, {} duplicates",
            summary.total_files,
            summary.duplicate_count
        );
        Ok((duplicates, summary))
    }
}

/// Hash one directory's files sequentially and merge into the shared index.
fn process_unit(unit: &DirUnit, index: &DigestIndex) -> UnitOutcome {
    let mut outcome = UnitOutcome::default();

    for path in &unit.files {
        let digest = match digest_file(path) {
            Ok(d) => d,
            Err(err) => {
                log::warn!("skipping unhashable file: {}", err);
                outcome.failed += 1;
                continue;
            }
        };
        outcome.hashed += 1;

        match index.observe(digest, path) {
            Observation::Inserted => {
                log::trace!("{} {}", digest_to_hex(&digest), path.display());
            }
            Observation::Duplicate { flagged, kept } => {
                log::info!(
                    "duplicate: {} (keeping {})",
                    flagged.display(),
                    kept.display()
                );
                outcome.duplicates.push(flagged);
            }
            Observation::TimestampUnavailable => {
                outcome.skipped_pairs += 1;
            }
        }
    }

    outcome
}
