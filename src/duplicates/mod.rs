//! Duplicate detection: the concurrent digest-index pipeline.

pub mod finder;

pub use finder::{
    pick_duplicate, DuplicateFinder, FinderConfig, FinderError, Flagged, ScanSummary,
};
