//! Directory walker producing per-directory work units.
//!
//! # Overview
//!
//! [`Walker`] enumerates every directory under a root (the root included)
//! and yields one [`DirUnit`] per directory, carrying the full paths of the
//! regular files directly inside it. This is the granularity at which the
//! duplicate finder parallelizes: one unit, one worker task.
//!
//! Traversal errors (unreadable directories, vanished entries) are logged
//! at warn level and skipped; they never abort the walk.
//!
//! # Example
//!
//! ```no_run
//! use dupsweep::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! for unit in walker.units() {
//!     println!("{}: {} files", unit.dir.display(), unit.files.len());
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::DirUnit;

/// Recursive directory walker yielding one [`DirUnit`] per directory.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker rooted at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Walk the tree, yielding one unit per directory visited.
    ///
    /// Symbolic links are not followed. File names within a unit are sorted
    /// so unit contents are deterministic even though unit scheduling is not.
    pub fn units(&self) -> impl Iterator<Item = DirUnit> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => unit_for(entry.path()),
                Ok(_) => None,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {}", err);
                    None
                }
            })
    }
}

/// Build the unit for a single directory, listing its regular files.
fn unit_for(dir: &Path) -> Option<DirUnit> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) => {
            log::warn!("cannot read directory {}: {}", dir.display(), err);
            return None;
        }
    };

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("skipping entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        match entry.file_type() {
            Ok(ft) if ft.is_file() => files.push(entry.path()),
            Ok(_) => {}
            Err(err) => {
                log::warn!(
                    "cannot determine type of {}: {}",
                    entry.path().display(),
                    err
                );
            }
        }
    }

    files.sort();
    Some(DirUnit {
        dir: dir.to_path_buf(),
        files,
    })
}
