//! Scanner module for directory traversal and file hashing.
//!
//! The scanner is divided into submodules:
//! - [`walker`]: directory traversal producing per-directory work units
//! - [`hasher`]: streaming SHA-256 hashing and creation-time lookup
//!
//! Traversal is parallelized at directory granularity: the [`Walker`] yields
//! one [`DirUnit`] per directory visited, and the duplicate finder fans those
//! units out to a worker pool. Files within a unit are processed
//! sequentially.

pub mod hasher;
pub mod walker;

use std::io;
use std::path::PathBuf;

pub use hasher::{creation_time, digest_file, digest_to_hex, Digest, CHUNK_SIZE};
pub use walker::Walker;

/// One unit of work: a directory and the regular files directly within it.
///
/// Units are non-recursive; recursion comes from the walker enumerating
/// every directory in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirUnit {
    /// Path of the directory this unit covers.
    pub dir: PathBuf,
    /// Full paths of the regular files directly inside `dir`, sorted by name.
    pub files: Vec<PathBuf>,
}

/// Errors that can occur while reading a file for hashing or metadata.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file was not found (it may have vanished mid-scan).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O error while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl HashError {
    pub(crate) fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_error_display() {
        let err = HashError::NotFound(PathBuf::from("/missing"));
        assert_eq!(err.to_string(), "file not found: /missing");

        let err = HashError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "permission denied: /secret");
    }

    #[test]
    fn hash_error_from_io_maps_kinds() {
        let path = std::path::Path::new("/x");

        let err = HashError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, HashError::NotFound(_)));

        let err = HashError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, HashError::PermissionDenied(_)));

        let err = HashError::from_io(path, io::Error::from(io::ErrorKind::Other));
        assert!(matches!(err, HashError::Io { .. }));
    }
}
