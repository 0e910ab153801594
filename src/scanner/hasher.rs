//! Streaming SHA-256 file hashing and creation-time lookup.
//!
//! Files are read in fixed-size chunks so memory use stays bounded
//! regardless of file size. Hashing is all-or-nothing: either the whole
//! file is consumed and a digest produced, or the call fails with a
//! [`HashError`] and the file is excluded from duplicate consideration.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::SystemTime;

use sha2::{Digest as _, Sha256};

use super::HashError;

/// Read buffer size for streaming hashing.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// A 256-bit content digest.
pub type Digest = [u8; 32];

/// Compute the SHA-256 digest of the file at `path`.
///
/// Reads the file sequentially in [`CHUNK_SIZE`] chunks. No partial digest
/// is ever exposed: any read failure aborts the whole computation.
pub fn digest_file(path: &Path) -> Result<Digest, HashError> {
    let mut file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf).map_err(|e| HashError::from_io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hasher.finalize().into())
}

/// Look up the creation timestamp of the file at `path`.
///
/// Uses the filesystem's birth time where the platform reports one and
/// falls back to the modification time elsewhere. Fails if the file is
/// missing or inaccessible at the time of the call; a file that vanishes
/// between hashing and this lookup surfaces here.
pub fn creation_time(path: &Path) -> Result<SystemTime, HashError> {
    let metadata = std::fs::metadata(path).map_err(|e| HashError::from_io(path, e))?;
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .map_err(|e| HashError::from_io(path, e))
}

/// Render a digest as a lowercase hex string.
#[must_use]
pub fn digest_to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn empty_file_has_standard_digest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty");
        File::create(&path).unwrap();

        let digest = digest_file(&path).unwrap();
        assert_eq!(digest_to_hex(&digest), EMPTY_SHA256);
    }

    #[test]
    fn known_content_digest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello");
        File::create(&path)
            .unwrap()
            .write_all(b"hello world")
            .unwrap();

        let digest = digest_file(&path).unwrap();
        assert_eq!(
            digest_to_hex(&digest),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn multi_chunk_file_matches_one_shot_digest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big");

        // Spans three read chunks, last one partial.
        let content: Vec<u8> = (0..(CHUNK_SIZE * 2 + 17)).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &content).unwrap();

        let streamed = digest_file(&path).unwrap();
        let one_shot: Digest = Sha256::digest(&content).into();
        assert_eq!(streamed, one_shot);
    }

    #[test]
    fn missing_file_fails_with_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone");

        let err = digest_file(&path).unwrap_err();
        assert!(matches!(err, HashError::NotFound(_)));

        let err = creation_time(&path).unwrap_err();
        assert!(matches!(err, HashError::NotFound(_)));
    }

    #[test]
    fn creation_time_of_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file");
        File::create(&path).unwrap();

        let created = creation_time(&path).unwrap();
        assert!(created <= SystemTime::now());
    }
}
