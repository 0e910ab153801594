//! Process exit codes.

/// Exit codes for the dupsweep binary.
///
/// - 0: completed normally, duplicates found (and removed if requested)
/// - 1: unexpected failure (invalid root, pool construction, prompt I/O)
/// - 2: completed normally, no duplicates found
/// - 3: completed with non-fatal errors (unhashable files, failed removals)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Scan completed and duplicates were found.
    Success = 0,
    /// An unexpected error occurred.
    GeneralError = 1,
    /// Scan completed but no duplicates were found.
    NoDuplicates = 2,
    /// Scan completed but some files could not be hashed or removed.
    PartialSuccess = 3,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NoDuplicates.as_i32(), 2);
        assert_eq!(ExitCode::PartialSuccess.as_i32(), 3);
    }
}
