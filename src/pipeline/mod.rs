//! Batch orchestration for SBOM assessment.
//!
//! Discovers input files, runs assessments across the batch, and writes
//! report output. A failure in one document never aborts the batch; it is
//! recorded as a failed entry in input order.

mod batch;
mod discover;
mod output;

pub use batch::{assess_batch, assess_file, BatchEntry};
pub use discover::discover_inputs;
pub use output::{write_output, OutputTarget};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// All documents assessed successfully
    pub const SUCCESS: i32 = 0;
    /// At least one document could not be assessed
    pub const DOCUMENT_FAILURES: i32 = 1;
    /// An error occurred (bad path, config load failure)
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::DOCUMENT_FAILURES, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
