//! Error conversion utilities for CLI.
//!
//! Converts unzipbench-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use unzipbench_core::BenchError;
use unzipbench_core::ExtractionError;

/// Converts `BenchError` to a user-friendly anyhow error with context
pub fn convert_bench_error(err: BenchError) -> anyhow::Error {
    match err {
        BenchError::NoArchives { path, extension } => {
            anyhow!(
                "No .{extension} archives found in '{}'\n\
                 HINT: Point unzipbench at a directory that directly contains .{extension} files.",
                path.display()
            )
        }
        BenchError::Discovery { path, source } => {
            anyhow!(
                "Cannot list archives in '{}': {source}\n\
                 HINT: Check that the directory exists and is readable.",
                path.display()
            )
        }
        BenchError::Read { path, source } => {
            anyhow!("Cannot read archive '{}': {source}", path.display())
        }
        BenchError::TempDir { path, source } => {
            anyhow!(
                "Cannot create a temporary directory for '{}': {source}\n\
                 HINT: Check free space and permissions of the system temp directory.",
                path.display()
            )
        }
        BenchError::Extraction { path, source } => match source {
            ExtractionError::PathTraversal { path: entry } => {
                anyhow!(
                    "Security violation: Archive '{}' attempted path traversal with '{}'\n\
                     HINT: This archive may be malicious. Do not extract from untrusted sources.",
                    path.display(),
                    entry.display()
                )
            }
            ExtractionError::SecurityViolation { reason } => {
                anyhow!(
                    "Security violation in '{}': {reason}\n\
                     HINT: This archive may be malicious. Do not extract from untrusted sources.",
                    path.display()
                )
            }
            ExtractionError::InvalidArchive(reason) => {
                anyhow!(
                    "Invalid archive '{}': {reason}\n\
                     HINT: The archive may be corrupted or malformed.",
                    path.display()
                )
            }
            ExtractionError::Io(io_err) => {
                anyhow!(
                    "I/O error while extracting '{}': {io_err}",
                    path.display()
                )
            }
        },
    }
}
