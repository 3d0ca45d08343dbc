//! Per-archive extraction counters and run observers.

use std::path::Path;

use crate::BenchError;
use crate::bench::ExtractionJob;

/// Counters collected while extracting one archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Number of regular files written.
    pub files_extracted: usize,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Total decompressed bytes written to disk.
    pub bytes_written: u64,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of entries processed.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}

/// Callback trait for following a benchmark run as it happens.
///
/// The run driver calls these in processing order, so an implementation that
/// prints from `on_job_complete` reproduces the per-archive report lines.
///
/// # Examples
///
/// ```
/// use unzipbench_core::BenchObserver;
/// use unzipbench_core::ExtractionJob;
///
/// struct Count(usize);
///
/// impl BenchObserver for Count {
///     fn on_job_complete(&mut self, _job: &ExtractionJob) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait BenchObserver {
    /// Called before an archive is read.
    ///
    /// * `path` - Archive about to be processed
    /// * `current` - 1-indexed position in the shuffled order
    /// * `total` - Number of archives discovered
    fn on_job_start(&mut self, _path: &Path, _current: usize, _total: usize) {}

    /// Called once an archive has been extracted, timed, and cleaned up.
    fn on_job_complete(&mut self, job: &ExtractionJob);

    /// Called for an archive that failed under `FailurePolicy::Continue`.
    fn on_job_failed(&mut self, _error: &BenchError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl BenchObserver for NoopObserver {
    fn on_job_complete(&mut self, _job: &ExtractionJob) {}
}
