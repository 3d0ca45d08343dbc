//! Benchmark run driver.
//!
//! A run discovers the archives in a directory, shuffles them, and for each
//! one reads it into memory, extracts it into a fresh scratch directory
//! while timing only the extraction, removes the scratch directory, and
//! records the resulting speed.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing::warn;
use walkdir::WalkDir;

use crate::BenchConfig;
use crate::BenchError;
use crate::ExtractionReport;
use crate::config::FailurePolicy;
use crate::formats::ZipExtractor;
use crate::report::BenchObserver;
use crate::shuffle::clock_seeded_rng;
use crate::shuffle::shuffle;
use crate::stats;

/// Measures how long a closure takes.
///
/// [`WallClock`] is the real implementation; tests substitute a timer that
/// reports a fixed duration.
pub trait Timer {
    /// Runs `f` and returns its output with the elapsed time.
    fn time<T>(&mut self, f: impl FnOnce() -> T) -> (T, Duration);
}

/// Monotonic wall-clock timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Timer for WallClock {
    fn time<T>(&mut self, f: impl FnOnce() -> T) -> (T, Duration) {
        let start = Instant::now();
        let output = f();
        (output, start.elapsed())
    }
}

/// One archive's measured extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionJob {
    /// Archive that was extracted.
    pub path: PathBuf,

    /// Archive size in bytes (the compressed file, not its contents).
    pub size: u64,

    /// Time spent inside the extractor.
    pub elapsed: Duration,

    /// What the extractor wrote.
    pub report: ExtractionReport,
}

impl ExtractionJob {
    /// Archive bytes per second of extraction time.
    ///
    /// Elapsed time is floored at one nanosecond so an immeasurably fast
    /// extraction yields a large finite speed instead of infinity.
    #[must_use]
    pub fn speed(&self) -> f64 {
        let elapsed = self.elapsed.max(Duration::from_nanos(1));
        self.size as f64 / elapsed.as_secs_f64()
    }
}

/// Everything a run produced, in processing order.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Successfully measured archives.
    pub jobs: Vec<ExtractionJob>,

    /// Archives skipped under `FailurePolicy::Continue`.
    pub failures: Vec<BenchError>,
}

impl RunResult {
    /// Speeds of the measured archives, in processing order.
    #[must_use]
    pub fn speeds(&self) -> Vec<f64> {
        self.jobs.iter().map(ExtractionJob::speed).collect()
    }

    /// Mean speed, or `None` if no archive was measured.
    #[must_use]
    pub fn average_speed(&self) -> Option<f64> {
        stats::average(&self.speeds())
    }

    /// Median speed, or `None` if no archive was measured.
    #[must_use]
    pub fn median_speed(&self) -> Option<f64> {
        stats::median(&self.speeds())
    }
}

/// Runs extraction benchmarks over a directory of archives.
///
/// Generic over its randomness source and timer so both can be replaced in
/// tests.
///
/// # Examples
///
/// ```no_run
/// use unzipbench_core::BenchConfig;
/// use unzipbench_core::Benchmark;
/// use unzipbench_core::NoopObserver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut bench = Benchmark::new(BenchConfig::default());
/// let result = bench.run("/data/symbols", &mut NoopObserver)?;
/// if let Some(avg) = result.average_speed() {
///     println!("{avg:.0} B/s over {} archives", result.jobs.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Benchmark<R = StdRng, T = WallClock> {
    config: BenchConfig,
    rng: R,
    timer: T,
    extractor: ZipExtractor,
}

impl Benchmark {
    /// Creates a benchmark with a clock-seeded shuffle and the wall clock.
    #[must_use]
    pub fn new(config: BenchConfig) -> Self {
        Self::with_parts(config, clock_seeded_rng(), WallClock)
    }
}

impl<R: Rng, T: Timer> Benchmark<R, T> {
    /// Creates a benchmark with an explicit randomness source and timer.
    pub fn with_parts(config: BenchConfig, rng: R, timer: T) -> Self {
        let extractor = ZipExtractor::new(config.extract.clone());
        Self {
            config,
            rng,
            timer,
            extractor,
        }
    }

    /// Lists `*.<extension>` files directly inside `source_dir`, sorted by
    /// file name.
    ///
    /// Only matching names are stat'ed, so unrelated entries (including
    /// dangling symlinks) never fail discovery. Symlinks with a matching
    /// name are followed; subdirectories are not descended into.
    pub fn discover(&self, source_dir: &Path) -> Result<Vec<PathBuf>, BenchError> {
        let discovery_error = |source: std::io::Error| BenchError::Discovery {
            path: source_dir.to_path_buf(),
            source,
        };
        let mut archives = Vec::new();

        let walker = WalkDir::new(source_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| discovery_error(e.into()))?;

            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.matches_extension(name));
            if !matches {
                continue;
            }

            let is_file = if entry.path_is_symlink() {
                std::fs::metadata(entry.path())
                    .map_err(discovery_error)?
                    .is_file()
            } else {
                entry.file_type().is_file()
            };

            if is_file {
                archives.push(entry.into_path());
            }
        }

        Ok(archives)
    }

    /// Benchmarks every archive in `source_dir`.
    ///
    /// Archives are processed one at a time in shuffled order and reported
    /// to `observer` as they finish.
    ///
    /// # Errors
    ///
    /// - `BenchError::Discovery` if the directory cannot be listed
    /// - `BenchError::NoArchives` if it holds no matching files
    /// - under `FailurePolicy::Abort`, the first per-archive error
    pub fn run(
        &mut self,
        source_dir: impl AsRef<Path>,
        observer: &mut dyn BenchObserver,
    ) -> Result<RunResult, BenchError> {
        let source_dir = source_dir.as_ref();
        let mut archives = self.discover(source_dir)?;

        if archives.is_empty() {
            return Err(BenchError::NoArchives {
                path: source_dir.to_path_buf(),
                extension: self.config.extension.clone(),
            });
        }

        shuffle(&mut archives, &mut self.rng);
        debug!(count = archives.len(), dir = %source_dir.display(), "discovered archives");

        let total = archives.len();
        let mut result = RunResult::default();

        for (index, archive) in archives.iter().enumerate() {
            observer.on_job_start(archive, index + 1, total);

            match self.run_one(archive) {
                Ok(job) => {
                    observer.on_job_complete(&job);
                    result.jobs.push(job);
                }
                Err(err) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Continue => {
                        warn!(archive = %archive.display(), error = %err, "skipping archive");
                        observer.on_job_failed(&err);
                        result.failures.push(err);
                    }
                },
            }
        }

        Ok(result)
    }

    /// Reads, extracts, times, and cleans up a single archive.
    pub fn run_one(&mut self, archive: &Path) -> Result<ExtractionJob, BenchError> {
        let bytes = std::fs::read(archive).map_err(|source| BenchError::Read {
            path: archive.to_path_buf(),
            source,
        })?;

        let mut builder = tempfile::Builder::new();
        builder.prefix(&self.config.temp_prefix);
        let scratch = match &self.config.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|source| BenchError::TempDir {
            path: archive.to_path_buf(),
            source,
        })?;

        debug!(archive = %archive.display(), size = bytes.len(), "extracting");

        let extractor = &mut self.extractor;
        let (outcome, elapsed) = self
            .timer
            .time(|| extractor.extract(scratch.path(), &bytes));

        let scratch_path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            warn!(dir = %scratch_path.display(), error = %e, "failed to remove scratch directory");
        }

        let report = outcome.map_err(|source| BenchError::Extraction {
            path: archive.to_path_buf(),
            source,
        })?;

        let job = ExtractionJob {
            path: archive.to_path_buf(),
            size: bytes.len() as u64,
            elapsed,
            report,
        };
        debug!(
            archive = %archive.display(),
            elapsed_secs = job.elapsed.as_secs_f64(),
            speed = job.speed(),
            files = job.report.files_extracted,
            "extracted"
        );

        Ok(job)
    }
}
