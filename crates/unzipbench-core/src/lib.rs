//! Zip extraction throughput benchmarking.
//!
//! `unzipbench-core` reads every `*.zip` in a directory into memory,
//! extracts each one into a scratch directory, times the extraction, and
//! reports per-archive and aggregate (mean, median) speeds. Archives are
//! processed sequentially in shuffled order, and entry names are validated
//! so nothing is written outside the scratch directory.
//!
//! # Examples
//!
//! ```no_run
//! use unzipbench_core::BenchConfig;
//! use unzipbench_core::Benchmark;
//! use unzipbench_core::NoopObserver;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut bench = Benchmark::new(BenchConfig::default());
//! let result = bench.run("/data/archives", &mut NoopObserver)?;
//! println!("median: {:?} B/s", result.median_speed());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bench;
pub mod config;
pub mod copy;
pub mod error;
pub mod formats;
pub mod report;
pub mod shuffle;
pub mod stats;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use bench::Benchmark;
pub use bench::ExtractionJob;
pub use bench::RunResult;
pub use bench::Timer;
pub use bench::WallClock;
pub use config::BenchConfig;
pub use error::BenchError;
pub use error::ExtractionError;
pub use error::Result;
pub use formats::ZipExtractor;
pub use formats::extract_zip;
pub use report::BenchObserver;
pub use report::ExtractionReport;
pub use report::NoopObserver;
