//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Benchmark zip extraction throughput.
///
/// Every `*.zip` directly inside SOURCE_DIR is read into memory, extracted
/// into a fresh temporary directory, and timed. Archives run one at a time
/// in random order; the per-archive speeds are followed by their mean and
/// median.
#[derive(Parser)]
#[command(name = "unzipbench")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Directory holding the zip archives to benchmark
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,
}
