//! Unzipbench CLI - measures how fast a directory of zip archives extracts.

mod cli;
mod error;
mod output;

use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unzipbench_core::BenchConfig;
use unzipbench_core::Benchmark;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging();

    let mut reporter = output::HumanReporter::new();
    let mut bench = Benchmark::new(BenchConfig::default());
    let result = bench
        .run(&cli.source_dir, &mut reporter)
        .map_err(error::convert_bench_error)?;

    let (Some(average), Some(median)) = (result.average_speed(), result.median_speed()) else {
        bail!(
            "No archive in '{}' was extracted successfully",
            cli.source_dir.display()
        );
    };
    reporter.summary(average, median);

    Ok(())
}

/// Logs go to stderr so stdout only carries the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
