//! Human-readable benchmark report.

use console::Term;
use humansize::BINARY;
use humansize::format_size;
use unzipbench_core::BenchObserver;
use unzipbench_core::ExtractionJob;

/// Prints one line per finished archive and a closing summary to stdout.
pub struct HumanReporter {
    term: Term,
}

impl HumanReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Prints the mean and median speeds after a blank line.
    pub fn summary(&self, average: f64, median: f64) {
        let _ = self.term.write_line("");
        let _ = self
            .term
            .write_line(&format!("Average speed:    {}/s", format_speed(average)));
        let _ = self
            .term
            .write_line(&format!("Median speed:     {}/s", format_speed(median)));
    }
}

impl Default for HumanReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchObserver for HumanReporter {
    fn on_job_complete(&mut self, job: &ExtractionJob) {
        let _ = self.term.write_line(&format_job_line(job));
    }
}

fn format_job_line(job: &ExtractionJob) -> String {
    format!(
        "{}/s         {}          {}",
        format_speed(job.speed()),
        format_size(job.size, BINARY),
        job.elapsed.as_secs_f64()
    )
}

/// Speeds are whole bytes per second once scaled.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_speed(bytes_per_sec: f64) -> String {
    format_size(bytes_per_sec as u64, BINARY)
}
