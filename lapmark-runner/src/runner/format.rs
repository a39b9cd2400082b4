//! Format benchmark headers and summaries for the console

use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;

use super::summary::RunSummary;

/// The string printed when a value cannot be calculated
pub const NOT_AVAILABLE: &str = "N/A";

/// The header printed before the iterations of a benchmark run
pub struct Header {
    /// The name of the benchmark
    pub name: String,
    /// The run value of this run
    pub run: i64,
    /// The description of the workload
    pub description: String,
}

impl Header {
    /// Create a new `Header`
    pub fn new<T, U>(name: T, run: i64, description: U) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            run,
            description: description.into(),
        }
    }

    /// Print the header to stdout
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} {}{} {}",
            self.name.green(),
            self.run.to_string().cyan(),
            ":".cyan(),
            self.description.bold().blue()
        ))
    }
}

/// Format a duration with the unit fitting its magnitude
///
/// The higher the magnitude the coarser the unit, so the number of digits
/// stays roughly constant.
pub fn format_duration(time: Duration) -> String {
    const NANOS_PER_US: f64 = 1_000.0;
    const NANOS_PER_MS: f64 = 1_000_000.0;
    const NANOS_PER_S: f64 = 1_000_000_000.0;
    const NANOS_PER_MIN: f64 = 60.0 * NANOS_PER_S;
    const NANOS_PER_HOUR: f64 = 60.0 * NANOS_PER_MIN;

    #[allow(clippy::cast_precision_loss)]
    let nanos = time.as_nanos() as f64;

    if nanos < NANOS_PER_US {
        format!("{nanos:.1} ns")
    } else if nanos < NANOS_PER_MS {
        format!("{:.3} us", nanos / NANOS_PER_US)
    } else if nanos < NANOS_PER_S {
        format!("{:.3} ms", nanos / NANOS_PER_MS)
    } else if nanos < NANOS_PER_MIN {
        format!("{:.3} s", nanos / NANOS_PER_S)
    } else if nanos < NANOS_PER_HOUR {
        format!("{:.1} min", nanos / NANOS_PER_MIN)
    } else {
        format!("{:.1} h", nanos / NANOS_PER_HOUR)
    }
}

/// Print the ranked comparison of all run summaries grouped by run value
///
/// Within a group the benchmarks are ordered by their mean time. The ratio
/// column compares each mean against the smallest mean of the group.
pub fn print_summary(summaries: &[RunSummary]) {
    let mut run_values: Vec<i64> = vec![];
    for summary in summaries {
        if !run_values.contains(&summary.run) {
            run_values.push(summary.run);
        }
    }

    for run in run_values {
        let mut group: Vec<&RunSummary> = summaries
            .iter()
            .filter(|summary| summary.run == run)
            .collect();
        group.sort_by_key(|summary| summary.mean);

        println!();
        println!("{}", format!("Comparison for run value {run}").bold());
        println!(
            "  {:<4}  {:<20}  {:>4}  {:>12}  {:>12}  {:>12}  {:>6}",
            "rank", "benchmark", "n", "mean", "error", "std dev", "ratio"
        );

        let min_mean = group
            .first()
            .map_or(Duration::ZERO, |summary| summary.mean);
        for (index, summary) in group.iter().enumerate() {
            let ratio = summary.mean.as_secs_f64() / min_mean.as_secs_f64();
            let ratio = if ratio.is_finite() {
                format!("{ratio:.2}")
            } else {
                NOT_AVAILABLE.to_owned()
            };

            println!(
                "  {:<4}  {:<20}  {:>4}  {:>12}  {:>12}  {:>12}  {:>6}",
                index + 1,
                summary.benchmark.green(),
                summary.iterations,
                format_duration(summary.mean),
                format_duration(summary.error),
                format_duration(summary.std_dev),
                ratio
            );
        }
    }
}

/// Print the footer with the total amount of runs and the total execution time
pub fn print_finish(num_runs: usize, elapsed: Duration) {
    println!();
    println!(
        "Finished {num_runs} benchmark runs in {}",
        format_duration(elapsed).bold()
    );
}
