//! The summary of all benchmark runs

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single measured iteration of a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// The name of the benchmark
    pub benchmark: String,
    /// The run value the workload was invoked with
    pub run: i64,
    /// The total number of measured iterations of this run
    pub iterations: usize,
    /// The measured wall-clock time of this iteration
    pub time: Duration,
}

/// The aggregated statistics over all iterations of a benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// The name of the benchmark
    pub benchmark: String,
    /// The run value the workload was invoked with
    pub run: i64,
    /// The number of measured iterations
    pub iterations: usize,
    /// The arithmetic mean over all iteration times
    pub mean: Duration,
    /// The standard error of the mean
    pub error: Duration,
    /// The population standard deviation over all iteration times
    pub std_dev: Duration,
}

/// Group the results by benchmark and run value and aggregate the statistics
///
/// The groups keep the insertion order of the results.
pub fn summarize(results: &[RunResult]) -> Vec<RunSummary> {
    let mut groups: IndexMap<(String, i64, usize), Vec<Duration>> = IndexMap::new();
    for result in results {
        groups
            .entry((result.benchmark.clone(), result.run, result.iterations))
            .or_default()
            .push(result.time);
    }

    groups
        .into_iter()
        .map(|((benchmark, run, iterations), times)| {
            let (mean, error, std_dev) = statistics(&times);
            RunSummary {
                benchmark,
                run,
                iterations,
                mean,
                error,
                std_dev,
            }
        })
        .collect()
}

/// Save the summaries in pretty printed json format to `path`
pub fn save_json(summaries: &[RunSummary], path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|error| Error::SummaryError(path.to_owned(), error.to_string()))?;
    serde_json::to_writer_pretty(file, summaries)
        .with_context(|| "Failed to serialize the summary to json".to_owned())?;

    Ok(())
}

/// Calculate the mean, the standard error and the population standard deviation
///
/// The standard deviation divides by the number of measurements, the standard
/// error is the standard deviation divided by its square root. An empty input
/// yields zero durations.
fn statistics(times: &[Duration]) -> (Duration, Duration, Duration) {
    if times.is_empty() {
        return (Duration::ZERO, Duration::ZERO, Duration::ZERO);
    }

    #[allow(clippy::cast_precision_loss)]
    let len = times.len() as f64;
    let seconds: Vec<f64> = times.iter().map(Duration::as_secs_f64).collect();

    let mean = seconds.iter().sum::<f64>() / len;
    let std_dev = (seconds
        .iter()
        .map(|secs| (secs - mean).powi(2))
        .sum::<f64>()
        / len)
        .sqrt();
    let error = std_dev / len.sqrt();

    (
        Duration::from_secs_f64(mean),
        Duration::from_secs_f64(error),
        Duration::from_secs_f64(std_dev),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // `Duration::from_secs_f64` rounds to whole nanoseconds
    const EPSILON: f64 = 1e-9;

    fn run_result(benchmark: &str, run: i64, iterations: usize, millis: u64) -> RunResult {
        RunResult {
            benchmark: benchmark.to_owned(),
            run,
            iterations,
            time: Duration::from_millis(millis),
        }
    }

    fn assert_close(actual: Duration, expected_secs: f64) {
        let actual = actual.as_secs_f64();
        assert!(
            (actual - expected_secs).abs() < EPSILON,
            "expected {expected_secs} but was {actual}"
        );
    }

    #[test]
    fn test_statistics_of_empty_input_are_zero() {
        assert_eq!(
            statistics(&[]),
            (Duration::ZERO, Duration::ZERO, Duration::ZERO)
        );
    }

    #[test]
    fn test_statistics_of_a_single_measurement() {
        let (mean, error, std_dev) = statistics(&[Duration::from_millis(5)]);

        assert_close(mean, 0.005);
        assert_eq!(error, Duration::ZERO);
        assert_eq!(std_dev, Duration::ZERO);
    }

    #[test]
    fn test_statistics_of_equal_measurements_have_no_deviation() {
        let times = [Duration::from_millis(7); 3];

        let (mean, error, std_dev) = statistics(&times);

        assert_close(mean, 0.007);
        assert_close(error, 0.0);
        assert_close(std_dev, 0.0);
    }

    #[test]
    fn test_statistics_of_known_measurements() {
        let times: Vec<Duration> = [1, 2, 3, 4].map(Duration::from_millis).to_vec();

        let (mean, error, std_dev) = statistics(&times);

        // population standard deviation of 1, 2, 3, 4 ms is sqrt(1.25) ms
        let expected_std_dev = 1.25e-6f64.sqrt();
        assert_close(mean, 0.0025);
        assert_close(std_dev, expected_std_dev);
        assert_close(error, expected_std_dev / 2.0);
    }

    #[rstest]
    #[case::empty(&[], 0)]
    #[case::single_group(&[("a", 10), ("a", 10)], 1)]
    #[case::two_benchmarks(&[("a", 10), ("b", 10), ("a", 10)], 2)]
    #[case::two_run_values(&[("a", 10), ("a", 20)], 2)]
    fn test_summarize_groups_by_benchmark_and_run(
        #[case] results: &[(&str, i64)],
        #[case] expected: usize,
    ) {
        let results: Vec<RunResult> = results
            .iter()
            .map(|(benchmark, run)| run_result(benchmark, *run, results.len(), 1))
            .collect();

        assert_eq!(summarize(&results).len(), expected);
    }

    #[test]
    fn test_summarize_keeps_the_insertion_order() {
        let results = vec![
            run_result("counting-sequence", 100, 2, 1),
            run_result("sort-collection", 100, 2, 3),
            run_result("counting-sequence", 100, 2, 2),
            run_result("sort-collection", 100, 2, 5),
        ];

        let summaries = summarize(&results);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].benchmark, "counting-sequence");
        assert_eq!(summaries[1].benchmark, "sort-collection");
        assert_close(summaries[0].mean, 0.0015);
        assert_close(summaries[1].mean, 0.004);
    }

    #[test]
    fn test_save_json_roundtrips() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("summary.json");
        let summaries = summarize(&[
            run_result("counting-sequence", 10, 1, 1),
            run_result("sort-collection", 10, 1, 2),
        ]);

        save_json(&summaries, &path).unwrap();

        let actual: Vec<RunSummary> =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(actual, summaries);
    }
}
