//! The command-line arguments of the runner

use std::path::PathBuf;

use clap::Parser;

/// The run value used when no `--runs` are given
const DEFAULT_RUN: i64 = 10_000;

/// The command-line arguments of the `lapmark-runner` binary
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Wall-clock micro-benchmark harness for the lapmark workloads",
    long_about = None,
)]
pub struct CommandLineArgs {
    /// Run only the benchmarks with the given names
    #[clap(short = 't', long = "tests", num_args = 1.., value_name = "NAME")]
    pub tests: Vec<String>,

    /// The number of measured iterations per benchmark and run value
    #[clap(
        short = 'i',
        long = "iterations",
        default_value_t = 15,
        value_name = "N"
    )]
    pub iterations: usize,

    /// The run values. Every value produces a separate run of each benchmark
    #[clap(
        short = 'r',
        long = "runs",
        num_args = 1..,
        value_name = "VALUE",
        allow_negative_numbers = true
    )]
    pub runs: Vec<i64>,

    /// The number of unmeasured warmup iterations per benchmark and run value
    #[clap(short = 'w', long = "warmup", default_value_t = 0, value_name = "N")]
    pub warmup: usize,

    /// Save a summary of all runs in json format to this file
    #[clap(long = "save-summary", value_name = "PATH")]
    pub save_summary: Option<PathBuf>,
}

impl CommandLineArgs {
    /// The run values to benchmark, falling back to the default run value
    pub fn run_values(&self) -> Vec<i64> {
        if self.runs.is_empty() {
            vec![DEFAULT_RUN]
        } else {
            self.runs.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> CommandLineArgs {
        CommandLineArgs::try_parse_from(std::iter::once("lapmark-runner").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        assert!(args.tests.is_empty());
        assert_eq!(args.iterations, 15);
        assert_eq!(args.warmup, 0);
        assert_eq!(args.save_summary, None);
        assert_eq!(args.run_values(), vec![10_000]);
    }

    #[rstest]
    #[case::single(&["-t", "counting-sequence"], &["counting-sequence"])]
    #[case::multiple(&["--tests", "counting-sequence", "sort-collection"], &["counting-sequence", "sort-collection"])]
    fn test_tests_filter(#[case] args: &[&str], #[case] expected: &[&str]) {
        let args = parse(args);

        assert_eq!(args.tests, expected);
    }

    #[rstest]
    #[case::single(&["--runs", "100"], &[100])]
    #[case::multiple(&["-r", "100", "1000"], &[100, 1000])]
    #[case::negative(&["--runs", "-5"], &[-5])]
    fn test_run_values(#[case] args: &[&str], #[case] expected: &[i64]) {
        let args = parse(args);

        assert_eq!(args.run_values(), expected);
    }

    #[test]
    fn test_iterations_and_warmup() {
        let args = parse(&["-i", "3", "-w", "2"]);

        assert_eq!(args.iterations, 3);
        assert_eq!(args.warmup, 2);
    }
}
