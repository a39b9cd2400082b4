//! The benchmark registry and the measurement loop

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::Result;
use lapmark::collection;
use lapmark::counting::CountingSequence;
use log::debug;

use super::args::CommandLineArgs;
use super::format::{format_duration, Header};
use super::summary::RunResult;
use crate::error::Error;

/// A registered benchmark pairing a name with its workload
///
/// The workload takes the run value as its single parameter and is executed
/// once per warmup and measured iteration.
#[derive(Debug)]
pub struct Benchmark {
    /// The name used with `--tests` and in the summary
    pub name: &'static str,
    /// A short description of the workload shown in the run header
    pub description: &'static str,
    workload: fn(i64),
}

/// Return all registered benchmarks in execution order
pub fn benchmarks() -> Vec<Benchmark> {
    vec![
        Benchmark {
            name: "counting-sequence",
            description: "drain a counting sequence from 1 to the run value",
            workload: count_sequence,
        },
        Benchmark {
            name: "sort-collection",
            description: "sort a random integer collection with the run value as size",
            workload: sort_collection,
        },
    ]
}

/// Select the benchmarks with the given names
///
/// An empty `names` slice selects all benchmarks. The execution order of
/// [`benchmarks`] is preserved no matter in which order the names are given.
pub fn select(names: &[String]) -> Result<Vec<Benchmark>> {
    let mut selected = benchmarks();
    if names.is_empty() {
        return Ok(selected);
    }

    let available: Vec<String> = selected
        .iter()
        .map(|benchmark| benchmark.name.to_owned())
        .collect();
    for name in names {
        if !available.contains(name) {
            return Err(Error::UnknownBenchmark(name.clone(), available).into());
        }
    }

    selected.retain(|benchmark| names.iter().any(|name| name == benchmark.name));
    Ok(selected)
}

impl Benchmark {
    /// Run the warmup and the measured iterations appending to `results`
    ///
    /// Prints a header before the first iteration and the mean time of all
    /// measured iterations afterwards. The single iteration times are logged
    /// at debug level.
    pub fn run(&self, run_value: i64, args: &CommandLineArgs, results: &mut Vec<RunResult>) {
        Header::new(self.name, run_value, self.description).print();

        for iteration in 0..args.warmup {
            debug!("{}: warmup iteration {iteration}", self.name);
            (self.workload)(run_value);
        }

        let mut total = Duration::ZERO;
        for iteration in 0..args.iterations {
            let start = Instant::now();
            (self.workload)(run_value);
            let time = start.elapsed();

            debug!(
                "{}: iteration {iteration}: {}",
                self.name,
                format_duration(time)
            );

            total += time;
            results.push(RunResult {
                benchmark: self.name.to_owned(),
                run: run_value,
                iterations: args.iterations,
                time,
            });
        }

        if args.iterations > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let mean = total / args.iterations as u32;
            println!(
                "  {} iterations, mean {}",
                args.iterations,
                format_duration(mean)
            );
        }
    }
}

fn count_sequence(limit: i64) {
    for value in CountingSequence::new(limit) {
        black_box(value);
    }
}

fn sort_collection(size: i64) {
    let size = usize::try_from(size).unwrap_or_default();
    let mut values = collection::generate(size);
    values.sort_unstable();
    black_box(values);
}
