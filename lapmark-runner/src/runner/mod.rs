//! The module containing the harness entry point and its submodules

pub mod args;
pub mod format;
pub mod harness;
pub mod summary;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::debug;

use self::args::CommandLineArgs;

/// The environment variables recognized by the runner
pub mod envs {
    /// Override the color output with `always` or `never`
    pub const LAPMARK_COLOR: &str = "LAPMARK_COLOR";
    /// The log level filter of the runner, defaults to `warn`
    pub const LAPMARK_LOG: &str = "LAPMARK_LOG";

    /// Cargo's color control, consulted when [`LAPMARK_COLOR`] is unset
    pub const CARGO_TERM_COLOR: &str = "CARGO_TERM_COLOR";
}

/// Run the selected benchmarks and print the summary
///
/// Every benchmark is executed once per run value with the configured number
/// of warmup and measured iterations. Afterwards the collected measurements
/// are aggregated, optionally saved to a json file and printed as a ranked
/// comparison per run value.
pub fn run() -> Result<()> {
    let args = CommandLineArgs::parse();
    debug!("Command-line arguments: {args:?}");

    let start = Instant::now();
    let benchmarks = harness::select(&args.tests)?;

    let mut results = vec![];
    for run_value in args.run_values() {
        for benchmark in &benchmarks {
            benchmark.run(run_value, &args, &mut results);
        }
    }

    let summaries = summary::summarize(&results);
    if let Some(path) = &args.save_summary {
        summary::save_json(&summaries, path)?;
    }

    format::print_summary(&summaries);
    format::print_finish(summaries.len(), start.elapsed());

    Ok(())
}
