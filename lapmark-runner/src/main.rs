//! The `lapmark-runner` binary

use std::io::Write;

use colored::{control, Colorize};
use env_logger::Env;
use lapmark_runner::runner::envs;
use log::error;

/// The main function of the `lapmark-runner` binary
///
/// We initialize the logging interface and configure the usage of colors as
/// early as possible here. Then we call the main
/// [`lapmark_runner::runner::run`] library function catching and printing
/// errors.
fn main() {
    // Configure the colored crate to respect LAPMARK_COLOR and CARGO_TERM_COLOR
    let lapmark_color = std::env::var(envs::LAPMARK_COLOR).ok();
    if let Some(var) = lapmark_color
        .clone()
        .or_else(|| std::env::var(envs::CARGO_TERM_COLOR).ok())
    {
        if var == "never" {
            control::set_override(false);
        } else if var == "always" {
            control::set_override(true);
        } else {
            // do nothing
        }
    }

    // Configure the env_logger crate to respect LAPMARK_COLOR and CARGO_TERM_COLOR
    env_logger::Builder::from_env(
        Env::default()
            .filter_or(envs::LAPMARK_LOG, "warn")
            .write_style(
                lapmark_color.map_or_else(|| envs::CARGO_TERM_COLOR, |_| envs::LAPMARK_COLOR),
            ),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{}: {:<5}: {}",
            record
                .module_path()
                .unwrap_or_else(|| record.module_path_static().unwrap_or("???")),
            match record.level() {
                log::Level::Error => "Error".red().bold(),
                log::Level::Warn => "Warn".yellow().bold(),
                log::Level::Info => "Info".green().bold(),
                log::Level::Debug => "Debug".blue().bold(),
                log::Level::Trace => "Trace".cyan().bold(),
            },
            record.args()
        )
    })
    .init();

    match lapmark_runner::runner::run() {
        Ok(()) => {}
        Err(error) => {
            error!("{error}");
            std::process::exit(1)
        }
    }
}
