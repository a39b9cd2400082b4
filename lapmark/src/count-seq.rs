//! The standalone counting sequence generator
//!
//! Prints the integers from 1 to the limit given as the first command-line
//! argument (default 10,000), one per line. A non-integer limit is reported
//! on stderr and exits with status 1.

use std::io::{self, BufWriter, Write};

use lapmark::counting::CountingSequence;

fn parse_limit() -> Result<i64, String> {
    match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .map_err(|_| format!("Error: '{arg}' is not a valid integer")),
        None => Ok(CountingSequence::DEFAULT_LIMIT),
    }
}

fn main() {
    let limit = match parse_limit() {
        Ok(limit) => limit,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for value in CountingSequence::new(limit) {
        writeln!(writer, "{value}").unwrap();
    }
    writer.flush().unwrap();
}
