//! The module containing the crate main [`Error`] type

use std::fmt::Display;
use std::path::PathBuf;

/// The main lapmark error type
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The error when creating or writing the summary file fails
    ///
    /// `SummaryError(file_path, message)`
    SummaryError(PathBuf, String),
    /// An unknown benchmark name was given with `--tests`
    ///
    /// `UnknownBenchmark(name, available_names)`
    UnknownBenchmark(String, Vec<String>),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SummaryError(path, message) => {
                write!(
                    f,
                    "Error writing summary file '{}': {message}",
                    path.display()
                )
            }
            Self::UnknownBenchmark(name, available) => {
                write!(
                    f,
                    "Unknown benchmark: '{name}'. Available benchmarks are: {}",
                    available.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_benchmark_lists_the_available_names() {
        let error = Error::UnknownBenchmark(
            "no-such-bench".to_owned(),
            vec!["first".to_owned(), "second".to_owned()],
        );

        assert_eq!(
            error.to_string(),
            "Unknown benchmark: 'no-such-bench'. Available benchmarks are: first, second"
        );
    }
}
