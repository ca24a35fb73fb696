use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error(
        "invalid error probability {value} at position {index}, all values must be between 0 and 1"
    )]
    InvalidErrorProbability { index: usize, value: f64 },
    #[error("error probability at position {index} is NaN")]
    NanErrorProbability { index: usize },
    #[error("invalid PHRED score {value} at position {index}, scores must be non-negative")]
    InvalidPhredScore { index: usize, value: f64 },
    #[error("invalid record at line {line}, expected a single numeric value")]
    InvalidRecord { line: usize },
}
