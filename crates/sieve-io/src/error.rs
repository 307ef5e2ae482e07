//! I/O error types for sieve-io.

use std::path::PathBuf;

use sieve_nn::NnError;

/// Errors from dataset loading and console reporting.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or cannot be opened.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when reading an opened file fails partway through.
    #[error("read error in {path}")]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the CSV file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the file contains no data rows.
    #[error("empty dataset (no data rows) in {path}")]
    EmptyDataset {
        /// Path to the input file.
        path: PathBuf,
    },

    /// Returned when a row carries a class label but no feature values.
    #[error("no feature columns in {path} at line {line}")]
    NoFeatureColumns {
        /// Path to the input file.
        path: PathBuf,
        /// One-based line number.
        line: u64,
    },

    /// Returned when a row has a different number of features than the first row.
    #[error("inconsistent row length in {path}: line {line} has {got} features, expected {expected}")]
    InconsistentRowLength {
        /// Path to the input file.
        path: PathBuf,
        /// One-based line number.
        line: u64,
        /// Feature count of the first data row.
        expected: usize,
        /// Feature count of this row.
        got: usize,
    },

    /// Returned when a feature value is NaN, Inf, or not a number.
    #[error("non-finite value in {path}: line {line}, feature {column}, raw value \"{raw}\"")]
    NonFiniteValue {
        /// Path to the input file.
        path: PathBuf,
        /// One-based line number.
        line: u64,
        /// Zero-based feature index (excluding the label column).
        column: usize,
        /// The raw text that failed to parse.
        raw: String,
    },

    /// Returned when the label column is not a finite integral number.
    #[error("invalid class label in {path}: line {line}, raw value \"{raw}\"")]
    InvalidLabel {
        /// Path to the input file.
        path: PathBuf,
        /// One-based line number.
        line: u64,
        /// The raw text of the label column.
        raw: String,
    },

    /// Returned when the parsed rows fail dataset validation.
    #[error(transparent)]
    Dataset(#[from] NnError),

    /// Returned when the console sink fails to write.
    #[error("cannot write report")]
    Write {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
