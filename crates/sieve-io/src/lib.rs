//! Dataset loading and console reporting for sieve.

mod error;
mod reader;
mod report;

pub use error::IoError;
pub use reader::{DatasetReader, Format};
pub use report::ConsoleReporter;
