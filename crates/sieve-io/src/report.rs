//! Plain-text rendering of a search trace.

use std::fmt;
use std::io::Write;

use sieve_nn::ScoredSubset;
use sieve_search::{Direction, Reporter, SearchResult};
use tracing::debug;

use crate::IoError;

/// Prints the search trace as human-readable text.
///
/// `Reporter` methods cannot fail, so the first write error is latched and
/// every later write is skipped. Call [`ConsoleReporter::finish`] to flush
/// and surface it.
///
/// ```text
/// This dataset has 2 features with 4 instances:
///
/// features set {} with accuracy: 0.500000
/// features set {1} with accuracy: 1.000000
/// features set {1,2} with accuracy: 1.000000
///
/// the best feature subset is features set {1} with accuracy: 1.000000
/// ```
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    error: Option<std::io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Wrap a writer such as `std::io::stdout().lock()`.
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and return the writer.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Write`] if any write or the final flush failed.
    pub fn finish(mut self) -> Result<W, IoError> {
        if let Some(source) = self.error.take() {
            return Err(IoError::Write { source });
        }
        self.out.flush().map_err(|source| IoError::Write { source })?;
        Ok(self.out)
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(args) {
            debug!(error = %e, "report write failed");
            self.error = Some(e);
        }
    }

    fn emit_subset(&mut self, scored: &ScoredSubset) {
        self.emit(format_args!(
            "features set {} with accuracy: {}\n",
            scored.subset, scored.accuracy
        ));
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn search_started(&mut self, _direction: Direction, n_features: usize, n_instances: usize) {
        self.emit(format_args!(
            "This dataset has {n_features} features with {n_instances} instances:\n\n"
        ));
    }

    fn initial_evaluated(&mut self, initial: &ScoredSubset) {
        self.emit_subset(initial);
    }

    fn round_selected(&mut self, _round: usize, selected: &ScoredSubset) {
        self.emit_subset(selected);
    }

    fn accuracy_decreasing(&mut self, _round: usize, _selected: &ScoredSubset, _best: &ScoredSubset) {
        self.emit(format_args!(
            "\nWarning: accuracy decreasing, continuing search...\n\n"
        ));
    }

    fn search_finished(&mut self, result: &SearchResult) {
        if !result.completed {
            self.emit(format_args!(
                "\nDeadline reached after {} completed rounds, stopping search.\n",
                result.rounds.len()
            ));
        }
        self.emit(format_args!("\nthe best feature subset is "));
        self.emit_subset(&result.best);
    }
}
