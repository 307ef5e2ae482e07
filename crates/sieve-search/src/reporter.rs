//! Presentation sink for search progress.

use sieve_nn::ScoredSubset;
use tracing::{info, warn};

use crate::direction::Direction;
use crate::result::SearchResult;

/// Receives each reported subset as the search runs.
///
/// Every method has a no-op default so sinks implement only what they show.
/// Call order per run: `search_started`, `initial_evaluated`, then for each
/// round an optional `accuracy_decreasing` (at most once per run) followed by
/// `round_selected`, and finally `search_finished`. A run cut short by a
/// deadline skips the rounds it did not finish.
pub trait Reporter {
    /// The search is about to evaluate its initial subset.
    fn search_started(&mut self, _direction: Direction, _n_features: usize, _n_instances: usize) {}

    /// The initial subset (empty or full) has been scored.
    fn initial_evaluated(&mut self, _initial: &ScoredSubset) {}

    /// A round finished and `selected` became the current subset.
    fn round_selected(&mut self, _round: usize, _selected: &ScoredSubset) {}

    /// First round whose selected accuracy fell below the best seen so far.
    fn accuracy_decreasing(&mut self, _round: usize, _selected: &ScoredSubset, _best: &ScoredSubset) {}

    /// The search returned; `result.best` is the terminal output.
    fn search_finished(&mut self, _result: &SearchResult) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn search_started(&mut self, direction: Direction, n_features: usize, n_instances: usize) {
        (**self).search_started(direction, n_features, n_instances);
    }

    fn initial_evaluated(&mut self, initial: &ScoredSubset) {
        (**self).initial_evaluated(initial);
    }

    fn round_selected(&mut self, round: usize, selected: &ScoredSubset) {
        (**self).round_selected(round, selected);
    }

    fn accuracy_decreasing(&mut self, round: usize, selected: &ScoredSubset, best: &ScoredSubset) {
        (**self).accuracy_decreasing(round, selected, best);
    }

    fn search_finished(&mut self, result: &SearchResult) {
        (**self).search_finished(result);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {}

/// Emits each report as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn search_started(&mut self, direction: Direction, n_features: usize, n_instances: usize) {
        info!(%direction, n_features, n_instances, "search started");
    }

    fn initial_evaluated(&mut self, initial: &ScoredSubset) {
        info!(subset = %initial.subset, accuracy = initial.accuracy.value(), "initial subset");
    }

    fn round_selected(&mut self, round: usize, selected: &ScoredSubset) {
        info!(round, subset = %selected.subset, accuracy = selected.accuracy.value(), "round selected");
    }

    fn accuracy_decreasing(&mut self, round: usize, selected: &ScoredSubset, best: &ScoredSubset) {
        warn!(
            round,
            accuracy = selected.accuracy.value(),
            best_accuracy = best.accuracy.value(),
            "accuracy decreasing, continuing search"
        );
    }

    fn search_finished(&mut self, result: &SearchResult) {
        info!(
            best_subset = %result.best.subset,
            best_accuracy = result.best.accuracy.value(),
            completed = result.completed,
            "search finished"
        );
    }
}
