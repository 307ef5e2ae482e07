//! Result types for greedy feature-subset search.

use sieve_nn::{Accuracy, ScoredSubset};

use crate::direction::Direction;

/// Outcome of one greedy round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// One-based round number.
    pub round: usize,
    /// The winning candidate, which becomes the current subset.
    pub selected: ScoredSubset,
    /// Number of candidates evaluated this round.
    pub n_candidates: usize,
    /// Running maximum accuracy after folding in this round.
    pub best_so_far: Accuracy,
}

/// Full trace and terminal output of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Direction the search moved in.
    pub direction: Direction,
    /// Score of the starting subset (empty or full).
    pub initial: ScoredSubset,
    /// Completed rounds in order.
    pub rounds: Vec<RoundResult>,
    /// Highest-accuracy subset selected by any round. Falls back to the
    /// initial subset only when a deadline fires before round 1 finishes.
    pub best: ScoredSubset,
    /// One-based round that produced `best`, or 0 for the deadline fallback.
    pub best_round: usize,
    /// Round at which accuracy first fell below the running maximum, if any.
    pub warned_at: Option<usize>,
    /// False when a deadline cut the run short.
    pub completed: bool,
    /// Total number of subset evaluations, including the initial one.
    pub n_evaluations: usize,
}

impl SearchResult {
    /// Return the subset the search ended on: the last round's selection, or
    /// the initial subset if no round completed.
    #[must_use]
    pub fn last_selected(&self) -> &ScoredSubset {
        self.rounds.last().map_or(&self.initial, |r| &r.selected)
    }

    /// Return the per-round selected accuracies, initial first.
    #[must_use]
    pub fn accuracy_trace(&self) -> Vec<Accuracy> {
        std::iter::once(self.initial.accuracy)
            .chain(self.rounds.iter().map(|r| r.selected.accuracy))
            .collect()
    }

    /// Return the running maximum after each round. The initial subset is
    /// not part of it.
    #[must_use]
    pub fn best_so_far_trace(&self) -> Vec<Accuracy> {
        self.rounds.iter().map(|r| r.best_so_far).collect()
    }
}
