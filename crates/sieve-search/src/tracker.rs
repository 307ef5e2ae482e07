//! Best-so-far accumulator threaded through the round loop.

use std::cmp::Ordering;

use sieve_nn::ScoredSubset;

/// Running maximum over every subset selected by a round, plus the one-shot
/// latch for the first round that falls below it.
///
/// The initial evaluation is not a candidate: the first observed round always
/// becomes the best.
#[derive(Debug, Clone, Default)]
pub(crate) struct BestSoFar {
    best: Option<(usize, ScoredSubset)>,
    warned_at: Option<usize>,
}

impl BestSoFar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fold in a round's selected subset. Returns true exactly once per run:
    /// on the first round whose accuracy is below the running maximum.
    ///
    /// Compares against the running maximum, not the previous round. A later
    /// subset only displaces the best on strictly higher accuracy.
    pub(crate) fn observe(&mut self, round: usize, selected: &ScoredSubset) -> bool {
        let Some((_, best)) = &self.best else {
            self.best = Some((round, selected.clone()));
            return false;
        };
        match selected.accuracy.total_cmp(&best.accuracy) {
            Ordering::Greater => {
                self.best = Some((round, selected.clone()));
                false
            }
            Ordering::Less if self.warned_at.is_none() => {
                self.warned_at = Some(round);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn best(&self) -> Option<&ScoredSubset> {
        self.best.as_ref().map(|(_, best)| best)
    }

    pub(crate) fn warned_at(&self) -> Option<usize> {
        self.warned_at
    }

    /// Consume and return `(round, best)`, or `None` if no round was observed.
    pub(crate) fn into_best(self) -> Option<(usize, ScoredSubset)> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use sieve_nn::{Accuracy, FeatureSubset, ScoredSubset};

    use super::BestSoFar;

    fn scored(index: usize, correct: usize) -> ScoredSubset {
        ScoredSubset::new(FeatureSubset::new(vec![index]), Accuracy::from_counts(correct, 10))
    }

    #[test]
    fn first_round_becomes_best_even_at_zero() {
        let mut tracker = BestSoFar::new();
        assert!(tracker.best().is_none());
        assert!(!tracker.observe(1, &scored(0, 0)));
        let (round, best) = tracker.into_best().unwrap();
        assert_eq!(round, 1);
        assert_eq!(best.subset.as_slice(), &[0]);
    }

    #[test]
    fn improvement_replaces_best() {
        let mut tracker = BestSoFar::new();
        tracker.observe(1, &scored(0, 5));
        assert!(!tracker.observe(2, &scored(1, 8)));
        assert_eq!(tracker.best().unwrap().subset.as_slice(), &[1]);
        assert_eq!(tracker.into_best().unwrap().0, 2);
    }

    #[test]
    fn tie_keeps_earlier_best() {
        let mut tracker = BestSoFar::new();
        tracker.observe(1, &scored(0, 5));
        assert!(!tracker.observe(2, &scored(1, 5)));
        assert_eq!(tracker.into_best().unwrap(), (1, scored(0, 5)));
    }

    #[test]
    fn warning_latches_once() {
        let mut tracker = BestSoFar::new();
        assert!(!tracker.observe(1, &scored(1, 8)));
        assert!(tracker.observe(2, &scored(2, 6)));
        assert!(!tracker.observe(3, &scored(3, 4)));
        assert_eq!(tracker.warned_at(), Some(2));
    }

    #[test]
    fn compares_against_running_max_not_previous_round() {
        let mut tracker = BestSoFar::new();
        tracker.observe(1, &scored(1, 8));
        tracker.observe(2, &scored(2, 6));
        // Round 3 improves on round 2 but stays below the peak from round 1.
        tracker.observe(3, &scored(3, 7));
        assert_eq!(tracker.warned_at(), Some(2));
        assert_eq!(tracker.into_best().unwrap().1.subset.as_slice(), &[1]);
    }

    #[test]
    fn first_round_never_warns() {
        let mut tracker = BestSoFar::new();
        assert!(!tracker.observe(1, &scored(1, 3)));
        assert_eq!(tracker.warned_at(), None);
    }
}
