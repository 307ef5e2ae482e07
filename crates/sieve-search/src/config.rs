//! Configuration builder for greedy feature-subset search.

use std::time::Duration;

use sieve_nn::Dataset;

use crate::direction::Direction;
use crate::error::SearchError;
use crate::reporter::Reporter;
use crate::result::SearchResult;

/// Configuration for a greedy search run.
///
/// Construct via [`SearchConfig::new`] (or [`SearchConfig::forward`] /
/// [`SearchConfig::backward`]), then chain `with_*` methods.
///
/// # Defaults
///
/// | Parameter  | Default |
/// |------------|---------|
/// | `parallel` | false   |
/// | `deadline` | `None`  |
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub(crate) direction: Direction,
    pub(crate) parallel: bool,
    pub(crate) deadline: Option<Duration>,
}

impl SearchConfig {
    /// Create a new configuration searching in `direction`.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            parallel: false,
            deadline: None,
        }
    }

    /// Forward selection: start empty, add one feature per round.
    #[must_use]
    pub fn forward() -> Self {
        Self::new(Direction::Forward)
    }

    /// Backward elimination: start full, remove one feature per round.
    #[must_use]
    pub fn backward() -> Self {
        Self::new(Direction::Backward)
    }

    /// Evaluate each round's candidates on the rayon thread pool.
    ///
    /// The selected subset is identical either way: ties resolve by the
    /// candidate's feature index, never by completion order.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Abandon the round in progress once `deadline` has elapsed since the
    /// run started, returning the best subset found so far.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Return the search direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return whether candidates are evaluated in parallel.
    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Return the deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Run the search over `dataset`, pushing progress to `reporter`.
    ///
    /// Always runs `n_features` rounds unless a deadline fires; accuracy
    /// regressions do not stop the search.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SearchError::Evaluation`] | A candidate subset fails validation |
    pub fn run<R: Reporter + ?Sized>(
        &self,
        dataset: &Dataset,
        reporter: &mut R,
    ) -> Result<SearchResult, SearchError> {
        crate::search::run(dataset, self, reporter)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::SearchConfig;
    use crate::direction::Direction;

    #[test]
    fn defaults_are_correct() {
        let cfg = SearchConfig::new(Direction::Forward);
        assert_eq!(cfg.direction(), Direction::Forward);
        assert!(!cfg.parallel());
        assert_eq!(cfg.deadline(), None);
    }

    #[test]
    fn builder_chaining() {
        let cfg = SearchConfig::backward()
            .with_parallel(true)
            .with_deadline(Duration::from_secs(5));
        assert_eq!(cfg.direction(), Direction::Backward);
        assert!(cfg.parallel());
        assert_eq!(cfg.deadline(), Some(Duration::from_secs(5)));
    }
}
