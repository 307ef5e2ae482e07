//! Search direction: the initial subset and how neighbors are generated.

use std::fmt;

use sieve_nn::FeatureSubset;

/// Which way the greedy search moves through subset space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Start empty and add one feature per round.
    Forward,
    /// Start with every feature and remove one per round.
    Backward,
}

impl Direction {
    /// Subset the search starts from: empty for forward, all features for backward.
    #[must_use]
    pub fn initial_subset(self, n_features: usize) -> FeatureSubset {
        match self {
            Self::Forward => FeatureSubset::empty(),
            Self::Backward => FeatureSubset::all(n_features),
        }
    }

    /// Neighbors of `current`, each tagged with the feature index that was
    /// added or removed. Returned in ascending index order.
    #[must_use]
    pub fn candidates(self, current: &FeatureSubset, n_features: usize) -> Vec<(usize, FeatureSubset)> {
        match self {
            Self::Forward => (0..n_features)
                .filter(|&i| !current.contains(i))
                .map(|i| (i, current.with(i)))
                .collect(),
            Self::Backward => (0..n_features)
                .filter(|&i| current.contains(i))
                .map(|i| (i, current.without(i)))
                .collect(),
        }
    }

    /// Return a short lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
