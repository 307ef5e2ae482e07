//! Euclidean distance over selected feature columns.

use std::cmp::Ordering;
use std::fmt;

use crate::instance::Instance;

/// A non-negative Euclidean distance value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EuclideanDistance(f64);

impl EuclideanDistance {
    /// Zero distance; every pair is at this distance under the empty subset.
    pub const ZERO: Self = Self(0.0);

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for EuclideanDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// `sqrt(sum over k in columns of (a[k] - b[k])^2)`.
///
/// Indices in `columns` must be valid for both instances. Terms are summed in
/// the order given.
#[must_use]
pub fn euclidean(a: &Instance, b: &Instance, columns: &[usize]) -> EuclideanDistance {
    let sum_sq: f64 = columns
        .iter()
        .map(|&k| {
            let d = a[k] - b[k];
            d * d
        })
        .sum();
    EuclideanDistance(sum_sq.sqrt())
}
