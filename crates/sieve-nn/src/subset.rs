//! Feature-index subsets and their scored pairings.

use std::fmt;

use crate::accuracy::Accuracy;
use crate::error::NnError;

/// A set of zero-based feature indices.
///
/// Indices are kept in insertion order for display; evaluation treats the
/// subset as an unordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FeatureSubset(Vec<usize>);

impl FeatureSubset {
    /// Create a subset from indices in the given order. No validation is done
    /// here; see [`FeatureSubset::validate`].
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The subset with no features.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The subset `{0, 1, ..., n_features - 1}`.
    #[must_use]
    pub fn all(n_features: usize) -> Self {
        Self((0..n_features).collect())
    }

    /// Return true if `index` is in the subset.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Return a copy with `index` appended.
    #[must_use]
    pub fn with(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Return a copy with every occurrence of `index` removed.
    #[must_use]
    pub fn without(&self, index: usize) -> Self {
        Self(self.0.iter().copied().filter(|&i| i != index).collect())
    }

    /// Return the number of indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the subset has no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the indices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Return the indices in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Check every index is in `[0, n_features)` and appears once.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`NnError::FeatureIndexOutOfRange`] | An index is `>= n_features` |
    /// | [`NnError::DuplicateFeatureIndex`] | An index appears twice |
    pub fn validate(&self, n_features: usize) -> Result<(), NnError> {
        let mut seen = vec![false; n_features];
        for &index in &self.0 {
            if index >= n_features {
                return Err(NnError::FeatureIndexOutOfRange { index, n_features });
            }
            if seen[index] {
                return Err(NnError::DuplicateFeatureIndex { index });
            }
            seen[index] = true;
        }
        Ok(())
    }
}

/// Renders one-based indices, e.g. `{1,3,4}`.
impl fmt::Display for FeatureSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (pos, index) in self.0.iter().enumerate() {
            if pos > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", index + 1)?;
        }
        f.write_str("}")
    }
}

impl From<Vec<usize>> for FeatureSubset {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// A feature subset paired with its leave-one-out accuracy.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSubset {
    /// The evaluated subset.
    pub subset: FeatureSubset,
    /// Its leave-one-out 1-NN accuracy.
    pub accuracy: Accuracy,
}

impl ScoredSubset {
    /// Pair a subset with its accuracy.
    #[must_use]
    pub fn new(subset: FeatureSubset, accuracy: Accuracy) -> Self {
        Self { subset, accuracy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based() {
        let subset = FeatureSubset::new(vec![3, 0, 2]);
        assert_eq!(subset.to_string(), "{4,1,3}");
        assert_eq!(FeatureSubset::empty().to_string(), "{}");
    }

    #[test]
    fn with_appends() {
        let subset = FeatureSubset::new(vec![2]).with(0);
        assert_eq!(subset.as_slice(), &[2, 0]);
    }

    #[test]
    fn without_removes() {
        let subset = FeatureSubset::all(4).without(1);
        assert_eq!(subset.as_slice(), &[0, 2, 3]);
        assert!(!subset.contains(1));
    }

    #[test]
    fn validate_out_of_range() {
        let result = FeatureSubset::new(vec![0, 5]).validate(3);
        assert!(matches!(
            result,
            Err(NnError::FeatureIndexOutOfRange { index: 5, n_features: 3 })
        ));
    }

    #[test]
    fn validate_duplicate() {
        let result = FeatureSubset::new(vec![1, 0, 1]).validate(3);
        assert!(matches!(result, Err(NnError::DuplicateFeatureIndex { index: 1 })));
    }

    #[test]
    fn validate_empty_ok() {
        assert!(FeatureSubset::empty().validate(3).is_ok());
    }
}
