//! Leave-one-out 1-nearest-neighbor evaluation.
//!
//! Every function here is a pure function of the dataset and subset; there is
//! no shared state, so calls may run concurrently.

use tracing::trace;

use crate::accuracy::Accuracy;
use crate::dataset::Dataset;
use crate::distance::{EuclideanDistance, euclidean};
use crate::error::NnError;
use crate::label::ClassLabel;
use crate::subset::{FeatureSubset, ScoredSubset};

/// Find the instance nearest to `query` (excluding `query` itself) under
/// Euclidean distance restricted to `subset`.
///
/// Ties resolve to the lowest instance index. Returns `Ok(None)` when the
/// dataset has a single instance.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`NnError::InstanceIndexOutOfRange`] | `query >= dataset.n_instances()` |
/// | [`NnError::FeatureIndexOutOfRange`] | Subset names a missing feature |
/// | [`NnError::DuplicateFeatureIndex`] | Subset repeats a feature |
pub fn nearest_neighbor(
    dataset: &Dataset,
    query: usize,
    subset: &FeatureSubset,
) -> Result<Option<usize>, NnError> {
    if query >= dataset.n_instances() {
        return Err(NnError::InstanceIndexOutOfRange {
            index: query,
            n_instances: dataset.n_instances(),
        });
    }
    subset.validate(dataset.n_features())?;
    Ok(nearest_unchecked(dataset, query, &sorted_columns(subset)))
}

/// Subset indices in ascending order, so distance sums do not depend on
/// insertion order.
fn sorted_columns(subset: &FeatureSubset) -> Vec<usize> {
    let mut columns = subset.as_slice().to_vec();
    columns.sort_unstable();
    columns
}

fn nearest_unchecked(dataset: &Dataset, query: usize, columns: &[usize]) -> Option<usize> {
    let instances = dataset.instances();
    let target = &instances[query];
    let mut best: Option<(usize, EuclideanDistance)> = None;
    for (j, candidate) in instances.iter().enumerate() {
        if j == query {
            continue;
        }
        let d = euclidean(target, candidate, columns);
        // Strictly-less keeps the earliest index on ties.
        match best {
            Some((_, best_d)) if d.total_cmp(&best_d).is_ge() => {}
            _ => best = Some((j, d)),
        }
    }
    best.map(|(j, _)| j)
}

/// Predict each instance's label from its nearest other instance.
///
/// Entry `i` is `None` only when the dataset has a single instance.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`NnError::FeatureIndexOutOfRange`] | A subset index is `>= n_features` |
/// | [`NnError::DuplicateFeatureIndex`] | A subset index appears twice |
pub fn loo_predictions(
    dataset: &Dataset,
    subset: &FeatureSubset,
) -> Result<Vec<Option<ClassLabel>>, NnError> {
    subset.validate(dataset.n_features())?;
    let columns = sorted_columns(subset);
    let instances = dataset.instances();
    Ok((0..instances.len())
        .map(|i| nearest_unchecked(dataset, i, &columns).map(|j| instances[j].label()))
        .collect())
}

/// Leave-one-out 1-NN accuracy of `subset` on `dataset`.
///
/// A single-instance dataset scores zero. The empty subset is valid: every pair
/// is at distance zero, so each instance is predicted by the first other instance.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`NnError::FeatureIndexOutOfRange`] | A subset index is `>= n_features` |
/// | [`NnError::DuplicateFeatureIndex`] | A subset index appears twice |
pub fn loo_accuracy(dataset: &Dataset, subset: &FeatureSubset) -> Result<Accuracy, NnError> {
    let predictions = loo_predictions(dataset, subset)?;
    let correct = predictions
        .iter()
        .zip(dataset.labels())
        .filter(|&(&predicted, actual)| predicted == Some(actual))
        .count();
    let accuracy = Accuracy::from_counts(correct, dataset.n_instances());
    trace!(%subset, correct, accuracy = accuracy.value(), "subset evaluated");
    Ok(accuracy)
}

/// Evaluate `subset` and pair it with its accuracy.
///
/// # Errors
///
/// Same as [`loo_accuracy`].
pub fn score(dataset: &Dataset, subset: FeatureSubset) -> Result<ScoredSubset, NnError> {
    let accuracy = loo_accuracy(dataset, &subset)?;
    Ok(ScoredSubset::new(subset, accuracy))
}

/// Frequency of the most common class: the accuracy of always guessing it.
#[must_use]
pub fn default_rate(dataset: &Dataset) -> Accuracy {
    let majority = dataset.class_counts().into_values().max().unwrap_or(0);
    Accuracy::from_counts(majority, dataset.n_instances())
}
