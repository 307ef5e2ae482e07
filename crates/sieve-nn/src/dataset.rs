//! Immutable, validated collection of labeled instances.

use std::collections::BTreeMap;

use crate::error::NnError;
use crate::instance::Instance;
use crate::label::ClassLabel;

/// An ordered, non-empty collection of [`Instance`]s sharing one feature count.
///
/// Instance order is significant: nearest-neighbor ties resolve to the lowest
/// instance index.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    instances: Vec<Instance>,
    n_features: usize,
}

impl Dataset {
    /// Build a dataset, validating that it is non-empty and every instance has
    /// the same number of features.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`NnError::EmptyDataset`] | `instances` is empty |
    /// | [`NnError::FeatureCountMismatch`] | An instance's feature count differs from the first |
    pub fn new(instances: Vec<Instance>) -> Result<Self, NnError> {
        let Some(first) = instances.first() else {
            return Err(NnError::EmptyDataset);
        };
        let n_features = first.len();
        if let Some((instance_index, inst)) = instances
            .iter()
            .enumerate()
            .find(|(_, inst)| inst.len() != n_features)
        {
            return Err(NnError::FeatureCountMismatch {
                expected: n_features,
                got: inst.len(),
                instance_index,
            });
        }
        Ok(Self { instances, n_features })
    }

    /// Return the instances in dataset order.
    #[must_use]
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Return the number of instances.
    #[must_use]
    pub fn n_instances(&self) -> usize {
        self.instances.len()
    }

    /// Return the number of features each instance carries.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Iterate over the labels in dataset order.
    pub fn labels(&self) -> impl Iterator<Item = ClassLabel> + '_ {
        self.instances.iter().map(Instance::label)
    }

    /// Count instances per class label, ordered by label.
    #[must_use]
    pub fn class_counts(&self) -> BTreeMap<ClassLabel, usize> {
        let mut counts = BTreeMap::new();
        for label in self.labels() {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }
}
