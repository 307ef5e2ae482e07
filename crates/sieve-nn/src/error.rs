//! Error types for dataset construction and subset evaluation.

/// Errors from instance validation, dataset construction, and evaluation.
#[derive(Debug, thiserror::Error)]
pub enum NnError {
    /// Returned when an instance has no feature values.
    #[error("instance must have at least one feature")]
    EmptyFeatures,

    /// Returned when a feature value is NaN, infinity, or negative infinity.
    #[error("instance contains non-finite value at feature {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when a dataset is built from zero instances.
    #[error("dataset must contain at least one instance")]
    EmptyDataset,

    /// Returned when an instance has a different feature count than the first instance.
    #[error("instance {instance_index} has {got} features, expected {expected}")]
    FeatureCountMismatch {
        /// Feature count of the first instance.
        expected: usize,
        /// Feature count of the offending instance.
        got: usize,
        /// Zero-based index of the offending instance.
        instance_index: usize,
    },

    /// Returned when a subset names a feature index outside `[0, n_features)`.
    #[error("feature index {index} is out of range for {n_features} features")]
    FeatureIndexOutOfRange {
        /// The offending zero-based feature index.
        index: usize,
        /// Number of features in the dataset.
        n_features: usize,
    },

    /// Returned when a query names an instance outside `[0, n_instances)`.
    #[error("instance index {index} is out of range for {n_instances} instances")]
    InstanceIndexOutOfRange {
        /// The offending zero-based instance index.
        index: usize,
        /// Number of instances in the dataset.
        n_instances: usize,
    },

    /// Returned when a subset names the same feature index twice.
    #[error("feature index {index} appears more than once in the subset")]
    DuplicateFeatureIndex {
        /// The repeated zero-based feature index.
        index: usize,
    },

    /// Returned when z-normalization meets a feature column with zero variance.
    #[error("feature {index} is constant (value {value}) and cannot be normalized")]
    ConstantFeature {
        /// Zero-based index of the constant feature column.
        index: usize,
        /// The single value every instance holds for this feature.
        value: f64,
    },
}
