//! Leave-one-out nearest-neighbor evaluation of feature subsets.
//!
//! Pure math library, zero I/O. Provides validated labeled instances and
//! datasets, feature-index subsets, Euclidean distance restricted to a
//! subset, and leave-one-out 1-NN accuracy scoring with deterministic
//! lowest-index tie-breaking.

mod accuracy;
mod dataset;
mod distance;
mod error;
mod instance;
mod label;
mod loo;
mod preprocess;
mod subset;

pub use accuracy::Accuracy;
pub use dataset::Dataset;
pub use distance::{EuclideanDistance, euclidean};
pub use error::NnError;
pub use instance::Instance;
pub use label::ClassLabel;
pub use loo::{default_rate, loo_accuracy, loo_predictions, nearest_neighbor, score};
pub use preprocess::z_normalize;
pub use subset::{FeatureSubset, ScoredSubset};
