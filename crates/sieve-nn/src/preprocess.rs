//! Feature preprocessing: per-column z-normalization.

use crate::dataset::Dataset;
use crate::error::NnError;
use crate::instance::Instance;

/// Z-normalize every feature column to zero mean and unit variance.
///
/// Uses population standard deviation (divides by n, not n-1). Labels and
/// instance order are preserved.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`NnError::ConstantFeature`] | A feature column has zero variance |
#[must_use = "returns a new normalized dataset; the original is unchanged"]
pub fn z_normalize(dataset: &Dataset) -> Result<Dataset, NnError> {
    let n = dataset.n_instances() as f64;
    let instances = dataset.instances();

    let mut stats = Vec::with_capacity(dataset.n_features());
    for col in 0..dataset.n_features() {
        let mean = instances.iter().map(|inst| inst[col]).sum::<f64>() / n;
        let variance = instances
            .iter()
            .map(|inst| (inst[col] - mean).powi(2))
            .sum::<f64>()
            / n;
        let std = variance.sqrt();
        if std == 0.0 {
            return Err(NnError::ConstantFeature {
                index: col,
                value: instances[0][col],
            });
        }
        stats.push((mean, std));
    }

    let normalized = instances
        .iter()
        .map(|inst| {
            let features = inst
                .features()
                .iter()
                .zip(&stats)
                .map(|(&x, &(mean, std))| (x - mean) / std)
                .collect();
            Instance::new(inst.label(), features)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Dataset::new(normalized)
}
