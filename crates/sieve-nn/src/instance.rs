//! Labeled feature vectors with validation guarantees.

use std::ops::Index;

use crate::error::NnError;
use crate::label::ClassLabel;

/// One labeled data row. Guaranteed to hold at least one feature, all finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    label: ClassLabel,
    features: Vec<f64>,
}

impl Instance {
    /// Create a new instance, validating that `features` is non-empty and all values are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`NnError::EmptyFeatures`] | `features` is empty |
    /// | [`NnError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(label: ClassLabel, features: Vec<f64>) -> Result<Self, NnError> {
        if features.is_empty() {
            return Err(NnError::EmptyFeatures);
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(NnError::NonFiniteValue { index });
        }
        Ok(Self { label, features })
    }

    /// Return the class label.
    #[must_use]
    pub fn label(&self) -> ClassLabel {
        self.label
    }

    /// Return the feature values in column order.
    #[must_use]
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Return the number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Return true if the instance has no features.
    ///
    /// An [`Instance`] constructed via [`Instance::new`] always has at least one
    /// feature, so this always returns `false` for valid instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Index<usize> for Instance {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.features[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_features() {
        let result = Instance::new(ClassLabel::new(1), vec![]);
        assert!(matches!(result, Err(NnError::EmptyFeatures)));
    }

    #[test]
    fn rejects_nan() {
        let result = Instance::new(ClassLabel::new(1), vec![1.0, f64::NAN]);
        assert!(matches!(result, Err(NnError::NonFiniteValue { index: 1 })));
    }

    #[test]
    fn rejects_neg_infinity() {
        let result = Instance::new(ClassLabel::new(1), vec![f64::NEG_INFINITY, 2.0]);
        assert!(matches!(result, Err(NnError::NonFiniteValue { index: 0 })));
    }

    #[test]
    fn accepts_valid_instance() {
        let inst = Instance::new(ClassLabel::new(2), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(inst.len(), 3);
        assert_eq!(inst.label(), ClassLabel::new(2));
        assert_eq!(inst[1], 2.0);
    }
}
