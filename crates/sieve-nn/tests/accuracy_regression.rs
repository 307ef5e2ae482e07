//! Accuracy regression tests for sieve-nn.
//!
//! Hand-computed fixtures pin the leave-one-out 1-NN figures so changes to
//! distance computation or tie-breaking show up as exact-value failures.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sieve_nn::{
    ClassLabel, Dataset, FeatureSubset, Instance, loo_accuracy, loo_predictions, z_normalize,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dataset(rows: &[(i64, &[f64])]) -> Dataset {
    Dataset::new(
        rows.iter()
            .map(|&(label, features)| {
                Instance::new(ClassLabel::new(label), features.to_vec()).expect("valid row")
            })
            .collect(),
    )
    .expect("valid dataset")
}

/// Generate a 120-instance, 6-feature, 3-class dataset.
///
/// Features 0-1 are informative (class * 4.0 + noise in [0, 1)).
/// Features 2-5 are noise in [0, 10).
fn make_classification(seed: u64) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let instances = (0..120)
        .map(|i| {
            let class = i % 3;
            let features = (0..6)
                .map(|f| {
                    if f < 2 {
                        class as f64 * 4.0 + rng.r#gen::<f64>()
                    } else {
                        rng.r#gen::<f64>() * 10.0
                    }
                })
                .collect();
            Instance::new(ClassLabel::new(class as i64), features).expect("finite row")
        })
        .collect();
    Dataset::new(instances).expect("non-empty dataset")
}

// ---------------------------------------------------------------------------
// a) hand_computed_fixture
// ---------------------------------------------------------------------------

/// Every subset of a 2-feature, 4-instance fixture, checked against values
/// worked out by hand.
#[test]
fn hand_computed_fixture() {
    let ds = dataset(&[
        (1, &[0.0, 5.0]),
        (1, &[0.1, 0.0]),
        (2, &[10.0, 5.1]),
        (2, &[10.1, 0.1]),
    ]);

    let cases: Vec<(Vec<usize>, f64)> = vec![
        (vec![], 0.5),
        (vec![0], 1.0),
        (vec![1], 0.0),
        (vec![0, 1], 1.0),
    ];
    for (indices, expected) in cases {
        let subset = FeatureSubset::new(indices);
        let acc = loo_accuracy(&ds, &subset).unwrap();
        assert_eq!(acc.value(), expected, "subset {subset}");
    }
}

// ---------------------------------------------------------------------------
// b) empty_subset_uses_first_other_instance
// ---------------------------------------------------------------------------

/// With no features every distance ties, so instance 0 is predicted from
/// instance 1 and every other instance from instance 0.
#[test]
fn empty_subset_uses_first_other_instance() {
    let ds = dataset(&[
        (3, &[0.0]),
        (3, &[1.0]),
        (1, &[2.0]),
        (3, &[3.0]),
        (2, &[4.0]),
    ]);
    let predictions = loo_predictions(&ds, &FeatureSubset::empty()).unwrap();
    assert!(predictions.iter().all(|p| *p == Some(ClassLabel::new(3))));
    // Instances 0, 1, 3 match label 3.
    assert_eq!(loo_accuracy(&ds, &FeatureSubset::empty()).unwrap().value(), 0.6);
}

// ---------------------------------------------------------------------------
// c) informative_features_beat_noise
// ---------------------------------------------------------------------------

/// The informative pair must score well above the noise columns.
#[test]
fn informative_features_beat_noise() {
    let ds = make_classification(42);
    let informative = loo_accuracy(&ds, &FeatureSubset::new(vec![0, 1])).unwrap();
    let noise = loo_accuracy(&ds, &FeatureSubset::new(vec![2, 3, 4, 5])).unwrap();

    assert!(informative.value() > 0.95, "informative accuracy {informative}");
    assert!(noise.value() < 0.7, "noise accuracy {noise}");
}

// ---------------------------------------------------------------------------
// d) normalization_rescues_scaled_feature
// ---------------------------------------------------------------------------

/// A feature on a huge scale swamps the informative one until columns are
/// z-normalized.
#[test]
fn normalization_rescues_scaled_feature() {
    let ds = dataset(&[
        (1, &[0.0, 0.0]),
        (1, &[0.1, 1000.0]),
        (1, &[0.2, 2000.0]),
        (2, &[10.0, 3000.0]),
        (2, &[10.1, 0.0]),
        (2, &[10.2, 1000.0]),
    ]);
    let both = FeatureSubset::all(2);
    let raw = loo_accuracy(&ds, &both).unwrap();
    let normalized = loo_accuracy(&z_normalize(&ds).unwrap(), &both).unwrap();
    assert!(
        normalized.value() > raw.value(),
        "normalized {normalized} should beat raw {raw}"
    );
}
