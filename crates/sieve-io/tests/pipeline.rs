//! End-to-end: read a dataset file, run a search, render the trace.

use std::io::Write;
use std::path::{Path, PathBuf};

use sieve_io::{ConsoleReporter, DatasetReader, Format, IoError};
use sieve_nn::{FeatureSubset, loo_accuracy, z_normalize};
use sieve_search::{SearchConfig, SearchResult};
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_to_text(config: SearchConfig, path: &Path) -> (SearchResult, String) {
    let ds = DatasetReader::new(path).read().unwrap();
    let mut reporter = ConsoleReporter::new(Vec::new());
    let result = config.run(&ds, &mut reporter).unwrap();
    let text = String::from_utf8(reporter.finish().unwrap()).unwrap();
    (result, text)
}

// ---------------------------------------------------------------------------
// Whitespace fixture
// ---------------------------------------------------------------------------

#[test]
fn reads_fixture() {
    let ds = DatasetReader::new(&fixture_path("small.txt")).read().unwrap();
    assert_eq!(ds.n_instances(), 4);
    assert_eq!(ds.n_features(), 3);
    assert_eq!(ds.class_counts().len(), 2);
}

#[test]
fn forward_trace_matches_expected_text() {
    let (result, text) = run_to_text(SearchConfig::forward(), &fixture_path("small.txt"));

    let expected = "\
This dataset has 3 features with 4 instances:

features set {} with accuracy: 0.500000
features set {1} with accuracy: 1.000000

Warning: accuracy decreasing, continuing search...

features set {1,2} with accuracy: 0.000000
features set {1,2,3} with accuracy: 0.000000

the best feature subset is features set {1} with accuracy: 1.000000
";
    assert_eq!(text, expected);
    assert_eq!(result.warned_at, Some(2));
}

#[test]
fn backward_can_end_on_empty_subset() {
    let (result, text) = run_to_text(SearchConfig::backward(), &fixture_path("small.txt"));

    let expected = "\
This dataset has 3 features with 4 instances:

features set {1,2,3} with accuracy: 0.000000
features set {2,3} with accuracy: 0.000000
features set {3} with accuracy: 0.000000
features set {} with accuracy: 0.500000

the best feature subset is features set {} with accuracy: 0.500000
";
    assert_eq!(text, expected);
    assert_eq!(result.best_round, 3);
    assert_eq!(result.warned_at, None);
}

#[test]
fn parallel_run_prints_same_trace() {
    let path = fixture_path("small.txt");
    let (_, sequential) = run_to_text(SearchConfig::forward(), &path);
    let (_, parallel) = run_to_text(SearchConfig::forward().with_parallel(true), &path);
    assert_eq!(sequential, parallel);
}

// ---------------------------------------------------------------------------
// CSV and preprocessing
// ---------------------------------------------------------------------------

#[test]
fn csv_and_whitespace_agree() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "class,f1,f2,f3").unwrap();
    writeln!(f, "1,0.0,0.0,0.0").unwrap();
    writeln!(f, "1,0.1,100,100").unwrap();
    writeln!(f, "2,10,1,1").unwrap();
    writeln!(f, "2,10.1,101,101").unwrap();
    f.flush().unwrap();

    let from_csv = DatasetReader::new(f.path())
        .with_format(Format::Csv { has_headers: true })
        .read()
        .unwrap();
    let from_txt = DatasetReader::new(&fixture_path("small.txt")).read().unwrap();
    assert_eq!(from_csv, from_txt);
}

#[test]
fn normalized_fixture_keeps_labels_and_centers_columns() {
    let ds = DatasetReader::new(&fixture_path("small.txt")).read().unwrap();
    let normalized = z_normalize(&ds).unwrap();

    assert_eq!(normalized.n_instances(), ds.n_instances());
    assert_eq!(normalized.n_features(), ds.n_features());
    assert!(normalized.labels().eq(ds.labels()));
    for column in 0..normalized.n_features() {
        let mean: f64 = normalized
            .instances()
            .iter()
            .map(|inst| inst.features()[column])
            .sum::<f64>()
            / normalized.n_instances() as f64;
        assert!(mean.abs() < 1e-12, "column {column} mean {mean}");
    }

    // The perfect feature stays perfect under rescaling.
    let first = FeatureSubset::new(vec![0]);
    assert_eq!(loo_accuracy(&normalized, &first).unwrap().value(), 1.0);
}

#[test]
fn missing_file_reports_path() {
    let err = DatasetReader::new(Path::new("/nonexistent/sieve.txt")).read().unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/sieve.txt"));
}
