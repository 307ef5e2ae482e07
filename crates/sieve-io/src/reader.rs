//! Labeled dataset reader with full input validation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use sieve_nn::{ClassLabel, Dataset, Instance};
use tracing::{debug, info, instrument};

use crate::IoError;

/// On-disk layout of a dataset file. Both layouts put the class label first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One instance per line, fields separated by any run of whitespace.
    /// Blank lines are skipped.
    #[default]
    Whitespace,
    /// Comma-separated values, optionally preceded by a header row.
    Csv {
        /// Whether the first row is a header to skip.
        has_headers: bool,
    },
}

/// Reads a labeled dataset from a text file.
///
/// Every row is `label f0 f1 ... fn`. Labels must be finite integral numbers
/// (`1`, `2.0`, and `1.0000000e+00` all parse); feature values must be
/// finite floats.
///
/// # Defaults
///
/// | Parameter | Default                |
/// |-----------|------------------------|
/// | `format`  | [`Format::Whitespace`] |
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::Read`] | I/O failure while reading lines |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyDataset`] | Zero data rows |
/// | [`IoError::NoFeatureColumns`] | Row has a label and nothing else |
/// | [`IoError::InconsistentRowLength`] | Row has a different feature count than the first |
/// | [`IoError::NonFiniteValue`] | Feature is NaN, Inf, or unparseable |
/// | [`IoError::InvalidLabel`] | Label is non-numeric, non-finite, or fractional |
#[derive(Debug, Clone)]
pub struct DatasetReader {
    path: PathBuf,
    format: Format,
}

impl DatasetReader {
    /// Create a new reader for the given file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            format: Format::default(),
        }
    }

    /// Set the file layout.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Return the file layout.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Return the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the file, returning a [`Dataset`].
    #[instrument(skip(self), fields(path = %self.path.display(), format = ?self.format))]
    pub fn read(&self) -> Result<Dataset, IoError> {
        let file = File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        let instances = match self.format {
            Format::Whitespace => self.read_whitespace(file)?,
            Format::Csv { has_headers } => self.read_csv(file, has_headers)?,
        };

        if instances.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        let dataset = Dataset::new(instances)?;
        info!(
            n_instances = dataset.n_instances(),
            n_features = dataset.n_features(),
            n_classes = dataset.class_counts().len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    fn read_whitespace(&self, file: File) -> Result<Vec<Instance>, IoError> {
        let mut instances = Vec::new();
        let mut expected = None;

        for (i, text) in BufReader::new(file).lines().enumerate() {
            let text = text.map_err(|e| IoError::Read {
                path: self.path.clone(),
                source: e,
            })?;
            let mut fields = text.split_whitespace().peekable();
            if fields.peek().is_none() {
                continue;
            }
            instances.push(self.parse_row(i as u64 + 1, fields, &mut expected)?);
        }

        Ok(instances)
    }

    fn read_csv(&self, file: File, has_headers: bool) -> Result<Vec<Instance>, IoError> {
        // flexible(true) so that our own InconsistentRowLength check fires
        // instead of a low-level CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut instances = Vec::new();
        let mut expected = None;

        for result in rdr.records() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;
            let line = record.position().map_or(0, |p| p.line());
            instances.push(self.parse_row(line, record.iter(), &mut expected)?);
        }

        Ok(instances)
    }

    /// Parse one `label f0 f1 ...` row. `expected` latches the feature count
    /// of the first row.
    fn parse_row<'a>(
        &self,
        line: u64,
        mut fields: impl Iterator<Item = &'a str>,
        expected: &mut Option<usize>,
    ) -> Result<Instance, IoError> {
        let raw_label = fields.next().unwrap_or("");
        let label = parse_label(raw_label).ok_or_else(|| IoError::InvalidLabel {
            path: self.path.clone(),
            line,
            raw: raw_label.to_string(),
        })?;

        let features = fields
            .enumerate()
            .map(|(column, raw)| match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(IoError::NonFiniteValue {
                    path: self.path.clone(),
                    line,
                    column,
                    raw: raw.to_string(),
                }),
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if features.is_empty() {
            return Err(IoError::NoFeatureColumns {
                path: self.path.clone(),
                line,
            });
        }

        match *expected {
            None => {
                debug!(n_features = features.len(), "first row read");
                *expected = Some(features.len());
            }
            Some(n) if n != features.len() => {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    line,
                    expected: n,
                    got: features.len(),
                });
            }
            Some(_) => {}
        }

        Ok(Instance::new(label, features)?)
    }
}

/// Accept any finite integral number representable as `i64`.
fn parse_label(raw: &str) -> Option<ClassLabel> {
    let value: f64 = raw.parse().ok()?;
    let in_range = (i64::MIN as f64..i64::MAX as f64).contains(&value);
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| ClassLabel::new(value as i64))
}
