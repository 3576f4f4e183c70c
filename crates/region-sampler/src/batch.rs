//! Extracted Samples and Feature Batches

use ndarray::{Array1, Array2};

/// One region resampled onto its grid
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSample {
    /// Log channel values, `[samples, channels]`
    pub signal: Array2<f64>,
    /// Classification label of the region
    pub label: i32,
    /// Regression target of the region
    pub target: f64,
    /// Grid time points
    pub time: Array1<f64>,
}

impl ExtractedSample {
    /// Number of grid points
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Broadcast label and target across every grid point
    pub fn into_batch(self) -> FeatureBatch {
        let n = self.len();
        FeatureBatch {
            features: self.signal,
            labels: Array1::from_elem(n, self.label),
            targets: Array1::from_elem(n, self.target),
            time: self.time,
        }
    }
}

/// ML-ready rows: one label, target and time per feature row
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBatch {
    /// Feature matrix, `[rows, channels]`
    pub features: Array2<f64>,
    /// Classification label per row
    pub labels: Array1<i32>,
    /// Regression target per row
    pub targets: Array1<f64>,
    /// Time per row
    pub time: Array1<f64>,
}

impl FeatureBatch {
    /// Zero-row batch with a fixed channel count
    pub fn empty(channels: usize) -> Self {
        Self {
            features: Array2::zeros((0, channels)),
            labels: Array1::zeros(0),
            targets: Array1::zeros(0),
            time: Array1::zeros(0),
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of feature columns
    pub fn channels(&self) -> usize {
        self.features.ncols()
    }

    /// Split into `(features, labels, targets, time)`
    pub fn into_parts(self) -> (Array2<f64>, Array1<i32>, Array1<f64>, Array1<f64>) {
        (self.features, self.labels, self.targets, self.time)
    }
}
