//! Labeled Time Regions

use crate::MatrixId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A labeled time interval of interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledRegion {
    /// Region start time
    pub start: f64,
    /// Region end time (not checked against `start`)
    pub end: f64,
    /// Classification label
    pub label: i32,
    /// Regression target
    pub target: f64,
}

impl LabeledRegion {
    pub fn new(start: f64, end: f64, label: i32, target: f64) -> Self {
        Self {
            start,
            end,
            label,
            target,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Ordered labeled regions per matrix
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelTable {
    regions: HashMap<MatrixId, Vec<LabeledRegion>>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regions of a matrix, replacing any previous ones
    pub fn insert(&mut self, matrix: impl Into<MatrixId>, regions: Vec<LabeledRegion>) {
        self.regions.insert(matrix.into(), regions);
    }

    /// Append a region to a matrix
    pub fn push(&mut self, matrix: impl Into<MatrixId>, region: LabeledRegion) {
        self.regions.entry(matrix.into()).or_default().push(region);
    }

    /// Regions of a matrix in region-index order
    pub fn regions(&self, matrix: &MatrixId) -> Option<&[LabeledRegion]> {
        self.regions.get(matrix).map(Vec::as_slice)
    }
}
