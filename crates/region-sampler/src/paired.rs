//! Left/Right Sensor Pair Extraction

use crate::batch::FeatureBatch;
use crate::config::SamplerConfig;
use crate::error::{MismatchField, SamplerError};
use crate::sampler::RegionSampler;
use interp_table::{InterpolationTable, LabelTable, MatrixId};
use ndarray::{concatenate, Axis};
use tracing::{debug, warn};

/// Check that two batches describe the same rows and join their features by column.
///
/// Labels, targets and time are compared exactly, in that order.
pub fn pair_batches(
    left: FeatureBatch,
    right: FeatureBatch,
) -> Result<FeatureBatch, SamplerError> {
    let checks = [
        (MismatchField::Labels, left.labels == right.labels),
        (MismatchField::Targets, left.targets == right.targets),
        (MismatchField::Time, left.time == right.time),
    ];
    if let Some((field, _)) = checks.into_iter().find(|(_, same)| !same) {
        warn!("Paired sensor {} differ", field);
        return Err(SamplerError::Mismatch { field });
    }

    let features = concatenate(Axis(1), &[left.features.view(), right.features.view()])?;
    debug!(
        "Paired {} rows: {} + {} channels",
        features.nrows(),
        left.features.ncols(),
        right.features.ncols()
    );

    Ok(FeatureBatch {
        features,
        labels: left.labels,
        targets: left.targets,
        time: left.time,
    })
}

/// All regions of a sensor pair, features `[rows, 2 * channels]`
pub fn extract_paired_all(
    matrix: impl Into<MatrixId>,
    left_sensor: usize,
    right_sensor: usize,
    interpolants: &InterpolationTable,
    labels: &LabelTable,
) -> Result<FeatureBatch, SamplerError> {
    extract_paired_all_with_config(
        matrix,
        left_sensor,
        right_sensor,
        interpolants,
        labels,
        SamplerConfig::default(),
    )
}

pub fn extract_paired_all_with_config(
    matrix: impl Into<MatrixId>,
    left_sensor: usize,
    right_sensor: usize,
    interpolants: &InterpolationTable,
    labels: &LabelTable,
    config: SamplerConfig,
) -> Result<FeatureBatch, SamplerError> {
    let matrix = matrix.into();
    let left = RegionSampler::with_config(matrix.clone(), left_sensor, interpolants, labels, config)?
        .sample_all()?;
    let right = RegionSampler::with_config(matrix, right_sensor, interpolants, labels, config)?
        .sample_all()?;
    pair_batches(left, right)
}

/// One region of a sensor pair, features `[samples, 2 * channels]`
pub fn extract_paired_region(
    matrix: impl Into<MatrixId>,
    left_sensor: usize,
    right_sensor: usize,
    interpolants: &InterpolationTable,
    labels: &LabelTable,
    region: usize,
) -> Result<FeatureBatch, SamplerError> {
    extract_paired_region_with_config(
        matrix,
        left_sensor,
        right_sensor,
        interpolants,
        labels,
        region,
        SamplerConfig::default(),
    )
}

pub fn extract_paired_region_with_config(
    matrix: impl Into<MatrixId>,
    left_sensor: usize,
    right_sensor: usize,
    interpolants: &InterpolationTable,
    labels: &LabelTable,
    region: usize,
    config: SamplerConfig,
) -> Result<FeatureBatch, SamplerError> {
    let matrix = matrix.into();
    let left = RegionSampler::with_config(matrix.clone(), left_sensor, interpolants, labels, config)?
        .sample_region(region)?;
    let right = RegionSampler::with_config(matrix, right_sensor, interpolants, labels, config)?
        .sample_region(region)?;
    pair_batches(left, right)
}
