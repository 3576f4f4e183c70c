//! Sampler Error Types

use interp_table::MatrixId;
use std::fmt;
use thiserror::Error;

/// Output vector compared between a left/right sensor pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchField {
    Labels,
    Targets,
    Time,
}

impl fmt::Display for MismatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MismatchField::Labels => "labels",
            MismatchField::Targets => "targets",
            MismatchField::Time => "time",
        })
    }
}

/// Errors during region extraction
#[derive(Debug, Clone, Error)]
pub enum SamplerError {
    /// Label table has no entry for the matrix
    #[error("Unknown matrix: {0}")]
    UnknownMatrix(MatrixId),

    /// Interpolation table lacks a channel of the requested sensor
    #[error("No interpolant for matrix {matrix}, sensor {sensor}, channel {channel}")]
    MissingChannel {
        matrix: MatrixId,
        sensor: usize,
        channel: usize,
    },

    /// Region index past the end of the matrix's region list
    #[error("Region index {index} out of range for {len} regions")]
    RegionOutOfRange { index: usize, len: usize },

    /// Interpolant undefined at a grid point
    #[error("Channel {channel} undefined at t={t}")]
    Undefined { channel: usize, t: f64 },

    /// Logarithm of a non-positive channel value
    #[error("Channel {channel} value {value} at t={t} is not positive, log undefined")]
    NonPositive { channel: usize, t: f64, value: f64 },

    /// Paired sensors disagree on a shared output vector
    #[error("Paired sensor {field} are not the same")]
    Mismatch { field: MismatchField },

    /// Array assembly failed
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SamplerError {
    /// Whether a channel was evaluated outside its valid domain
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            SamplerError::Undefined { .. } | SamplerError::NonPositive { .. }
        )
    }
}

impl From<config::ConfigError> for SamplerError {
    fn from(err: config::ConfigError) -> Self {
        SamplerError::Config(err.to_string())
    }
}
