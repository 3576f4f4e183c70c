//! Region Feature Sampler
//!
//! Resamples labeled time regions of a sensor's channel interpolants onto a
//! fixed-length grid and assembles log-transformed feature batches for ML
//! training, optionally merging a left/right sensor pair.

mod batch;
mod config;
mod error;
mod paired;
mod sampler;

pub use batch::{ExtractedSample, FeatureBatch};
pub use crate::config::{SamplerConfig, SAMPLES_PER_REGION};
pub use error::{MismatchField, SamplerError};
pub use paired::{
    extract_paired_all, extract_paired_all_with_config, extract_paired_region,
    extract_paired_region_with_config, pair_batches,
};
pub use sampler::{uniform_grid, RegionSampler};

pub use interp_table::{
    ChannelKey, Interpolant, InterpolationTable, LabelTable, LabeledRegion, LinearInterpolant,
    MatrixId, CHANNEL_COUNT,
};
