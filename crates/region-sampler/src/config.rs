//! Sampler configuration

use crate::error::SamplerError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Grid points per region
pub const SAMPLES_PER_REGION: usize = 100;

/// Environment prefix for overrides, e.g. `REGION_SAMPLER_SAMPLES_PER_REGION`
const ENV_PREFIX: &str = "REGION_SAMPLER";

/// Region sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Points in each region's uniform time grid
    pub samples_per_region: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples_per_region: SAMPLES_PER_REGION,
        }
    }
}

impl SamplerConfig {
    /// Create dense config (twice the default resolution)
    pub fn dense() -> Self {
        Self {
            samples_per_region: 2 * SAMPLES_PER_REGION,
        }
    }

    /// Create coarse config (half the default resolution)
    pub fn coarse() -> Self {
        Self {
            samples_per_region: SAMPLES_PER_REGION / 2,
        }
    }

    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.samples_per_region == 0 {
            return Err(SamplerError::Config(
                "samples_per_region must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Layer defaults, an optional config file and `REGION_SAMPLER_*` env vars
    pub fn load(path: Option<&Path>) -> Result<Self, SamplerError> {
        let mut builder = Config::builder()
            .set_default("samples_per_region", SAMPLES_PER_REGION as i64)?;

        if let Some(path) = path {
            debug!("Loading sampler config from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let config: SamplerConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
