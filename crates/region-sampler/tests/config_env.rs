//! Environment overrides for sampler configuration.
//!
//! Kept in its own test binary: the variable is process-wide and would leak
//! into the file-based config tests.

use region_sampler::{SamplerConfig, SamplerError};

const SAMPLES_VAR: &str = "REGION_SAMPLER_SAMPLES_PER_REGION";

#[test]
fn env_overrides_file_and_defaults() {
    let path = std::env::temp_dir().join(format!(
        "region-sampler-env-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "samples_per_region = 64\n").unwrap();

    std::env::set_var(SAMPLES_VAR, "200");
    let from_file = SamplerConfig::load(Some(&path));
    let without_file = SamplerConfig::load(None);

    std::env::set_var(SAMPLES_VAR, "0");
    let zero = SamplerConfig::load(None);

    std::env::remove_var(SAMPLES_VAR);
    let file_only = SamplerConfig::load(Some(&path));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(from_file.unwrap().samples_per_region, 200);
    assert_eq!(without_file.unwrap().samples_per_region, 200);
    assert!(matches!(zero, Err(SamplerError::Config(_))));
    assert_eq!(file_only.unwrap().samples_per_region, 64);
}
