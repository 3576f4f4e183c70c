//! Per-Sensor Region Sampling

use crate::batch::{ExtractedSample, FeatureBatch};
use crate::config::SamplerConfig;
use crate::error::SamplerError;
use interp_table::{
    ChannelKey, Interpolant, InterpolationTable, LabelTable, LabeledRegion, MatrixId,
    CHANNEL_COUNT,
};
use ndarray::{s, Array1, Array2, ArrayViewMut2};
use tracing::debug;

/// `n` evenly spaced points over `[start, end]`, both endpoints included.
///
/// The last point is pinned to `end` so it matches exactly despite rounding.
pub fn uniform_grid(start: f64, end: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut grid = Array1::from_shape_fn(n, |i| start + step * i as f64);
            grid[n - 1] = end;
            grid
        }
    }
}

/// Log of one channel value, failing outside the channel's domain
fn log_channel(
    interpolant: &dyn Interpolant,
    channel: usize,
    t: f64,
) -> Result<f64, SamplerError> {
    match interpolant.evaluate(t) {
        None => Err(SamplerError::Undefined { channel, t }),
        Some(value) if value.is_nan() => Err(SamplerError::Undefined { channel, t }),
        Some(value) if value <= 0.0 => Err(SamplerError::NonPositive { channel, t, value }),
        Some(value) => Ok(value.ln()),
    }
}

/// Samples the labeled regions of one sensor's channels
pub struct RegionSampler<'a> {
    matrix: MatrixId,
    sensor: usize,
    /// Channel interpolants, indexed by channel
    channels: Vec<&'a dyn Interpolant>,
    /// Regions of the matrix in region order
    regions: &'a [LabeledRegion],
    samples: usize,
}

impl<'a> RegionSampler<'a> {
    /// Create a sampler with the default configuration
    pub fn new(
        matrix: impl Into<MatrixId>,
        sensor: usize,
        interpolants: &'a InterpolationTable,
        labels: &'a LabelTable,
    ) -> Result<Self, SamplerError> {
        Self::with_config(matrix, sensor, interpolants, labels, SamplerConfig::default())
    }

    /// Create a sampler, resolving the sensor's channels and the matrix's regions
    pub fn with_config(
        matrix: impl Into<MatrixId>,
        sensor: usize,
        interpolants: &'a InterpolationTable,
        labels: &'a LabelTable,
        config: SamplerConfig,
    ) -> Result<Self, SamplerError> {
        config.validate()?;
        let matrix = matrix.into();

        let channels = (0..CHANNEL_COUNT)
            .map(|channel| {
                interpolants
                    .get(&ChannelKey::new(matrix.clone(), sensor, channel))
                    .map(|interpolant| interpolant.as_ref())
                    .ok_or_else(|| SamplerError::MissingChannel {
                        matrix: matrix.clone(),
                        sensor,
                        channel,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let regions = labels
            .regions(&matrix)
            .ok_or_else(|| SamplerError::UnknownMatrix(matrix.clone()))?;

        debug!(
            "Sampler for matrix {} sensor {}: {} regions x {} samples",
            matrix,
            sensor,
            regions.len(),
            config.samples_per_region
        );

        Ok(Self {
            matrix,
            sensor,
            channels,
            regions,
            samples: config.samples_per_region,
        })
    }

    pub fn matrix(&self) -> &MatrixId {
        &self.matrix
    }

    pub fn sensor(&self) -> usize {
        self.sensor
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn samples_per_region(&self) -> usize {
        self.samples
    }

    fn region(&self, index: usize) -> Result<&LabeledRegion, SamplerError> {
        self.regions.get(index).ok_or(SamplerError::RegionOutOfRange {
            index,
            len: self.regions.len(),
        })
    }

    /// Write log channel values at `time` into `out` (`[time.len(), channels]`)
    fn evaluate_into(
        &self,
        time: &Array1<f64>,
        mut out: ArrayViewMut2<'_, f64>,
    ) -> Result<(), SamplerError> {
        for (channel, interpolant) in self.channels.iter().enumerate() {
            for (value, &t) in out.column_mut(channel).iter_mut().zip(time.iter()) {
                *value = log_channel(*interpolant, channel, t)?;
            }
        }
        Ok(())
    }

    /// Resample one region: `[samples, channels]` log signal plus its label and target
    pub fn region_data(&self, index: usize) -> Result<ExtractedSample, SamplerError> {
        let region = self.region(index)?;
        let time = uniform_grid(region.start, region.end, self.samples);

        let mut signal = Array2::zeros((self.samples, CHANNEL_COUNT));
        self.evaluate_into(&time, signal.view_mut())?;

        Ok(ExtractedSample {
            signal,
            label: region.label,
            target: region.target,
            time,
        })
    }

    /// One region with label and target repeated per row
    pub fn sample_region(&self, index: usize) -> Result<FeatureBatch, SamplerError> {
        Ok(self.region_data(index)?.into_batch())
    }

    /// All regions in order, stacked along the sample axis
    pub fn sample_all(&self) -> Result<FeatureBatch, SamplerError> {
        let n = self.samples;
        let total = n * self.regions.len();

        let mut batch = FeatureBatch {
            features: Array2::zeros((total, CHANNEL_COUNT)),
            labels: Array1::zeros(total),
            targets: Array1::zeros(total),
            time: Array1::zeros(total),
        };

        for (index, region) in self.regions.iter().enumerate() {
            let rows = index * n..(index + 1) * n;
            let time = uniform_grid(region.start, region.end, n);

            self.evaluate_into(&time, batch.features.slice_mut(s![rows.clone(), ..]))?;
            batch.labels.slice_mut(s![rows.clone()]).fill(region.label);
            batch.targets.slice_mut(s![rows.clone()]).fill(region.target);
            batch.time.slice_mut(s![rows]).assign(&time);
        }

        debug!(
            "Sampled matrix {} sensor {}: {} rows",
            self.matrix, self.sensor, total
        );

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn table_with(matrix: &str, sensor: usize, f: Arc<dyn Interpolant>) -> InterpolationTable {
        let mut table = InterpolationTable::new();
        table.insert_sensor(matrix, sensor, std::array::from_fn(|_| f.clone()));
        table
    }

    fn labels_with(matrix: &str, regions: Vec<LabeledRegion>) -> LabelTable {
        let mut labels = LabelTable::new();
        labels.insert(matrix, regions);
        labels
    }

    #[test]
    fn test_uniform_grid_endpoints() {
        let grid = uniform_grid(0.3, 7.1, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.3);
        assert_eq!(grid[99], 7.1);
        assert!(grid.windows(2).into_iter().all(|w| w[0] <= w[1]));

        assert_eq!(uniform_grid(2.0, 5.0, 1).to_vec(), vec![2.0]);
        assert!(uniform_grid(2.0, 5.0, 0).is_empty());
    }

    #[test]
    fn test_log_of_exp_recovers_grid() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| t.exp()));
        let labels = labels_with("m1", vec![LabeledRegion::new(0.0, 10.0, 1, 3.5)]);
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        let batch = sampler.sample_region(0).unwrap();
        let expected = uniform_grid(0.0, 10.0, 100);

        assert_eq!(batch.features.dim(), (100, CHANNEL_COUNT));
        for column in batch.features.columns() {
            for (value, t) in column.iter().zip(expected.iter()) {
                assert!((value - t).abs() < 1e-9);
            }
        }
        assert!(batch.labels.iter().all(|&l| l == 1));
        assert!(batch.targets.iter().all(|&r| r == 3.5));
        assert_eq!(batch.time, expected);
    }

    #[test]
    fn test_channels_keep_their_column() {
        let mut interp = InterpolationTable::new();
        interp.insert_sensor(
            "m1",
            2,
            std::array::from_fn(|c| {
                let scale = (c + 1) as f64;
                Arc::new(move |_t: f64| scale) as Arc<dyn Interpolant>
            }),
        );
        let labels = labels_with("m1", vec![LabeledRegion::new(0.0, 1.0, 0, 0.0)]);
        let sampler = RegionSampler::new("m1", 2, &interp, &labels).unwrap();

        let sample = sampler.region_data(0).unwrap();
        for channel in 0..CHANNEL_COUNT {
            let expected = ((channel + 1) as f64).ln();
            assert!(sample.signal.column(channel).iter().all(|&v| v == expected));
        }
    }

    #[test]
    fn test_degenerate_region() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| 1.0 + t * t));
        let labels = labels_with("m1", vec![LabeledRegion::new(4.0, 4.0, 2, 1.0)]);
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        let sample = sampler.region_data(0).unwrap();
        assert!(sample.time.iter().all(|&t| t == 4.0));
        let first = sample.signal.row(0).to_owned();
        assert!(sample.signal.rows().into_iter().all(|row| row == first));
        assert!((first[0] - 17.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_value_fails() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| t - 5.0));
        let labels = labels_with("m1", vec![LabeledRegion::new(0.0, 10.0, 0, 0.0)]);
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        let err = sampler.sample_region(0).unwrap_err();
        assert!(err.is_domain_error());
        assert!(matches!(err, SamplerError::NonPositive { channel: 0, t, .. } if t == 0.0));
    }

    #[test]
    fn test_undefined_point_fails() {
        let knots = interp_table::LinearInterpolant::new(vec![0.0, 5.0], vec![1.0, 2.0]).unwrap();
        let interp = table_with("m1", 0, Arc::new(knots));
        let labels = labels_with(
            "m1",
            vec![
                LabeledRegion::new(0.0, 5.0, 0, 0.0),
                LabeledRegion::new(4.0, 6.0, 1, 0.0),
            ],
        );
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        assert!(sampler.sample_region(0).is_ok());
        let err = sampler.sample_all().unwrap_err();
        assert!(matches!(err, SamplerError::Undefined { channel: 0, t } if t > 5.0));
    }

    #[test]
    fn test_nan_value_is_undefined() {
        let interp = table_with("m1", 0, Arc::new(|_t: f64| f64::NAN));
        let labels = labels_with("m1", vec![LabeledRegion::new(0.0, 1.0, 0, 0.0)]);
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        assert!(matches!(
            sampler.region_data(0),
            Err(SamplerError::Undefined { .. })
        ));
    }

    #[test]
    fn test_lookup_errors() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| t.exp()));
        let labels = labels_with("m1", vec![LabeledRegion::new(0.0, 1.0, 0, 0.0)]);

        assert!(matches!(
            RegionSampler::new("m1", 1, &interp, &labels),
            Err(SamplerError::MissingChannel { sensor: 1, channel: 0, .. })
        ));
        assert!(matches!(
            RegionSampler::new("m2", 0, &interp, &labels),
            Err(SamplerError::MissingChannel { .. })
        ));

        let interp_m2 = table_with("m2", 0, Arc::new(|t: f64| t.exp()));
        assert!(matches!(
            RegionSampler::new("m2", 0, &interp_m2, &labels),
            Err(SamplerError::UnknownMatrix(_))
        ));

        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();
        assert!(matches!(
            sampler.sample_region(1),
            Err(SamplerError::RegionOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_partial_channels_missing() {
        let mut interp = InterpolationTable::new();
        for channel in 0..CHANNEL_COUNT - 1 {
            interp.insert(ChannelKey::new("m1", 0, channel), Arc::new(|t: f64| t.exp()));
        }
        let labels = labels_with("m1", vec![]);

        assert!(matches!(
            RegionSampler::new("m1", 0, &interp, &labels),
            Err(SamplerError::MissingChannel { channel: 9, .. })
        ));
    }

    #[test]
    fn test_sample_all_matches_regions() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| 2.0 + t.sin()));
        let labels = labels_with(
            "m1",
            vec![
                LabeledRegion::new(0.0, 1.0, 0, 0.5),
                LabeledRegion::new(3.0, 9.5, 2, -1.0),
                LabeledRegion::new(10.0, 10.25, 1, 7.0),
            ],
        );
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        let all = sampler.sample_all().unwrap();
        assert_eq!(all.features.dim(), (300, CHANNEL_COUNT));

        for index in 0..sampler.region_count() {
            let region = sampler.sample_region(index).unwrap();
            let rows = index * 100..(index + 1) * 100;
            assert_eq!(all.features.slice(s![rows.clone(), ..]), region.features);
            assert_eq!(all.labels.slice(s![rows.clone()]), region.labels);
            assert_eq!(all.targets.slice(s![rows.clone()]), region.targets);
            assert_eq!(all.time.slice(s![rows]), region.time);
        }
    }

    #[test]
    fn test_sample_all_without_regions() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| t.exp()));
        let labels = labels_with("m1", vec![]);
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        let all = sampler.sample_all().unwrap();
        assert!(all.is_empty());
        assert_eq!(all.channels(), CHANNEL_COUNT);
    }

    #[test]
    fn test_custom_sample_count() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| t.exp()));
        let labels = labels_with(
            "m1",
            vec![
                LabeledRegion::new(0.0, 1.0, 0, 0.0),
                LabeledRegion::new(1.0, 2.0, 1, 0.0),
            ],
        );
        let config = SamplerConfig { samples_per_region: 7 };
        let sampler = RegionSampler::with_config("m1", 0, &interp, &labels, config).unwrap();

        assert_eq!(sampler.samples_per_region(), 7);
        assert_eq!(sampler.sample_all().unwrap().len(), 14);

        let zero = SamplerConfig { samples_per_region: 0 };
        assert!(matches!(
            RegionSampler::with_config("m1", 0, &interp, &labels, zero),
            Err(SamplerError::Config(_))
        ));
    }

    #[test]
    fn test_sampling_is_idempotent() {
        let interp = table_with("m1", 0, Arc::new(|t: f64| 1.5 + t.cos()));
        let labels = labels_with("m1", vec![LabeledRegion::new(-2.0, 2.0, 3, 0.1)]);
        let sampler = RegionSampler::new("m1", 0, &interp, &labels).unwrap();

        assert_eq!(sampler.sample_region(0).unwrap(), sampler.sample_region(0).unwrap());
    }
}
