//! Interpolation Function Table

use crate::interpolant::Interpolant;
use crate::{MatrixId, CHANNEL_COUNT};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Typed key of one channel interpolant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelKey {
    pub matrix: MatrixId,
    pub sensor: usize,
    pub channel: usize,
}

impl ChannelKey {
    pub fn new(matrix: impl Into<MatrixId>, sensor: usize, channel: usize) -> Self {
        Self {
            matrix: matrix.into(),
            sensor,
            channel,
        }
    }
}

/// Interpolants for every (matrix, sensor, channel) supplied by the caller
#[derive(Clone, Default)]
pub struct InterpolationTable {
    entries: HashMap<ChannelKey, Arc<dyn Interpolant>>,
}

impl InterpolationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one channel, returning the interpolant it replaced
    pub fn insert(
        &mut self,
        key: ChannelKey,
        interpolant: Arc<dyn Interpolant>,
    ) -> Option<Arc<dyn Interpolant>> {
        self.entries.insert(key, interpolant)
    }

    /// Insert all channels of a sensor at once
    pub fn insert_sensor(
        &mut self,
        matrix: impl Into<MatrixId>,
        sensor: usize,
        channels: [Arc<dyn Interpolant>; CHANNEL_COUNT],
    ) {
        let matrix = matrix.into();
        for (channel, interpolant) in channels.into_iter().enumerate() {
            self.entries
                .insert(ChannelKey::new(matrix.clone(), sensor, channel), interpolant);
        }
    }

    pub fn get(&self, key: &ChannelKey) -> Option<&Arc<dyn Interpolant>> {
        self.entries.get(key)
    }

    /// Sensor indices that have at least one channel in `matrix`, ascending
    pub fn sensors(&self, matrix: &MatrixId) -> Vec<usize> {
        self.entries
            .keys()
            .filter(|key| &key.matrix == matrix)
            .map(|key| key.sensor)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for InterpolationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpolationTable")
            .field("entries", &self.entries.len())
            .finish()
    }
}
