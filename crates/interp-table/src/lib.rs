//! Interpolation and Label Tables
//!
//! Shared data model for region extraction: per-channel interpolants keyed
//! by (matrix, sensor, channel) and the ordered labeled regions of each matrix.

mod error;
mod interpolant;
mod labels;
mod table;

pub use error::TableError;
pub use interpolant::{Interpolant, LinearInterpolant};
pub use labels::{LabelTable, LabeledRegion};
pub use table::{ChannelKey, InterpolationTable};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of harmonic channels recorded per sensor
pub const CHANNEL_COUNT: usize = 10;

/// Identifier of a sensor matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatrixId(pub String);

impl MatrixId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatrixId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MatrixId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
