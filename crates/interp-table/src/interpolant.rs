//! Channel Interpolants

use crate::error::TableError;

/// A unary real function of time for one sensor channel
pub trait Interpolant: Send + Sync {
    /// Evaluate at `t`, `None` where the function is undefined
    fn evaluate(&self, t: f64) -> Option<f64>;
}

impl<F> Interpolant for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, t: f64) -> Option<f64> {
        Some(self(t))
    }
}

/// Piecewise-linear interpolant over strictly increasing knots.
///
/// Undefined outside `[xs[0], xs[n-1]]`; there is no extrapolation.
#[derive(Debug, Clone)]
pub struct LinearInterpolant {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolant {
    /// Create an interpolant from knot abscissae and ordinates
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, TableError> {
        if xs.len() != ys.len() {
            return Err(TableError::KnotLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(TableError::TooFewKnots(xs.len()));
        }
        if let Some(index) = xs
            .iter()
            .zip(&ys)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(TableError::NonFiniteKnot(index));
        }
        if let Some(index) = xs.windows(2).position(|w| w[0] >= w[1]) {
            return Err(TableError::NonIncreasingKnots {
                index: index + 1,
                prev: xs[index],
                next: xs[index + 1],
            });
        }
        Ok(Self { xs, ys })
    }

    /// Domain covered by the knots
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

impl Interpolant for LinearInterpolant {
    fn evaluate(&self, t: f64) -> Option<f64> {
        let (lo, hi) = self.domain();
        if !(lo..=hi).contains(&t) {
            return None;
        }

        // First knot strictly greater than t; clamp so t == hi uses the last segment
        let upper = self.xs.partition_point(|&x| x <= t).clamp(1, self.xs.len() - 1);
        let (x0, x1) = (self.xs[upper - 1], self.xs[upper]);
        let (y0, y1) = (self.ys[upper - 1], self.ys[upper]);

        Some(y0 + (y1 - y0) * (t - x0) / (x1 - x0))
    }
}
