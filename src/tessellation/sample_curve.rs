use crate::error::{Result, SamplingError};
use crate::geometry::curve::Curve;

use super::{Polyline, SampleMode};

/// Samples a curve at evenly spaced parameters into a polyline.
pub struct SampleCurve<'a, C: Curve> {
    curve: &'a C,
    num_points: usize,
    mode: SampleMode,
}

impl<'a, C: Curve> SampleCurve<'a, C> {
    /// Creates a new `SampleCurve` operation producing `num_points` samples.
    #[must_use]
    pub fn new(curve: &'a C, num_points: usize) -> Self {
        Self {
            curve,
            num_points,
            mode: SampleMode::default(),
        }
    }

    /// Sets where the final sample falls.
    #[must_use]
    pub fn with_mode(mut self, mode: SampleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Executes the sampling, returning exactly `num_points` points.
    ///
    /// In [`SampleMode::HalfOpen`] the parameters are `t_min + i / n * span`
    /// for `i in 0..n`, so the end of the domain is never reached.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_points` is zero or the curve cannot be
    /// evaluated inside its own domain.
    pub fn execute(&self) -> Result<Polyline> {
        let n = self.num_points;
        if n == 0 {
            return Err(SamplingError::InvalidParameters(
                "number of samples must be positive".to_owned(),
            )
            .into());
        }

        let domain = self.curve.domain();
        let span = domain.t_max - domain.t_min;
        let divisor = match self.mode {
            SampleMode::HalfOpen => n,
            SampleMode::Closed => (n - 1).max(1),
        };

        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            #[allow(clippy::cast_precision_loss)]
            let t = domain.t_min + span * (i as f64 / divisor as f64);
            points.push(self.curve.evaluate(t)?);
        }
        Ok(Polyline::new(points))
    }
}
