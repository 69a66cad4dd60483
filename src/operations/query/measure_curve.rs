use tracing::debug;

use crate::error::Result;
use crate::geometry::ControlPointSet;
use crate::operations::creation::FitCurve;
use crate::tessellation::{Polyline, SampleCurve, SamplingParams};

/// Result of measuring the curve through a control point triple.
#[derive(Debug, Clone)]
pub struct CurveMeasurement {
    /// The control points the curve was fitted through.
    pub control: ControlPointSet,
    /// The sampled curve.
    pub polyline: Polyline,
    /// Approximate arc length of the curve.
    pub length: f64,
}

/// Measures the approximate arc length of the spline through three points.
///
/// Fits a [`ThreePointSpline`](crate::geometry::ThreePointSpline), samples
/// it with a count proportional to the control polygon length, and sums
/// the sampled segments.
pub struct MeasureCurveDistance {
    control: ControlPointSet,
    params: SamplingParams,
}

impl MeasureCurveDistance {
    /// Creates a new `MeasureCurveDistance` query.
    #[must_use]
    pub fn new(control: ControlPointSet, params: SamplingParams) -> Self {
        Self { control, params }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub fn execute(&self) -> Result<CurveMeasurement> {
        let spline = FitCurve::new(self.control).execute();
        let num_points = self.params.sample_count(self.control.chord_length());
        let polyline = SampleCurve::new(&spline, num_points)
            .with_mode(self.params.mode)
            .execute()?;
        let length = polyline.length();

        debug!(num_points, length, mode = ?self.params.mode, "measured curve distance");

        Ok(CurveMeasurement {
            control: self.control,
            polyline,
            length,
        })
    }
}
