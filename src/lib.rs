pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod scene;
pub mod tessellation;
pub mod tools;

pub use error::{MeasureError, Result};

use geometry::{ControlPointSet, Curve, ThreePointSpline};
use math::Point3;
use operations::creation::FitCurve;
use operations::query::PolylineLength;
use tessellation::{Polyline, SampleCurve};

/// Fits the interpolating spline through `start`, `middle`, and `end`.
#[must_use]
pub fn fit_curve(start: Point3, middle: Point3, end: Point3) -> ThreePointSpline {
    FitCurve::new(ControlPointSet::new(start, middle, end)).execute()
}

/// Samples `curve` at `n` evenly spaced parameters, never reaching the end
/// of its domain.
///
/// # Errors
///
/// Returns an error if `n` is zero.
pub fn sample_curve<C: Curve>(curve: &C, n: usize) -> Result<Polyline> {
    SampleCurve::new(curve, n).execute()
}

/// Sum of the distances between consecutive points.
#[must_use]
pub fn total_length(points: &[Point3]) -> f64 {
    PolylineLength::new(points).execute()
}
