mod length;
mod measure_curve;

pub use length::PolylineLength;
pub use measure_curve::{CurveMeasurement, MeasureCurveDistance};
