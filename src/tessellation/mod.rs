mod sample_curve;

pub use sample_curve::SampleCurve;

use crate::math::Point3;
use crate::operations::query::PolylineLength;

/// Where the last sample of a curve falls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleMode {
    /// Samples at `i / n` for `i in 0..n`; the curve end (`t = 1`) is never
    /// evaluated.
    #[default]
    HalfOpen,
    /// Samples at `i / (n - 1)` for `i in 0..n`; the last sample is the curve end.
    Closed,
}

/// Parameters controlling how densely a measured curve is sampled.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Samples per unit of rounded control-polygon length.
    pub samples_per_unit: usize,
    /// Lower bound on the number of samples.
    pub min_samples: usize,
    /// Placement of the final sample.
    pub mode: SampleMode,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            samples_per_unit: 50,
            min_samples: 50,
            mode: SampleMode::HalfOpen,
        }
    }
}

impl SamplingParams {
    /// Number of samples for a curve whose control polygon has length
    /// `chord_length`: `max(round(chord_length) * samples_per_unit, min_samples)`.
    ///
    /// The result is never zero.
    #[must_use]
    pub fn sample_count(&self, chord_length: f64) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = if chord_length.is_finite() && chord_length > 0.0 {
            chord_length.round() as usize
        } else {
            0
        };
        rounded
            .saturating_mul(self.samples_per_unit)
            .max(self.min_samples)
            .max(1)
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        PolylineLength::new(&self.points).execute()
    }
}
