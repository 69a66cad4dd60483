use crate::error::{CaptureError, Result};
use crate::math::{distance, Point3};

/// The ordered triple of picked positions that shapes a measured curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointSet {
    pub start: Point3,
    pub middle: Point3,
    pub end: Point3,
}

impl ControlPointSet {
    /// Creates a control point set from three points.
    #[must_use]
    pub fn new(start: Point3, middle: Point3, end: Point3) -> Self {
        Self { start, middle, end }
    }

    /// Builds a control point set from a captured point sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::IncompletePointSet`] unless `points` holds
    /// exactly three points.
    pub fn from_slice(points: &[Point3]) -> Result<Self> {
        match points {
            [start, middle, end] => Ok(Self::new(*start, *middle, *end)),
            _ => Err(CaptureError::IncompletePointSet {
                captured: points.len(),
            }
            .into()),
        }
    }

    /// Length of the control polygon `start → middle → end`.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        distance(&self.start, &self.middle) + distance(&self.middle, &self.end)
    }

    /// Straight-line distance from `start` to `end`.
    #[must_use]
    pub fn span(&self) -> f64 {
        distance(&self.start, &self.end)
    }

    /// Returns the points in capture order.
    #[must_use]
    pub fn to_array(&self) -> [Point3; 3] {
        [self.start, self.middle, self.end]
    }
}
