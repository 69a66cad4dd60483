use crate::math::{Point3, Vector3};

/// A cubic Hermite segment from `start` to `end` over the local parameter
/// `u ∈ [0, 1]`.
///
/// Tangents are expressed per unit of `u`, so a segment with
/// `start_tangent = end_tangent = end - start` is a uniformly parameterized
/// straight line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteSegment {
    start: Point3,
    end: Point3,
    start_tangent: Vector3,
    end_tangent: Vector3,
}

impl HermiteSegment {
    /// Creates a new Hermite segment.
    #[must_use]
    pub fn new(start: Point3, end: Point3, start_tangent: Vector3, end_tangent: Vector3) -> Self {
        Self {
            start,
            end,
            start_tangent,
            end_tangent,
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Evaluates the segment at local parameter `u`.
    #[must_use]
    pub fn point_at(&self, u: f64) -> Point3 {
        let u2 = u * u;
        let u3 = u2 * u;
        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;
        Point3::from(
            self.start.coords * h00
                + self.start_tangent * h10
                + self.end.coords * h01
                + self.end_tangent * h11,
        )
    }

    /// First derivative with respect to the local parameter `u`.
    #[must_use]
    pub fn derivative_at(&self, u: f64) -> Vector3 {
        let u2 = u * u;
        let d00 = 6.0 * u2 - 6.0 * u;
        let d10 = 3.0 * u2 - 4.0 * u + 1.0;
        let d01 = -6.0 * u2 + 6.0 * u;
        let d11 = 3.0 * u2 - 2.0 * u;
        self.start.coords * d00
            + self.start_tangent * d10
            + self.end.coords * d01
            + self.end_tangent * d11
    }
}
