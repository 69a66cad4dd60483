use crate::error::{GeometryError, Result};
use crate::geometry::ControlPointSet;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain, HermiteSegment};

/// An interpolating Catmull-Rom spline through three control points.
///
/// The knots sit at `t = 0, 0.5, 1`. The middle point uses the central
/// difference `(end - start) / 2` as its tangent; the endpoints have no
/// outer neighbor, so their tangents are estimated one-sided:
///
/// - start: `(2 * middle - start - end) / 2`
/// - end: `(start + end - 2 * middle) / 2`
///
/// Coincident or collinear control points yield a point-like or straight
/// curve.
#[derive(Debug, Clone)]
pub struct ThreePointSpline {
    control: ControlPointSet,
    first: HermiteSegment,
    second: HermiteSegment,
}

impl ThreePointSpline {
    /// Parameter of the middle knot.
    pub const MIDDLE_KNOT: f64 = 0.5;

    /// Fits the spline through `control`.
    #[must_use]
    pub fn new(control: ControlPointSet) -> Self {
        let ControlPointSet { start, middle, end } = control;
        let (s, m, e) = (start.coords, middle.coords, end.coords);

        let start_tangent: Vector3 = (m * 2.0 - s - e) * 0.5;
        let middle_tangent: Vector3 = (e - s) * 0.5;
        let end_tangent: Vector3 = (s + e - m * 2.0) * 0.5;

        Self {
            control,
            first: HermiteSegment::new(start, middle, start_tangent, middle_tangent),
            second: HermiteSegment::new(middle, end, middle_tangent, end_tangent),
        }
    }

    /// Returns the control points the spline interpolates.
    #[must_use]
    pub fn control_points(&self) -> &ControlPointSet {
        &self.control
    }

    /// Maps a global parameter to the owning segment and its local parameter.
    fn locate(&self, t: f64) -> Result<(&HermiteSegment, f64)> {
        let domain = self.domain();
        if !domain.contains(t, TOLERANCE) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into());
        }
        let t = t.clamp(domain.t_min, domain.t_max);
        if t < Self::MIDDLE_KNOT {
            Ok((&self.first, t / Self::MIDDLE_KNOT))
        } else {
            Ok((
                &self.second,
                (t - Self::MIDDLE_KNOT) / (1.0 - Self::MIDDLE_KNOT),
            ))
        }
    }
}

impl Curve for ThreePointSpline {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let (segment, u) = self.locate(t)?;
        Ok(segment.point_at(u))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let (segment, u) = self.locate(t)?;
        let derivative = segment.derivative_at(u);
        let len = derivative.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(derivative / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeasureError;
    use approx::assert_relative_eq;

    fn arch() -> ThreePointSpline {
        ThreePointSpline::new(ControlPointSet::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ))
    }

    #[test]
    fn passes_through_control_points() {
        let control = ControlPointSet::new(
            Point3::new(-3.0, 2.0, 5.0),
            Point3::new(4.0, 0.5, -1.0),
            Point3::new(7.5, -2.0, 3.0),
        );
        let spline = ThreePointSpline::new(control);
        assert_relative_eq!(spline.evaluate(0.0).unwrap(), control.start, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(0.5).unwrap(), control.middle, epsilon = 1e-12);
        assert_relative_eq!(spline.evaluate(1.0).unwrap(), control.end, epsilon = 1e-12);
    }

    #[test]
    fn approaches_end_as_t_goes_to_one() {
        let spline = arch();
        let end = spline.control_points().end;
        let far = (spline.evaluate(0.99).unwrap() - end).norm();
        let near = (spline.evaluate(0.999).unwrap() - end).norm();
        assert!(near < far);
        assert!(near < 1e-2);
    }

    #[test]
    fn continuous_across_middle_knot() {
        let spline = arch();
        let before = spline.evaluate(0.5 - 1e-9).unwrap();
        let after = spline.evaluate(0.5 + 1e-9).unwrap();
        assert!((before - after).norm() < 1e-6);

        let t_before = spline.tangent(0.5 - 1e-9).unwrap();
        let t_after = spline.tangent(0.5 + 1e-9).unwrap();
        assert_relative_eq!(t_before, t_after, epsilon = 1e-6);
    }

    #[test]
    fn symmetric_arch_peaks_at_middle() {
        let spline = arch();
        let apex = spline.tangent(0.5).unwrap();
        assert_relative_eq!(apex, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);

        let left = spline.evaluate(0.25).unwrap();
        let right = spline.evaluate(0.75).unwrap();
        assert_relative_eq!(left.y, right.y, epsilon = 1e-12);
        assert_relative_eq!(left.x, 2.0 - right.x, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_stay_on_line() {
        let spline = ThreePointSpline::new(ControlPointSet::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ));
        for i in 0..=20 {
            let p = spline.evaluate(f64::from(i) / 20.0).unwrap();
            assert!(p.y.abs() < 1e-12 && p.z.abs() < 1e-12);
            assert!((-1e-12..=2.0 + 1e-12).contains(&p.x));
        }
    }

    #[test]
    fn coincident_points_collapse() {
        let p = Point3::new(5.0, -1.0, 2.0);
        let spline = ThreePointSpline::new(ControlPointSet::new(p, p, p));
        assert_relative_eq!(spline.evaluate(0.3).unwrap(), p, epsilon = 1e-12);
        assert!(matches!(
            spline.tangent(0.3),
            Err(MeasureError::Geometry(GeometryError::ZeroVector))
        ));
    }

    #[test]
    fn out_of_domain_is_rejected() {
        let spline = arch();
        assert!(matches!(
            spline.evaluate(1.5),
            Err(MeasureError::Geometry(GeometryError::ParameterOutOfRange { .. }))
        ));
        assert!(spline.evaluate(-0.1).is_err());
        assert!(!spline.is_closed());
    }
}
