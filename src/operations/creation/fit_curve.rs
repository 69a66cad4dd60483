use crate::geometry::{ControlPointSet, ThreePointSpline};

/// Fits an interpolating spline through a captured control point triple.
pub struct FitCurve {
    control: ControlPointSet,
}

impl FitCurve {
    /// Creates a new `FitCurve` operation.
    #[must_use]
    pub fn new(control: ControlPointSet) -> Self {
        Self { control }
    }

    /// Executes the fit. Never fails: degenerate triples produce a straight
    /// or point-like spline.
    #[must_use]
    pub fn execute(&self) -> ThreePointSpline {
        ThreePointSpline::new(self.control)
    }
}
