use crate::math::{distance, Point3};

/// Computes the length of a polyline by summing its segment lengths.
pub struct PolylineLength<'a> {
    points: &'a [Point3],
}

impl<'a> PolylineLength<'a> {
    /// Creates a new `PolylineLength` query.
    #[must_use]
    pub fn new(points: &'a [Point3]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the summed length.
    ///
    /// Zero or one point yields `0.0`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| distance(&w[0], &w[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_point_are_zero() {
        assert!(PolylineLength::new(&[]).execute().abs() < f64::EPSILON);
        let one = [Point3::new(4.0, 5.0, 6.0)];
        assert!(PolylineLength::new(&one).execute().abs() < f64::EPSILON);
    }

    #[test]
    fn segment_3_4_5() {
        let pts = [Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
        assert!((PolylineLength::new(&pts).execute() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn sums_all_segments() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(1.0, 2.0, -3.0),
        ];
        assert!((PolylineLength::new(&pts).execute() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn backtracking_counts_twice() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        assert!((PolylineLength::new(&pts).execute() - 4.0).abs() < 1e-12);
    }
}
