#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use globe_measure::geometry::{ControlPointSet, Curve};
use globe_measure::math::{distance, Point3};
use globe_measure::tessellation::{SampleCurve, SampleMode, SamplingParams};
use globe_measure::{fit_curve, sample_curve, total_length};

fn triples() -> Vec<(Point3, Point3, Point3)> {
    vec![
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ),
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ),
        (
            Point3::new(-12.0, 4.5, 3.0),
            Point3::new(2.0, -8.0, 1.0),
            Point3::new(6.0, 9.0, -4.0),
        ),
        (
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ),
    ]
}

#[test]
fn curve_passes_through_control_points() {
    for (a, b, c) in triples() {
        let curve = fit_curve(a, b, c);
        assert_relative_eq!(curve.evaluate(0.0).unwrap(), a, epsilon = 1e-9);
        assert_relative_eq!(curve.evaluate(0.5).unwrap(), b, epsilon = 1e-9);
        let near_end = curve.evaluate(1.0 - 1e-6).unwrap();
        assert!(distance(&near_end, &c) < 1e-4);
    }
}

#[test]
fn sample_count_is_exact() {
    let (a, b, c) = triples()[2];
    let curve = fit_curve(a, b, c);
    for n in 1..=64 {
        assert_eq!(sample_curve(&curve, n).unwrap().len(), n);
    }
}

#[test]
fn refinement_never_shortens() {
    for (a, b, c) in triples().into_iter().take(3) {
        let curve = fit_curve(a, b, c);
        let mut previous = 0.0;
        for n in [25, 50, 100, 200, 400, 800] {
            let length = total_length(&sample_curve(&curve, n).unwrap().points);
            assert!(length >= previous - 1e-12, "n = {n}: {length} < {previous}");
            previous = length;
        }
    }
}

#[test]
fn identical_points_measure_zero() {
    let p = Point3::new(5.0, -1.0, 2.0);
    let curve = fit_curve(p, p, p);
    for n in [1, 50, 300] {
        assert!(total_length(&sample_curve(&curve, n).unwrap().points).abs() < 1e-9);
    }
}

#[test]
fn closed_sampling_is_bounded_below_by_span() {
    for (a, b, c) in triples() {
        let curve = fit_curve(a, b, c);
        let polyline = SampleCurve::new(&curve, 100)
            .with_mode(SampleMode::Closed)
            .execute()
            .unwrap();
        assert!(polyline.length() >= distance(&a, &c) - 1e-9);
    }
}

#[test]
fn half_open_sampling_is_bounded_below_by_reached_span() {
    for (a, b, c) in triples() {
        let curve = fit_curve(a, b, c);
        let polyline = sample_curve(&curve, 100).unwrap();
        let last = polyline.points.last().unwrap();
        assert!(polyline.length() >= distance(&a, last) - 1e-9);
    }
}

#[test]
fn arch_scenario() {
    let control = ControlPointSet::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    );
    let n = SamplingParams::default().sample_count(control.chord_length());
    assert_eq!(n, 150);

    let curve = fit_curve(control.start, control.middle, control.end);
    let polyline = sample_curve(&curve, n).unwrap();
    assert_eq!(polyline.len(), 150);

    let length = total_length(&polyline.points);
    assert!(length > 2.0);
    assert!((length - 2.959).abs() < 1e-2, "length = {length}");
}
