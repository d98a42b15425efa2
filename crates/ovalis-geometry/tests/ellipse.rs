//! Contour generation tests for oriented ellipses.
//!
//! These tests check the geometric properties of the generated contours
//! rather than individual coordinates.

use glam::DVec2;
use ovalis_geometry::{KAPPA, OrientedEllipse, PathCommand, PathCurves, Transform2D};

const EPS: f64 = 1e-9;

fn sample_ellipses() -> Vec<OrientedEllipse> {
    vec![
        OrientedEllipse::new(DVec2::ZERO, 10.0, 5.0, 0.0),
        OrientedEllipse::new(DVec2::new(-3.5, 12.0), 1.0, 8.0, 17.0),
        OrientedEllipse::new(DVec2::new(100.0, 100.0), 40.0, 40.0, -120.0),
        OrientedEllipse::from_coords(0.25, -0.75, 0.0, 3.0, 90.0),
        OrientedEllipse::from_coords(7.0, 7.0, -2.0, 4.0, 200.0),
    ]
}

fn points(commands: &[PathCommand]) -> Vec<DVec2> {
    commands
        .iter()
        .flat_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => vec![control1, control2, to],
            PathCommand::Close => vec![],
        })
        .collect()
}

// ====================
// Value semantics
// ====================

#[test]
fn test_moved_offsets_center_only() {
    let offset = DVec2::new(4.0, -9.5);
    for ellipse in sample_ellipses() {
        let moved = ellipse.moved(offset);
        assert_eq!(moved.center, ellipse.center + offset);
        assert_eq!(moved.x_radius, ellipse.x_radius);
        assert_eq!(moved.y_radius, ellipse.y_radius);
        assert_eq!(moved.rotation, ellipse.rotation);
    }
}

#[test]
fn test_scaled_to_own_radii_is_identity() {
    for ellipse in sample_ellipses() {
        assert_eq!(ellipse.scaled_to(ellipse.x_radius, ellipse.y_radius), ellipse);
    }
}

#[test]
fn test_equal_values_give_identical_contours() {
    for ellipse in sample_ellipses() {
        let copy = OrientedEllipse::new(
            ellipse.center,
            ellipse.x_radius,
            ellipse.y_radius,
            ellipse.rotation,
        );
        assert_eq!(copy, ellipse);
        assert_eq!(copy.contour(), ellipse.contour());
    }
}

// ====================
// Contour structure
// ====================

#[test]
fn test_always_four_segments_and_close() {
    let radii = [-10.0, -1.0, 0.0, 1e-12, 1.0, 1e12];
    for &rx in &radii {
        for &ry in &radii {
            let contour = OrientedEllipse::new(DVec2::new(1.0, -1.0), rx, ry, 12.5).contour();
            let commands = contour.commands();
            assert_eq!(commands.len(), 6);
            assert!(matches!(commands[0], PathCommand::MoveTo(_)));
            assert!(commands[1..5].iter().all(|c| matches!(c, PathCommand::CubicTo { .. })));
            assert_eq!(commands[5], PathCommand::Close);
        }
    }
}

#[test]
fn test_contour_ends_where_it_starts() {
    for ellipse in sample_ellipses() {
        let contour = ellipse.contour();
        let start = match contour.commands()[0] {
            PathCommand::MoveTo(p) => p,
            other => panic!("expected a move, got {other:?}"),
        };
        let last = contour.cubic_curves().last().unwrap();
        assert_eq!(last.to, start);
    }
}

#[test]
fn test_joins_are_smooth() {
    let contour = OrientedEllipse::new(DVec2::new(2.0, 3.0), 6.0, 2.0, 35.0).contour();
    let curves: Vec<_> = contour.cubic_curves().collect();
    for i in 0..curves.len() {
        let a = curves[i];
        let b = curves[(i + 1) % curves.len()];
        assert!((a.tangent(1.0) - b.tangent(0.0)).length() < EPS);
    }
}

#[test]
fn test_winding_has_positive_signed_area() {
    let ellipse = OrientedEllipse::new(DVec2::ZERO, 10.0, 5.0, 0.0);
    let area = ellipse.contour().signed_area();
    let exact = std::f64::consts::PI * 10.0 * 5.0;
    assert!(area > 0.0);
    assert!((area - exact).abs() / exact < 1e-3);

    // Rotation keeps the orientation; mirroring one axis flips it.
    assert!(ellipse.moved(DVec2::splat(50.0)).contour().signed_area() > 0.0);
    assert!(OrientedEllipse::new(DVec2::ZERO, 10.0, 5.0, 123.0).contour().signed_area() > 0.0);
    assert!(ellipse.scaled(-1.0, 1.0).contour().signed_area() < 0.0);
}

#[test]
fn test_degenerate_radii_collapse() {
    let center = DVec2::new(3.0, 4.0);
    let contour = OrientedEllipse::new(center, 0.0, 0.0, 45.0).contour();
    for p in points(contour.commands()) {
        assert!((p - center).length() < EPS);
    }
}

#[test]
fn test_non_finite_radius_propagates() {
    let contour = OrientedEllipse::new(DVec2::ZERO, f64::NAN, 1.0, 0.0).contour();
    assert_eq!(contour.len(), 6);
    assert!(points(contour.commands()).iter().any(|p| p.x.is_nan()));
    assert!(contour.bounds().is_none());
}

// ====================
// Transform behavior
// ====================

#[test]
fn test_scaled_bounds_scale_when_unrotated() {
    let ellipse = OrientedEllipse::new(DVec2::ZERO, 10.0, 5.0, 0.0);
    for scale in [0.5, 2.0, 3.0, -1.5] {
        let (min, max) = ellipse.contour().bounds().unwrap();
        let (smin, smax) = ellipse.scaled_uniform(scale).contour().bounds().unwrap();
        let (emin, emax) = if scale >= 0.0 {
            (min * scale, max * scale)
        } else {
            (max * scale, min * scale)
        };
        assert!((smin - emin).length() < EPS, "{smin:?} vs {emin:?}");
        assert!((smax - emax).length() < EPS, "{smax:?} vs {emax:?}");
    }
}

#[test]
fn test_scaled_extent_scales_off_origin() {
    let ellipse = OrientedEllipse::new(DVec2::new(40.0, -12.0), 3.0, 7.0, 0.0);
    let (min, max) = ellipse.contour().bounds().unwrap();
    let (smin, smax) = ellipse.scaled(2.0, 0.5).contour().bounds().unwrap();
    let extent = max - min;
    let scaled_extent = smax - smin;
    assert!((scaled_extent - extent * DVec2::new(2.0, 0.5)).length() < EPS);
}

#[test]
fn test_full_turn_matches_no_rotation() {
    for ellipse in sample_ellipses() {
        let a = points(ellipse.contour().commands());
        let b = points(
            ellipse
                .scaled_to(ellipse.x_radius, ellipse.y_radius)
                .contour()
                .commands(),
        );
        assert_eq!(a, b);

        let unrotated = OrientedEllipse { rotation: 0.0, ..ellipse };
        let full_turn = OrientedEllipse { rotation: 360.0, ..ellipse };
        for (p, q) in points(unrotated.contour().commands())
            .into_iter()
            .zip(points(full_turn.contour().commands()))
        {
            assert!((p - q).length() < 1e-9 * (1.0 + p.length()));
        }
    }
}

#[test]
fn test_rotation_equals_rotating_unrotated_contour() {
    let ellipse = OrientedEllipse::new(DVec2::new(-6.0, 2.0), 5.0, 1.5, 63.0);
    let expected = OrientedEllipse { rotation: 0.0, ..ellipse }
        .contour()
        .transform(&Transform2D::rotate_about(ellipse.center, 63.0));
    for (p, q) in points(ellipse.contour().commands())
        .into_iter()
        .zip(points(expected.commands()))
    {
        assert!((p - q).length() < EPS);
    }
}

// ====================
// Approximation quality
// ====================

#[test]
fn test_circle_radial_error_is_small() {
    let radius = 100.0;
    let circle = OrientedEllipse::new(DVec2::new(10.0, 20.0), radius, radius, 10.0);
    let mut worst: f64 = 0.0;
    for curve in circle.contour().cubic_curves() {
        for i in 0..=200 {
            let p = curve.eval(i as f64 / 200.0);
            worst = worst.max(((p - circle.center).length() - radius).abs());
        }
    }
    assert!(worst / radius < 3e-4, "radial error {worst}");
}

#[test]
fn test_circle_perimeter() {
    let circle = OrientedEllipse::new(DVec2::ZERO, 1.0, 1.0, 0.0);
    let perimeter: f64 = circle.contour().cubic_curves().map(|c| c.arc_length(256)).sum();
    assert!((perimeter - std::f64::consts::TAU).abs() / std::f64::consts::TAU < 5e-4);
}

#[test]
fn test_kappa_is_fixed() {
    assert_eq!(KAPPA, 0.5522848);
}
