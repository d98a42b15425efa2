//! Rotated ellipses approximated by cubic Bezier curves.

use crate::{Path, PathBuilder, Shape, Transform2D};
use glam::DVec2;

/// Control point distance, as a fraction of the radius, for approximating a
/// quarter ellipse with one cubic Bezier.
///
/// This is `4/3 * (sqrt(2) - 1)` rounded to seven digits, the value that
/// makes the cubic pass through the arc's 45 degree point. Four such arcs
/// stay within about 0.027% of the true radius for a circle. The rounded
/// value is part of the output format; do not recompute it.
pub const KAPPA: f64 = 0.5522848;

/// An ellipse with independent radii, rotated about its center.
///
/// This is a plain value: every "mutator" returns a new ellipse, and the
/// contour is recomputed on each call to [`contour`](Self::contour).
///
/// Radii are measured before rotation. Zero or negative radii are accepted
/// and produce degenerate (collapsed or mirrored) geometry. Non-finite
/// inputs are not checked and propagate into the generated points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedEllipse {
    /// Center of the ellipse, also the pivot of the rotation.
    pub center: DVec2,
    /// Horizontal radius before applying rotation.
    pub x_radius: f64,
    /// Vertical radius before applying rotation.
    pub y_radius: f64,
    /// The rotation in degrees.
    pub rotation: f64,
}

impl OrientedEllipse {
    /// Create a new oriented ellipse.
    pub fn new(center: DVec2, x_radius: f64, y_radius: f64, rotation: f64) -> Self {
        Self {
            center,
            x_radius,
            y_radius,
            rotation,
        }
    }

    /// Create an ellipse from the center's coordinates.
    pub fn from_coords(x: f64, y: f64, x_radius: f64, y_radius: f64, rotation: f64) -> Self {
        Self::new(DVec2::new(x, y), x_radius, y_radius, rotation)
    }

    /// Create an unrotated ellipse.
    pub fn axis_aligned(center: DVec2, x_radius: f64, y_radius: f64) -> Self {
        Self::new(center, x_radius, y_radius, 0.0)
    }

    /// Creates a new ellipse with the center offset by `offset`.
    pub fn moved(&self, offset: DVec2) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }

    /// Creates a new ellipse centered at `position`.
    pub fn moved_to(&self, position: DVec2) -> Self {
        Self {
            center: position,
            ..*self
        }
    }

    /// Creates a new ellipse with the radii multiplied by the given factors.
    pub fn scaled(&self, x_scale: f64, y_scale: f64) -> Self {
        Self {
            x_radius: self.x_radius * x_scale,
            y_radius: self.y_radius * y_scale,
            ..*self
        }
    }

    /// Creates a new ellipse with both radii multiplied by `scale`.
    pub fn scaled_uniform(&self, scale: f64) -> Self {
        self.scaled(scale, scale)
    }

    /// Creates a new ellipse with the given radii.
    pub fn scaled_to(&self, x_fit_radius: f64, y_fit_radius: f64) -> Self {
        Self {
            x_radius: x_fit_radius,
            y_radius: y_fit_radius,
            ..*self
        }
    }

    /// Creates a new ellipse with both radii set to `fit_radius`.
    pub fn scaled_to_uniform(&self, fit_radius: f64) -> Self {
        self.scaled_to(fit_radius, fit_radius)
    }

    /// The transform that rotates the axis-aligned contour into place.
    pub fn orientation(&self) -> Transform2D {
        Transform2D::rotate_about(self.center, self.rotation)
    }

    /// Returns the [`Shape`] holding this ellipse's contour.
    pub fn shape(&self) -> Shape {
        Shape::from_contour(self.contour())
    }

    /// Returns the closed contour of this ellipse.
    ///
    /// The contour starts at the left end of the x axis and runs through
    /// the -y, +x and +y extremes back to the start: one `MoveTo`, four
    /// `CubicTo` and a `Close`.
    pub fn contour(&self) -> Path {
        let x = self.center.x - self.x_radius;
        let y = self.center.y - self.y_radius;
        let width = self.x_radius * 2.0;
        let height = self.y_radius * 2.0;
        let ox = width / 2.0 * KAPPA;
        let oy = height / 2.0 * KAPPA;
        let xe = x + width;
        let ye = y + height;
        let xm = x + width / 2.0;
        let ym = y + height / 2.0;

        let mut builder = PathBuilder::new();
        builder
            .move_to(DVec2::new(x, ym))
            .cubic_to(DVec2::new(x, ym - oy), DVec2::new(xm - ox, y), DVec2::new(xm, y))
            .cubic_to(DVec2::new(xm + ox, y), DVec2::new(xe, ym - oy), DVec2::new(xe, ym))
            .cubic_to(DVec2::new(xe, ym + oy), DVec2::new(xm + ox, ye), DVec2::new(xm, ye))
            .cubic_to(DVec2::new(xm - ox, ye), DVec2::new(x, ym + oy), DVec2::new(x, ym))
            .close();

        builder.build().transform(&self.orientation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathCommand, PathCurves};

    fn assert_close(a: DVec2, b: DVec2, eps: f64) {
        assert!((a - b).length() < eps, "{a:?} != {b:?}");
    }

    #[test]
    fn test_reference_contour() {
        let ellipse = OrientedEllipse::new(DVec2::ZERO, 10.0, 5.0, 0.0);
        let contour = ellipse.contour();
        let commands = contour.commands();

        assert_eq!(commands[0], PathCommand::MoveTo(DVec2::new(-10.0, 0.0)));
        match commands[1] {
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                assert_close(control1, DVec2::new(-10.0, -2.761424), 1e-12);
                assert_close(control2, DVec2::new(-5.522848, -5.0), 1e-12);
                assert_eq!(to, DVec2::new(0.0, -5.0));
            }
            other => panic!("expected a cubic, got {other:?}"),
        }
        match commands[4] {
            PathCommand::CubicTo { to, .. } => assert_eq!(to, DVec2::new(-10.0, 0.0)),
            other => panic!("expected a cubic, got {other:?}"),
        }
        assert_eq!(commands[5], PathCommand::Close);
    }

    #[test]
    fn test_contour_is_four_cubics_and_close() {
        for (rx, ry) in [(10.0, 5.0), (0.0, 0.0), (-3.0, 2.0), (1e9, 1e-9)] {
            let contour = OrientedEllipse::new(DVec2::new(1.0, 2.0), rx, ry, 33.0).contour();
            assert_eq!(contour.len(), 6);
            assert!(matches!(contour.commands()[0], PathCommand::MoveTo(_)));
            assert_eq!(contour.cubic_curves().count(), 4);
            assert!(contour.is_closed());
        }
    }

    #[test]
    fn test_mutators_return_new_values() {
        let ellipse = OrientedEllipse::from_coords(1.0, 2.0, 3.0, 4.0, 45.0);

        let moved = ellipse.moved(DVec2::new(10.0, -1.0));
        assert_eq!(moved.center, DVec2::new(11.0, 1.0));
        assert_eq!((moved.x_radius, moved.y_radius, moved.rotation), (3.0, 4.0, 45.0));
        assert_eq!(ellipse.center, DVec2::new(1.0, 2.0));

        assert_eq!(ellipse.moved_to(DVec2::ZERO).center, DVec2::ZERO);

        let scaled = ellipse.scaled(2.0, -1.0);
        assert_eq!((scaled.x_radius, scaled.y_radius), (6.0, -4.0));
        assert_eq!(scaled.center, ellipse.center);

        let uniform = ellipse.scaled_uniform(0.5);
        assert_eq!((uniform.x_radius, uniform.y_radius), (1.5, 2.0));

        let fitted = ellipse.scaled_to_uniform(7.0);
        assert_eq!((fitted.x_radius, fitted.y_radius), (7.0, 7.0));
        assert_eq!(fitted.rotation, 45.0);
    }

    #[test]
    fn test_shape_holds_contour() {
        let ellipse = OrientedEllipse::axis_aligned(DVec2::new(4.0, 4.0), 2.0, 1.0);
        let shape = ellipse.shape();
        assert_eq!(shape.contours(), &[ellipse.contour()]);
    }

    #[test]
    fn test_rotation_about_center() {
        let ellipse = OrientedEllipse::new(DVec2::new(5.0, 5.0), 4.0, 2.0, 90.0);
        let contour = ellipse.contour();
        // The left end of the x axis swings to the -y side of the center.
        match contour.commands()[0] {
            PathCommand::MoveTo(start) => assert_close(start, DVec2::new(5.0, 1.0), 1e-9),
            other => panic!("expected a move, got {other:?}"),
        }
        let (min, max) = contour.bounds().unwrap();
        assert_close(min, DVec2::new(3.0, 1.0), 1e-9);
        assert_close(max, DVec2::new(7.0, 9.0), 1e-9);
    }
}
