//! Bezier curve primitives.

use crate::Transform2D;
use glam::DVec2;

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: DVec2,
    /// First control point
    pub control1: DVec2,
    /// Second control point
    pub control2: DVec2,
    /// End point
    pub to: DVec2,
}

impl CubicBezier {
    /// Create a new cubic Bezier curve.
    pub fn new(from: DVec2, control1: DVec2, control2: DVec2, to: DVec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f64) -> DVec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// Get the derivative at parameter t.
    pub fn derivative(&self, t: f64) -> DVec2 {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        (self.control1 - self.from) * (3.0 * mt2)
            + (self.control2 - self.control1) * (6.0 * mt * t)
            + (self.to - self.control2) * (3.0 * t2)
    }

    /// Get the tangent (normalized derivative) at parameter t.
    pub fn tangent(&self, t: f64) -> DVec2 {
        self.derivative(t).normalize_or_zero()
    }

    /// Approximate the arc length of the curve.
    pub fn arc_length(&self, subdivisions: usize) -> f64 {
        let mut length = 0.0;
        let mut prev = self.from;

        for i in 1..=subdivisions {
            let t = i as f64 / subdivisions as f64;
            let point = self.eval(t);
            length += prev.distance(point);
            prev = point;
        }

        length
    }

    /// Apply an affine transform to all four points.
    ///
    /// Bezier curves are affine invariant, so this is exact.
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        Self::new(
            transform.transform_point(self.from),
            transform.transform_point(self.control1),
            transform.transform_point(self.control2),
            transform.transform_point(self.to),
        )
    }
}
