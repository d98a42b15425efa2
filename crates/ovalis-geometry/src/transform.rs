//! 2D affine transformations.
//!
//! Provides a 2D transform matrix for translation, rotation and scaling.

use glam::{DMat3, DVec2};

/// A 2D affine transformation matrix.
///
/// Internally uses a 3x3 matrix for affine transforms.
/// The last row is always [0, 0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: DMat3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        matrix: DMat3::IDENTITY,
    };

    /// Create from a 3x3 matrix.
    pub fn from_mat3(matrix: DMat3) -> Self {
        Self { matrix }
    }

    /// Create a translation transform.
    pub fn translate(offset: DVec2) -> Self {
        Self {
            matrix: DMat3::from_translation(offset),
        }
    }

    /// Create a rotation about the Z axis (angle in radians).
    pub fn rotate(angle: f64) -> Self {
        Self {
            matrix: DMat3::from_angle(angle),
        }
    }

    /// Create a rotation about the Z axis (angle in degrees).
    pub fn rotate_degrees(degrees: f64) -> Self {
        Self::rotate(degrees.to_radians())
    }

    /// Rotate in place about `pivot` by `degrees`.
    ///
    /// Equivalent to `translate(pivot) * rotate(degrees) * translate(-pivot)`
    /// in column-vector notation: the pivot is moved to the origin first,
    /// rotated there, then moved back.
    pub fn rotate_about(pivot: DVec2, degrees: f64) -> Self {
        Self::translate(-pivot)
            .then_rotate_degrees(degrees)
            .then_translate(pivot)
    }

    /// Create a uniform scale transform.
    pub fn scale(factor: f64) -> Self {
        Self {
            matrix: DMat3::from_scale(DVec2::splat(factor)),
        }
    }

    /// Create a non-uniform scale transform.
    pub fn scale_xy(scale: DVec2) -> Self {
        Self {
            matrix: DMat3::from_scale(scale),
        }
    }

    /// Combine two transforms (self then other).
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Add a translation after this transform.
    pub fn then_translate(&self, offset: DVec2) -> Self {
        self.then(&Transform2D::translate(offset))
    }

    /// Add a rotation (radians) after this transform.
    pub fn then_rotate(&self, angle: f64) -> Self {
        self.then(&Transform2D::rotate(angle))
    }

    /// Add a rotation (degrees) after this transform.
    pub fn then_rotate_degrees(&self, degrees: f64) -> Self {
        self.then(&Transform2D::rotate_degrees(degrees))
    }

    /// Add a scale after this transform.
    pub fn then_scale(&self, factor: f64) -> Self {
        self.then(&Transform2D::scale(factor))
    }

    /// Add a non-uniform scale after this transform.
    pub fn then_scale_xy(&self, scale: DVec2) -> Self {
        self.then(&Transform2D::scale_xy(scale))
    }

    /// Transform a point.
    pub fn transform_point(&self, point: DVec2) -> DVec2 {
        self.matrix.transform_point2(point)
    }

    /// Transform a vector (ignores translation).
    pub fn transform_vector(&self, vector: DVec2) -> DVec2 {
        self.matrix.transform_vector2(vector)
    }

    /// Get the inverse transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.matrix.determinant();
        if det.abs() < f64::EPSILON {
            None
        } else {
            Some(Self {
                matrix: self.matrix.inverse(),
            })
        }
    }

    /// Get the underlying 3x3 matrix.
    pub fn as_mat3(&self) -> &DMat3 {
        &self.matrix
    }

    /// Get the translation component.
    pub fn translation(&self) -> DVec2 {
        DVec2::new(self.matrix.z_axis.x, self.matrix.z_axis.y)
    }

    /// Get the scale component (approximate for non-uniform transforms).
    pub fn scale_factor(&self) -> DVec2 {
        DVec2::new(
            DVec2::new(self.matrix.x_axis.x, self.matrix.x_axis.y).length(),
            DVec2::new(self.matrix.y_axis.x, self.matrix.y_axis.y).length(),
        )
    }

    /// Get the rotation angle in radians.
    pub fn rotation(&self) -> f64 {
        self.matrix.x_axis.y.atan2(self.matrix.x_axis.x)
    }
}

impl std::ops::Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    fn mul(self, rhs: Transform2D) -> Transform2D {
        self.then(&rhs)
    }
}

impl std::ops::Mul<DVec2> for Transform2D {
    type Output = DVec2;

    fn mul(self, rhs: DVec2) -> DVec2 {
        self.transform_point(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_identity() {
        let t = Transform2D::IDENTITY;
        let point = DVec2::new(10.0, 20.0);
        assert_eq!(t.transform_point(point), point);
    }

    #[test]
    fn test_translate() {
        let t = Transform2D::translate(DVec2::new(5.0, 10.0));
        let point = DVec2::new(10.0, 20.0);
        assert_eq!(t.transform_point(point), DVec2::new(15.0, 30.0));
    }

    #[test]
    fn test_rotate_90() {
        let t = Transform2D::rotate(PI / 2.0);
        assert_close(t.transform_point(DVec2::X), DVec2::Y);
    }

    #[test]
    fn test_rotate_degrees_matches_radians() {
        let a = Transform2D::rotate_degrees(30.0);
        let b = Transform2D::rotate(PI / 6.0);
        assert_close(a.transform_point(DVec2::new(3.0, 4.0)), b.transform_point(DVec2::new(3.0, 4.0)));
    }

    #[test]
    fn test_rotate_about_keeps_pivot_fixed() {
        let pivot = DVec2::new(10.0, -4.0);
        let t = Transform2D::rotate_about(pivot, 73.0);
        assert_close(t.transform_point(pivot), pivot);
    }

    #[test]
    fn test_rotate_about_pivot_not_origin() {
        // A quarter turn about (1, 1) sends (2, 1) to (1, 2).
        let t = Transform2D::rotate_about(DVec2::new(1.0, 1.0), 90.0);
        assert_close(t.transform_point(DVec2::new(2.0, 1.0)), DVec2::new(1.0, 2.0));

        // Rotating about the origin instead would land somewhere else.
        let wrong = Transform2D::rotate_degrees(90.0);
        assert!((wrong.transform_point(DVec2::new(2.0, 1.0)) - DVec2::new(1.0, 2.0)).length() > 1.0);
    }

    #[test]
    fn test_rotate_about_zero_is_exact_identity() {
        let t = Transform2D::rotate_about(DVec2::new(3.5, -7.25), 0.0);
        let point = DVec2::new(-1.125, 9.5);
        assert_eq!(t.transform_point(point), point);
    }

    #[test]
    fn test_chain_transforms() {
        let t = Transform2D::translate(DVec2::new(10.0, 0.0)).then_scale(2.0);
        // First translate: (15, 5), then scale: (30, 10)
        assert_eq!(t.transform_point(DVec2::new(5.0, 5.0)), DVec2::new(30.0, 10.0));
    }

    #[test]
    fn test_inverse() {
        let t = Transform2D::translate(DVec2::new(10.0, 20.0)).then_scale(2.0);
        let inv = t.inverse().unwrap();
        let point = DVec2::new(5.0, 5.0);
        assert_close(inv.transform_point(t.transform_point(point)), point);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(Transform2D::scale(0.0).inverse().is_none());
    }
}
