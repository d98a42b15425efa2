//! Shapes: ordered collections of contours.

use crate::{Path, Transform2D};
use glam::DVec2;

/// A shape made of zero or more contours.
///
/// Each contour is a [`Path`]; parametric primitives such as
/// [`OrientedEllipse`](crate::OrientedEllipse) produce single-contour shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    contours: Vec<Path>,
}

impl Shape {
    /// The shape with no contours.
    pub const EMPTY: Self = Self {
        contours: Vec::new(),
    };

    /// Create a shape from a list of contours.
    pub fn new(contours: Vec<Path>) -> Self {
        Self { contours }
    }

    /// Create a shape holding a single contour.
    pub fn from_contour(contour: Path) -> Self {
        Self {
            contours: vec![contour],
        }
    }

    /// Get the contours of this shape.
    pub fn contours(&self) -> &[Path] {
        &self.contours
    }

    /// Check if the shape has no contours.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Return a copy with `transform` applied to every contour.
    pub fn transform(&self, transform: &Transform2D) -> Self {
        Self {
            contours: self.contours.iter().map(|c| c.transform(transform)).collect(),
        }
    }

    /// Get the bounding box of all contours.
    ///
    /// Returns (min, max) corners, or `None` if no contour has bounds.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        self.contours
            .iter()
            .filter_map(Path::bounds)
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathBuilder;

    fn segment(from: DVec2, to: DVec2) -> Path {
        let mut builder = PathBuilder::new();
        builder.move_to(from).line_to(to);
        builder.build()
    }

    #[test]
    fn test_empty_shape() {
        assert!(Shape::EMPTY.is_empty());
        assert!(Shape::default().bounds().is_none());
    }

    #[test]
    fn test_bounds_union() {
        let shape = Shape::new(vec![
            segment(DVec2::new(0.0, 0.0), DVec2::new(5.0, 5.0)),
            segment(DVec2::new(-3.0, 2.0), DVec2::new(1.0, 9.0)),
        ]);
        let (min, max) = shape.bounds().unwrap();
        assert_eq!(min, DVec2::new(-3.0, 0.0));
        assert_eq!(max, DVec2::new(5.0, 9.0));
    }

    #[test]
    fn test_transform_applies_to_all_contours() {
        let shape = Shape::new(vec![
            segment(DVec2::ZERO, DVec2::X),
            segment(DVec2::ZERO, DVec2::Y),
        ]);
        let scaled = shape.transform(&Transform2D::scale(3.0));
        assert_eq!(scaled.contours().len(), 2);
        assert_eq!(scaled.bounds(), Some((DVec2::ZERO, DVec2::splat(3.0))));
    }
}
