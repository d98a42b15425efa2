//! Ovalis Geometry - 2D vector geometry
//!
//! This crate provides:
//! - Affine transforms ([`Transform2D`])
//! - Paths, contours and shapes built from move/line/cubic/close commands
//! - Parametric primitives lowered to cubic Bezier contours
//!   ([`OrientedEllipse`])
//!
//! # Example
//!
//! ```
//! use ovalis_geometry::*;
//! use glam::DVec2;
//!
//! let ellipse = OrientedEllipse::new(DVec2::new(100.0, 100.0), 40.0, 20.0, 30.0);
//! let contour = ellipse.moved(DVec2::new(10.0, 0.0)).scaled_uniform(2.0).contour();
//!
//! assert_eq!(contour.cubic_curves().count(), 4);
//! assert!(contour.is_closed());
//! ```

// Core primitives
mod curve;
mod path;
mod shape;
mod transform;

// Parametric shapes
mod ellipse;

// Re-exports
pub use curve::*;
pub use path::*;
pub use shape::*;
pub use transform::*;

pub use ellipse::*;
