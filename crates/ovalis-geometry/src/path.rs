//! Path primitives for vector graphics.
//!
//! A path is a sequence of drawing commands that define one or more
//! contours. Paths are immutable once built; use [`PathBuilder`] to
//! construct them.

use crate::{CubicBezier, Transform2D};
use glam::DVec2;

/// Number of line segments each cubic is split into by [`Path::flatten`]
/// when computing areas.
const AREA_SUBDIVISIONS: usize = 32;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(DVec2),
    /// Draw a line to a position.
    LineTo(DVec2),
    /// Draw a cubic Bezier curve.
    CubicTo {
        /// First control point
        control1: DVec2,
        /// Second control point
        control2: DVec2,
        /// End point
        to: DVec2,
    },
    /// Close the current sub-path by drawing a line to the start.
    Close,
}

impl PathCommand {
    /// Apply an affine transform to every point of the command.
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        match *self {
            PathCommand::MoveTo(to) => PathCommand::MoveTo(transform.transform_point(to)),
            PathCommand::LineTo(to) => PathCommand::LineTo(transform.transform_point(to)),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => PathCommand::CubicTo {
                control1: transform.transform_point(control1),
                control2: transform.transform_point(control2),
                to: transform.transform_point(to),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a list of commands.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the last sub-path ends with [`PathCommand::Close`].
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Return a copy of this path with `transform` applied to every point.
    pub fn transform(&self, transform: &Transform2D) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.transformed(transform))
                .collect(),
        }
    }

    /// Get the bounding box of the path.
    ///
    /// Control points are included, so the box is conservative for curves.
    /// Returns (min, max) corners, or `None` for empty or non-finite paths.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        if self.commands.is_empty() {
            return None;
        }

        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                    min = min.min(*to);
                    max = max.max(*to);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    min = min.min(*control1).min(*control2).min(*to);
                    max = max.max(*control1).max(*control2).max(*to);
                }
                PathCommand::Close => {}
            }
        }

        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// Flatten every sub-path into a polyline.
    ///
    /// Each cubic is sampled at `subdivisions` evenly spaced parameters.
    pub fn flatten(&self, subdivisions: usize) -> Vec<Vec<DVec2>> {
        let subdivisions = subdivisions.max(1);
        let mut polylines = Vec::new();
        let mut current: Vec<DVec2> = Vec::new();
        let mut pos = DVec2::ZERO;
        let mut start = DVec2::ZERO;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(to) => {
                    if current.len() > 1 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(to);
                    pos = to;
                    start = to;
                }
                PathCommand::LineTo(to) => {
                    current.push(to);
                    pos = to;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    let curve = CubicBezier::new(pos, control1, control2, to);
                    for i in 1..=subdivisions {
                        current.push(curve.eval(i as f64 / subdivisions as f64));
                    }
                    pos = to;
                }
                PathCommand::Close => {
                    if pos != start {
                        current.push(start);
                    }
                    pos = start;
                }
            }
        }

        if current.len() > 1 {
            polylines.push(current);
        }
        polylines
    }

    /// Signed area enclosed by the path, treating every sub-path as closed.
    ///
    /// Uses the shoelace sum `x_i * y_(i+1) - x_(i+1) * y_i`, so a contour
    /// that runs counter-clockwise with y pointing up (clockwise on a y-down
    /// screen) has positive area.
    pub fn signed_area(&self) -> f64 {
        self.flatten(AREA_SUBDIVISIONS)
            .iter()
            .map(|points| {
                let n = points.len();
                let twice: f64 = (0..n)
                    .map(|i| {
                        let a = points[i];
                        let b = points[(i + 1) % n];
                        a.x * b.y - b.x * a.y
                    })
                    .sum();
                twice * 0.5
            })
            .sum()
    }

    /// Reverse the path direction.
    ///
    /// Closed sub-paths stay closed; an implicit closing segment becomes an
    /// explicit line.
    pub fn reverse(&self) -> Self {
        let mut reversed = Vec::with_capacity(self.commands.len());
        let mut subpath_start = DVec2::ZERO;
        let mut current = DVec2::ZERO;
        let mut subpath_commands = Vec::new();
        let mut closed = false;

        let flush = |reversed: &mut Vec<PathCommand>,
                     subpath_commands: &mut Vec<PathCommand>,
                     end: DVec2,
                     closed: bool| {
            if subpath_commands.is_empty() && !closed {
                return;
            }
            reversed.push(PathCommand::MoveTo(end));
            reversed.extend(subpath_commands.drain(..).rev());
            if closed {
                reversed.push(PathCommand::Close);
            }
        };

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(to) => {
                    flush(&mut reversed, &mut subpath_commands, current, closed);
                    closed = false;
                    subpath_start = to;
                    current = to;
                }
                PathCommand::LineTo(to) => {
                    subpath_commands.push(PathCommand::LineTo(current));
                    current = to;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    subpath_commands.push(PathCommand::CubicTo {
                        control1: control2,
                        control2: control1,
                        to: current,
                    });
                    current = to;
                }
                PathCommand::Close => {
                    if current != subpath_start {
                        subpath_commands.push(PathCommand::LineTo(current));
                    }
                    closed = true;
                    current = subpath_start;
                }
            }
        }

        flush(&mut reversed, &mut subpath_commands, current, closed);

        Self { commands: reversed }
    }
}

/// Builder for constructing paths.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current_pos: DVec2,
    subpath_start: DVec2,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current_pos = to;
        self.subpath_start = to;
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self.current_pos = to;
        self
    }

    /// Draw a cubic Bezier curve.
    pub fn cubic_to(&mut self, control1: DVec2, control2: DVec2, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self.current_pos = to;
        self
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self.current_pos = self.subpath_start;
        self
    }

    /// Get the current position.
    pub fn current_pos(&self) -> DVec2 {
        self.current_pos
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}

/// Extension trait for extracting curve segments from paths.
pub trait PathCurves {
    /// Iterator over cubic curves in the path.
    fn cubic_curves(&self) -> impl Iterator<Item = CubicBezier> + '_;
}

impl PathCurves for Path {
    fn cubic_curves(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        let mut current = DVec2::ZERO;
        let mut start = DVec2::ZERO;
        self.commands.iter().filter_map(move |cmd| match *cmd {
            PathCommand::MoveTo(to) => {
                current = to;
                start = to;
                None
            }
            PathCommand::LineTo(to) => {
                current = to;
                None
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                let curve = CubicBezier::new(current, control1, control2, to);
                current = to;
                Some(curve)
            }
            PathCommand::Close => {
                current = start;
                None
            }
        })
    }
}
