//! Turtle graphics primitives for generative sketches.
//!
//! A turtle is a pen with a position and a heading. It executes a stream of
//! forward/turn instructions and records every position it visits, producing
//! a polyline that a rendering driver can draw as consecutive line segments.
//!
//! # Example
//!
//! ```
//! use gesso_turtle::{Turtle, TurtleInstruction};
//! use glam::Vec2;
//!
//! let mut turtle = Turtle::new(Vec2::ZERO, 0.0);
//! turtle.execute(&[
//!     TurtleInstruction::Forward(10.0),
//!     TurtleInstruction::Turn(90.0),
//!     TurtleInstruction::Forward(10.0),
//! ]);
//!
//! let path = turtle.path();
//! assert_eq!(path.len(), 3);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec2;

pub use glam;

/// A single turtle command.
///
/// Instructions are order-significant and replayed strictly in sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurtleInstruction {
    /// Move forward by a distance, recording the new position.
    ///
    /// Negative distances move backward along the current heading.
    Forward(f32),
    /// Rotate the heading by an angle in degrees. Positive turns clockwise
    /// in the y-down canvas convention. Does not record a position.
    Turn(f32),
}

/// A 2D pen that tracks position, heading, and the path it has traced.
///
/// The heading is stored in radians; [`TurtleInstruction::Turn`] values are
/// degrees and converted on application. The path always starts with the
/// initial position, and grows by exactly one point per forward move.
#[derive(Debug, Clone)]
pub struct Turtle {
    position: Vec2,
    heading: f32,
    path: Vec<Vec2>,
}

impl Turtle {
    /// Creates a turtle at `start` with a heading in radians.
    pub fn new(start: Vec2, heading: f32) -> Self {
        Self {
            position: start,
            heading,
            path: vec![start],
        }
    }

    /// Returns the current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the current heading in radians.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Moves forward by `distance` along the current heading and records
    /// the new position. Zero and negative distances are valid.
    pub fn forward(&mut self, distance: f32) {
        self.position += Vec2::new(self.heading.cos(), self.heading.sin()) * distance;
        self.path.push(self.position);
    }

    /// Rotates the heading by `degrees`. The path is untouched.
    pub fn turn(&mut self, degrees: f32) {
        self.heading += degrees.to_radians();
    }

    /// Applies every instruction in order.
    pub fn execute(&mut self, instructions: &[TurtleInstruction]) {
        for instruction in instructions {
            match *instruction {
                TurtleInstruction::Forward(distance) => self.forward(distance),
                TurtleInstruction::Turn(degrees) => self.turn(degrees),
            }
        }
    }

    /// Returns a snapshot of the traced path in insertion order.
    ///
    /// Never empty: the path always contains at least the start position.
    pub fn path(&self) -> Vec<Vec2> {
        self.path.clone()
    }
}

// ============================================================================
// Path bounds
// ============================================================================

/// Axis-aligned bounding box of a path.
///
/// Used by rendering drivers to center and scale a generated path into a
/// viewport before drawing it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Bounds {
    /// Computes the bounding box of a path. Returns `None` for an empty path.
    pub fn from_path(path: &[Vec2]) -> Option<Self> {
        let first = *path.first()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for &point in &path[1..] {
            bounds.min = bounds.min.min(point);
            bounds.max = bounds.max.max(point);
        }
        Some(bounds)
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the box.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the uniform scale that fits this box into `viewport`, leaving
    /// a relative margin (e.g. `0.9` uses 90% of each viewport dimension).
    ///
    /// Degenerate boxes (a single point or a straight axis-aligned line)
    /// are handled by ignoring the collapsed dimension.
    pub fn fit_scale(&self, viewport: Vec2, margin: f32) -> f32 {
        let scale_x = if self.width() > f32::EPSILON {
            viewport.x * margin / self.width()
        } else {
            f32::INFINITY
        };
        let scale_y = if self.height() > f32::EPSILON {
            viewport.y * margin / self.height()
        } else {
            f32::INFINITY
        };
        let scale = scale_x.min(scale_y);
        if scale.is_finite() {
            scale
        } else {
            1.0
        }
    }
}
