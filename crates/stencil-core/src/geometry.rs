//! Geometric primitives for screen detection and element placement.
//!
//! This module provides the fundamental geometric types used throughout
//! Stencil for deciding which drawing nodes are screen containers and which
//! screen encloses an element.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - An axis-aligned rectangle (origin + size)
//!
//! # Coordinate System
//!
//! Stencil uses the coordinate system of the source drawing:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in drawing coordinate space.
///
/// Points use `f64` coordinates since drawing files carry arbitrary JSON
/// numbers. The origin is the top-left corner with Y increasing downward
/// (see [module documentation](self) for details).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Width and height dimensions of a drawing node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the covered area (`width * height`)
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}

/// An axis-aligned rectangle defined by its top-left origin and size.
///
/// # Examples
///
/// ```
/// # use stencil_core::geometry::{Point, Rect, Size};
/// let screen = Rect::new(Point::new(0.0, 0.0), Size::new(375.0, 667.0));
/// let element = Rect::new(Point::new(20.0, 40.0), Size::new(100.0, 30.0));
///
/// assert!(screen.contains_rect(element, 0.0));
/// assert!(!element.contains_rect(screen, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new rectangle from a top-left origin and a size
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the top-left origin
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the size
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the minimum (leftmost) x-coordinate
    pub fn min_x(self) -> f64 {
        self.origin.x
    }

    /// Returns the minimum (topmost) y-coordinate
    pub fn min_y(self) -> f64 {
        self.origin.y
    }

    /// Returns the maximum (rightmost) x-coordinate
    pub fn max_x(self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum (bottommost) y-coordinate
    pub fn max_y(self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Returns the covered area
    pub fn area(self) -> f64 {
        self.size.area()
    }

    /// Checks whether this rectangle fully encloses `other`.
    ///
    /// Both corners of `other` must lie within this rectangle's bounds,
    /// expanded by `tolerance` on every side. A `tolerance` of zero means
    /// strict containment; boundary contact still counts as contained.
    pub fn contains_rect(self, other: Rect, tolerance: f64) -> bool {
        other.min_x() >= self.min_x() - tolerance
            && other.min_y() >= self.min_y() - tolerance
            && other.max_x() <= self.max_x() + tolerance
            && other.max_y() <= self.max_y() + tolerance
    }
}
