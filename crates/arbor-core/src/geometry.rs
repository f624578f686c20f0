//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the small set of geometric types Arbor needs to place
//! topic nodes and route connectors between them.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Arbor uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Node positions produced by the layout engine are the **top-left** corners of
//! the node rectangles.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use arbor_core::geometry::{Point, Size};
/// let p1 = Point::new(10.0, 20.0);
///
/// let bounds = p1.to_bounds(Size::new(5.0, 5.0));
/// assert_eq!(bounds.max_x(), 15.0);
/// assert_eq!(bounds.max_y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Converts a top-left point and size into a bounds rectangle
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the midpoint of the left edge.
    pub fn left_center(self) -> Point {
        Point::new(self.min_x, (self.min_y + self.max_y) / 2.0)
    }

    /// Returns the midpoint of the right edge.
    pub fn right_center(self) -> Point {
        Point::new(self.max_x, (self.min_y + self.max_y) / 2.0)
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arbor_core::geometry::{Bounds, Point, Size};
    /// let root = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let child = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = root.merge(&child);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Point::new(40.0, 96.0).to_bounds(Size::new(92.0, 40.0));

        assert_approx_eq!(f32, bounds.min_x(), 40.0);
        assert_approx_eq!(f32, bounds.min_y(), 96.0);
        assert_approx_eq!(f32, bounds.max_x(), 132.0);
        assert_approx_eq!(f32, bounds.max_y(), 136.0);
        assert_eq!(bounds.to_size(), Size::new(92.0, 40.0));
        assert_eq!(bounds.min_point(), Point::new(40.0, 96.0));
    }

    #[test]
    fn test_bounds_edge_centers() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 40.0));

        assert_eq!(bounds.center(), Point::new(50.0, 20.0));
        assert_eq!(bounds.left_center(), Point::new(0.0, 20.0));
        assert_eq!(bounds.right_center(), Point::new(100.0, 20.0));
    }

    #[test]
    fn test_bounds_merge_is_commutative() {
        let a = Bounds::new_from_top_left(Point::new(-5.0, 10.0), Size::new(20.0, 20.0));
        let b = Bounds::new_from_top_left(Point::new(30.0, -2.0), Size::new(5.0, 50.0));

        assert_eq!(a.merge(&b), b.merge(&a));
        assert_approx_eq!(f32, a.merge(&b).width(), 40.0);
        assert_approx_eq!(f32, a.merge(&b).height(), 50.0);
    }
}
