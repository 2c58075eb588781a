//! Geometry primitives for the design canvas.
//!
//! Points, axis-aligned bounds and the handful of segment operations the
//! canvas needs: distances, grid snapping, directional intersection and
//! angles. All coordinates are millimetres with y growing downwards, matching
//! the canvas the shapes are drawn on.

use serde::{Deserialize, Serialize};

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a rectangle given by its top-left corner and size.
    pub fn from_rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x.min(x + w), y.min(y + h), x.max(x + w), y.max(y + h))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Smallest bounds enclosing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to the nearest endpoint. A degenerate segment measures to `a`.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let l2 = dx * dx + dy * dy;
    if l2 == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / l2).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

/// Round `value` to the nearest multiple of `grid_size`.
///
/// With `grid_size == 1.0` this is plain rounding. A non-positive grid leaves
/// the value untouched.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return value;
    }
    (value / grid_size).round() * grid_size
}

pub fn snap_point(p: Point, grid_size: f64) -> Point {
    Point::new(snap_to_grid(p.x, grid_size), snap_to_grid(p.y, grid_size))
}

/// Intersection of segment `p1`-`p2` with the line through `p3`-`p4`.
///
/// Only the first segment's parameter is range-checked: the second segment
/// acts as an infinite guide line, which is what projecting alignment guides
/// onto an edge needs. Parallel inputs yield `None`.
pub fn segment_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let rx = p2.x - p1.x;
    let ry = p2.y - p1.y;
    let sx = p4.x - p3.x;
    let sy = p4.y - p3.y;

    let det = rx * sy - ry * sx;
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((p3.x - p1.x) * sy - (p3.y - p1.y) * sx) / det;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    Some(Point::new(p1.x + t * rx, p1.y + t * ry))
}

/// Angle of the vector `from` -> `to` in degrees, in `(-180, 180]`.
pub fn angle_degrees(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}
