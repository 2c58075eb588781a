//! Canvas shapes.
//!
//! The design canvas only ever holds axis-aligned rectangles (panels, posts,
//! shelves) and line segments (guides, dimension lines). Every shape carries a
//! [`ShapeId`]: the string key used for rendering plus the [`ShapeRole`]
//! decoded from it once, when the id is created.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, ShapeRole};
use crate::geometry::{point_to_segment_distance, Bounds, Point};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShapeId {
    key: String,
    role: ShapeRole,
}

impl ShapeId {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let role = classify(&key);
        Self { key, role }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn role(&self) -> ShapeRole {
        self.role
    }
}

impl From<String> for ShapeId {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ShapeId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.key
    }
}

impl AsRef<str> for ShapeId {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl PartialEq<str> for ShapeId {
    fn eq(&self, other: &str) -> bool {
        self.key == other
    }
}

impl PartialEq<&str> for ShapeId {
    fn eq(&self, other: &&str) -> bool {
        self.key == *other
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// Axis-aligned rectangle, positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub id: ShapeId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectShape {
    pub fn new(id: impl Into<ShapeId>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_rect(self.x, self.y, self.w, self.h)
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub id: ShapeId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineShape {
    pub fn new(id: impl Into<ShapeId>, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            id: id.into(),
            x1,
            y1,
            x2,
            y2,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn distance_to(&self, p: Point) -> f64 {
        point_to_segment_distance(p, self.start(), self.end())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rect(RectShape),
    Line(LineShape),
}

impl Shape {
    pub fn id(&self) -> &ShapeId {
        match self {
            Shape::Rect(r) => &r.id,
            Shape::Line(l) => &l.id,
        }
    }

    pub fn role(&self) -> ShapeRole {
        self.id().role()
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Rect(r) => r.bounds(),
            Shape::Line(l) => l.bounds(),
        }
    }

    pub fn as_rect(&self) -> Option<&RectShape> {
        match self {
            Shape::Rect(r) => Some(r),
            Shape::Line(_) => None,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rect(r) => {
                r.x += dx;
                r.y += dy;
            }
            Shape::Line(l) => {
                l.x1 += dx;
                l.y1 += dy;
                l.x2 += dx;
                l.y2 += dy;
            }
        }
    }
}

impl From<RectShape> for Shape {
    fn from(r: RectShape) -> Self {
        Shape::Rect(r)
    }
}

impl From<LineShape> for Shape {
    fn from(l: LineShape) -> Self {
        Shape::Line(l)
    }
}
