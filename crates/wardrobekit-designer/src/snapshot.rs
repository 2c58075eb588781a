//! Immutable per-frame view of the canvas.

use std::ops::Deref;
use std::sync::Arc;

use crate::bounds::{
    get_carcass_bounds, get_post_bounds, get_shelf_bounds, CarcassBounds, PostBounds,
    ShelfBounds,
};
use crate::classify::{get_center_posts, get_shelves};
use crate::hit_test::hit_test_shapes;
use crate::module_config::ModuleConfig;
use crate::shapes::{RectShape, Shape};

/// Shared, read-only list of canvas shapes.
///
/// Cloning is a reference-count bump, so the UI can hand a snapshot to every
/// query in a frame. Edits produce a new snapshot.
#[derive(Debug, Clone, Default)]
pub struct CanvasSnapshot {
    shapes: Arc<[Shape]>,
}

impl CanvasSnapshot {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes: shapes.into(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn find(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == &id)
    }

    pub fn center_posts(&self) -> Vec<&RectShape> {
        get_center_posts(&self.shapes)
    }

    pub fn shelves(&self) -> Vec<&RectShape> {
        get_shelves(&self.shapes)
    }

    pub fn hit_test(&self, x: f64, y: f64, grid_size: f64) -> Option<&Shape> {
        hit_test_shapes(x, y, &self.shapes, grid_size)
    }

    pub fn shelf_bounds(&self, config: &ModuleConfig, shelf_id: &str) -> Option<ShelfBounds> {
        get_shelf_bounds(config, &self.shapes, shelf_id)
    }

    pub fn carcass_bounds(&self, config: &ModuleConfig) -> Option<CarcassBounds> {
        get_carcass_bounds(config, &self.shapes)
    }

    pub fn post_bounds(&self, config: &ModuleConfig, post_id: &str) -> Option<PostBounds> {
        get_post_bounds(config, &self.shapes, post_id)
    }

    /// New snapshot with shape `id` translated; `self` is unchanged.
    pub fn with_translated(&self, id: &str, dx: f64, dy: f64) -> Self {
        let shapes: Vec<Shape> = self
            .shapes
            .iter()
            .map(|s| {
                let mut s = s.clone();
                if s.id() == &id {
                    s.translate(dx, dy);
                }
                s
            })
            .collect();
        Self::new(shapes)
    }
}

impl Deref for CanvasSnapshot {
    type Target = [Shape];

    fn deref(&self) -> &Self::Target {
        &self.shapes
    }
}

impl From<Vec<Shape>> for CanvasSnapshot {
    fn from(shapes: Vec<Shape>) -> Self {
        Self::new(shapes)
    }
}
