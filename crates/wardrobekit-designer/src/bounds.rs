//! Drag bounds for shelves and center posts.
//!
//! Bounds are computed from the live shape positions, not from the module
//! configuration, so they follow the canvas while a drag is in progress. When
//! the shapes needed to anchor a constraint are missing the functions return
//! `None`, meaning the constraint does not apply.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::classify::{
    get_center_posts, in_carcass_namespace, parse_shelf_id, PanelKind, ShapeRole,
};
use crate::geometry::Bounds;
use crate::module_config::ModuleConfig;
use crate::sections::MIN_SECTION_WIDTH_MM;
use crate::shapes::{RectShape, Shape};

/// Clearance a center post keeps from the inner edge of either side panel.
pub const MIN_POST_CLEARANCE_MM: f64 = 100.0;

/// Horizontal extent of one section, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBoundary {
    pub start: f64,
    pub end: f64,
    pub width: f64,
}

impl SectionBoundary {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            width: end - start,
        }
    }
}

pub type SectionBoundaries = SmallVec<[SectionBoundary; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelfBounds {
    pub min_y: f64,
    pub max_y: f64,
    pub section_x: f64,
    pub section_width: f64,
}

impl ShelfBounds {
    pub fn clamp_y(&self, y: f64) -> f64 {
        y.max(self.min_y).min(self.max_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarcassBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub left_edge: f64,
    pub right_edge: f64,
}

impl CarcassBounds {
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.max(self.min_x).min(self.max_x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostBounds {
    pub min_x: f64,
    pub max_x: f64,
}

impl PostBounds {
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.max(self.min_x).min(self.max_x)
    }
}

/// Inner faces of the carcass on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CarcassFrame {
    pub inner_left: f64,
    pub inner_right: f64,
    pub inner_top: f64,
    pub inner_bottom: f64,
}

pub(crate) fn find_rect<'a>(shapes: &'a [Shape], id: &str) -> Option<&'a RectShape> {
    shapes
        .iter()
        .filter_map(Shape::as_rect)
        .find(|r| r.id == id)
}

fn find_panel(shapes: &[Shape], kind: PanelKind) -> Option<&RectShape> {
    shapes
        .iter()
        .filter_map(Shape::as_rect)
        .find(|r| r.id.role() == ShapeRole::Panel(kind))
}

/// Find a side panel, accepting its disabled placeholder. The flag reports
/// whether the panel found is enabled.
fn find_side_panel<'a>(
    config: &ModuleConfig,
    shapes: &'a [Shape],
    kind: PanelKind,
) -> Option<(&'a RectShape, bool)> {
    if let Some(panel) = find_panel(shapes, kind) {
        return Some((panel, config.panels.is_enabled(kind)));
    }
    find_rect(shapes, &kind.disabled_id()).map(|panel| (panel, false))
}

/// Union of every carcass-namespace shape.
fn namespace_extent(shapes: &[Shape]) -> Option<Bounds> {
    shapes
        .iter()
        .filter(|s| in_carcass_namespace(s.id().as_str()))
        .map(Shape::bounds)
        .reduce(|acc, b| acc.union(&b))
}

pub(crate) fn resolve_frame(config: &ModuleConfig, shapes: &[Shape]) -> Option<CarcassFrame> {
    let panels = (
        find_panel(shapes, PanelKind::Top),
        find_panel(shapes, PanelKind::Bottom),
        find_panel(shapes, PanelKind::Left),
        find_panel(shapes, PanelKind::Right),
    );
    if let (Some(top), Some(bottom), Some(left), Some(right)) = panels {
        return Some(CarcassFrame {
            inner_left: left.right(),
            inner_right: right.x,
            inner_top: top.bottom(),
            inner_bottom: bottom.y,
        });
    }

    let thickness = config.thickness();
    match namespace_extent(shapes) {
        Some(extent) => {
            tracing::trace!("carcass panels incomplete, using namespace extent");
            Some(CarcassFrame {
                inner_left: extent.min_x + thickness,
                inner_right: extent.max_x - thickness,
                inner_top: extent.min_y + thickness,
                inner_bottom: extent.max_y - thickness,
            })
        }
        None => {
            tracing::debug!("no carcass shapes on canvas");
            None
        }
    }
}

/// Build one boundary per section from post rectangles sorted by x.
pub fn section_boundaries(
    inner_left: f64,
    inner_right: f64,
    posts: &[&RectShape],
) -> SectionBoundaries {
    let mut boundaries = SectionBoundaries::new();
    let mut start = inner_left;
    for post in posts {
        boundaries.push(SectionBoundary::new(start, post.x));
        start = post.right();
    }
    boundaries.push(SectionBoundary::new(start, inner_right));
    boundaries
}

/// Vertical drag range of a shelf and the horizontal extent of its section.
///
/// A shelf referencing a section beyond the last one present is placed in
/// the last section.
pub fn get_shelf_bounds(
    config: &ModuleConfig,
    shapes: &[Shape],
    shelf_id: &str,
) -> Option<ShelfBounds> {
    let Some(shelf) = parse_shelf_id(shelf_id) else {
        tracing::debug!(shelf_id, "not a shelf id");
        return None;
    };
    let frame = resolve_frame(config, shapes)?;

    let posts = get_center_posts(shapes);
    let boundaries = section_boundaries(frame.inner_left, frame.inner_right, &posts);
    let index = shelf.section_index.min(boundaries.len() - 1);
    let section = boundaries[index];

    let thickness = config.thickness();
    let bounds = ShelfBounds {
        min_y: frame.inner_top + thickness,
        max_y: frame.inner_bottom - thickness,
        section_x: section.start,
        section_width: section.width,
    };
    tracing::trace!(shelf_id, ?bounds, "shelf bounds");
    Some(bounds)
}

/// Horizontal range available to center posts inside the carcass.
///
/// A disabled side panel contributes its outer edge instead of its inner one.
pub fn get_carcass_bounds(config: &ModuleConfig, shapes: &[Shape]) -> Option<CarcassBounds> {
    let Some((left, left_enabled)) = find_side_panel(config, shapes, PanelKind::Left) else {
        tracing::debug!("left panel not found");
        return None;
    };
    let Some((right, right_enabled)) = find_side_panel(config, shapes, PanelKind::Right) else {
        tracing::debug!("right panel not found");
        return None;
    };

    let left_edge = if left_enabled { left.right() } else { left.x };
    let right_edge = if right_enabled { right.x } else { right.right() };

    Some(CarcassBounds {
        min_x: left_edge + MIN_POST_CLEARANCE_MM,
        max_x: right_edge - MIN_POST_CLEARANCE_MM,
        left_edge,
        right_edge,
    })
}

/// Horizontal range of one center post.
///
/// Besides the carcass clearance, the post keeps a minimum section width from
/// each neighbouring post. If the neighbours leave no room the post is pinned
/// where it is.
pub fn get_post_bounds(
    config: &ModuleConfig,
    shapes: &[Shape],
    post_id: &str,
) -> Option<PostBounds> {
    let carcass = get_carcass_bounds(config, shapes)?;
    let posts = get_center_posts(shapes);
    let Some(position) = posts.iter().position(|p| p.id == post_id) else {
        tracing::debug!(post_id, "center post not found");
        return None;
    };
    let post = posts[position];

    let mut min_x = carcass.min_x;
    if let Some(prev) = position.checked_sub(1).map(|i| posts[i]) {
        min_x = min_x.max(prev.right() + MIN_SECTION_WIDTH_MM);
    }
    let mut max_x = carcass.max_x;
    if let Some(next) = posts.get(position + 1) {
        max_x = max_x.min(next.x - post.w - MIN_SECTION_WIDTH_MM);
    }

    if min_x > max_x {
        return Some(PostBounds {
            min_x: post.x,
            max_x: post.x,
        });
    }
    Some(PostBounds { min_x, max_x })
}
