//! # WardrobeKit Designer
//!
//! Geometry engine behind the 2D wardrobe design canvas. The canvas UI owns
//! the shapes and the module configuration; this crate answers the questions
//! it asks on every pointer event and drag frame.
//!
//! ## Core Components
//!
//! - **Geometry**: points, bounds, segment distance, snapping, intersection
//! - **Shapes**: rectangles and lines keyed by a [`ShapeId`] whose domain role
//!   is decoded once at creation
//! - **Classifier**: panel / center post / shelf roles from the id convention
//! - **Section solver**: section widths and post positions for a carcass
//! - **Bounds**: legal drag ranges for shelves and center posts, read from the
//!   live shapes
//! - **Hit testing**: front-most shape under the pointer and edge grabbing
//! - **Drag commit**: new section / post values once a drag ends
//!
//! Every query is a pure function of its inputs. Nothing here fails: when a
//! question does not apply to the shapes at hand the answer is `None`.
//!
//! ## Usage
//!
//! ```rust
//! use wardrobekit_designer::{get_shelf_bounds, ModuleConfig, RectShape, Shape};
//!
//! let config = ModuleConfig::default();
//! let shapes: Vec<Shape> = vec![
//!     RectShape::new("MOD-TOP", 0.0, 0.0, 1200.0, 18.0).into(),
//!     RectShape::new("MOD-BOTTOM", 0.0, 2082.0, 1200.0, 18.0).into(),
//!     RectShape::new("MOD-LEFT", 0.0, 0.0, 18.0, 2100.0).into(),
//!     RectShape::new("MOD-RIGHT", 1182.0, 0.0, 18.0, 2100.0).into(),
//! ];
//! let bounds = get_shelf_bounds(&config, &shapes, "MOD-SHELF-1-1").unwrap();
//! assert_eq!(bounds.section_x, 18.0);
//! ```

pub mod bounds;
pub mod classify;
pub mod drag;
pub mod geometry;
pub mod module_config;
pub mod sections;
pub mod shapes;
pub mod snapshot;

pub use bounds::{
    get_carcass_bounds, get_post_bounds, get_shelf_bounds, section_boundaries, CarcassBounds,
    PostBounds, SectionBoundary, ShelfBounds,
};
pub use classify::{
    classify, get_center_posts, get_shelves, parse_post_id, parse_shelf_id, PanelKind, ShapeRole,
    ShelfRef,
};
pub use drag::{commit_post_drag, commit_shelf_drag};
pub use geometry::{
    angle_degrees, distance, point_to_segment_distance, segment_intersection, snap_point,
    snap_to_grid, Bounds, Point,
};
pub use hit_test::{detect_edge, hit_test_shapes, is_selectable, Edge};
pub use module_config::{ModuleConfig, PanelToggles, Section, SectionType};
pub use sections::{calculate_section_widths, SectionLayout, SectionWidthParams};
pub use shapes::{LineShape, RectShape, Shape, ShapeId};
pub use snapshot::CanvasSnapshot;
