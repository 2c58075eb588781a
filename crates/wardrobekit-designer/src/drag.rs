//! Turning a finished drag into configuration values.
//!
//! Both functions return new values for the UI to store; the configuration
//! passed in is left untouched.

use wardrobekit_core::units::round_to;

use crate::bounds::{get_carcass_bounds, get_post_bounds, get_shelf_bounds, resolve_frame};
use crate::classify::{get_center_posts, get_shelves, parse_shelf_id};
use crate::module_config::{ModuleConfig, Section};
use crate::sections::SECTION_WIDTH_STEP_MM;
use crate::shapes::Shape;

/// Record a shelf dropped at canvas y `new_y`.
///
/// The position is clamped to the shelf's bounds and stored in its section's
/// `custom_shelf_positions`, measured from the inner face of the top panel.
/// Sections without custom positions are seeded from the shelves currently on
/// the canvas, falling back to even spacing.
pub fn commit_shelf_drag(
    config: &ModuleConfig,
    shapes: &[Shape],
    shelf_id: &str,
    new_y: f64,
) -> Option<Vec<Section>> {
    let shelf = parse_shelf_id(shelf_id)?;
    let bounds = get_shelf_bounds(config, shapes, shelf_id)?;
    let frame = resolve_frame(config, shapes)?;

    let mut sections = config.normalized_sections();
    let section_index = shelf.section_index.min(sections.len() - 1);
    let section = &mut sections[section_index];
    let shelf_count = section.shelf_count as usize;
    if shelf.shelf_index == 0 || shelf.shelf_index > shelf_count {
        tracing::debug!(shelf_id, shelf_count, "shelf index outside section");
        return None;
    }

    let mut positions = match section.custom_shelf_positions.take() {
        Some(existing) if existing.len() == shelf_count => existing,
        _ => {
            let inner_height = frame.inner_bottom - frame.inner_top;
            let spacing = inner_height / (shelf_count as f64 + 1.0);
            let mut seeded: Vec<f64> = (1..=shelf_count).map(|k| spacing * k as f64).collect();
            for rect in get_shelves(shapes) {
                if let Some(other) = parse_shelf_id(rect.id.as_str()) {
                    if other.section_index == shelf.section_index
                        && (1..=shelf_count).contains(&other.shelf_index)
                    {
                        seeded[other.shelf_index - 1] = rect.y - frame.inner_top;
                    }
                }
            }
            seeded
        }
    };

    let y = bounds.clamp_y(new_y);
    positions[shelf.shelf_index - 1] = round_to(y - frame.inner_top, SECTION_WIDTH_STEP_MM);
    section.custom_shelf_positions = Some(positions);
    Some(sections)
}

/// Record a center post dropped at canvas x `new_x`.
///
/// Returns every post's left edge in inner coordinates (relative to the
/// carcass left edge), sorted, ready to be stored as custom post positions.
pub fn commit_post_drag(
    config: &ModuleConfig,
    shapes: &[Shape],
    post_id: &str,
    new_x: f64,
) -> Option<Vec<f64>> {
    let carcass = get_carcass_bounds(config, shapes)?;
    let bounds = get_post_bounds(config, shapes, post_id)?;
    let x = bounds.clamp_x(new_x);

    let mut positions: Vec<f64> = get_center_posts(shapes)
        .into_iter()
        .map(|post| {
            let left = if post.id == post_id { x } else { post.x };
            round_to(left - carcass.left_edge, SECTION_WIDTH_STEP_MM)
        })
        .collect();
    positions.sort_by(f64::total_cmp);
    Some(positions)
}
