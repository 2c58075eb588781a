use wardrobekit_designer::bounds::{
    get_carcass_bounds, get_post_bounds, get_shelf_bounds, section_boundaries,
    MIN_POST_CLEARANCE_MM,
};
use wardrobekit_designer::{get_center_posts, PanelToggles, RectShape, Shape};

use crate::fixtures::{carcass_shapes, two_post_config, two_post_shapes};

#[test]
fn test_shelf_bounds_between_two_posts() {
    let bounds = get_shelf_bounds(&two_post_config(), &two_post_shapes(), "MOD-SHELF-2-1")
        .expect("shelf bounds");
    assert_eq!(bounds.section_x, 518.0);
    assert_eq!(bounds.section_width, 382.0);
    assert_eq!(bounds.min_y, 36.0);
    assert_eq!(bounds.max_y, 2064.0);
}

#[test]
fn test_shelf_bounds_outer_sections() {
    let config = two_post_config();
    let shapes = two_post_shapes();

    let first = get_shelf_bounds(&config, &shapes, "MOD-SHELF-1-1").unwrap();
    assert_eq!((first.section_x, first.section_width), (18.0, 482.0));

    let last = get_shelf_bounds(&config, &shapes, "MOD-SHELF-3-2").unwrap();
    assert_eq!((last.section_x, last.section_width), (918.0, 464.0));
}

#[test]
fn test_shelf_bounds_clamps_section_index() {
    let bounds =
        get_shelf_bounds(&two_post_config(), &two_post_shapes(), "MOD-SHELF-9-1").unwrap();
    assert_eq!(bounds.section_x, 918.0);
}

#[test]
fn test_shelf_bounds_without_posts() {
    let bounds = get_shelf_bounds(&two_post_config(), &carcass_shapes(), "MOD-SHELF-1-1").unwrap();
    assert_eq!(bounds.section_x, 18.0);
    assert_eq!(bounds.section_width, 1364.0);
}

#[test]
fn test_shelf_bounds_falls_back_to_namespace_extent() {
    let shapes: Vec<Shape> = vec![
        RectShape::new("MOD-BACK", 0.0, 0.0, 1400.0, 2100.0).into(),
        RectShape::new("MOD-POST-0", 500.0, 18.0, 18.0, 2064.0).into(),
    ];
    let bounds = get_shelf_bounds(&two_post_config(), &shapes, "MOD-SHELF-1-1").unwrap();
    assert_eq!(bounds.section_x, 18.0);
    assert_eq!(bounds.section_width, 482.0);
    assert_eq!(bounds.min_y, 36.0);
    assert_eq!(bounds.max_y, 2064.0);
}

#[test]
fn test_shelf_bounds_not_applicable() {
    let config = two_post_config();
    assert!(get_shelf_bounds(&config, &[], "MOD-SHELF-1-1").is_none());
    assert!(get_shelf_bounds(&config, &two_post_shapes(), "MOD-POST-0").is_none());

    let foreign: Vec<Shape> = vec![RectShape::new("KITCHEN-BASE", 0.0, 0.0, 600.0, 720.0).into()];
    assert!(get_shelf_bounds(&config, &foreign, "MOD-SHELF-1-1").is_none());
}

#[test]
fn test_shelf_bounds_clamp_y() {
    let bounds = get_shelf_bounds(&two_post_config(), &two_post_shapes(), "MOD-SHELF-2-1").unwrap();
    assert_eq!(bounds.clamp_y(0.0), 36.0);
    assert_eq!(bounds.clamp_y(5000.0), 2064.0);
    assert_eq!(bounds.clamp_y(1000.0), 1000.0);
}

#[test]
fn test_section_boundaries() {
    let shapes = two_post_shapes();
    let posts = get_center_posts(&shapes);
    let boundaries = section_boundaries(18.0, 1382.0, &posts);
    let widths: Vec<f64> = boundaries.iter().map(|b| b.width).collect();
    assert_eq!(widths, vec![482.0, 382.0, 464.0]);
}

#[test]
fn test_carcass_bounds() {
    let bounds = get_carcass_bounds(&two_post_config(), &carcass_shapes()).unwrap();
    assert_eq!(bounds.left_edge, 18.0);
    assert_eq!(bounds.right_edge, 1382.0);
    assert_eq!(bounds.min_x, 18.0 + MIN_POST_CLEARANCE_MM);
    assert_eq!(bounds.max_x, 1382.0 - MIN_POST_CLEARANCE_MM);
    assert_eq!(bounds.clamp_x(0.0), 118.0);
}

#[test]
fn test_carcass_bounds_with_disabled_placeholder() {
    let shapes: Vec<Shape> = vec![
        RectShape::new("MOD-LEFT-DISABLED", 0.0, 0.0, 18.0, 2100.0).into(),
        RectShape::new("MOD-RIGHT", 1382.0, 0.0, 18.0, 2100.0).into(),
    ];
    let bounds = get_carcass_bounds(&two_post_config(), &shapes).unwrap();
    assert_eq!(bounds.left_edge, 0.0);
    assert_eq!(bounds.min_x, 100.0);
    assert_eq!(bounds.right_edge, 1382.0);
}

#[test]
fn test_carcass_bounds_with_panel_disabled_in_config() {
    let config = wardrobekit_designer::ModuleConfig {
        panels: PanelToggles {
            right: false,
            ..Default::default()
        },
        ..two_post_config()
    };
    let bounds = get_carcass_bounds(&config, &carcass_shapes()).unwrap();
    assert_eq!(bounds.left_edge, 18.0);
    assert_eq!(bounds.right_edge, 1400.0);
}

#[test]
fn test_carcass_bounds_missing_panel() {
    let shapes: Vec<Shape> = vec![RectShape::new("MOD-LEFT", 0.0, 0.0, 18.0, 2100.0).into()];
    assert!(get_carcass_bounds(&two_post_config(), &shapes).is_none());
}

#[test]
fn test_post_bounds_respect_neighbours() {
    let config = two_post_config();
    let shapes = two_post_shapes();

    let first = get_post_bounds(&config, &shapes, "MOD-POST-0").unwrap();
    assert_eq!(first.min_x, 118.0);
    assert_eq!(first.max_x, 900.0 - 18.0 - 50.0);

    let second = get_post_bounds(&config, &shapes, "MOD-POST-1").unwrap();
    assert_eq!(second.min_x, 518.0 + 50.0);
    assert_eq!(second.max_x, 1282.0);
}

#[test]
fn test_post_bounds_pinned_when_crowded() {
    let mut shapes = carcass_shapes();
    for (i, x) in [150.0, 200.0, 250.0].into_iter().enumerate() {
        shapes.push(RectShape::new(format!("MOD-POST-{}", i), x, 18.0, 18.0, 2064.0).into());
    }
    let bounds = get_post_bounds(&two_post_config(), &shapes, "MOD-POST-1").unwrap();
    assert_eq!(bounds.min_x, 200.0);
    assert_eq!(bounds.max_x, 200.0);
}

#[test]
fn test_post_bounds_unknown_post() {
    assert!(get_post_bounds(&two_post_config(), &two_post_shapes(), "MOD-POST-7").is_none());
}
