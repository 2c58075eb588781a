use wardrobekit_designer::hit_test::{detect_edge, hit_test_shapes, is_selectable, Edge};
use wardrobekit_designer::{LineShape, RectShape, Shape};

fn overlapping() -> Vec<Shape> {
    vec![
        RectShape::new("a", 0.0, 0.0, 100.0, 100.0).into(),
        RectShape::new("b", 50.0, 50.0, 100.0, 100.0).into(),
    ]
}

#[test]
fn test_front_most_shape_wins() {
    let shapes = overlapping();
    let hit = hit_test_shapes(75.0, 75.0, &shapes, 10.0).unwrap();
    assert_eq!(hit.id(), &"b");

    let hit = hit_test_shapes(25.0, 25.0, &shapes, 10.0).unwrap();
    assert_eq!(hit.id(), &"a");
}

#[test]
fn test_miss_returns_none() {
    assert!(hit_test_shapes(500.0, 500.0, &overlapping(), 10.0).is_none());
    assert!(hit_test_shapes(0.0, 0.0, &[], 10.0).is_none());
}

#[test]
fn test_back_panel_does_not_block_selection() {
    let mut shapes = overlapping();
    shapes.push(RectShape::new("MOD-BACK", 0.0, 0.0, 1000.0, 1000.0).into());

    let hit = hit_test_shapes(25.0, 25.0, &shapes, 10.0).unwrap();
    assert_eq!(hit.id(), &"a");
    assert!(hit_test_shapes(500.0, 500.0, &shapes, 10.0).is_none());
    assert!(!is_selectable("MOD-BACK"));
    assert!(!is_selectable("MOD-LEFT-DISABLED"));
    assert!(is_selectable("MOD-LEFT"));
}

#[test]
fn test_line_hit_uses_grid_tolerance() {
    let shapes: Vec<Shape> = vec![LineShape::new("guide", 0.0, 0.0, 100.0, 0.0).into()];
    // Tolerance is 0.6 x grid = 6 mm.
    assert!(hit_test_shapes(50.0, 5.0, &shapes, 10.0).is_some());
    assert!(hit_test_shapes(50.0, 7.0, &shapes, 10.0).is_none());
    assert!(hit_test_shapes(104.0, 0.0, &shapes, 10.0).is_some());
}

fn panel() -> RectShape {
    RectShape::new("MOD-POST-0", 100.0, 100.0, 200.0, 100.0)
}

#[test]
fn test_detect_each_edge() {
    let rect = panel();
    assert_eq!(detect_edge(101.0, 150.0, &rect, &Edge::ALL, 5.0), Some(Edge::Left));
    assert_eq!(detect_edge(299.0, 150.0, &rect, &Edge::ALL, 5.0), Some(Edge::Right));
    assert_eq!(detect_edge(150.0, 102.0, &rect, &Edge::ALL, 5.0), Some(Edge::Top));
    assert_eq!(detect_edge(150.0, 198.0, &rect, &Edge::ALL, 5.0), Some(Edge::Bottom));
    assert_eq!(detect_edge(150.0, 150.0, &rect, &Edge::ALL, 5.0), None);
}

#[test]
fn test_detect_edge_priority_at_corner() {
    let rect = panel();
    assert_eq!(detect_edge(101.0, 102.0, &rect, &Edge::ALL, 5.0), Some(Edge::Left));
    assert_eq!(detect_edge(101.0, 102.0, &rect, &[Edge::Top], 5.0), Some(Edge::Top));
}

#[test]
fn test_detect_edge_respects_allowed_edges() {
    let rect = panel();
    assert_eq!(
        detect_edge(101.0, 150.0, &rect, &[Edge::Top, Edge::Bottom], 5.0),
        None
    );
    assert_eq!(detect_edge(101.0, 150.0, &rect, &[], 5.0), None);
}

#[test]
fn test_detect_edge_requires_point_alongside_edge() {
    let rect = panel();
    assert_eq!(detect_edge(101.0, 400.0, &rect, &Edge::ALL, 5.0), None);
}
