use wardrobekit_designer::geometry::{
    angle_degrees, distance, point_to_segment_distance, segment_intersection, snap_point,
    snap_to_grid, Bounds, Point,
};

#[test]
fn test_distance() {
    assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn test_point_to_segment_distance_projects_inside() {
    let d = point_to_segment_distance(
        Point::new(5.0, 3.0),
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
    );
    assert_eq!(d, 3.0);
}

#[test]
fn test_point_to_segment_distance_clamps_to_endpoints() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert_eq!(point_to_segment_distance(Point::new(-3.0, 4.0), a, b), 5.0);
    assert_eq!(point_to_segment_distance(Point::new(13.0, 4.0), a, b), 5.0);
}

#[test]
fn test_point_to_degenerate_segment() {
    let a = Point::new(1.0, 1.0);
    assert_eq!(point_to_segment_distance(Point::new(4.0, 5.0), a, a), 5.0);
}

#[test]
fn test_snap_to_grid() {
    assert_eq!(snap_to_grid(14.0, 10.0), 10.0);
    assert_eq!(snap_to_grid(15.0, 10.0), 20.0);
    assert_eq!(snap_to_grid(12.4, 1.0), 12.0);
    assert_eq!(snap_to_grid(12.4, 0.0), 12.4);
    assert_eq!(snap_point(Point::new(23.0, 47.0), 5.0), Point::new(25.0, 45.0));
}

#[test]
fn test_segment_intersection_crossing() {
    let hit = segment_intersection(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    );
    assert_eq!(hit, Some(Point::new(5.0, 5.0)));
}

#[test]
fn test_segment_intersection_parallel() {
    let hit = segment_intersection(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(10.0, 5.0),
    );
    assert_eq!(hit, None);
}

#[test]
fn test_segment_intersection_outside_first_segment() {
    let hit = segment_intersection(
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(6.0, -5.0),
        Point::new(6.0, 5.0),
    );
    assert_eq!(hit, None);
}

#[test]
fn test_segment_intersection_ignores_second_segment_range() {
    // The guide line is short but still projects onto the first segment.
    let hit = segment_intersection(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(5.0, 20.0),
        Point::new(5.0, 30.0),
    );
    assert_eq!(hit, Some(Point::new(5.0, 0.0)));
}

#[test]
fn test_angle_degrees() {
    let origin = Point::new(0.0, 0.0);
    assert_eq!(angle_degrees(origin, Point::new(10.0, 0.0)), 0.0);
    assert!((angle_degrees(origin, Point::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
    assert!((angle_degrees(origin, Point::new(-10.0, 0.0)) - 180.0).abs() < 1e-9);
}

#[test]
fn test_bounds_union_and_contains() {
    let a = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
    let b = Bounds::from_rect(20.0, 5.0, 10.0, 10.0);
    let u = a.union(&b);
    assert_eq!(u, Bounds::new(0.0, 0.0, 30.0, 15.0));
    assert_eq!(u.width(), 30.0);
    assert_eq!(u.height(), 15.0);
    assert!(u.contains_point(15.0, 7.0));
    assert!(!a.contains_point(15.0, 7.0));
    assert_eq!(a.center(), Point::new(5.0, 5.0));
}
