use polynav_geom::{
    minimum_distance, point_inside_polygon, point_on_polygon, polygons_adjacent,
    ray_trace_world, ray_trace_world_no_end_points, Polygon, Segment, Vec2,
};
use proptest::prelude::*;

fn obstacle_lines() -> Vec<Segment> {
    Polygon::rect(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0))
        .edges()
        .collect()
}

fn coord() -> impl Strategy<Value = f32> {
    (-100i32..=100).prop_map(|v| v as f32 * 0.1)
}

fn point() -> impl Strategy<Value = Vec2> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

#[test]
fn ray_through_obstacle_is_blocked_and_around_it_is_clear() {
    let lines = obstacle_lines();
    assert!(ray_trace_world(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), &lines).is_some());
    assert!(ray_trace_world(Vec2::new(0.0, 8.0), Vec2::new(10.0, 8.0), &lines).is_none());

    // Diagonal from corner to corner of the obstacle only touches it at the endpoints.
    let a = Vec2::new(4.0, 4.0);
    let b = Vec2::new(6.0, 6.0);
    assert!(ray_trace_world_no_end_points(a, b, &lines).is_none());
}

#[test]
fn shared_edge_of_split_square_is_reported() {
    let a = Polygon::triangle(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(4.0, 4.0));
    let b = Polygon::triangle(Vec2::new(4.0, 4.0), Vec2::new(0.0, 4.0), Vec2::new(0.0, 0.0));
    let shared = polygons_adjacent(&a, &b).expect("adjacent");
    assert_eq!(shared.midpoint(), Vec2::new(2.0, 2.0));
    assert_eq!(polygons_adjacent(&b, &a).map(|s| s.midpoint()), Some(Vec2::new(2.0, 2.0)));
}

proptest! {
    #[test]
    fn no_end_point_trace_is_symmetric(p1 in point(), p2 in point()) {
        let lines = obstacle_lines();
        prop_assert_eq!(
            ray_trace_world_no_end_points(p1, p2, &lines).is_some(),
            ray_trace_world_no_end_points(p2, p1, &lines).is_some()
        );
    }

    #[test]
    fn minimum_distance_is_symmetric_and_bounded(p1 in point(), p2 in point(), q in point()) {
        let d = minimum_distance(&Segment::new(p1, p2), q);
        prop_assert_eq!(d, minimum_distance(&Segment::new(p2, p1), q));
        prop_assert!(d <= q.distance(p1) + 1e-4);
        prop_assert!(d <= q.distance(p2) + 1e-4);
    }

    #[test]
    fn inside_and_on_boundary_are_exclusive(q in point()) {
        let square = Polygon::rect(Vec2::new(-3.0, -3.0), Vec2::new(3.0, 3.0));
        prop_assert!(!(point_inside_polygon(q, &square) && point_on_polygon(q, &square)));
    }
}
