#![cfg(feature = "serde")]

use polynav_core::{NavConfig, PointOrder, Polygon, Segment, StaticWorld, Vec2, World};

#[test]
fn static_world_roundtrips_with_derived_lines() {
    let mut world = StaticWorld::new(Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0))
        .with_obstacle(Polygon::rect(Vec2::new(3.0, 3.0), Vec2::new(5.0, 5.0)))
        .expect("valid obstacle");
    let gate = world.add_gate(Segment::new(Vec2::new(0.0, 4.0), Vec2::new(3.0, 4.0)));
    world.set_gate_open(gate, true);

    let json = serde_json::to_string(&world).expect("serialize world");
    let back: StaticWorld = serde_json::from_str(&json).expect("deserialize world");

    assert_eq!(back, world);
    assert_eq!(back.lines(), world.lines());
    assert_eq!(back.is_gate_open(gate), Some(true));
}

#[test]
fn config_fills_missing_fields_with_defaults() {
    let config: NavConfig =
        serde_json::from_str(r#"{ "point_order": "as_given" }"#).expect("partial config");
    assert_eq!(config.point_order, PointOrder::AsGiven);
    assert_eq!(config.node_tolerance, NavConfig::default().node_tolerance);
    assert!(config.smoothing);
}
