#![cfg(feature = "serde")]

use polynav_geom::{Polygon, Segment, Vec2};

#[test]
fn polygons_and_segments_roundtrip_via_serde() {
    let poly = Polygon::rect(Vec2::new(1.0, 2.0), Vec2::new(3.5, 4.25));
    let json = serde_json::to_string(&poly).expect("serialize polygon");
    let back: Polygon = serde_json::from_str(&json).expect("deserialize polygon");
    assert_eq!(poly, back);

    let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(-1.5, 2.0));
    let json = serde_json::to_string(&seg).expect("serialize segment");
    let back: Segment = serde_json::from_str(&json).expect("deserialize segment");
    assert_eq!(seg, back);
}
