#![cfg(feature = "full")]

use polynav::prelude::*;

#[test]
fn prelude_is_enough_to_navigate_a_room() {
    let world = StaticWorld::new(Vec2::new(0.0, 0.0), Vec2::new(12.0, 8.0))
        .with_obstacle(Polygon::rect(Vec2::new(5.0, 1.0), Vec2::new(7.0, 6.0)))
        .expect("valid obstacle");

    let mut agent = PointAgent::new(Vec2::new(2.0, 2.0), 0.3, 3.0);
    let mut nav = Navigator::new(NavConfig::default()).expect("valid config");
    nav.create_path_network(&world, &agent).expect("network builds");

    let dest = Vec2::new(10.0, 2.0);
    let source = agent.location();
    assert!(nav.compute_path(&world, &mut agent, source, dest));
    assert_eq!(nav.state(), NavState::Following);

    for _ in 0..1_000 {
        if nav.state() == NavState::Idle {
            break;
        }
        if agent.step(0.05) {
            nav.checkpoint(&world, &mut agent);
        }
        nav.update(&world, &mut agent, 0.05);
    }
    assert_eq!(nav.state(), NavState::Idle);
    assert_eq!(agent.location(), dest);
}
