use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polynav_core::{NavAgent, Polygon, StaticWorld, Vec2};
use polynav_navigator::{Navigator, PointAgent};

fn pillar_hall() -> StaticWorld {
    let mut world = StaticWorld::new(Vec2::new(0.0, 0.0), Vec2::new(24.0, 12.0));
    for i in 0..3 {
        let x = 5.0 + 6.0 * i as f32;
        world
            .add_obstacle(Polygon::rect(Vec2::new(x, 3.0), Vec2::new(x + 2.0, 9.0)))
            .expect("valid pillar");
    }
    world
}

fn bench_compute_path(c: &mut Criterion) {
    let world = pillar_hall();
    let start = Vec2::new(1.0, 6.0);
    let dest = Vec2::new(23.0, 6.0);
    let mut agent = PointAgent::new(start, 0.25, 2.0);
    let mut nav = Navigator::default();
    nav.create_path_network(&world, &agent).expect("network");

    c.bench_function("polynav-navigator/compute_path/pillar_hall", |b| {
        b.iter(|| {
            let found = nav.compute_path(&world, &mut agent, start, dest);
            black_box((found, agent.move_target()));
        })
    });
}

criterion_group!(benches, bench_compute_path);
criterion_main!(benches);
