use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polynav_core::{Polygon, StaticWorld, Vec2};
use polynav_mesh::PathNetworkBuilder;

/// A square room with a row of small square pillars.
fn pillar_room(pillars: usize) -> StaticWorld {
    let width = 4.0 * (pillars as f32 + 1.0);
    let mut world = StaticWorld::new(Vec2::new(0.0, 0.0), Vec2::new(width, 12.0));
    for i in 0..pillars {
        let x = 4.0 * (i as f32 + 1.0) - 0.5;
        world
            .add_obstacle(Polygon::rect(Vec2::new(x, 5.5), Vec2::new(x + 1.0, 6.5)))
            .expect("valid pillar");
    }
    world
}

fn bench_build(c: &mut Criterion) {
    let builder = PathNetworkBuilder::default();
    let mut group = c.benchmark_group("polynav-mesh/build");

    for &pillars in &[1usize, 3, 6] {
        let world = pillar_room(pillars);
        group.bench_with_input(BenchmarkId::from_parameter(pillars), &world, |b, world| {
            b.iter(|| {
                let network = builder.build(world, 0.25).expect("network");
                black_box(network.edge_count());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
