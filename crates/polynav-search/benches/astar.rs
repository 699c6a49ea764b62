use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polynav_geom::Vec2;
use polynav_mesh::{NetworkEdge, NodeId};
use polynav_search::SearchQuery;

/// A `side` x `side` lattice with 4-neighbour edges.
fn lattice(side: u32) -> (Vec<Vec2>, Vec<NetworkEdge>) {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    for y in 0..side {
        for x in 0..side {
            nodes.push(Vec2::new(x as f32, y as f32));
            let id = y * side + x;
            if x + 1 < side {
                edges.push(NetworkEdge::new(NodeId(id), NodeId(id + 1)));
            }
            if y + 1 < side {
                edges.push(NetworkEdge::new(NodeId(id), NodeId(id + side)));
            }
        }
    }
    (nodes, edges)
}

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynav-search/astar");

    for &side in &[8u32, 32, 64] {
        let (nodes, edges) = lattice(side);
        let goal = NodeId(side * side - 1);
        let mut query = SearchQuery::default();
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let result = query.find_path(NodeId(0), goal, &nodes, &edges);
                black_box(result.path.len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_astar);
criterion_main!(benches);
