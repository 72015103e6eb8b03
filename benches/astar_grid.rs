use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use informed_search::algorithms::a_star_search;
use informed_search::graph::InformedGraph;

/// A `side`×`side` four-connected grid with random edge costs and a
/// Manhattan-distance heuristic towards the far corner (admissible: costs
/// are at least 1).
fn grid(side: u32, seed: u64) -> InformedGraph<u32, u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut g = InformedGraph::new();

    let id = |x: u32, y: u32| y * side + x;
    for y in 0..side {
        for x in 0..side {
            if x + 1 < side {
                g.add_edge(id(x, y), id(x + 1, y), rng.random_range(1..=10u32));
            }
            if y + 1 < side {
                g.add_edge(id(x, y), id(x, y + 1), rng.random_range(1..=10u32));
            }
            g.set_heuristic(id(x, y), (side - 1 - x) + (side - 1 - y));
        }
    }
    g
}

fn astar_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("A* grid");

    for side in [16u32, 32, 64] {
        let g = grid(side, 7);
        let goal = side * side - 1;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &g,
            |b, g| {
                b.iter(|| {
                    let path = a_star_search(g, &0, &goal);
                    assert!(path.is_some());
                    path
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, astar_grid);
criterion_main!(benches);
