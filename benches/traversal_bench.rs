//! Criterion micro-benchmarks for graph construction and the three
//! traversal queries on a square grid graph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use routegraph::Graph;

/// Build a `side` x `side` grid: nodes named `rXXcYY`, unit-weight edges
/// to the right and down neighbors.
fn grid(side: usize) -> Graph {
    let mut graph = Graph::new();
    for r in 0..side {
        for c in 0..side {
            graph.add_node(format!("r{r:02}c{c:02}")).unwrap();
        }
    }
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                graph
                    .add_edge(&format!("r{r:02}c{c:02}"), &format!("r{r:02}c{:02}", c + 1), 1)
                    .unwrap();
            }
            if r + 1 < side {
                graph
                    .add_edge(&format!("r{r:02}c{c:02}"), &format!("r{:02}c{c:02}", r + 1), 1)
                    .unwrap();
            }
        }
    }
    graph
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_grid_30x30", |b| b.iter(|| grid(black_box(30))));
}

fn bench_components(c: &mut Criterion) {
    let graph = grid(30);
    c.bench_function("connected_components_30x30", |b| {
        b.iter(|| black_box(&graph).connected_components())
    });
}

fn bench_paths(c: &mut Criterion) {
    let graph = grid(30);
    let (from, to) = ("r00c00", "r29c29");

    c.bench_function("dfs_path_30x30", |b| {
        b.iter(|| black_box(&graph).dfs_path_between(from, to).unwrap())
    });
    c.bench_function("bfs_path_30x30", |b| {
        b.iter(|| black_box(&graph).bfs_path_between(from, to).unwrap())
    });
    c.bench_function("dijkstra_path_30x30", |b| {
        b.iter(|| black_box(&graph).dijkstra_path_between(from, to).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_components, bench_paths);
criterion_main!(benches);
