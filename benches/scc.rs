//! Benchmarks for strongly connected component analysis
//!
//! Covers long chains (deepest traversal), one big ring, and sparse
//! pseudo-random graphs of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use followgraph::graph::SocialGraph;
use followgraph::scc::{kosaraju, GraphSnapshot};

/// Create a chain `0 -> 1 -> ... -> n-1`, optionally closed into a ring
fn create_chain(n: usize, closed: bool) -> GraphSnapshot {
    let users: Vec<String> = (0..n).map(|i| format!("user-{}", i)).collect();
    let mut follows: Vec<(String, String)> = users
        .windows(2)
        .map(|w| (w[0].clone(), w[1].clone()))
        .collect();
    if closed && n > 1 {
        follows.push((users[n - 1].clone(), users[0].clone()));
    }
    GraphSnapshot::from_parts(users, follows)
}

/// Create a sparse graph with `degree` pseudo-random follows per user
fn create_random_graph(n: usize, degree: usize) -> SocialGraph {
    let mut graph = SocialGraph::with_capacity(n, n * degree);
    for i in 0..n {
        graph.add_user(&format!("user-{}", i)).unwrap();
    }

    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    for i in 0..n {
        for _ in 0..degree {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % n as u64) as usize;
            graph
                .add_follow(&format!("user-{}", i), &format!("user-{}", j))
                .unwrap();
        }
    }
    graph
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc_chain");

    for size in [1_000, 10_000, 100_000] {
        let open = create_chain(size, false);
        let ring = create_chain(size, true);

        group.bench_with_input(BenchmarkId::new("open", size), &open, |b, snapshot| {
            b.iter(|| kosaraju(black_box(snapshot)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("ring", size), &ring, |b, snapshot| {
            b.iter(|| kosaraju(black_box(snapshot)).unwrap())
        });
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc_random");

    for size in [1_000, 10_000] {
        let graph = create_random_graph(size, 3);
        let snapshot = graph.snapshot();

        group.bench_with_input(BenchmarkId::new("kosaraju", size), &snapshot, |b, snapshot| {
            b.iter(|| kosaraju(black_box(snapshot)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("snapshot", size), &graph, |b, graph| {
            b.iter(|| black_box(graph).snapshot())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain, bench_random);
criterion_main!(benches);
