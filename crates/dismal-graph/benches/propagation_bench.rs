use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, Criterion};

use dismal_graph::{reverse_causality, DeltaGraph, PropagationEngine};

/// 200 vertices, each linked to its next five neighbours (~1K edges), plus
/// a feedback edge from the last vertex to the first.
fn build_1k_edge_graph() -> DeltaGraph {
    let n = 200;
    let mut graph = DeltaGraph::new();
    for i in 0..n {
        graph.add_vertex(&format!("n{i}"), Some(100.0)).unwrap();
    }
    let mut count = 0;
    for i in 0..n {
        for j in 1..=5 {
            let target = i + j;
            if target < n {
                let tag = if j % 2 == 0 { "ap_lin" } else { "aa_prop" };
                graph
                    .add_edge(&format!("n{i}"), &format!("n{target}"), tag, vec![0.1, 0.01])
                    .unwrap();
                count += 1;
            }
        }
    }
    graph
        .add_edge(&format!("n{}", n - 1), "n0", "aa_prop", vec![0.05])
        .unwrap();
    assert!(count >= 900, "Should have ~1K edges, got {count}");
    graph
}

fn bench_propagation(c: &mut Criterion) {
    let graph = build_1k_edge_graph();
    let engine = PropagationEngine::default();
    let initial = HashMap::from([("n0".to_string(), 10.0), ("n50".to_string(), -5.0)]);

    c.bench_function("propagate_1k_edges_20_cycles", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            engine.run(&mut g, 20, &initial, None).unwrap()
        })
    });
}

fn bench_reversal(c: &mut Criterion) {
    let graph = build_1k_edge_graph();

    c.bench_function("reverse_causality_1k_edges", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            reverse_causality(&mut g, "n0", "n199").unwrap()
        })
    });
}

criterion_group!(benches, bench_propagation, bench_reversal);
criterion_main!(benches);
