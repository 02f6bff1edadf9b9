use std::collections::HashMap;

use proptest::prelude::*;

use dismal_graph::{DeltaGraph, PropagationEngine};

const TAGS: [&str; 4] = ["aa_prop", "aa_lin", "ap_prop", "ap_lin"];

/// Edge: (source, target, tag index, coefficient).
type EdgeSpec = (usize, usize, usize, f64);

fn build(values: &[f64], edges: &[EdgeSpec], order: &[usize]) -> DeltaGraph {
    let mut g = DeltaGraph::new();
    for &i in order {
        g.add_vertex(&format!("v{i}"), Some(values[i])).unwrap();
    }
    for &(s, t, tag, coefficient) in edges {
        g.add_edge(
            &format!("v{s}"),
            &format!("v{t}"),
            TAGS[tag],
            vec![coefficient, coefficient / 2.0],
        )
        .unwrap();
    }
    g
}

fn model_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<EdgeSpec>, Vec<(usize, f64)>)> {
    (2usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(1.0_f64..100.0, n),
            prop::collection::vec((0..n, 0..n, 0..TAGS.len(), -1.0_f64..1.0), 0..n * 3),
            prop::collection::vec((0..n, -10.0_f64..10.0), 0..n),
        )
    })
}

fn initial(deltas: &[(usize, f64)]) -> HashMap<String, f64> {
    deltas.iter().map(|&(i, d)| (format!("v{i}"), d)).collect()
}

proptest! {
    #[test]
    fn runs_are_deterministic(
        (values, edges, deltas) in model_strategy(),
        cycles in 0usize..6,
    ) {
        let order: Vec<usize> = (0..values.len()).collect();
        let engine = PropagationEngine::default();
        let mut first = build(&values, &edges, &order);
        let mut second = build(&values, &edges, &order);
        let a = engine.run(&mut first, cycles, &initial(&deltas), None).unwrap();
        let b = engine.run(&mut second, cycles, &initial(&deltas), None).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn log_has_one_entry_per_boundary(
        (values, edges, deltas) in model_strategy(),
        cycles in 0usize..6,
    ) {
        let order: Vec<usize> = (0..values.len()).collect();
        let mut g = build(&values, &edges, &order);
        let log = PropagationEngine::default().run(&mut g, cycles, &initial(&deltas), None).unwrap();
        prop_assert_eq!(log.names().count(), values.len());
        for series in log.iter() {
            prop_assert_eq!(series.values.len(), cycles + 2);
            prop_assert_eq!(series.values[0], values[series.name[1..].parse::<usize>().unwrap()]);
        }
    }

    #[test]
    fn result_does_not_depend_on_visit_order(
        (values, edges, deltas) in model_strategy(),
        cycles in 0usize..5,
    ) {
        let forward: Vec<usize> = (0..values.len()).collect();
        let backward: Vec<usize> = forward.iter().rev().copied().collect();
        let engine = PropagationEngine::default();
        let mut g1 = build(&values, &edges, &forward);
        let mut g2 = build(&values, &edges, &backward);
        let a = engine.run(&mut g1, cycles, &initial(&deltas), None).unwrap();
        let b = engine.run(&mut g2, cycles, &initial(&deltas), None).unwrap();
        for name in a.names() {
            let x = a.final_value(name).unwrap();
            let y = b.final_value(name).unwrap();
            prop_assert!((x - y).abs() <= 1e-6 * x.abs().max(y.abs()).max(1.0), "{}: {} vs {}", name, x, y);
        }
    }

    #[test]
    fn unknown_names_never_create_vertices(
        (values, edges, deltas) in model_strategy(),
        ghost in -5.0_f64..5.0,
    ) {
        let order: Vec<usize> = (0..values.len()).collect();
        let mut g = build(&values, &edges, &order);
        let mut init = initial(&deltas);
        init.insert("ghost".to_string(), ghost);
        let log = PropagationEngine::default().run(&mut g, 2, &init, None).unwrap();
        prop_assert!(!g.contains_vertex("ghost"));
        prop_assert!(log.series("ghost").is_none());
        prop_assert_eq!(g.vertex_count(), values.len());
    }
}
