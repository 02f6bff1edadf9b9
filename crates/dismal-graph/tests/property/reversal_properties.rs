use proptest::prelude::*;

use dismal_graph::{reverse_causality, DeltaGraph};

/// Chain v0 -> v1 -> ... -> v{n-1} plus extra proportional edges.
fn chain_with_extras(n: usize, extras: &[(usize, usize)]) -> DeltaGraph {
    let mut g = DeltaGraph::new();
    for i in 0..n {
        g.add_vertex(&format!("v{i}"), Some(1.0)).unwrap();
    }
    for i in 1..n {
        g.add_edge(&format!("v{}", i - 1), &format!("v{i}"), "aa_prop", vec![1.0])
            .unwrap();
    }
    for &(s, t) in extras {
        g.add_edge(&format!("v{s}"), &format!("v{t}"), "aa_prop", vec![0.5])
            .unwrap();
    }
    g
}

fn extras_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (3usize..8).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n)))
}

proptest! {
    #[test]
    fn reversal_preserves_edge_count_and_clears_marks(
        (n, extras) in extras_strategy(),
        start in 0usize..3,
    ) {
        let mut g = chain_with_extras(n, &extras);
        let edges_before = g.edge_count();
        let start = start % (n - 1);
        let result = reverse_causality(&mut g, &format!("v{start}"), &format!("v{}", n - 1));
        prop_assert!(result.is_ok());
        prop_assert_eq!(g.edge_count(), edges_before);
        prop_assert!(g.vertices().all(|v| v.marks().is_clear()));
    }

    #[test]
    fn reversed_path_reports_start_to_end(
        (n, extras) in extras_strategy(),
    ) {
        let mut g = chain_with_extras(n, &extras);
        let end = format!("v{}", n - 1);
        let report = reverse_causality(&mut g, "v0", &end).unwrap();
        prop_assert_eq!(report.path.first().map(String::as_str), Some("v0"));
        prop_assert_eq!(report.path.last(), Some(&end));
        for pair in report.path.windows(2) {
            let reversed = g
                .outgoing(&pair[1])
                .unwrap()
                .iter()
                .any(|e| e.target == pair[0] && e.edge.is_inverted());
            prop_assert!(reversed, "no inverted edge {} -> {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn plain_chain_round_trip_restores_every_edge(n in 2usize..10) {
        let mut g = chain_with_extras(n, &[]);
        let end = format!("v{}", n - 1);
        reverse_causality(&mut g, "v0", &end).unwrap();
        reverse_causality(&mut g, &end, "v0").unwrap();
        for i in 1..n {
            let edge = g.get_edge(&format!("v{}", i - 1), &format!("v{i}")).unwrap();
            prop_assert!(!edge.is_inverted());
            prop_assert!(!edge.is_negated());
        }
    }
}
