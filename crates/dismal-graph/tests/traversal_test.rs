use dismal_graph::traversal::{breadth_first, depth_first, Color};
use dismal_graph::DeltaGraph;

/// A -> B -> D, A -> C -> D, D -> E, F isolated.
fn diamond() -> DeltaGraph {
    let mut g = DeltaGraph::new();
    for name in ["A", "B", "C", "D", "E", "F"] {
        g.add_vertex(name, Some(1.0)).unwrap();
    }
    for (s, t) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")] {
        g.add_edge(s, t, "aa_prop", vec![1.0]).unwrap();
    }
    g
}

// --- BFS ---

#[test]
fn bfs_records_hop_distances() {
    let mut g = diamond();
    let report = breadth_first(&mut g, "A").unwrap();

    assert_eq!(report.origin, "A");
    assert_eq!(report.order(), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(report.max_depth_reached(), 3);
    assert!(!report.contains("F"));

    assert_eq!(g.get_vertex("A").unwrap().marks().distance, Some(0));
    assert_eq!(g.get_vertex("D").unwrap().marks().distance, Some(2));
    assert_eq!(g.get_vertex("E").unwrap().marks().distance, Some(3));
    assert_eq!(g.get_vertex("D").unwrap().marks().color, Color::Black);
    assert_eq!(g.get_vertex("F").unwrap().marks().color, Color::White);
    assert_eq!(g.get_vertex("F").unwrap().marks().distance, None);
}

#[test]
fn bfs_from_unknown_vertex_fails() {
    let mut g = diamond();
    assert!(breadth_first(&mut g, "Q").is_err());
}

// --- DFS ---

#[test]
fn dfs_records_nested_discovery_and_finish_times() {
    let mut g = diamond();
    let report = depth_first(&mut g, "A").unwrap();
    assert_eq!(report.order(), vec!["A", "B", "D", "E", "C"]);

    let times = |name: &str| {
        let m = g.get_vertex(name).unwrap().marks().clone();
        (m.discovered.unwrap(), m.finished.unwrap())
    };
    assert_eq!(times("A"), (1, 10));
    assert_eq!(times("B"), (2, 7));
    assert_eq!(times("D"), (3, 6));
    assert_eq!(times("E"), (4, 5));
    assert_eq!(times("C"), (8, 9));
    assert!(g.get_vertex("F").unwrap().marks().discovered.is_none());
}

#[test]
fn dfs_handles_cycles() {
    let mut g = diamond();
    g.add_edge("E", "A", "aa_prop", vec![1.0]).unwrap();
    let report = depth_first(&mut g, "A").unwrap();
    assert_eq!(report.nodes.len(), 5);
}

#[test]
fn dfs_walks_a_long_chain_without_deep_recursion() {
    let n = 100_000;
    let mut g = DeltaGraph::new();
    for i in 0..n {
        g.add_vertex(&format!("v{i}"), Some(0.0)).unwrap();
    }
    for i in 1..n {
        g.add_edge(&format!("v{}", i - 1), &format!("v{i}"), "aa_prop", vec![1.0])
            .unwrap();
    }
    let report = depth_first(&mut g, "v0").unwrap();
    assert_eq!(report.nodes.len(), n);
    assert_eq!(report.max_depth_reached(), n - 1);

    let last = g.get_vertex(&format!("v{}", n - 1)).unwrap().marks().clone();
    assert_eq!(last.discovered, Some(n));
    assert_eq!(last.finished, Some(n + 1));
    assert_eq!(g.get_vertex("v0").unwrap().marks().finished, Some(2 * n));
}

// --- Side effects ---

#[test]
fn traversals_do_not_touch_values_or_deltas() {
    let mut g = diamond();
    g.get_vertex_mut("B").unwrap().set_pending_delta(4.0);
    breadth_first(&mut g, "A").unwrap();
    depth_first(&mut g, "A").unwrap();
    for v in g.vertices() {
        assert_eq!(v.value().unwrap(), 1.0);
    }
    assert_eq!(g.get_vertex("B").unwrap().pending_delta(), 4.0);

    g.reset_traversal();
    assert!(g.vertices().all(|v| v.marks().is_clear()));
}
