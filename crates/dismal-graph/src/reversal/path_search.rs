//! Path search for causality reversal.
//!
//! Explicit-stack depth-first search from `start`. Each vertex records the
//! edge it was first reached by; the first time `end` is popped the path is
//! rebuilt by walking those pointers back to `start`.

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::graph::DeltaGraph;
use crate::traversal::Color;

/// Edges of the first path found from `start` to `end`, in path order.
///
/// Outgoing edges are explored in insertion order. Writes traversal marks;
/// the caller resets them.
pub(crate) fn find_path(graph: &mut DeltaGraph, start: NodeIndex, end: NodeIndex) -> Option<Vec<EdgeIndex>> {
    let mut stack: Vec<(NodeIndex, Option<EdgeIndex>)> = vec![(start, None)];

    while let Some((node, via)) = stack.pop() {
        if graph.graph[node].marks.color != Color::White {
            continue;
        }
        {
            let marks = &mut graph.graph[node].marks;
            marks.color = Color::Grey;
            marks.searched_edge = via;
        }
        if node == end {
            return walk_back(graph, start, end);
        }
        for edge in graph.outgoing_indices(node).into_iter().rev() {
            if let Some((_, next)) = graph.graph.edge_endpoints(edge) {
                if graph.graph[next].marks.color == Color::White {
                    stack.push((next, Some(edge)));
                }
            }
        }
        graph.graph[node].marks.color = Color::Black;
    }
    None
}

fn walk_back(graph: &DeltaGraph, start: NodeIndex, end: NodeIndex) -> Option<Vec<EdgeIndex>> {
    let mut path = Vec::new();
    let mut node = end;
    while node != start {
        let edge = graph.graph[node].marks.searched_edge?;
        let (source, _) = graph.graph.edge_endpoints(edge)?;
        path.push(edge);
        node = source;
    }
    path.reverse();
    Some(path)
}

/// Vertices along `path`, starting with `start`.
pub(crate) fn node_path(graph: &DeltaGraph, start: NodeIndex, path: &[EdgeIndex]) -> Vec<NodeIndex> {
    let mut nodes = Vec::with_capacity(path.len() + 1);
    nodes.push(start);
    nodes.extend(
        path.iter()
            .filter_map(|&e| graph.graph.edge_endpoints(e).map(|(_, t)| t)),
    );
    nodes
}
