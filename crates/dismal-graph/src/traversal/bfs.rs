//! Breadth-first traversal with white/grey/black colouring and hop distances.

use std::collections::VecDeque;

use dismal_core::errors::RetrievalError;
use dismal_core::traversal_span;

use super::{Color, TraversalReport};
use crate::graph::DeltaGraph;

/// Breadth-first search from `start` along outgoing edges.
///
/// Clears previous marks first. Leaves colour, distance, and searched edge on
/// every reached vertex until the next `reset_traversal`.
pub fn breadth_first(graph: &mut DeltaGraph, start: &str) -> Result<TraversalReport, RetrievalError> {
    let _span = traversal_span!("bfs", start).entered();
    let origin = graph.require_node(start)?;
    graph.reset_traversal();

    let mut report = TraversalReport::new(start);
    let mut queue = VecDeque::new();
    {
        let marks = &mut graph.graph[origin].marks;
        marks.color = Color::Grey;
        marks.distance = Some(0);
    }
    queue.push_back(origin);

    while let Some(node) = queue.pop_front() {
        let distance = graph.graph[node].marks.distance.unwrap_or(0);
        for edge in graph.outgoing_indices(node) {
            let Some((_, next)) = graph.graph.edge_endpoints(edge) else {
                continue;
            };
            let marks = &mut graph.graph[next].marks;
            if marks.color == Color::White {
                marks.color = Color::Grey;
                marks.distance = Some(distance + 1);
                marks.searched_edge = Some(edge);
                queue.push_back(next);
            }
        }
        graph.graph[node].marks.color = Color::Black;
        report.visit(graph.graph[node].name(), distance);
    }

    Ok(report)
}
