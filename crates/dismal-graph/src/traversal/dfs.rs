//! Depth-first traversal recording discovery and finish times.

use dismal_core::errors::RetrievalError;
use dismal_core::traversal_span;
use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use super::{Color, TraversalReport};
use crate::graph::DeltaGraph;

/// A vertex on the search stack and the outgoing edges still to try.
struct Frame {
    node: NodeIndex,
    depth: usize,
    edges: Vec<EdgeIndex>,
    next: usize,
}

/// Depth-first search from `start` along outgoing edges.
///
/// A single counter is shared by the whole search; each vertex gets a
/// discovery time on entry and a finish time once all its edges are tried.
/// The stack is kept on the heap, so long chains do not exhaust the call stack.
pub fn depth_first(graph: &mut DeltaGraph, start: &str) -> Result<TraversalReport, RetrievalError> {
    let _span = traversal_span!("dfs", start).entered();
    let origin = graph.require_node(start)?;
    graph.reset_traversal();

    let mut report = TraversalReport::new(start);
    let mut time = 0;
    let mut stack = vec![discover(graph, origin, 0, &mut time, &mut report)];

    while let Some(frame) = stack.last_mut() {
        let Some(&edge) = frame.edges.get(frame.next) else {
            let node = frame.node;
            stack.pop();
            time += 1;
            let marks = &mut graph.graph[node].marks;
            marks.color = Color::Black;
            marks.finished = Some(time);
            continue;
        };
        frame.next += 1;
        let depth = frame.depth + 1;
        let Some((_, next)) = graph.graph.edge_endpoints(edge) else {
            continue;
        };
        if graph.graph[next].marks.color == Color::White {
            graph.graph[next].marks.searched_edge = Some(edge);
            stack.push(discover(graph, next, depth, &mut time, &mut report));
        }
    }
    Ok(report)
}

fn discover(
    graph: &mut DeltaGraph,
    node: NodeIndex,
    depth: usize,
    time: &mut usize,
    report: &mut TraversalReport,
) -> Frame {
    *time += 1;
    let marks = &mut graph.graph[node].marks;
    marks.color = Color::Grey;
    marks.discovered = Some(*time);
    report.visit(graph.graph[node].name(), depth);
    Frame {
        node,
        depth,
        edges: graph.outgoing_indices(node),
        next: 0,
    }
}
