//! Compute phase: evaluate every edge against last cycle's deltas.

use dismal_core::errors::SimResult;
use petgraph::stable_graph::NodeIndex;

use crate::graph::DeltaGraph;

/// Contributions for one cycle, not yet merged into any pending delta.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    pub(crate) contributions: Vec<(NodeIndex, f64)>,
}

/// Evaluate every outgoing edge of every vertex.
///
/// Reads only previous deltas and current values. Nothing in the graph is
/// written, so an error leaves the cycle unstarted.
pub(crate) fn compute_contributions(graph: &DeltaGraph, cycle: usize) -> SimResult<Scratch> {
    let mut scratch = Scratch::default();
    for source in graph.graph.node_indices() {
        let vertex = &graph.graph[source];
        for edge in graph.outgoing_indices(source) {
            let Some((_, target)) = graph.graph.edge_endpoints(edge) else {
                continue;
            };
            let contribution = graph.graph[edge].contribution(vertex, cycle)?;
            let target_value = graph.graph[target].value()?;
            scratch
                .contributions
                .push((target, contribution.against(target_value)));
        }
    }
    Ok(scratch)
}

/// Merge a scratch buffer into the targets' pending deltas.
pub(crate) fn merge(graph: &mut DeltaGraph, scratch: Scratch) {
    for (target, amount) in scratch.contributions {
        graph.graph[target].add_incoming_contribution(amount);
    }
}
