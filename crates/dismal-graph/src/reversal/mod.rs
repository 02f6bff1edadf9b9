//! Causality reversal: invert the direction of influence between two vertices.
//!
//! The whole operation is planned first (path search, every composition type
//! check) and only then applied, so any error leaves the graph's edges as they
//! were. Traversal marks are cleared on every exit.

mod converging;
mod path_search;

use dismal_core::errors::{ReversalError, SimResult};
use dismal_core::reversal_span;
use dismal_core::tracing_setup::events;
use petgraph::stable_graph::NodeIndex;

use crate::graph::DeltaGraph;
use crate::transform::TransformKind;

/// A converging edge moved one hop up the reversed path.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectedEdge {
    pub source: String,
    pub old_target: String,
    pub new_target: String,
    /// Kind after composition. Its parameters are pending.
    pub composed: TransformKind,
}

/// What a reversal changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReversalReport {
    /// Vertex names of the original path, `start` first.
    pub path: Vec<String>,
    pub redirected: Vec<RedirectedEdge>,
}

impl ReversalReport {
    pub fn reversed_edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Reverse every edge on a path from `start` to `end` and re-route converging edges.
pub fn reverse_causality(graph: &mut DeltaGraph, start: &str, end: &str) -> SimResult<ReversalReport> {
    let _span = reversal_span!(start, end).entered();
    graph.reset_traversal();
    let result = reverse(graph, start, end);
    graph.reset_traversal();
    result
}

fn reverse(graph: &mut DeltaGraph, start: &str, end: &str) -> SimResult<ReversalReport> {
    let from = graph.require_node(start)?;
    let to = graph.require_node(end)?;
    if from == to {
        return Err(ReversalError::DegeneratePath {
            vertex: start.to_string(),
        }
        .into());
    }

    let path = path_search::find_path(graph, from, to).ok_or_else(|| ReversalError::NoPath {
        start: start.to_string(),
        end: end.to_string(),
    })?;
    let nodes = path_search::node_path(graph, from, &path);
    let redirects = converging::plan(graph, &path, &nodes)?;

    let names: Vec<String> = nodes.iter().map(|&n| name_of(graph, n)).collect();

    for &edge in &path {
        let Some((source, target)) = graph.graph.edge_endpoints(edge) else {
            continue;
        };
        if let Some(mut weight) = graph.graph.remove_edge(edge) {
            weight.toggle_inverted();
            graph.graph.add_edge(target, source, weight);
        }
    }
    events::edges_reversed(&names);

    let mut redirected = Vec::with_capacity(redirects.len());
    for plan in redirects {
        let Some(mut weight) = graph.graph.remove_edge(plan.edge) else {
            continue;
        };
        weight.toggle_negated();
        let before = weight.kind();
        weight.compose_with(&plan.other)?;
        graph.graph.add_edge(plan.source, plan.new_target, weight);

        let entry = RedirectedEdge {
            source: name_of(graph, plan.source),
            old_target: name_of(graph, plan.old_target),
            new_target: name_of(graph, plan.new_target),
            composed: plan.composed,
        };
        events::edge_redirected(&entry.source, &entry.old_target, &entry.new_target);
        events::composition_deferred(
            &before.to_string(),
            &plan.other.kind().to_string(),
            &plan.composed.to_string(),
        );
        redirected.push(entry);
    }

    Ok(ReversalReport {
        path: names,
        redirected,
    })
}

fn name_of(graph: &DeltaGraph, node: NodeIndex) -> String {
    graph.graph[node].name().to_string()
}
