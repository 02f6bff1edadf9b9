//! Converging-edge adjustment.
//!
//! An edge off the path that targets path vertex `v` (other than the start)
//! is moved to `v`'s predecessor, negated, and composed with the path edge
//! that linked the predecessor to `v`.

use std::collections::HashSet;

use dismal_core::errors::EdgeError;
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::graph::{DeltaGraph, TransformEdge};
use crate::transform::{compose_kind, TransformKind};

/// One planned redirection, checked before the graph is touched.
#[derive(Debug, Clone)]
pub(crate) struct Redirect {
    pub(crate) edge: EdgeIndex,
    pub(crate) source: NodeIndex,
    pub(crate) old_target: NodeIndex,
    pub(crate) new_target: NodeIndex,
    /// The path edge the converging edge composes with, as it was before reversal.
    pub(crate) other: TransformEdge,
    pub(crate) composed: TransformKind,
}

/// Find every converging edge and type-check its composition.
pub(crate) fn plan(
    graph: &DeltaGraph,
    path: &[EdgeIndex],
    nodes: &[NodeIndex],
) -> Result<Vec<Redirect>, EdgeError> {
    let on_path: HashSet<EdgeIndex> = path.iter().copied().collect();
    let mut redirects = Vec::new();

    for (i, &vertex) in nodes.iter().enumerate().skip(1) {
        let predecessor = nodes[i - 1];
        let other = &graph.graph[path[i - 1]];

        let mut incoming: Vec<_> = graph
            .graph
            .edges_directed(vertex, Direction::Incoming)
            .map(|e| (e.id(), e.source()))
            .filter(|(id, _)| !on_path.contains(id))
            .collect();
        incoming.sort_by_key(|(id, _)| id.index());

        for (edge, source) in incoming {
            let composed = compose_kind(graph.graph[edge].kind(), other.kind())?;
            redirects.push(Redirect {
                edge,
                source,
                old_target: vertex,
                new_target: predecessor,
                other: other.clone(),
                composed,
            });
        }
    }
    Ok(redirects)
}
