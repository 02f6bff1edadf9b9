//! petgraph::StableGraph wrapper keyed by vertex name.

use std::collections::HashMap;
use std::fmt;

use dismal_core::errors::{DataError, EdgeError, InitError, RetrievalError, SimResult};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use super::edge::TransformEdge;
use super::vertex::{InherentDelta, Vertex};
use crate::transform::TransformKind;

/// The underlying directed graph type.
pub type DeltaStableGraph = StableGraph<Vertex, TransformEdge, Directed>;

/// A read-only view of one edge with its endpoint names.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub edge: &'a TransformEdge,
}

/// Vertices keyed by name, edges owned by the graph and walked from their source.
#[derive(Debug, Clone)]
pub struct DeltaGraph {
    pub(crate) graph: DeltaStableGraph,
    /// Map from vertex name → NodeIndex for O(1) lookup.
    pub(crate) node_index: HashMap<String, NodeIndex>,
}

impl DeltaGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
        }
    }

    // --- Vertices ---

    /// Register a vertex. `None` leaves the value undefined until `set_value`.
    pub fn add_vertex(&mut self, name: &str, value: Option<f64>) -> Result<NodeIndex, InitError> {
        if self.node_index.contains_key(name) {
            return Err(InitError::DuplicateVertex {
                name: name.to_string(),
            });
        }
        let vertex = Vertex::new(name, value)?;
        let idx = self.graph.add_node(vertex);
        self.node_index.insert(name.to_string(), idx);
        Ok(idx)
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    pub(crate) fn require_node(&self, name: &str) -> Result<NodeIndex, RetrievalError> {
        self.node(name).ok_or_else(|| RetrievalError::VertexNotFound {
            name: name.to_string(),
        })
    }

    pub fn get_vertex(&self, name: &str) -> Result<&Vertex, RetrievalError> {
        let idx = self.require_node(name)?;
        Ok(&self.graph[idx])
    }

    pub fn get_vertex_mut(&mut self, name: &str) -> Result<&mut Vertex, RetrievalError> {
        let idx = self.require_node(name)?;
        Ok(&mut self.graph[idx])
    }

    /// Current value of a vertex.
    pub fn value(&self, name: &str) -> Result<f64, RetrievalError> {
        self.get_vertex(name)?.value()
    }

    pub fn set_value(&mut self, name: &str, value: f64) -> SimResult<()> {
        self.get_vertex_mut(name)?.set_value(value)?;
        Ok(())
    }

    pub fn set_inherent_delta(&mut self, name: &str, inherent: Option<InherentDelta>) -> SimResult<()> {
        self.get_vertex_mut(name)?.set_inherent_delta(inherent)?;
        Ok(())
    }

    /// Vertex names in registration order.
    pub fn vertex_names(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].name())
            .collect()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    // --- Edges ---

    /// Add an edge from a kind tag such as `"aa_lin"`.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        tag: &str,
        parameters: Vec<f64>,
    ) -> SimResult<EdgeIndex> {
        let kind = TransformKind::from_tag(tag)?;
        self.add_edge_with_kind(source, target, kind, parameters)
    }

    pub fn add_edge_with_kind(
        &mut self,
        source: &str,
        target: &str,
        kind: TransformKind,
        parameters: Vec<f64>,
    ) -> SimResult<EdgeIndex> {
        let src = self.endpoint(source)?;
        let dst = self.endpoint(target)?;
        let edge = TransformEdge::new(kind, parameters)?;
        Ok(self.graph.add_edge(src, dst, edge))
    }

    /// Remove the first edge from `source` to `target`.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> Result<TransformEdge, EdgeError> {
        let idx = self.find_edge(source, target)?;
        self.graph
            .remove_edge(idx)
            .ok_or_else(|| edge_not_found(source, target))
    }

    /// The first edge from `source` to `target`.
    pub fn get_edge(&self, source: &str, target: &str) -> Result<&TransformEdge, EdgeError> {
        let idx = self.find_edge(source, target)?;
        Ok(&self.graph[idx])
    }

    pub(crate) fn find_edge(&self, source: &str, target: &str) -> Result<EdgeIndex, EdgeError> {
        self.edges_between(source, target)?
            .first()
            .copied()
            .ok_or_else(|| edge_not_found(source, target))
    }

    /// All edges from `source` to `target`, in insertion order.
    fn edges_between(&self, source: &str, target: &str) -> Result<Vec<EdgeIndex>, EdgeError> {
        let src = self.endpoint(source)?;
        let dst = self.endpoint(target)?;
        Ok(self
            .outgoing_indices(src)
            .into_iter()
            .filter(|&e| self.graph.edge_endpoints(e).map(|(_, t)| t) == Some(dst))
            .collect())
    }

    /// Outgoing edges of `name` in insertion order.
    pub fn outgoing(&self, name: &str) -> Result<Vec<EdgeView<'_>>, RetrievalError> {
        let idx = self.require_node(name)?;
        Ok(self
            .outgoing_indices(idx)
            .into_iter()
            .filter_map(|e| self.view(e))
            .collect())
    }

    /// Every edge, grouped by source in registration order.
    pub fn edges(&self) -> Vec<EdgeView<'_>> {
        self.graph
            .node_indices()
            .flat_map(|n| self.outgoing_indices(n))
            .filter_map(|e| self.view(e))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// petgraph walks adjacency newest-first; reverse for insertion order.
    pub(crate) fn outgoing_indices(&self, node: NodeIndex) -> Vec<EdgeIndex> {
        let mut edges: Vec<EdgeIndex> = self
            .graph
            .edges_directed(node, Direction::Outgoing)
            .map(|e| e.id())
            .collect();
        edges.reverse();
        edges
    }

    fn view(&self, edge: EdgeIndex) -> Option<EdgeView<'_>> {
        let (s, t) = self.graph.edge_endpoints(edge)?;
        Some(EdgeView {
            source: self.graph[s].name(),
            target: self.graph[t].name(),
            edge: &self.graph[edge],
        })
    }

    fn endpoint(&self, name: &str) -> Result<NodeIndex, EdgeError> {
        self.node(name).ok_or_else(|| EdgeError::UnknownVertex {
            name: name.to_string(),
        })
    }

    /// Supply parameters for an edge whose composition was deferred by reversal.
    pub fn resolve_composition(
        &mut self,
        source: &str,
        target: &str,
        parameters: Vec<f64>,
    ) -> SimResult<()> {
        let candidates = self.edges_between(source, target)?;
        let idx = candidates
            .iter()
            .copied()
            .find(|&e| self.graph[e].pending_composition().is_some())
            .or_else(|| candidates.first().copied())
            .ok_or_else(|| edge_not_found(source, target))?;
        self.graph[idx].resolve(parameters)?;
        Ok(())
    }

    /// Edges still waiting for composed parameters, as (source, target) names.
    pub fn pending_compositions(&self) -> Vec<(String, String)> {
        self.edges()
            .into_iter()
            .filter(|v| v.edge.pending_composition().is_some())
            .map(|v| (v.source.to_string(), v.target.to_string()))
            .collect()
    }

    // --- Cycle phases ---

    /// Fail on the first vertex without a value.
    pub fn ensure_values_defined(&self) -> Result<(), RetrievalError> {
        for vertex in self.vertices() {
            vertex.value()?;
        }
        Ok(())
    }

    /// Apply every pending delta. Checked up front so a failure leaves every vertex untouched.
    pub fn apply_all_pending_deltas(&mut self) -> Result<(), DataError> {
        for vertex in self.vertices() {
            vertex.next_value()?;
        }
        for vertex in self.graph.node_weights_mut() {
            vertex.apply_pending_delta()?;
        }
        Ok(())
    }

    /// Clear search colouring, distances, times, and searched-edge pointers.
    pub fn reset_traversal(&mut self) {
        for vertex in self.graph.node_weights_mut() {
            vertex.reset_traversal_data();
        }
    }
}

fn edge_not_found(source: &str, target: &str) -> EdgeError {
    EdgeError::EdgeNotFound {
        source_name: source.to_string(),
        target_name: target.to_string(),
    }
}

impl Default for DeltaGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeltaGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "DeltaGraph ({} vertices, {} edges)",
            self.vertex_count(),
            self.edge_count()
        )?;
        for idx in self.graph.node_indices() {
            writeln!(f, "  {}", self.graph[idx])?;
            for e in self.outgoing_indices(idx) {
                if let Some(view) = self.view(e) {
                    writeln!(f, "    -> {}: {}", view.target, view.edge)?;
                }
            }
        }
        Ok(())
    }
}
