//! SimulationEngine: owns a graph, coordinates propagation, reversal, and traversal.

use std::collections::HashMap;

use dismal_core::config::SimConfig;
use dismal_core::errors::SimResult;

use crate::graph::{DeltaGraph, ModelSpec};
use crate::propagation::{ExogenousFeed, PropagationEngine, RunLog};
use crate::reversal::{self, ReversalReport};
use crate::traversal::{self, TraversalReport};

/// The main simulation engine.
pub struct SimulationEngine {
    graph: DeltaGraph,
    propagation: PropagationEngine,
}

impl SimulationEngine {
    /// Empty graph, default configuration.
    pub fn new() -> Self {
        Self::with_graph(DeltaGraph::new(), &SimConfig::default())
    }

    pub fn with_graph(graph: DeltaGraph, config: &SimConfig) -> Self {
        Self {
            graph,
            propagation: PropagationEngine::new(config.propagation.clone()),
        }
    }

    /// Build the graph described by `model`.
    pub fn from_model(model: &ModelSpec, config: &SimConfig) -> SimResult<Self> {
        Ok(Self::with_graph(model.build()?, config))
    }

    pub fn graph(&self) -> &DeltaGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut DeltaGraph {
        &mut self.graph
    }

    pub fn propagation(&self) -> &PropagationEngine {
        &self.propagation
    }

    pub fn into_graph(self) -> DeltaGraph {
        self.graph
    }

    // --- Propagation ---

    pub fn run(&mut self, cycles: usize, initial: &HashMap<String, f64>) -> SimResult<RunLog> {
        self.propagation.run(&mut self.graph, cycles, initial, None)
    }

    pub fn run_with_feed(
        &mut self,
        cycles: usize,
        initial: &HashMap<String, f64>,
        feed: &ExogenousFeed,
    ) -> SimResult<RunLog> {
        self.propagation
            .run(&mut self.graph, cycles, initial, Some(feed))
    }

    // --- Reversal ---

    pub fn reverse_causality(&mut self, start: &str, end: &str) -> SimResult<ReversalReport> {
        reversal::reverse_causality(&mut self.graph, start, end)
    }

    pub fn resolve_composition(&mut self, source: &str, target: &str, parameters: Vec<f64>) -> SimResult<()> {
        self.graph.resolve_composition(source, target, parameters)
    }

    // --- Traversal ---

    pub fn breadth_first(&mut self, start: &str) -> SimResult<TraversalReport> {
        Ok(traversal::breadth_first(&mut self.graph, start)?)
    }

    pub fn depth_first(&mut self, start: &str) -> SimResult<TraversalReport> {
        Ok(traversal::depth_first(&mut self.graph, start)?)
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
