//! # dismal-graph
//!
//! Delta-graph simulation: numeric vertices linked by parameterized transform
//! edges, cyclic compute/apply propagation, causality reversal, and
//! diagnostic traversals.

pub mod engine;
pub mod graph;
pub mod propagation;
pub mod reversal;
pub mod transform;
pub mod traversal;

pub use engine::SimulationEngine;
pub use graph::{DeltaGraph, InherentDelta, ModelSpec, TransformEdge, Vertex};
pub use propagation::{ExogenousFeed, PropagationEngine, RunLog};
pub use reversal::{reverse_causality, ReversalReport};
pub use transform::{DeltaFlavor, TransformFunction, TransformKind};
