//! The delta graph: vertices, transform edges, and model loading.

pub mod edge;
pub mod model;
pub mod stable_graph;
pub mod vertex;

pub use edge::{Contribution, TransformEdge};
pub use model::{EdgeSpec, ModelSpec, VertexSpec};
pub use stable_graph::{DeltaGraph, EdgeView};
pub use vertex::{InherentDelta, InherentMode, RandomInterval, Vertex};
