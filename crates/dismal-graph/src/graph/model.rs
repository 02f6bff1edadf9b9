//! Model files: a serde description of vertices and edges, loadable from TOML or JSON.
//!
//! Values and parameters are kept untyped until `build`, so malformed input is
//! reported with the simulator's own error variants rather than as a parse failure.

use std::path::Path;

use dismal_core::errors::{ConfigError, InitError, SimError, SimResult};
use serde::{Deserialize, Serialize};

use super::stable_graph::DeltaGraph;
use super::vertex::InherentDelta;
use crate::transform::functions::parse_parameters;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSpec {
    pub vertices: Vec<VertexSpec>,
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexSpec {
    pub name: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub inherent: Option<InherentDelta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    /// Kind tag, e.g. `"aa_lin"`.
    pub kind: String,
    #[serde(default = "empty_parameters")]
    pub parameters: serde_json::Value,
}

fn empty_parameters() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

impl ModelSpec {
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a `.json` file as JSON, anything else as TOML.
    pub fn load(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            return Self::from_json(&content);
        }
        toml::from_str(&content).map_err(|e| {
            SimError::from(ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Build a graph. Vertices are registered before any edge.
    pub fn build(&self) -> SimResult<DeltaGraph> {
        let mut graph = DeltaGraph::new();
        for spec in &self.vertices {
            let value = spec
                .value
                .as_ref()
                .map(|v| numeric_value(&spec.name, v))
                .transpose()?;
            graph.add_vertex(&spec.name, value)?;
            if spec.inherent.is_some() {
                graph.set_inherent_delta(&spec.name, spec.inherent)?;
            }
        }
        for spec in &self.edges {
            let parameters = parse_parameters(&spec.parameters)?;
            graph.add_edge(&spec.source, &spec.target, &spec.kind, parameters)?;
        }
        Ok(graph)
    }
}

fn numeric_value(vertex: &str, value: &serde_json::Value) -> Result<f64, InitError> {
    value.as_f64().ok_or_else(|| InitError::NonNumericValue {
        vertex: vertex.to_string(),
        found: value.to_string(),
    })
}
