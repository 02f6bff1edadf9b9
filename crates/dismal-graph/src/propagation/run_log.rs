//! Per-vertex value log of a propagation run.

use std::collections::BTreeMap;

use dismal_core::errors::SimResult;
use serde::{Deserialize, Serialize};

use crate::graph::DeltaGraph;

/// Values of one vertex: the initial value, then one entry per cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSeries {
    /// Row label for tabular exporters.
    pub name: String,
    pub values: Vec<f64>,
}

/// Values of every vertex at each cycle boundary.
///
/// Index 0 holds the value before the run; index `k + 1` the value after cycle `k`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunLog {
    series: BTreeMap<String, VertexSeries>,
}

impl RunLog {
    /// Start a log holding each vertex's current value.
    pub(crate) fn start(graph: &DeltaGraph) -> SimResult<Self> {
        let mut log = Self::default();
        log.record(graph)?;
        Ok(log)
    }

    pub(crate) fn record(&mut self, graph: &DeltaGraph) -> SimResult<()> {
        for vertex in graph.vertices() {
            let value = vertex.value()?;
            self.series
                .entry(vertex.name().to_string())
                .or_insert_with(|| VertexSeries {
                    name: vertex.name().to_string(),
                    values: Vec::new(),
                })
                .values
                .push(value);
        }
        Ok(())
    }

    pub fn series(&self, name: &str) -> Option<&VertexSeries> {
        self.series.get(name)
    }

    /// Value of `name` at boundary `index` (0 = before the run).
    pub fn value_at(&self, name: &str, index: usize) -> Option<f64> {
        self.series.get(name)?.values.get(index).copied()
    }

    /// Value of `name` after the last cycle.
    pub fn final_value(&self, name: &str) -> Option<f64> {
        self.series.get(name)?.values.last().copied()
    }

    /// Vertex names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexSeries> {
        self.series.values()
    }

    /// Number of boundaries recorded per vertex.
    pub fn len(&self) -> usize {
        self.series
            .values()
            .next()
            .map_or(0, |s| s.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
