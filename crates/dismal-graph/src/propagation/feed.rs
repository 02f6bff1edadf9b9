//! Exogenous feed: per-cycle delta overrides keyed by vertex name.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Mapping from cycle index to {vertex name → delta}.
///
/// Names missing from the graph are skipped during a run, so a feed may be sparse.
/// Serialized as JSON with the cycle index as a string key, e.g.
/// `{"3": {"GDP": 1.5}}`. TOML tables cannot carry integer keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExogenousFeed {
    cycles: BTreeMap<usize, HashMap<String, f64>>,
}

impl ExogenousFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one vertex's delta for `cycle`.
    pub fn insert(&mut self, cycle: usize, vertex: impl Into<String>, amount: f64) {
        self.cycles
            .entry(cycle)
            .or_default()
            .insert(vertex.into(), amount);
    }

    /// Builder form of [`ExogenousFeed::insert`].
    pub fn with(mut self, cycle: usize, vertex: impl Into<String>, amount: f64) -> Self {
        self.insert(cycle, vertex, amount);
        self
    }

    pub fn for_cycle(&self, cycle: usize) -> Option<&HashMap<String, f64>> {
        self.cycles.get(&cycle)
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.values().all(HashMap::is_empty)
    }
}

impl FromIterator<(usize, HashMap<String, f64>)> for ExogenousFeed {
    fn from_iter<T: IntoIterator<Item = (usize, HashMap<String, f64>)>>(iter: T) -> Self {
        Self {
            cycles: iter.into_iter().collect(),
        }
    }
}
