use serde::{Deserialize, Serialize};

use super::defaults;

/// How cycle-0 initial deltas combine with a vertex's pending delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectionMode {
    /// Pending delta is set to the injected amount.
    Overwrite,
    /// Injected amount is added to whatever is already pending.
    Accumulate,
}

/// How per-cycle exogenous feed values combine with computed deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedMode {
    /// Feed values are added on top of the edge-driven delta.
    Accumulate,
    /// Feed values replace the computed delta, holding the vertex to the feed.
    Overwrite,
}

/// When inherent deltas run relative to the edge pass of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InherentOrder {
    /// Inherent deltas are never applied.
    Disabled,
    /// Inherent deltas are applied, then edge contributions are merged.
    BeforeEdges,
    /// Edge contributions are merged, then inherent deltas are applied.
    AfterEdges,
}

impl InherentOrder {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Propagation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Combination rule for cycle-0 initial deltas.
    pub injection_mode: InjectionMode,
    /// Combination rule for exogenous feed values.
    pub feed_mode: FeedMode,
    /// Placement of inherent deltas within a cycle.
    pub inherent_order: InherentOrder,
    /// Seed for random inherent deltas. `None` draws from OS entropy.
    pub random_seed: Option<u64>,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            injection_mode: defaults::DEFAULT_INJECTION_MODE,
            feed_mode: defaults::DEFAULT_FEED_MODE,
            inherent_order: defaults::DEFAULT_INHERENT_ORDER,
            random_seed: defaults::DEFAULT_RANDOM_SEED,
        }
    }
}
