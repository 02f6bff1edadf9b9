//! PropagationEngine: injection, then N compute/apply cycles over the whole graph.

use std::collections::HashMap;

use dismal_core::config::{FeedMode, InherentOrder, InjectionMode, PropagationConfig};
use dismal_core::errors::SimResult;
use dismal_core::tracing_setup::events;
use dismal_core::{cycle_span, propagation_span};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::compute::{compute_contributions, merge};
use super::feed::ExogenousFeed;
use super::run_log::RunLog;
use crate::graph::DeltaGraph;

/// How a mapping of deltas combines with a vertex's pending delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    Overwrite,
    Accumulate,
}

impl From<InjectionMode> for Combine {
    fn from(mode: InjectionMode) -> Self {
        match mode {
            InjectionMode::Overwrite => Self::Overwrite,
            InjectionMode::Accumulate => Self::Accumulate,
        }
    }
}

impl From<FeedMode> for Combine {
    fn from(mode: FeedMode) -> Self {
        match mode {
            FeedMode::Overwrite => Self::Overwrite,
            FeedMode::Accumulate => Self::Accumulate,
        }
    }
}

/// Runs Jacobi-style delta propagation.
#[derive(Debug, Clone, Default)]
pub struct PropagationEngine {
    pub config: PropagationConfig,
}

impl PropagationEngine {
    pub fn new(config: PropagationConfig) -> Self {
        Self { config }
    }

    /// Run cycle 0 plus `cycles` propagation cycles.
    ///
    /// Cycle 0 injects `initial` (and the feed's cycle-0 entry) and applies.
    /// Each later cycle computes every edge contribution from the previous
    /// cycle's deltas, merges them with inherent and exogenous deltas, then
    /// applies all pending deltas at once. The returned log has `cycles + 2`
    /// entries per vertex.
    pub fn run(
        &self,
        graph: &mut DeltaGraph,
        cycles: usize,
        initial: &HashMap<String, f64>,
        feed: Option<&ExogenousFeed>,
    ) -> SimResult<RunLog> {
        let span = propagation_span!(cycles, graph.vertex_count());
        let _guard = span.enter();

        graph.ensure_values_defined()?;
        events::run_started(graph.vertex_count(), cycles);

        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut log = RunLog::start(graph)?;

        {
            let _cycle = cycle_span!(0usize).entered();
            inject(graph, initial, self.config.injection_mode.into(), "initial");
            if let Some(overrides) = feed.and_then(|f| f.for_cycle(0)) {
                inject(graph, overrides, self.config.feed_mode.into(), "feed");
            }
            graph.apply_all_pending_deltas()?;
            log.record(graph)?;
            events::cycle_completed(0, initial.len());
        }

        for cycle in 1..=cycles {
            let _cycle = cycle_span!(cycle).entered();
            let scratch = compute_contributions(graph, cycle)?;
            let contributions = scratch.contributions.len();

            match self.config.inherent_order {
                InherentOrder::Disabled => merge(graph, scratch),
                InherentOrder::BeforeEdges => {
                    apply_inherent(graph, &mut rng)?;
                    merge(graph, scratch);
                }
                InherentOrder::AfterEdges => {
                    merge(graph, scratch);
                    apply_inherent(graph, &mut rng)?;
                }
            }

            if let Some(overrides) = feed.and_then(|f| f.for_cycle(cycle)) {
                inject(graph, overrides, self.config.feed_mode.into(), "feed");
            }

            graph.apply_all_pending_deltas()?;
            log.record(graph)?;
            events::cycle_completed(cycle, contributions);
        }

        Ok(log)
    }
}

/// Combine a name → delta mapping into pending deltas. Unknown names are skipped.
fn inject(graph: &mut DeltaGraph, deltas: &HashMap<String, f64>, combine: Combine, origin: &str) {
    for (name, &amount) in deltas {
        let Ok(vertex) = graph.get_vertex_mut(name) else {
            events::unknown_vertex_skipped(name, origin);
            continue;
        };
        match combine {
            Combine::Overwrite => vertex.set_pending_delta(amount),
            Combine::Accumulate => vertex.add_incoming_contribution(amount),
        }
    }
}

fn apply_inherent(graph: &mut DeltaGraph, rng: &mut StdRng) -> SimResult<()> {
    for vertex in graph.graph.node_weights_mut() {
        vertex.apply_inherent_delta(rng)?;
    }
    Ok(())
}
