//! Structured log events for key simulator operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a propagation run.
pub fn run_started(vertex_count: usize, cycles: usize) {
    tracing::info!(
        event = "run_started",
        version = crate::constants::VERSION,
        vertices = vertex_count,
        cycles = cycles,
        "propagation run started"
    );
}

/// Log the end of one cycle.
pub fn cycle_completed(cycle: usize, contributions: usize) {
    tracing::debug!(
        event = "cycle_completed",
        cycle = cycle,
        contributions = contributions,
        "cycle applied"
    );
}

/// Log a delta keyed by a vertex name the graph does not contain.
pub fn unknown_vertex_skipped(name: &str, origin: &str) {
    tracing::debug!(
        event = "unknown_vertex_skipped",
        vertex = %name,
        origin = %origin,
        "ignoring delta for unknown vertex"
    );
}

/// Log the reversal of a path.
pub fn edges_reversed(path: &[String]) {
    tracing::info!(
        event = "edges_reversed",
        path = ?path,
        edges = path.len().saturating_sub(1),
        "causality reversed along path"
    );
}

/// Log a converging edge moved one hop up the reversed path.
pub fn edge_redirected(source: &str, old_target: &str, new_target: &str) {
    tracing::debug!(
        event = "edge_redirected",
        source = %source,
        old_target = %old_target,
        new_target = %new_target,
        "converging edge redirected"
    );
}

/// Log a composition whose parameters still need to be supplied.
pub fn composition_deferred(this: &str, other: &str, composed: &str) {
    tracing::warn!(
        event = "composition_deferred",
        this = %this,
        other = %other,
        composed = %composed,
        "edge composed by type only; parameters pending"
    );
}
