//! Span definitions per operation: propagation runs, single cycles, reversal, traversal.

/// Create a span covering a whole propagation run.
#[macro_export]
macro_rules! propagation_span {
    ($cycles:expr, $vertex_count:expr) => {
        tracing::info_span!("dismal.propagation", cycles = $cycles, vertices = $vertex_count)
    };
}

/// Create a span for one compute/apply cycle.
#[macro_export]
macro_rules! cycle_span {
    ($cycle:expr) => {
        tracing::debug_span!("dismal.propagation.cycle", cycle = $cycle)
    };
}

/// Create a causality reversal span.
#[macro_export]
macro_rules! reversal_span {
    ($start:expr, $end:expr) => {
        tracing::info_span!("dismal.reversal", start = %$start, end = %$end)
    };
}

/// Create a diagnostic traversal span.
#[macro_export]
macro_rules! traversal_span {
    ($kind:expr, $start:expr) => {
        tracing::debug_span!("dismal.traversal", kind = %$kind, start = %$start)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PROPAGATION: &str = "dismal.propagation";
    pub const CYCLE: &str = "dismal.propagation.cycle";
    pub const REVERSAL: &str = "dismal.reversal";
    pub const TRAVERSAL: &str = "dismal.traversal";
}
