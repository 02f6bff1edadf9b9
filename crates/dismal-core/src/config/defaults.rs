// Single source of truth for all default values.

use super::propagation_config::{FeedMode, InherentOrder, InjectionMode};

// --- Propagation ---
pub const DEFAULT_INJECTION_MODE: InjectionMode = InjectionMode::Overwrite;
pub const DEFAULT_FEED_MODE: FeedMode = FeedMode::Accumulate;
pub const DEFAULT_INHERENT_ORDER: InherentOrder = InherentOrder::AfterEdges;
pub const DEFAULT_RANDOM_SEED: Option<u64> = None;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
