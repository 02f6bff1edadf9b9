//! Configuration system for the simulator.
//! TOML-based: env > file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod propagation_config;
pub mod sim_config;

pub use observability_config::ObservabilityConfig;
pub use propagation_config::{FeedMode, InherentOrder, InjectionMode, PropagationConfig};
pub use sim_config::SimConfig;
