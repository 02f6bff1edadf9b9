//! # dismal-core
//!
//! Foundation crate for the Dismal delta-graph simulator.
//! Defines errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{FeedMode, InherentOrder, InjectionMode, PropagationConfig, SimConfig};
pub use errors::{SimError, SimResult};
