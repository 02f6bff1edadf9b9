//! Delta propagation: engine, exogenous feed, and run log.

mod compute;
pub mod engine;
pub mod feed;
pub mod run_log;

pub use engine::PropagationEngine;
pub use feed::ExogenousFeed;
pub use run_log::{RunLog, VertexSeries};
