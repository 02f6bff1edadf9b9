//! Property tests for dismal-graph.

mod propagation_properties;
mod reversal_properties;
