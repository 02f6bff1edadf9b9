/// Causality reversal errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReversalError {
    #[error("no directed path from {start} to {end}")]
    NoPath { start: String, end: String },

    #[error("cannot reverse causality between {vertex} and itself")]
    DegeneratePath { vertex: String },
}
