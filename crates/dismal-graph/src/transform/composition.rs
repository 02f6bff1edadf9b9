//! Type algebra for composing two transforms.
//!
//! Only the resulting function *type* is defined. Parameters of a composed
//! edge are supplied later through `DeltaGraph::resolve_composition`.

use dismal_core::errors::EdgeError;
use serde::{Deserialize, Serialize};

use super::kind::{TransformFunction, TransformKind};

/// Result type of `this ∘ other`.
///
/// | this ∘ other | proportional | linear     | polynomial |
/// |--------------|--------------|------------|------------|
/// | proportional | proportional | linear     | polynomial |
/// | linear       | linear       | polynomial | polynomial |
/// | polynomial   | polynomial   | polynomial | polynomial |
pub fn compose_function(
    this: TransformFunction,
    other: TransformFunction,
) -> Result<TransformFunction, EdgeError> {
    use TransformFunction::*;
    match (this, other) {
        (Proportional, Proportional) => Ok(Proportional),
        (Proportional, Linear) | (Linear, Proportional) => Ok(Linear),
        (Proportional | Linear | Polynomial, Proportional | Linear | Polynomial) => Ok(Polynomial),
        _ => Err(EdgeError::UnsupportedComposition {
            this: this.as_str().to_string(),
            other: other.as_str().to_string(),
        }),
    }
}

/// Compose two kinds. Input flavor comes from `this`, output flavor from `other`.
pub fn compose_kind(this: TransformKind, other: TransformKind) -> Result<TransformKind, EdgeError> {
    let function = compose_function(this.function, other.function)?;
    Ok(TransformKind::new(function, this.input, other.output))
}

/// A composition whose type is known but whose parameters are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingComposition {
    /// Kind of the edge before composition.
    pub this: TransformKind,
    /// Parameters of the edge before composition.
    pub this_parameters: Vec<f64>,
    /// Kind of the edge it was composed with.
    pub other: TransformKind,
    /// Parameters of the edge it was composed with.
    pub other_parameters: Vec<f64>,
}

impl PendingComposition {
    pub fn not_implemented(&self) -> EdgeError {
        EdgeError::CompositionNotImplemented {
            this: self.this.to_string(),
            other: self.other.to_string(),
        }
    }
}
