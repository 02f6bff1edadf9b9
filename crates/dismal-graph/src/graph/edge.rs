//! TransformEdge: a parameterized, invertible, negatable relation between two vertices.

use std::fmt;

use dismal_core::constants::PERCENT_SCALE;
use dismal_core::errors::{EdgeError, ParameterError, SimResult};
use serde::{Deserialize, Serialize};

use super::vertex::Vertex;
use crate::transform::{compose_kind, functions, PendingComposition, TransformKind};

/// What an edge adds to its target's pending delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// Added as-is.
    Absolute(f64),
    /// A multiplier on the target's current value.
    Percent(f64),
}

impl Contribution {
    /// Resolve against the target's current value.
    pub fn against(self, target_value: f64) -> f64 {
        match self {
            Self::Absolute(amount) => amount,
            Self::Percent(multiplier) => multiplier * target_value,
        }
    }
}

/// Edge weight stored in the graph.
///
/// `inverted` and `negated` are markers set by causality reversal. They do not
/// change how the edge evaluates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformEdge {
    kind: TransformKind,
    parameters: Vec<f64>,
    inverted: bool,
    negated: bool,
    pending_composition: Option<PendingComposition>,
}

impl TransformEdge {
    pub fn new(kind: TransformKind, parameters: Vec<f64>) -> Result<Self, ParameterError> {
        functions::validate(kind.function, &parameters)?;
        Ok(Self {
            kind,
            parameters,
            inverted: false,
            negated: false,
            pending_composition: None,
        })
    }

    pub fn kind(&self) -> TransformKind {
        self.kind
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn pending_composition(&self) -> Option<&PendingComposition> {
        self.pending_composition.as_ref()
    }

    /// Evaluate against the source's previous deltas.
    pub fn contribution(&self, source: &Vertex, cycle: usize) -> SimResult<Contribution> {
        if let Some(pending) = &self.pending_composition {
            return Err(pending.not_implemented().into());
        }
        let delta = if self.kind.reads_percent() {
            source.prev_percent_delta()
        } else {
            source.prev_absolute_delta()
        };
        let raw = functions::evaluate(self.kind.function, delta, &self.parameters, cycle)?;
        Ok(if self.kind.writes_percent() {
            Contribution::Percent(raw / PERCENT_SCALE)
        } else {
            Contribution::Absolute(raw)
        })
    }

    pub(crate) fn toggle_inverted(&mut self) {
        self.inverted = !self.inverted;
    }

    pub(crate) fn toggle_negated(&mut self) {
        self.negated = !self.negated;
    }

    /// Compose with `other` by type only; parameters stay pending.
    pub(crate) fn compose_with(&mut self, other: &TransformEdge) -> Result<TransformKind, EdgeError> {
        let composed = compose_kind(self.kind, other.kind)?;
        self.pending_composition = Some(PendingComposition {
            this: self.kind,
            this_parameters: self.parameters.clone(),
            other: other.kind,
            other_parameters: other.parameters.clone(),
        });
        self.kind = composed;
        Ok(composed)
    }

    /// Supply the parameters for a pending composition.
    pub(crate) fn resolve(&mut self, parameters: Vec<f64>) -> Result<(), ParameterError> {
        functions::validate(self.kind.function, &parameters)?;
        self.parameters = parameters;
        self.pending_composition = None;
        Ok(())
    }
}

impl fmt::Display for TransformEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.parameters)?;
        if self.inverted {
            f.write_str(" inverted")?;
        }
        if self.negated {
            f.write_str(" negated")?;
        }
        if self.pending_composition.is_some() {
            f.write_str(" (composition pending)")?;
        }
        Ok(())
    }
}
