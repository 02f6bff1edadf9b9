//! Vertex: a named numeric state cell with pending and previous deltas.

use std::fmt;

use dismal_core::constants::PERCENT_SCALE;
use dismal_core::errors::{DataError, InitError, ParameterError, RetrievalError};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::traversal::TraversalMarks;

/// How an inherent delta's amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InherentMode {
    /// `amount` is added to the pending delta.
    Absolute,
    /// `amount` percent of the current value is added.
    Percent,
}

/// Closed interval a random draw is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomInterval {
    pub low: f64,
    pub high: f64,
}

impl RandomInterval {
    pub fn new(low: f64, high: f64) -> Result<Self, ParameterError> {
        let interval = Self { low, high };
        interval.validate()?;
        Ok(interval)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.low.is_finite() && self.high.is_finite()) || self.low > self.high {
            return Err(ParameterError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..=self.high)
    }
}

/// Autonomous per-cycle drift of a vertex, independent of its edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InherentDelta {
    pub mode: InherentMode,
    #[serde(default)]
    pub amount: f64,
    /// When set, a uniform draw from this interval joins the delta.
    #[serde(default)]
    pub random: Option<RandomInterval>,
}

impl InherentDelta {
    pub fn absolute(amount: f64) -> Self {
        Self {
            mode: InherentMode::Absolute,
            amount,
            random: None,
        }
    }

    pub fn percent(amount: f64) -> Self {
        Self {
            mode: InherentMode::Percent,
            amount,
            random: None,
        }
    }

    /// Attach a random interval. Fails when `low > high`.
    pub fn with_random(mut self, low: f64, high: f64) -> Result<Self, ParameterError> {
        self.random = Some(RandomInterval::new(low, high)?);
        Ok(self)
    }

    pub(crate) fn validate_for(&self, vertex: &str) -> Result<(), InitError> {
        if !self.amount.is_finite() {
            return Err(InitError::InvalidInherentDelta {
                vertex: vertex.to_string(),
                reason: format!("amount {} is not finite", self.amount),
            });
        }
        if let Some(interval) = &self.random {
            interval
                .validate()
                .map_err(|e| InitError::InvalidInherentDelta {
                    vertex: vertex.to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }
}

/// A named numeric state cell.
///
/// `value` changes only in [`Vertex::apply_pending_delta`]; everything else
/// during a cycle writes to the pending delta.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    value: Option<f64>,
    pending_delta: f64,
    prev_absolute_delta: f64,
    prev_percent_delta: f64,
    inherent: Option<InherentDelta>,
    pub(crate) marks: TraversalMarks,
}

impl Vertex {
    pub fn new(name: impl Into<String>, value: Option<f64>) -> Result<Self, InitError> {
        let name = name.into();
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(InitError::NonNumericValue {
                    vertex: name,
                    found: v.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            value,
            pending_delta: 0.0,
            prev_absolute_delta: 0.0,
            prev_percent_delta: 0.0,
            inherent: None,
            marks: TraversalMarks::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value. Fails if the vertex was never assigned one.
    pub fn value(&self) -> Result<f64, RetrievalError> {
        self.value.ok_or_else(|| RetrievalError::UndefinedValue {
            vertex: self.name.clone(),
        })
    }

    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: f64) -> Result<(), DataError> {
        if !value.is_finite() {
            return Err(DataError::NonNumericValue {
                vertex: self.name.clone(),
                value,
            });
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn pending_delta(&self) -> f64 {
        self.pending_delta
    }

    pub fn prev_absolute_delta(&self) -> f64 {
        self.prev_absolute_delta
    }

    pub fn prev_percent_delta(&self) -> f64 {
        self.prev_percent_delta
    }

    pub fn inherent_delta(&self) -> Option<&InherentDelta> {
        self.inherent.as_ref()
    }

    pub fn set_inherent_delta(&mut self, inherent: Option<InherentDelta>) -> Result<(), InitError> {
        if let Some(delta) = &inherent {
            delta.validate_for(&self.name)?;
        }
        self.inherent = inherent;
        Ok(())
    }

    pub fn marks(&self) -> &TraversalMarks {
        &self.marks
    }

    pub fn add_incoming_contribution(&mut self, amount: f64) {
        self.pending_delta += amount;
    }

    pub fn set_pending_delta(&mut self, amount: f64) {
        self.pending_delta = amount;
    }

    /// Apply this vertex's inherent delta to its pending delta, if it has one.
    ///
    /// A random absolute draw replaces the pending delta; every other form adds.
    pub fn apply_inherent_delta<R: Rng>(&mut self, rng: &mut R) -> Result<(), DataError> {
        let Some(inherent) = self.inherent else {
            return Ok(());
        };
        match (inherent.mode, inherent.random) {
            (InherentMode::Absolute, None) => self.pending_delta += inherent.amount,
            (InherentMode::Absolute, Some(interval)) => self.pending_delta = interval.draw(rng),
            (InherentMode::Percent, random) => {
                let base = self.base()?;
                self.pending_delta += inherent.amount / PERCENT_SCALE * base;
                if let Some(interval) = random {
                    self.pending_delta += interval.draw(rng) * base;
                }
            }
        }
        Ok(())
    }

    /// The value `apply_pending_delta` would write. Fails on an undefined base
    /// or a result that is not a finite number.
    pub fn next_value(&self) -> Result<f64, DataError> {
        let new = self.base()? + self.pending_delta;
        if !new.is_finite() {
            return Err(DataError::NonNumericValue {
                vertex: self.name.clone(),
                value: new,
            });
        }
        Ok(new)
    }

    /// `value += pending`, roll the previous deltas, clear pending.
    pub fn apply_pending_delta(&mut self) -> Result<(), DataError> {
        let new = self.next_value()?;
        let old = self.base()?;
        self.prev_absolute_delta = self.pending_delta;
        self.prev_percent_delta = if old == 0.0 {
            0.0
        } else {
            (new / old - 1.0) * PERCENT_SCALE
        };
        self.value = Some(new);
        self.pending_delta = 0.0;
        Ok(())
    }

    pub fn reset_traversal_data(&mut self) {
        self.marks = TraversalMarks::default();
    }

    fn base(&self) -> Result<f64, DataError> {
        self.value.ok_or_else(|| DataError::UndefinedBase {
            vertex: self.name.clone(),
        })
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{} = {}", self.name, v)?,
            None => write!(f, "{} = <undefined>", self.name)?,
        }
        write!(
            f,
            " (pending {}, prev abs {}, prev pct {}%, {:?}",
            self.pending_delta, self.prev_absolute_delta, self.prev_percent_delta, self.marks.color
        )?;
        if let Some(d) = self.marks.distance {
            write!(f, ", distance {d}")?;
        }
        if let (Some(d), Some(fin)) = (self.marks.discovered, self.marks.finished) {
            write!(f, ", times {d}/{fin}")?;
        }
        f.write_str(")")
    }
}
