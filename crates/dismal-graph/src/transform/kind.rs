//! Transform kinds: a function family crossed with input/output delta flavors.
//! Tags such as `aa_lin` or `pp_exp` are resolved once, at edge construction.

use std::fmt;

use dismal_core::errors::EdgeError;
use serde::{Deserialize, Serialize};

/// The numeric function family an edge applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformFunction {
    /// `delta * coefficient`.
    Proportional,
    /// `delta * gradient + intercept`.
    Linear,
    /// `base ^ delta + constant`.
    Exponential,
    /// `sum(coefficient_i * delta ^ exponent_i) + constant`.
    Polynomial,
    /// `(gradient * cycle + constant) * delta`.
    CountProportional,
}

impl TransformFunction {
    pub const ALL: [TransformFunction; 5] = [
        Self::Proportional,
        Self::Linear,
        Self::Exponential,
        Self::Polynomial,
        Self::CountProportional,
    ];

    /// Tag suffix used in kind strings.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Proportional => "prop",
            Self::Linear => "lin",
            Self::Exponential => "exp",
            Self::Polynomial => "poly",
            Self::CountProportional => "cnt",
        }
    }

    pub fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "prop" => Some(Self::Proportional),
            "lin" => Some(Self::Linear),
            "exp" => Some(Self::Exponential),
            "poly" => Some(Self::Polynomial),
            "cnt" => Some(Self::CountProportional),
            _ => None,
        }
    }

    /// Human-readable name, used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proportional => "proportional",
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::Polynomial => "polynomial",
            Self::CountProportional => "count_proportional",
        }
    }

    /// Minimum number of parameters the function reads.
    pub fn required_parameters(&self) -> usize {
        match self {
            Self::CountProportional => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a delta is an absolute amount or a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaFlavor {
    Absolute,
    Percent,
}

impl DeltaFlavor {
    fn letter(&self) -> char {
        match self {
            Self::Absolute => 'a',
            Self::Percent => 'p',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::Absolute),
            'p' => Some(Self::Percent),
            _ => None,
        }
    }
}

/// A fully resolved edge kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformKind {
    pub function: TransformFunction,
    /// Which previous delta of the source the edge reads.
    pub input: DeltaFlavor,
    /// Whether the result is added directly or scaled by the target's value.
    pub output: DeltaFlavor,
}

impl TransformKind {
    pub fn new(function: TransformFunction, input: DeltaFlavor, output: DeltaFlavor) -> Self {
        Self {
            function,
            input,
            output,
        }
    }

    /// Absolute-in, absolute-out shorthand.
    pub fn absolute(function: TransformFunction) -> Self {
        Self::new(function, DeltaFlavor::Absolute, DeltaFlavor::Absolute)
    }

    /// Parse a tag like `"ap_lin"`. Case-insensitive.
    pub fn from_tag(tag: &str) -> Result<Self, EdgeError> {
        let unknown = || EdgeError::UnknownTransformKind {
            tag: tag.to_string(),
        };
        let lowered = tag.trim().to_ascii_lowercase();
        let (flavors, suffix) = lowered.split_once('_').ok_or_else(unknown)?;
        let mut letters = flavors.chars();
        let (Some(i), Some(o), None) = (letters.next(), letters.next(), letters.next()) else {
            return Err(unknown());
        };
        let input = DeltaFlavor::from_letter(i).ok_or_else(unknown)?;
        let output = DeltaFlavor::from_letter(o).ok_or_else(unknown)?;
        let function = TransformFunction::from_suffix(suffix).ok_or_else(unknown)?;
        Ok(Self::new(function, input, output))
    }

    /// Canonical lowercase tag.
    pub fn tag(&self) -> String {
        format!(
            "{}{}_{}",
            self.input.letter(),
            self.output.letter(),
            self.function.suffix()
        )
    }

    pub fn reads_percent(&self) -> bool {
        self.input == DeltaFlavor::Percent
    }

    pub fn writes_percent(&self) -> bool {
        self.output == DeltaFlavor::Percent
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}
