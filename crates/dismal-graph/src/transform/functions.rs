//! Pure transform functions.
//!
//! Each function maps a source vertex's previous delta to a raw contribution.
//! Percent-output scaling is applied later, by the edge, since it needs the
//! target's current value.

use dismal_core::errors::ParameterError;

use super::kind::TransformFunction;

fn required(params: &[f64], index: usize, kind: TransformFunction) -> Result<f64, ParameterError> {
    let value = params
        .get(index)
        .copied()
        .ok_or_else(|| ParameterError::MissingParameter {
            kind: kind.as_str().to_string(),
            index,
        })?;
    finite(value, index)
}

fn optional(params: &[f64], index: usize) -> Result<f64, ParameterError> {
    match params.get(index) {
        Some(&value) => finite(value, index),
        None => Ok(0.0),
    }
}

fn finite(value: f64, index: usize) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonNumeric {
            index,
            found: value.to_string(),
        })
    }
}

/// `delta * params[0]`.
pub fn proportional(delta: f64, params: &[f64]) -> Result<f64, ParameterError> {
    let coefficient = required(params, 0, TransformFunction::Proportional)?;
    Ok(delta * coefficient)
}

/// `delta * params[0] + params[1]`; the intercept defaults to 0.
pub fn linear(delta: f64, params: &[f64]) -> Result<f64, ParameterError> {
    let gradient = required(params, 0, TransformFunction::Linear)?;
    let intercept = optional(params, 1)?;
    Ok(delta * gradient + intercept)
}

/// `params[0] ^ delta + params[1]`; the constant defaults to 0.
pub fn exponential(delta: f64, params: &[f64]) -> Result<f64, ParameterError> {
    let base = required(params, 0, TransformFunction::Exponential)?;
    let constant = optional(params, 1)?;
    Ok(base.powf(delta) + constant)
}

/// `[c0, e0, c1, e1, ..., (k)]`: sum of `c_i * delta ^ e_i`, plus `k` when
/// the parameter count is odd.
pub fn polynomial(delta: f64, params: &[f64]) -> Result<f64, ParameterError> {
    required(params, 0, TransformFunction::Polynomial)?;
    let mut total = 0.0;
    let pairs = params.chunks_exact(2);
    let trailing = pairs.remainder().first().copied();
    for (i, pair) in pairs.enumerate() {
        let coefficient = finite(pair[0], 2 * i)?;
        let exponent = finite(pair[1], 2 * i + 1)?;
        total += coefficient * delta.powf(exponent);
    }
    if let Some(constant) = trailing {
        total += finite(constant, params.len() - 1)?;
    }
    Ok(total)
}

/// `(params[0] * cycle + params[1]) * delta`: a coefficient that drifts
/// linearly with the cycle count.
pub fn count_proportional(delta: f64, params: &[f64], cycle: usize) -> Result<f64, ParameterError> {
    let gradient = required(params, 0, TransformFunction::CountProportional)?;
    let constant = required(params, 1, TransformFunction::CountProportional)?;
    Ok((gradient * cycle as f64 + constant) * delta)
}

/// Dispatch to the function for `function`.
pub fn evaluate(
    function: TransformFunction,
    delta: f64,
    params: &[f64],
    cycle: usize,
) -> Result<f64, ParameterError> {
    match function {
        TransformFunction::Proportional => proportional(delta, params),
        TransformFunction::Linear => linear(delta, params),
        TransformFunction::Exponential => exponential(delta, params),
        TransformFunction::Polynomial => polynomial(delta, params),
        TransformFunction::CountProportional => count_proportional(delta, params, cycle),
    }
}

/// Check a parameter list is well-formed for `function` without evaluating it.
pub fn validate(function: TransformFunction, params: &[f64]) -> Result<(), ParameterError> {
    for index in 0..function.required_parameters() {
        required(params, index, function)?;
    }
    for (index, &value) in params.iter().enumerate() {
        finite(value, index)?;
    }
    Ok(())
}

/// Convert an untyped parameter value (from a model file) into a numeric list.
pub fn parse_parameters(value: &serde_json::Value) -> Result<Vec<f64>, ParameterError> {
    let items = value
        .as_array()
        .ok_or_else(|| ParameterError::NotASequence {
            found: value.to_string(),
        })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64().ok_or_else(|| ParameterError::NonNumeric {
                index,
                found: item.to_string(),
            })
        })
        .collect()
}
