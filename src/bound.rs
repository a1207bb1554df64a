//! Multi-bias bound evaluation.
//!
//! The bound for a bias set is the product of its per-bias contributions:
//! pairwise contributions use the joint bounding factor
//! `B(x, y) = x·y / (x + y − 1)` and single-parameter contributions enter
//! directly. With every parameter at 1 the bound is exactly 1 (no bias), and
//! the bound is monotonically non-decreasing as any parameter moves above 1
//! holding the others fixed.

use std::collections::BTreeMap;

use crate::bias::BiasSet;
use crate::error::Error;
use crate::registry::{self, Derivation, ParamId, Term};

/// Named sensitivity-parameter values, keyed by canonical symbol.
///
/// Keys that no parameter in the bias set requires are ignored; missing
/// required keys fail evaluation with [`Error::MissingParameter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamValues {
    values: BTreeMap<String, f64>,
}

impl ParamValues {
    /// Empty value map.
    pub fn new() -> ParamValues {
        ParamValues::default()
    }

    /// Set one parameter, chaining.
    pub fn set(mut self, symbol: &str, value: f64) -> ParamValues {
        self.values.insert(symbol.to_string(), value);
        self
    }

    /// Insert one parameter in place.
    pub fn insert(&mut self, symbol: &str, value: f64) {
        self.values.insert(symbol.to_string(), value);
    }

    /// Look up a parameter by symbol.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.values.get(symbol).copied()
    }

    /// Number of values set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every required parameter of `set` assigned the same value.
    ///
    /// This is the uniform-strength assignment the multi-bias E-value search
    /// evaluates repeatedly.
    pub fn uniform(set: &BiasSet, strength: f64) -> ParamValues {
        let mut values = ParamValues::new();
        for parameter in set.parameters() {
            values.insert(parameter.symbol, strength);
        }
        values
    }
}

/// Joint bounding factor `B(x, y) = x·y / (x + y − 1)`.
///
/// The largest multiplicative distortion a pair of risk-ratio parameters of
/// the given magnitudes can impose. Equals 1 when either argument is 1 and
/// is non-decreasing in each argument above 1. Defined for `x + y > 1`.
pub fn joint_factor(x: f64, y: f64) -> f64 {
    x * y / (x + y - 1.0)
}

/// Evaluate the composed bound for a bias set at explicit parameter values.
///
/// # Errors
///
/// - [`Error::MissingParameter`] naming every required symbol absent from
///   `values` (in derivation order), not just the first.
/// - [`Error::InvalidParameterValue`] for a value that is non-positive or
///   non-finite, or for a pair whose sum does not exceed 1 (outside the
///   joint factor's domain).
pub fn multi_bound(set: &BiasSet, values: &ParamValues) -> Result<f64, Error> {
    let derivation = registry::derive(set);
    evaluate(&derivation, |id| values.get(id.symbol()))
}

/// Evaluate a derivation's bound with a parameter lookup.
fn evaluate<F>(derivation: &Derivation, lookup: F) -> Result<f64, Error>
where
    F: Fn(ParamId) -> Option<f64>,
{
    let missing: Vec<String> = term_ids(derivation)
        .filter(|id| lookup(*id).is_none())
        .map(|id| id.symbol().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingParameter { names: missing });
    }

    let mut bound = 1.0;
    for term in &derivation.terms {
        bound *= match term {
            Term::Joint(x_id, y_id) => {
                let x = checked(*x_id, &lookup)?;
                let y = checked(*y_id, &lookup)?;
                if x + y <= 1.0 {
                    return Err(Error::InvalidParameterValue {
                        symbol: x_id.symbol().to_string(),
                        value: x,
                    });
                }
                joint_factor(x, y)
            }
            Term::Direct(id) => checked(*id, &lookup)?,
        };
    }
    Ok(bound)
}

/// Look a parameter up and validate its value.
fn checked<F>(id: ParamId, lookup: &F) -> Result<f64, Error>
where
    F: Fn(ParamId) -> Option<f64>,
{
    // Presence was checked up front; absence here would be a registry bug.
    let value = lookup(id).ok_or_else(|| Error::MissingParameter {
        names: vec![id.symbol().to_string()],
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameterValue {
            symbol: id.symbol().to_string(),
            value,
        });
    }
    Ok(value)
}

/// Bound value under the uniform-strength assignment (all parameters `k`).
pub(crate) fn uniform_bound(derivation: &Derivation, strength: f64) -> f64 {
    derivation
        .terms
        .iter()
        .map(|term| match term {
            Term::Joint(_, _) => joint_factor(strength, strength),
            Term::Direct(_) => strength,
        })
        .product()
}

/// Parameter ids in derivation order (terms flattened).
fn term_ids(derivation: &Derivation) -> impl Iterator<Item = ParamId> + '_ {
    derivation.terms.iter().flat_map(|term| match term {
        Term::Joint(x, y) => vec![*x, *y],
        Term::Direct(id) => vec![*id],
    })
}
