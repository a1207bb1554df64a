//! One-dimensional root search for the uniform bias strength.
//!
//! The composed bound under the uniform-strength assignment is 1 at `k = 1`
//! and strictly increasing for `k > 1`, so inverting it is a bracketed
//! monotone root-find: expand the bracket geometrically until the bound
//! reaches the target, then bisect to the configured relative tolerance.
//! The search is budgeted; an exhausted bracket or iteration budget fails
//! with [`Error::SearchDidNotConverge`] rather than returning a coarse
//! answer.

use crate::error::Error;

/// Configuration for the uniform-strength search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Relative tolerance on the returned strength (default: 1e-8).
    pub tolerance: f64,

    /// Iteration budget across bracketing and bisection (default: 200).
    pub max_iterations: usize,

    /// Largest bias strength the bracket may expand to (default: 1e12).
    ///
    /// The composed bound is unbounded in `k`, so a bracket that reaches
    /// this ceiling without covering the target signals a degenerate bound
    /// and fails rather than looping.
    pub max_strength: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 200,
            max_strength: 1e12,
        }
    }
}

/// Minimum `k ≥ 1` with `bound_at(k) ≥ target`.
///
/// `bound_at` must be non-decreasing with `bound_at(1) = 1`. Targets at or
/// below 1 need no bias and return 1 without evaluating the bound.
///
/// Returns the upper end of the final bracket, so the result is always a
/// strength whose bound reaches the target.
pub(crate) fn minimum_strength<F>(
    bound_at: F,
    target: f64,
    config: &SearchConfig,
) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    if target <= 1.0 {
        return Ok(1.0);
    }

    let mut iterations = 0;
    let mut lo = 1.0_f64;
    let mut hi = 2.0_f64;

    while bound_at(hi) < target {
        lo = hi;
        hi *= 2.0;
        iterations += 1;
        if hi > config.max_strength || iterations >= config.max_iterations {
            return Err(Error::SearchDidNotConverge { target, iterations });
        }
    }

    while (hi - lo) > config.tolerance * hi {
        if iterations >= config.max_iterations {
            return Err(Error::SearchDidNotConverge { target, iterations });
        }
        iterations += 1;
        let mid = 0.5 * (lo + hi);
        if bound_at(mid) >= target {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Ok(hi)
}
