//! E-value computation: the scalar threshold primitive and the multi-bias
//! uniform-strength inversion.
//!
//! The multi-bias E-value is the minimum value `k ≥ 1` such that setting
//! every required sensitivity parameter of a bias set simultaneously to `k`
//! drives the composed bound to the observed ratio. Because the bound under
//! that uniform assignment is monotone in `k` and equals 1 at `k = 1`, the
//! inversion is a one-dimensional root-find; the pure-pairwise and
//! pure-direct bound shapes invert in closed form through the scalar
//! threshold, and mixed shapes fall back to bracketed bisection.

use serde::{Deserialize, Serialize};

use crate::bias::BiasSet;
use crate::bound::uniform_bound;
use crate::diagnostics::DiagnosticSink;
use crate::error::Error;
use crate::estimate::Estimate;
use crate::evaluator::Evaluator;
use crate::registry::{self, Derivation};
use crate::search::{minimum_strength, SearchConfig};

/// Multi-bias E-values for a point estimate and its confidence limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiEvalue {
    /// E-value for the point estimate.
    pub point: f64,

    /// E-value for the lower confidence limit.
    ///
    /// `Some(1.0)` when the limit already crosses the true value (no bias is
    /// needed); `None` when this is the far limit, for which no E-value is
    /// reported.
    pub lower: Option<f64>,

    /// E-value for the upper confidence limit; see `lower`.
    pub upper: Option<f64>,
}

/// Single-bias E-value threshold.
///
/// The minimum strength a single pair of bias parameters must reach, on the
/// risk-ratio scale, to shift an observed ratio `x` to the true value:
///
/// - estimates at or below 1 are inverted (together with `true_rr`) onto
///   the causative side first;
/// - for `true_rr ≤ x`: `(x + √(x·(x − true_rr))) / true_rr`;
/// - otherwise, with `r = true_rr / x`: `r + √(r·(r − 1))`.
///
/// Symmetric under reciprocal framing: `threshold(x, 1) == threshold(1/x, 1)`.
///
/// # Panics
///
/// Panics if `x` or `true_rr` is non-positive or non-finite; callers that
/// take user input validate through [`Estimate`] first.
pub fn threshold(x: f64, true_rr: f64) -> f64 {
    assert!(
        x.is_finite() && x > 0.0,
        "threshold requires a positive finite ratio"
    );
    assert!(
        true_rr.is_finite() && true_rr > 0.0,
        "threshold requires a positive finite true value"
    );

    let (x, true_rr) = if x <= 1.0 {
        (1.0 / x, 1.0 / true_rr)
    } else {
        (x, true_rr)
    };

    if true_rr <= x {
        (x + (x * (x - true_rr)).sqrt()) / true_rr
    } else {
        let r = true_rr / x;
        r + (r * (r - 1.0)).sqrt()
    }
}

/// Multi-bias E-value for an estimate against a true value of 1, with the
/// default search configuration.
///
/// Use [`Evaluator`] to change the true value, search tolerance, or
/// diagnostics sink.
///
/// # Errors
///
/// `SearchDidNotConverge` if the uniform-strength search exhausts its
/// budget. Estimate validation errors are raised at [`Estimate`]
/// construction.
pub fn multi_evalue(set: &BiasSet, estimate: &Estimate) -> Result<MultiEvalue, Error> {
    Evaluator::new().evalue(set, estimate)
}

/// Minimum uniform strength driving the bound of `derivation` to `ratio`.
///
/// Ratios at or below 1 need no bias. Bound shapes made only of joint terms
/// invert in closed form through [`threshold`]; shapes made only of direct
/// terms invert as a root; mixed shapes bisect.
pub(crate) fn solve_uniform(
    derivation: &Derivation,
    ratio: f64,
    config: &SearchConfig,
) -> Result<f64, Error> {
    if ratio <= 1.0 {
        return Ok(1.0);
    }
    let joints = derivation.joint_terms();
    let directs = derivation.direct_terms();
    match (joints, directs) {
        (0, 0) => Ok(1.0),
        (1, 0) => Ok(threshold(ratio, 1.0)),
        (j, 0) => Ok(threshold(ratio.powf(1.0 / j as f64), 1.0)),
        (0, 1) => Ok(ratio),
        (0, d) => Ok(ratio.powf(1.0 / d as f64)),
        _ => minimum_strength(|k| uniform_bound(derivation, k), ratio, config),
    }
}

/// Full E-value computation: orientation, point search, CI-limit handling.
pub(crate) fn evalue_impl(
    set: &BiasSet,
    estimate: &Estimate,
    true_rr: f64,
    config: &SearchConfig,
    sink: &dyn DiagnosticSink,
) -> Result<MultiEvalue, Error> {
    if !true_rr.is_finite() || true_rr <= 0.0 {
        return Err(Error::InvalidEstimate { value: true_rr });
    }

    let derivation = registry::derive(set);

    // Orient preventive estimates onto the causative side; limits swap.
    let flipped = estimate.point() < 1.0;
    let (est, lo, hi, truth) = if flipped {
        sink.note("preventive estimate: working on the reciprocal scale");
        (
            estimate.point().recip(),
            estimate.hi().map(f64::recip),
            estimate.lo().map(f64::recip),
            true_rr.recip(),
        )
    } else {
        (estimate.point(), estimate.lo(), estimate.hi(), true_rr)
    };

    let symbols: Vec<&str> = derivation.parameters.iter().map(|p| p.symbol).collect();
    sink.note(&format!(
        "searching the minimum common value of: {}",
        symbols.join(", ")
    ));

    let point = solve_uniform(&derivation, ratio(est, truth), config)?;

    // Only the confidence limit nearer the true value gets an E-value; if it
    // already crosses the true value, no bias at all is needed.
    let near = if est >= truth { lo } else { hi };
    let near_evalue = match near {
        None => None,
        Some(limit) => {
            let crossed = if est >= truth {
                limit <= truth
            } else {
                limit >= truth
            };
            if crossed {
                Some(1.0)
            } else {
                Some(solve_uniform(&derivation, ratio(limit, truth), config)?)
            }
        }
    };

    // The near limit is the lower one exactly when the estimate sits above
    // the true value in the original (unflipped) framing.
    let near_is_lower = (est >= truth) != flipped;
    let (lower, upper) = if near_is_lower {
        (near_evalue, None)
    } else {
        (None, near_evalue)
    };

    Ok(MultiEvalue {
        point,
        lower,
        upper,
    })
}

/// Ratio of `a` to `truth` on the ≥ 1 side.
fn ratio(a: f64, truth: f64) -> f64 {
    if a >= truth {
        a / truth
    } else {
        truth / a
    }
}
