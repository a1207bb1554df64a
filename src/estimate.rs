//! Observed estimates on the risk-ratio scale.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An observed exposure–outcome association on the risk-ratio scale, with
/// optional confidence limits.
///
/// Validated at construction: the point and any limits must be positive and
/// finite, limits must be ordered, and the point must lie inside them.
/// Estimates may be apparent-causative (≥ 1) or apparent-preventive (< 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    est: f64,
    lo: Option<f64>,
    hi: Option<f64>,
}

impl Estimate {
    /// A point estimate without confidence limits.
    ///
    /// # Errors
    ///
    /// `InvalidEstimate` if `est` is non-positive or non-finite.
    pub fn rr(est: f64) -> Result<Estimate, Error> {
        Estimate::rr_with(est, None, None)
    }

    /// A point estimate with both confidence limits.
    ///
    /// # Errors
    ///
    /// `InvalidEstimate` for non-positive or non-finite values,
    /// `InvalidInterval` if `lo > hi`, and `EstimateOutsideInterval` if the
    /// point lies outside `[lo, hi]`.
    pub fn rr_ci(est: f64, lo: f64, hi: f64) -> Result<Estimate, Error> {
        Estimate::rr_with(est, Some(lo), Some(hi))
    }

    /// A point estimate with either, both, or neither confidence limit.
    ///
    /// # Errors
    ///
    /// As [`Estimate::rr_ci`], applied to the limits that are present.
    pub fn rr_with(est: f64, lo: Option<f64>, hi: Option<f64>) -> Result<Estimate, Error> {
        for value in [Some(est), lo, hi].into_iter().flatten() {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidEstimate { value });
            }
        }
        if let (Some(lo), Some(hi)) = (lo, hi) {
            if lo > hi {
                return Err(Error::InvalidInterval { lo, hi });
            }
        }
        let below = lo.is_some_and(|lo| est < lo);
        let above = hi.is_some_and(|hi| est > hi);
        if below || above {
            return Err(Error::EstimateOutsideInterval { est, lo, hi });
        }
        Ok(Estimate { est, lo, hi })
    }

    /// The point estimate.
    pub fn point(&self) -> f64 {
        self.est
    }

    /// Lower confidence limit, if supplied.
    pub fn lo(&self) -> Option<f64> {
        self.lo
    }

    /// Upper confidence limit, if supplied.
    pub fn hi(&self) -> Option<f64> {
        self.hi
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.lo, self.hi) {
            (Some(lo), Some(hi)) => write!(f, "RR {} ({}, {})", self.est, lo, hi),
            _ => write!(f, "RR {}", self.est),
        }
    }
}
