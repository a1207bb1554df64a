//! Error types for bias construction, bound evaluation, and E-value search.

use crate::bias::BiasKind;

/// Error type for all fallible operations in this crate.
///
/// Every error is terminal for the call that produced it: no partial results
/// are returned and nothing is retried (the computations are pure).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A bias constructor was given an unsupported option combination.
    InvalidBiasConfiguration(String),

    /// A bias set contained two biases of the same kind.
    DuplicateBiasKind(BiasKind),

    /// Required sensitivity parameters were not supplied.
    ///
    /// Lists every missing symbol, in derivation order, in one shot.
    MissingParameter {
        /// Symbols of all parameters required but absent.
        names: Vec<String>,
    },

    /// A sensitivity parameter value was outside its valid domain.
    InvalidParameterValue {
        /// Symbol of the offending parameter.
        symbol: String,
        /// The rejected value.
        value: f64,
    },

    /// An observed estimate (or true value) was non-positive or non-finite.
    InvalidEstimate {
        /// The rejected value.
        value: f64,
    },

    /// A confidence interval had its limits out of order.
    InvalidInterval {
        /// Lower limit as supplied.
        lo: f64,
        /// Upper limit as supplied.
        hi: f64,
    },

    /// The point estimate fell outside its own confidence interval.
    EstimateOutsideInterval {
        /// Point estimate.
        est: f64,
        /// Lower limit, if supplied.
        lo: Option<f64>,
        /// Upper limit, if supplied.
        hi: Option<f64>,
    },

    /// The uniform-strength search exhausted its bracket or iteration budget.
    ///
    /// Returned instead of a silently coarse answer when the bound cannot be
    /// driven to the target within the configured limits.
    SearchDidNotConverge {
        /// Ratio the bound was being driven toward.
        target: f64,
        /// Iterations spent before giving up.
        iterations: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBiasConfiguration(detail) => {
                write!(f, "invalid bias configuration: {}", detail)
            }
            Error::DuplicateBiasKind(kind) => {
                write!(f, "bias set may contain at most one {} bias", kind)
            }
            Error::MissingParameter { names } => {
                write!(f, "missing sensitivity parameters: {}", names.join(", "))
            }
            Error::InvalidParameterValue { symbol, value } => {
                write!(
                    f,
                    "parameter {} = {} is invalid; sensitivity parameters must be \
                     positive, finite, and pairwise satisfy x + y > 1",
                    symbol, value
                )
            }
            Error::InvalidEstimate { value } => {
                write!(
                    f,
                    "estimate {} is invalid; risk ratios must be positive and finite",
                    value
                )
            }
            Error::InvalidInterval { lo, hi } => {
                write!(f, "interval limits out of order: lo = {} > hi = {}", lo, hi)
            }
            Error::EstimateOutsideInterval { est, lo, hi } => {
                write!(
                    f,
                    "estimate {} lies outside its confidence interval ({:?}, {:?})",
                    est, lo, hi
                )
            }
            Error::SearchDidNotConverge { target, iterations } => {
                write!(
                    f,
                    "uniform bias strength search did not converge to bound {} \
                     within {} iterations",
                    target, iterations
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_lists_all_names() {
        let err = Error::MissingParameter {
            names: vec!["RRAUc".to_string(), "RRUcY".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("RRAUc"));
        assert!(message.contains("RRUcY"));
    }

    #[test]
    fn display_is_nonempty_for_all_variants() {
        let errors = [
            Error::InvalidBiasConfiguration("x".to_string()),
            Error::DuplicateBiasKind(BiasKind::Confounding),
            Error::InvalidParameterValue {
                symbol: "RRAUc".to_string(),
                value: -1.0,
            },
            Error::InvalidEstimate { value: 0.0 },
            Error::InvalidInterval { lo: 2.0, hi: 1.0 },
            Error::EstimateOutsideInterval {
                est: 4.0,
                lo: Some(5.0),
                hi: Some(6.0),
            },
            Error::SearchDidNotConverge {
                target: 4.0,
                iterations: 3,
            },
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
