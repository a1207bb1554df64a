//! Conversions from other effect measures onto the risk-ratio scale.
//!
//! The bounding engine works on risk ratios. Other measures convert through
//! the standard approximations: odds and hazard ratios pass through directly
//! when the outcome is rare and take the square-root correction otherwise,
//! and standardized mean differences map through `exp(0.91·d)`.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An effect estimate tagged with its measure class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measure {
    /// Already a risk ratio.
    RiskRatio(f64),

    /// Odds ratio.
    OddsRatio {
        /// Observed odds ratio.
        value: f64,
        /// Whether the outcome is rare enough for OR ≈ RR.
        rare_outcome: bool,
    },

    /// Hazard ratio.
    HazardRatio {
        /// Observed hazard ratio.
        value: f64,
        /// Whether the outcome is rare enough for HR ≈ RR.
        rare_outcome: bool,
    },

    /// Standardized mean difference (Cohen's d).
    MeanDifference(f64),

    /// Linear-regression coefficient, standardized by the outcome
    /// standard deviation.
    Regression {
        /// Estimated coefficient.
        coefficient: f64,
        /// Standard deviation of the outcome.
        sd: f64,
    },
}

impl Measure {
    /// Convert onto the canonical risk-ratio scale.
    ///
    /// # Errors
    ///
    /// `InvalidEstimate` if a ratio-valued measure is non-positive or
    /// non-finite, a mean difference is non-finite, or a regression standard
    /// deviation is non-positive.
    pub fn to_risk_ratio(&self) -> Result<f64, Error> {
        match *self {
            Measure::RiskRatio(value) => positive(value),

            Measure::OddsRatio { value, rare_outcome } => {
                let value = positive(value)?;
                if rare_outcome {
                    Ok(value)
                } else {
                    Ok(value.sqrt())
                }
            }

            Measure::HazardRatio { value, rare_outcome } => {
                let value = positive(value)?;
                if rare_outcome {
                    Ok(value)
                } else {
                    // Common-outcome correction via median survival odds.
                    let num = 1.0 - 0.5_f64.powf(value.sqrt());
                    let den = 1.0 - 0.5_f64.powf(value.recip().sqrt());
                    Ok(num / den)
                }
            }

            Measure::MeanDifference(d) => {
                if !d.is_finite() {
                    return Err(Error::InvalidEstimate { value: d });
                }
                Ok((0.91 * d).exp())
            }

            Measure::Regression { coefficient, sd } => {
                if !coefficient.is_finite() {
                    return Err(Error::InvalidEstimate { value: coefficient });
                }
                let sd = positive(sd)?;
                Ok((0.91 * coefficient / sd).exp())
            }
        }
    }
}

fn positive(value: f64) -> Result<f64, Error> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidEstimate { value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_ratio_passes_through() {
        assert_eq!(Measure::RiskRatio(2.5).to_risk_ratio().unwrap(), 2.5);
    }

    #[test]
    fn rare_odds_ratio_passes_through_common_takes_sqrt() {
        let rare = Measure::OddsRatio {
            value: 4.0,
            rare_outcome: true,
        };
        let common = Measure::OddsRatio {
            value: 4.0,
            rare_outcome: false,
        };
        assert_eq!(rare.to_risk_ratio().unwrap(), 4.0);
        assert!((common.to_risk_ratio().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn common_hazard_ratio_lies_between_one_and_the_hr() {
        let hr = 3.0;
        let rr = Measure::HazardRatio {
            value: hr,
            rare_outcome: false,
        }
        .to_risk_ratio()
        .unwrap();
        assert!(rr > 1.0 && rr < hr);
    }

    #[test]
    fn null_hazard_ratio_converts_to_null() {
        let rr = Measure::HazardRatio {
            value: 1.0,
            rare_outcome: false,
        }
        .to_risk_ratio()
        .unwrap();
        assert!((rr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mean_difference_uses_the_log_scale_factor() {
        let rr = Measure::MeanDifference(1.0).to_risk_ratio().unwrap();
        assert!((rr - 0.91_f64.exp()).abs() < 1e-12);
        // Negative differences land below the null.
        assert!(Measure::MeanDifference(-0.5).to_risk_ratio().unwrap() < 1.0);
    }

    #[test]
    fn regression_standardizes_by_the_outcome_sd() {
        let direct = Measure::MeanDifference(0.5).to_risk_ratio().unwrap();
        let scaled = Measure::Regression {
            coefficient: 1.0,
            sd: 2.0,
        }
        .to_risk_ratio()
        .unwrap();
        assert!((direct - scaled).abs() < 1e-12);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(Measure::RiskRatio(0.0).to_risk_ratio().is_err());
        assert!(Measure::OddsRatio {
            value: -2.0,
            rare_outcome: true
        }
        .to_risk_ratio()
        .is_err());
        assert!(Measure::Regression {
            coefficient: 1.0,
            sd: 0.0
        }
        .to_risk_ratio()
        .is_err());
    }
}
