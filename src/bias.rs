//! Bias descriptors: typed, validated representations of the three bias
//! sources and their ordered composition.
//!
//! A [`Bias`] names one source of systematic error together with the
//! assumptions made about it (sub-variant options). A [`BiasSet`] is an
//! ordered sequence of distinct biases; the order encodes the assumed
//! temporal sequence of bias induction, which matters when selection and
//! misclassification are both present. Confounding is a state of nature and
//! is ordering-independent.
//!
//! All descriptors are immutable once constructed. Constructors validate
//! option combinations and fail fast with
//! [`Error::InvalidBiasConfiguration`] on unsupported requests.

use serde::Serialize;

use crate::error::Error;

/// The kind of a bias source, without its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BiasKind {
    /// Unmeasured confounding.
    Confounding,
    /// Selection into the analyzed sample.
    Selection,
    /// Differential misclassification of exposure or outcome.
    Misclassification,
}

impl std::fmt::Display for BiasKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BiasKind::Confounding => write!(f, "confounding"),
            BiasKind::Selection => write!(f, "selection"),
            BiasKind::Misclassification => write!(f, "misclassification"),
        }
    }
}

/// Population the causal effect is defined in, for selection bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionTarget {
    /// Effect in the whole source population.
    General,
    /// Effect in the selected population only.
    ///
    /// Selection then acts like confounding within the selected, and no
    /// direction or simplification assumptions apply.
    Selected,
}

/// Optional direction assumption for whole-population selection bias.
///
/// Assuming selection is associated with risk in a known direction halves
/// the parameter count: only the exposed (increased risk) or unexposed
/// (decreased risk) stratum contributes to the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionDirection {
    /// The factors responsible for selection increase outcome risk.
    IncreasedRisk,
    /// The factors responsible for selection decrease outcome risk.
    DecreasedRisk,
}

/// Which variable is differentially misclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MisclassificationAxis {
    /// The outcome is mismeasured.
    Outcome,
    /// The exposure is mismeasured.
    ///
    /// The published bound for this case holds only under the rare-outcome
    /// and rare-exposure approximations, so both must be declared.
    Exposure,
}

/// One bias source with its validated options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Bias {
    /// Unmeasured confounding. Carries no options.
    Confounding,

    /// Selection bias.
    Selection {
        /// Population the effect is defined in.
        target: SelectionTarget,
        /// Optional direction assumption (whole-population target only).
        direction: Option<SelectionDirection>,
        /// Whether the selection indicator itself is taken as the
        /// selection-bias factor (collapses each pairwise factor to a
        /// single parameter). Whole-population target only.
        simplify: bool,
    },

    /// Differential misclassification.
    Misclassification {
        /// Mismeasured variable.
        axis: MisclassificationAxis,
        /// Rare-outcome approximation declared (exposure axis only).
        rare_outcome: bool,
        /// Rare-exposure approximation declared (exposure axis only).
        rare_exposure: bool,
    },
}

impl Bias {
    /// Unmeasured confounding. Always valid.
    pub fn confounding() -> Bias {
        Bias::Confounding
    }

    /// Selection bias with the given target population and assumptions.
    ///
    /// # Errors
    ///
    /// `InvalidBiasConfiguration` if `target` is [`SelectionTarget::Selected`]
    /// and a direction or `simplify` is also requested: assumptions about the
    /// whole population have no meaning when the effect is defined in the
    /// selected population.
    pub fn selection(
        target: SelectionTarget,
        direction: Option<SelectionDirection>,
        simplify: bool,
    ) -> Result<Bias, Error> {
        if target == SelectionTarget::Selected {
            if direction.is_some() {
                return Err(Error::InvalidBiasConfiguration(
                    "selection with the selected-population target cannot take a \
                     direction assumption"
                        .to_string(),
                ));
            }
            if simplify {
                return Err(Error::InvalidBiasConfiguration(
                    "selection with the selected-population target cannot be \
                     simplified (S = U applies to the whole-population bound only)"
                        .to_string(),
                ));
            }
        }
        Ok(Bias::Selection {
            target,
            direction,
            simplify,
        })
    }

    /// Differential misclassification of the outcome or the exposure.
    ///
    /// # Errors
    ///
    /// `InvalidBiasConfiguration` if the rare flags do not match the axis:
    /// the exposure axis requires both `rare_outcome` and `rare_exposure` to
    /// be declared `true` (the published bound exists only under those
    /// approximations), and the outcome axis forbids them.
    pub fn misclassification(
        axis: MisclassificationAxis,
        rare_outcome: Option<bool>,
        rare_exposure: Option<bool>,
    ) -> Result<Bias, Error> {
        match axis {
            MisclassificationAxis::Outcome => {
                if rare_outcome.is_some() || rare_exposure.is_some() {
                    return Err(Error::InvalidBiasConfiguration(
                        "outcome misclassification does not take rare_outcome or \
                         rare_exposure flags"
                            .to_string(),
                    ));
                }
                Ok(Bias::Misclassification {
                    axis,
                    rare_outcome: false,
                    rare_exposure: false,
                })
            }
            MisclassificationAxis::Exposure => match (rare_outcome, rare_exposure) {
                (Some(true), Some(true)) => Ok(Bias::Misclassification {
                    axis,
                    rare_outcome: true,
                    rare_exposure: true,
                }),
                (None, _) | (_, None) => Err(Error::InvalidBiasConfiguration(
                    "exposure misclassification requires both rare_outcome and \
                     rare_exposure to be declared"
                        .to_string(),
                )),
                _ => Err(Error::InvalidBiasConfiguration(
                    "the exposure misclassification bound holds only under the \
                     rare-outcome and rare-exposure approximations; both flags \
                     must be true"
                        .to_string(),
                )),
            },
        }
    }

    /// The kind of this bias, without its options.
    pub fn kind(&self) -> BiasKind {
        match self {
            Bias::Confounding => BiasKind::Confounding,
            Bias::Selection { .. } => BiasKind::Selection,
            Bias::Misclassification { .. } => BiasKind::Misclassification,
        }
    }
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bias::Confounding => write!(f, "confounding"),
            Bias::Selection {
                target,
                direction,
                simplify,
            } => {
                let target = match target {
                    SelectionTarget::General => "general",
                    SelectionTarget::Selected => "selected",
                };
                write!(f, "selection ({}", target)?;
                match direction {
                    Some(SelectionDirection::IncreasedRisk) => write!(f, ", increased risk")?,
                    Some(SelectionDirection::DecreasedRisk) => write!(f, ", decreased risk")?,
                    None => {}
                }
                if *simplify {
                    write!(f, ", S = U")?;
                }
                write!(f, ")")
            }
            Bias::Misclassification { axis, .. } => {
                let axis = match axis {
                    MisclassificationAxis::Outcome => "outcome",
                    MisclassificationAxis::Exposure => "exposure",
                };
                write!(f, "misclassification ({})", axis)
            }
        }
    }
}

/// An ordered set of one to three distinct biases.
///
/// Order is preserved and semantically significant: when both selection and
/// misclassification are present, the earlier bias conditions the parameters
/// of the later one (see the registry module).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasSet {
    biases: Vec<Bias>,
}

impl BiasSet {
    /// Compose an ordered bias set.
    ///
    /// # Errors
    ///
    /// - `InvalidBiasConfiguration` if `biases` is empty.
    /// - `DuplicateBiasKind` if two biases share a kind.
    pub fn new(biases: Vec<Bias>) -> Result<BiasSet, Error> {
        if biases.is_empty() {
            return Err(Error::InvalidBiasConfiguration(
                "a bias set must contain at least one bias".to_string(),
            ));
        }
        for (i, bias) in biases.iter().enumerate() {
            if biases[..i].iter().any(|b| b.kind() == bias.kind()) {
                return Err(Error::DuplicateBiasKind(bias.kind()));
            }
        }
        Ok(BiasSet { biases })
    }

    /// The biases, in composition order.
    pub fn biases(&self) -> &[Bias] {
        &self.biases
    }

    /// Number of biases in the set.
    pub fn len(&self) -> usize {
        self.biases.len()
    }

    /// Whether the set is empty. Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.biases.is_empty()
    }

    /// Whether a bias of the given kind is present.
    pub fn contains(&self, kind: BiasKind) -> bool {
        self.biases.iter().any(|b| b.kind() == kind)
    }

    /// The ordered sensitivity parameters this set requires.
    ///
    /// Purely informational; evaluation goes through
    /// [`multi_bound`](crate::multi_bound).
    pub fn parameters(&self) -> Vec<crate::registry::Parameter> {
        crate::registry::derive(self).parameters
    }
}

impl std::fmt::Display for BiasSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, bias) in self.biases.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", bias)?;
        }
        Ok(())
    }
}
