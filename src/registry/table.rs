//! The combinatorial derivation table.
//!
//! `derive` walks the bias set in order and, for each bias, selects its
//! parameter identifiers and bound term from a fixed table keyed by the
//! bias kind, its sub-variant, and the kinds that precede it. Exhaustiveness
//! of every case is checked by the compiler.

use crate::bias::{
    Bias, BiasKind, BiasSet, MisclassificationAxis, SelectionDirection, SelectionTarget,
};
use crate::registry::{Derivation, ParamId, Parameter, Term};

/// Derive the required parameters and bound shape for a bias set.
///
/// Total over all valid bias sets and deterministic: every distinct set maps
/// to exactly one derivation.
pub fn derive(set: &BiasSet) -> Derivation {
    let mut parameters = Vec::new();
    let mut terms = Vec::new();

    for (position, bias) in set.biases().iter().enumerate() {
        match bias {
            Bias::Confounding => {
                push_joint(
                    &mut parameters,
                    &mut terms,
                    BiasKind::Confounding,
                    ParamId::RRAUc,
                    ParamId::RRUcY,
                );
            }
            Bias::Selection {
                target,
                direction,
                simplify,
            } => {
                let mismeasured = preceding_misclassification(set, position);
                derive_selection(
                    &mut parameters,
                    &mut terms,
                    *target,
                    *direction,
                    *simplify,
                    mismeasured,
                );
            }
            Bias::Misclassification { axis, .. } => {
                let within_selected = preceding_selection(set, position);
                let id = match (axis, within_selected) {
                    (MisclassificationAxis::Outcome, false) => ParamId::RRAYy,
                    (MisclassificationAxis::Outcome, true) => ParamId::RRAYyS,
                    (MisclassificationAxis::Exposure, false) => ParamId::ORYAa,
                    (MisclassificationAxis::Exposure, true) => ParamId::ORYAaS,
                };
                push_direct(
                    &mut parameters,
                    &mut terms,
                    BiasKind::Misclassification,
                    id,
                );
            }
        }
    }

    Derivation { parameters, terms }
}

/// Axis of a misclassification bias occurring before `position`, if any.
fn preceding_misclassification(
    set: &BiasSet,
    position: usize,
) -> Option<MisclassificationAxis> {
    set.biases()[..position].iter().find_map(|b| match b {
        Bias::Misclassification { axis, .. } => Some(*axis),
        _ => None,
    })
}

/// Whether a selection bias occurs before `position`.
fn preceding_selection(set: &BiasSet, position: usize) -> bool {
    set.biases()[..position]
        .iter()
        .any(|b| b.kind() == BiasKind::Selection)
}

/// Per-variant selection symbols: pairwise factors per exposure stratum,
/// their simplified (S = U) single-parameter forms, and the
/// selected-population pair.
struct SelectionSymbols {
    exposed: (ParamId, ParamId),
    unexposed: (ParamId, ParamId),
    exposed_simple: ParamId,
    unexposed_simple: ParamId,
    selected: (ParamId, ParamId),
}

/// Selection symbols given the mismeasurement state induced by a preceding
/// misclassification bias.
fn selection_symbols(mismeasured: Option<MisclassificationAxis>) -> SelectionSymbols {
    match mismeasured {
        // True exposure and outcome: selection is the first distortion.
        None => SelectionSymbols {
            exposed: (ParamId::RRUsYA1, ParamId::RRSUsA1),
            unexposed: (ParamId::RRUsYA0, ParamId::RRSUsA0),
            exposed_simple: ParamId::RRSYA1,
            unexposed_simple: ParamId::RRSYA0,
            selected: (ParamId::RRAUscS, ParamId::RRUscY),
        },
        // Selection acts on the mismeasured exposure: strata are of A*.
        Some(MisclassificationAxis::Exposure) => SelectionSymbols {
            exposed: (ParamId::RRUsYa1, ParamId::RRSUsa1),
            unexposed: (ParamId::RRUsYa0, ParamId::RRSUsa0),
            exposed_simple: ParamId::RRSYa1,
            unexposed_simple: ParamId::RRSYa0,
            selected: (ParamId::RRaUscS, ParamId::RRUscY),
        },
        // Selection acts on the mismeasured outcome: Y-side relations are to Y*.
        Some(MisclassificationAxis::Outcome) => SelectionSymbols {
            exposed: (ParamId::RRUsyA1, ParamId::RRSUsA1),
            unexposed: (ParamId::RRUsyA0, ParamId::RRSUsA0),
            exposed_simple: ParamId::RRSyA1,
            unexposed_simple: ParamId::RRSyA0,
            selected: (ParamId::RRAUscS, ParamId::RRUscy),
        },
    }
}

fn derive_selection(
    parameters: &mut Vec<Parameter>,
    terms: &mut Vec<Term>,
    target: SelectionTarget,
    direction: Option<SelectionDirection>,
    simplify: bool,
    mismeasured: Option<MisclassificationAxis>,
) {
    let symbols = selection_symbols(mismeasured);

    match target {
        // Within the selected population, selection behaves like confounding
        // by the selection-bias factor.
        SelectionTarget::Selected => {
            push_joint(
                parameters,
                terms,
                BiasKind::Selection,
                symbols.selected.0,
                symbols.selected.1,
            );
        }
        SelectionTarget::General => {
            let exposed = !matches!(direction, Some(SelectionDirection::DecreasedRisk));
            let unexposed = !matches!(direction, Some(SelectionDirection::IncreasedRisk));
            let mut stratum = |pair: (ParamId, ParamId), simple: ParamId| {
                if simplify {
                    push_direct(parameters, terms, BiasKind::Selection, simple);
                } else {
                    push_joint(parameters, terms, BiasKind::Selection, pair.0, pair.1);
                }
            };
            if exposed {
                stratum(symbols.exposed, symbols.exposed_simple);
            }
            if unexposed {
                stratum(symbols.unexposed, symbols.unexposed_simple);
            }
        }
    }
}

fn push_joint(
    parameters: &mut Vec<Parameter>,
    terms: &mut Vec<Term>,
    bias: BiasKind,
    x: ParamId,
    y: ParamId,
) {
    parameters.push(parameter(x, bias));
    parameters.push(parameter(y, bias));
    terms.push(Term::Joint(x, y));
}

fn push_direct(
    parameters: &mut Vec<Parameter>,
    terms: &mut Vec<Term>,
    bias: BiasKind,
    id: ParamId,
) {
    parameters.push(parameter(id, bias));
    terms.push(Term::Direct(id));
}

fn parameter(id: ParamId, bias: BiasKind) -> Parameter {
    Parameter {
        symbol: id.symbol(),
        label: id.label(),
        role: id.role(),
        bias,
    }
}
