//! E-value scenarios: degeneracy to the scalar threshold, confidence-limit
//! handling in both orientations, and search behavior.

use multibias::{
    multi_bound, multi_evalue, threshold, Bias, BiasSet, Error, Estimate, Evaluator,
    MisclassificationAxis, ParamValues, SelectionDirection, SelectionTarget,
};

fn confounding_only() -> BiasSet {
    BiasSet::new(vec![Bias::confounding()]).expect("valid set")
}

fn three_bias_set() -> BiasSet {
    BiasSet::new(vec![
        Bias::confounding(),
        Bias::selection(
            SelectionTarget::General,
            Some(SelectionDirection::IncreasedRisk),
            false,
        )
        .expect("valid selection"),
        Bias::misclassification(MisclassificationAxis::Exposure, Some(true), Some(true))
            .expect("valid misclassification"),
    ])
    .expect("valid set")
}

/// Confounding-only multi-bias E-values degenerate to the scalar threshold.
#[test]
fn confounding_only_equals_the_threshold() {
    let result = multi_evalue(&confounding_only(), &Estimate::rr(4.0).expect("estimate"))
        .expect("evalue");
    assert_eq!(result.point, threshold(4.0, 1.0));
    assert!((result.point - 7.464101615137754).abs() < 1e-9);
}

/// The E-value strength actually drives the bound to the observed ratio.
#[test]
fn evalue_strength_reaches_the_observed_ratio() {
    let set = three_bias_set();
    let est = 4.0;
    let result = multi_evalue(&set, &Estimate::rr(est).expect("estimate")).expect("evalue");

    let at_point =
        multi_bound(&set, &ParamValues::uniform(&set, result.point)).expect("bound");
    assert!(at_point >= est - 1e-6);

    // Slightly weaker uniform bias must fall short: the E-value is minimal.
    let at_below =
        multi_bound(&set, &ParamValues::uniform(&set, result.point * 0.999)).expect("bound");
    assert!(at_below < est);
}

/// Causative estimate with a CI: the lower limit takes a smaller E-value and
/// the upper limit is not applicable.
#[test]
fn causative_ci_reports_the_lower_limit() {
    let result = multi_evalue(
        &three_bias_set(),
        &Estimate::rr_ci(4.0, 2.5, 6.0).expect("estimate"),
    )
    .expect("evalue");

    let lower = result.lower.expect("lower limit E-value");
    assert!(lower > 1.0);
    assert!(lower < result.point);
    assert_eq!(result.upper, None);
}

/// Preventive estimate: orientation flips, so the upper limit is the one
/// reported and the lower is not applicable.
#[test]
fn preventive_ci_reports_the_upper_limit() {
    let result = multi_evalue(
        &three_bias_set(),
        &Estimate::rr_ci(0.25, 0.17, 0.4).expect("estimate"),
    )
    .expect("evalue");

    let upper = result.upper.expect("upper limit E-value");
    assert!(upper > 1.0);
    assert!(upper < result.point);
    assert_eq!(result.lower, None);
}

/// Preventive and causative framings of the same association agree.
#[test]
fn evalue_is_symmetric_under_reciprocal_framing() {
    let set = three_bias_set();
    let causative =
        multi_evalue(&set, &Estimate::rr(4.0).expect("estimate")).expect("evalue");
    let preventive =
        multi_evalue(&set, &Estimate::rr(0.25).expect("estimate")).expect("evalue");
    assert!((causative.point - preventive.point).abs() < 1e-8);
}

/// A confidence limit that already crosses the true value needs no bias.
#[test]
fn crossing_limit_reports_an_evalue_of_one() {
    let result = multi_evalue(
        &three_bias_set(),
        &Estimate::rr_ci(4.0, 0.8, 6.0).expect("estimate"),
    )
    .expect("evalue");
    assert_eq!(result.lower, Some(1.0));
    assert_eq!(result.upper, None);
}

/// A null estimate needs no bias at all.
#[test]
fn null_estimate_has_unit_evalue() {
    let result = multi_evalue(&three_bias_set(), &Estimate::rr(1.0).expect("estimate"))
        .expect("evalue");
    assert_eq!(result.point, 1.0);
}

/// E-values against a non-null true value shrink toward it.
#[test]
fn nonnull_true_value_shrinks_the_evalue() {
    let set = confounding_only();
    let estimate = Estimate::rr(4.0).expect("estimate");
    let against_null = Evaluator::new().evalue(&set, &estimate).expect("evalue");
    let against_two = Evaluator::new()
        .true_value(2.0)
        .evalue(&set, &estimate)
        .expect("evalue");
    assert!(against_two.point < against_null.point);
    assert_eq!(against_two.point, threshold(4.0, 2.0));
}

/// Estimate validation errors surface from construction, not mid-search.
#[test]
fn malformed_estimates_are_rejected() {
    assert!(matches!(
        Estimate::rr(-2.0).unwrap_err(),
        Error::InvalidEstimate { .. }
    ));
    assert!(matches!(
        Estimate::rr_ci(3.0, 5.0, 4.0).unwrap_err(),
        Error::InvalidInterval { .. }
    ));
    assert!(matches!(
        Estimate::rr_ci(8.0, 2.5, 6.0).unwrap_err(),
        Error::EstimateOutsideInterval { .. }
    ));
}

/// A starved search budget fails loudly instead of returning a coarse value.
#[test]
fn starved_search_does_not_converge() {
    // Mixed bound shape (joint + direct terms) forces the bisection path.
    let set = BiasSet::new(vec![
        Bias::confounding(),
        Bias::misclassification(MisclassificationAxis::Outcome, None, None)
            .expect("valid misclassification"),
    ])
    .expect("valid set");
    let err = Evaluator::new()
        .max_iterations(1)
        .evalue(&set, &Estimate::rr(50.0).expect("estimate"))
        .unwrap_err();
    assert!(matches!(err, Error::SearchDidNotConverge { .. }));
}

/// Omitting required parameters names every missing identifier at once.
#[test]
fn missing_parameters_are_enumerated() {
    let set = three_bias_set();
    let err = multi_bound(&set, &ParamValues::new().set("RRAUc", 2.0)).unwrap_err();
    match err {
        Error::MissingParameter { names } => {
            assert_eq!(names, ["RRUcY", "RRUsYA1", "RRSUsA1", "ORYAaS"]);
        }
        other => panic!("expected MissingParameter, got {:?}", other),
    }
}
