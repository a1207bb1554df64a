//! End-to-end integration tests.

use multibias::{
    multi_bound, multi_evalue, output, Bias, BiasSet, Estimate, MisclassificationAxis,
    ParamValues, SelectionDirection, SelectionTarget,
};

fn example_set() -> BiasSet {
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

/// Basic smoke test that the API works.
#[test]
fn smoke_test() {
    let set = example_set();
    let bound = multi_bound(&set, &ParamValues::uniform(&set, 2.0)).expect("bound");
    assert!(bound > 1.0);

    let result = multi_evalue(&set, &Estimate::rr(4.0).expect("estimate")).expect("evalue");
    assert!(result.point > 1.0);
}

/// The documented worked example reproduces end to end.
#[test]
fn worked_example() {
    let set = example_set();
    let values = ParamValues::new()
        .set("RRAUc", 1.5)
        .set("RRUcY", 2.0)
        .set("RRUsYA1", 2.5)
        .set("RRSUsA1", 1.25)
        .set("ORYAaS", 1.75);
    let bound = multi_bound(&set, &values).expect("bound");
    assert!((bound - 2.386363636363636).abs() < 1e-10);
}

/// Parameter description is ordered and complete.
#[test]
fn describe_parameters() {
    let parameters = example_set().parameters();
    let symbols: Vec<_> = parameters.iter().map(|p| p.symbol).collect();
    assert_eq!(
        symbols,
        ["RRAUc", "RRUcY", "RRUsYA1", "RRSUsA1", "ORYAaS"]
    );
}

/// Test result serialization.
#[test]
fn result_serialization() {
    let result =
        multi_evalue(&example_set(), &Estimate::rr_ci(4.0, 2.5, 6.0).expect("estimate"))
            .expect("evalue");

    let json = serde_json::to_string(&result).expect("should serialize");
    assert!(json.contains("point"));
    assert!(json.contains("lower"));

    let pretty = output::json::to_json_pretty(&result).expect("should serialize");
    assert!(pretty.contains('\n'));
}

/// Terminal rendering covers the parameter table and the E-value summary.
#[test]
fn terminal_rendering() {
    let set = example_set();
    let table = output::terminal::format_parameters(&set);
    assert!(table.contains("ORYAaS"));

    let estimate = Estimate::rr_ci(4.0, 2.5, 6.0).expect("estimate");
    let result = multi_evalue(&set, &estimate).expect("evalue");
    let rendered = output::terminal::format_evalue(&set, &estimate, &result);
    assert!(rendered.contains("E-value"));
}

/// Bias sets display their composition in order.
#[test]
fn bias_set_display() {
    assert_eq!(
        example_set().to_string(),
        "confounding, selection (general, increased risk), misclassification (exposure)"
    );
}
