//! Terminal output formatting with colors.

use colored::Colorize;

use crate::bias::BiasSet;
use crate::estimate::Estimate;
use crate::evalue::MultiEvalue;
use crate::registry::ParamRole;

/// Format the derived sensitivity parameters of a bias set for
/// human-readable terminal output.
pub fn format_parameters(set: &BiasSet) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("multibias\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Biases: {}\n\n", set));
    let header = format!(
        "  {:<10} {:<16} {:<12} {}",
        "Symbol", "Label", "Scale", "Bias"
    );
    output.push_str(&format!("{}\n", header.bold()));

    let parameters = set.parameters();
    let mut any_odds_ratio = false;
    for parameter in &parameters {
        let scale = match parameter.role {
            ParamRole::RiskRatio => "risk ratio",
            ParamRole::OddsRatio => {
                any_odds_ratio = true;
                "odds ratio"
            }
        };
        output.push_str(&format!(
            "  {:<10} {:<16} {:<12} {}\n",
            parameter.symbol, parameter.label, scale, parameter.bias
        ));
    }

    if any_odds_ratio {
        output.push('\n');
        output.push_str(
            "  Odds-ratio parameters are approximated as risk ratios under the\n",
        );
        output.push_str("  declared rare outcome/exposure assumptions.\n");
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output
}

/// Format a multi-bias E-value result for human-readable terminal output.
pub fn format_evalue(set: &BiasSet, estimate: &Estimate, result: &MultiEvalue) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("multibias\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Biases:   {}\n", set));
    output.push_str(&format!("  Observed: {}\n\n", estimate));

    if result.point <= 1.0 {
        output.push_str(&format!(
            "  {}\n\n",
            "\u{2713} No bias is needed to explain this estimate"
                .green()
                .bold()
        ));
    } else {
        output.push_str(&format!(
            "  {} {:.2}\n\n",
            "Multi-bias E-value:".bold(),
            result.point
        ));
    }

    match (result.lower, result.upper) {
        (Some(limit), None) => {
            output.push_str(&format!("    Lower confidence limit: {}\n", evalue_line(limit)));
            output.push_str("    Upper confidence limit: not applicable\n");
        }
        (None, Some(limit)) => {
            output.push_str("    Lower confidence limit: not applicable\n");
            output.push_str(&format!("    Upper confidence limit: {}\n", evalue_line(limit)));
        }
        _ => {
            output.push_str("    No confidence limits supplied\n");
        }
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');
    output
}

fn evalue_line(limit: f64) -> String {
    if limit <= 1.0 {
        format!("{}", "1 (already crosses the true value)".yellow())
    } else {
        format!("{:.2}", limit)
    }
}
