//! Canonical sensitivity-parameter identifiers.
//!
//! Symbol conventions follow the published decomposition: `Uc` is the
//! unmeasured confounder, `Us` the selection-bias factor, `Usc` selection
//! treated as a confounder within the selected population, `S` the selection
//! indicator, `A`/`Y` the true exposure/outcome. A lowercase `a` or `y`
//! inside a symbol stands for the mismeasured version (`A*`, `Y*`).

use serde::Serialize;

/// Scale a sensitivity parameter is valued on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamRole {
    /// Risk-ratio scale.
    RiskRatio,
    /// Odds-ratio scale, approximated as a risk ratio under the rare
    /// outcome/exposure assumptions.
    OddsRatio,
}

/// Identifier of one sensitivity parameter.
///
/// The full identifier space is fixed; which subset a bias set requires is
/// decided by the registry derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)] // variants are the symbols themselves; see `label`
pub enum ParamId {
    // Confounding
    RRAUc,
    RRUcY,
    // Selection, true exposure and outcome
    RRUsYA1,
    RRSUsA1,
    RRUsYA0,
    RRSUsA0,
    RRSYA1,
    RRSYA0,
    RRAUscS,
    RRUscY,
    // Selection after exposure misclassification (strata of A*)
    RRUsYa1,
    RRSUsa1,
    RRUsYa0,
    RRSUsa0,
    RRSYa1,
    RRSYa0,
    RRaUscS,
    // Selection after outcome misclassification (relations to Y*)
    RRUsyA1,
    RRUsyA0,
    RRSyA1,
    RRSyA0,
    RRUscy,
    // Misclassification
    RRAYy,
    RRAYyS,
    ORYAa,
    ORYAaS,
}

impl ParamId {
    /// Canonical identifier string, used as the key in parameter maps.
    pub fn symbol(&self) -> &'static str {
        match self {
            ParamId::RRAUc => "RRAUc",
            ParamId::RRUcY => "RRUcY",
            ParamId::RRUsYA1 => "RRUsYA1",
            ParamId::RRSUsA1 => "RRSUsA1",
            ParamId::RRUsYA0 => "RRUsYA0",
            ParamId::RRSUsA0 => "RRSUsA0",
            ParamId::RRSYA1 => "RRSYA1",
            ParamId::RRSYA0 => "RRSYA0",
            ParamId::RRAUscS => "RRAUscS",
            ParamId::RRUscY => "RRUscY",
            ParamId::RRUsYa1 => "RRUsYa1",
            ParamId::RRSUsa1 => "RRSUsa1",
            ParamId::RRUsYa0 => "RRUsYa0",
            ParamId::RRSUsa0 => "RRSUsa0",
            ParamId::RRSYa1 => "RRSYa1",
            ParamId::RRSYa0 => "RRSYa0",
            ParamId::RRaUscS => "RRaUscS",
            ParamId::RRUsyA1 => "RRUsyA1",
            ParamId::RRUsyA0 => "RRUsyA0",
            ParamId::RRSyA1 => "RRSyA1",
            ParamId::RRSyA0 => "RRSyA0",
            ParamId::RRUscy => "RRUscy",
            ParamId::RRAYy => "RRAYy",
            ParamId::RRAYyS => "RRAYyS",
            ParamId::ORYAa => "ORYAa",
            ParamId::ORYAaS => "ORYAaS",
        }
    }

    /// Print-ready subscripted label.
    pub fn label(&self) -> &'static str {
        match self {
            ParamId::RRAUc => "RR_{AUc}",
            ParamId::RRUcY => "RR_{UcY}",
            ParamId::RRUsYA1 => "RR_{UsY|A=1}",
            ParamId::RRSUsA1 => "RR_{SUs|A=1}",
            ParamId::RRUsYA0 => "RR_{UsY|A=0}",
            ParamId::RRSUsA0 => "RR_{SUs|A=0}",
            ParamId::RRSYA1 => "RR_{SY|A=1}",
            ParamId::RRSYA0 => "RR_{SY|A=0}",
            ParamId::RRAUscS => "RR_{AUsc|S=1}",
            ParamId::RRUscY => "RR_{UscY}",
            ParamId::RRUsYa1 => "RR_{UsY|A*=1}",
            ParamId::RRSUsa1 => "RR_{SUs|A*=1}",
            ParamId::RRUsYa0 => "RR_{UsY|A*=0}",
            ParamId::RRSUsa0 => "RR_{SUs|A*=0}",
            ParamId::RRSYa1 => "RR_{SY|A*=1}",
            ParamId::RRSYa0 => "RR_{SY|A*=0}",
            ParamId::RRaUscS => "RR_{A*Usc|S=1}",
            ParamId::RRUsyA1 => "RR_{UsY*|A=1}",
            ParamId::RRUsyA0 => "RR_{UsY*|A=0}",
            ParamId::RRSyA1 => "RR_{SY*|A=1}",
            ParamId::RRSyA0 => "RR_{SY*|A=0}",
            ParamId::RRUscy => "RR_{UscY*}",
            ParamId::RRAYy => "RR_{AY*}",
            ParamId::RRAYyS => "RR_{AY*|S=1}",
            ParamId::ORYAa => "OR_{YA*}",
            ParamId::ORYAaS => "OR_{YA*|S=1}",
        }
    }

    /// Scale the parameter is valued on.
    pub fn role(&self) -> ParamRole {
        match self {
            ParamId::ORYAa | ParamId::ORYAaS => ParamRole::OddsRatio,
            _ => ParamRole::RiskRatio,
        }
    }
}

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ParamId; 26] = [
        ParamId::RRAUc,
        ParamId::RRUcY,
        ParamId::RRUsYA1,
        ParamId::RRSUsA1,
        ParamId::RRUsYA0,
        ParamId::RRSUsA0,
        ParamId::RRSYA1,
        ParamId::RRSYA0,
        ParamId::RRAUscS,
        ParamId::RRUscY,
        ParamId::RRUsYa1,
        ParamId::RRSUsa1,
        ParamId::RRUsYa0,
        ParamId::RRSUsa0,
        ParamId::RRSYa1,
        ParamId::RRSYa0,
        ParamId::RRaUscS,
        ParamId::RRUsyA1,
        ParamId::RRUsyA0,
        ParamId::RRSyA1,
        ParamId::RRSyA0,
        ParamId::RRUscy,
        ParamId::RRAYy,
        ParamId::RRAYyS,
        ParamId::ORYAa,
        ParamId::ORYAaS,
    ];

    #[test]
    fn symbols_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.symbol(), b.symbol());
            }
        }
    }

    #[test]
    fn only_the_exposure_misclassification_parameters_are_odds_ratios() {
        for id in ALL {
            let expected = matches!(id, ParamId::ORYAa | ParamId::ORYAaS);
            assert_eq!(id.role() == ParamRole::OddsRatio, expected, "{}", id);
        }
    }

    #[test]
    fn labels_mark_mismeasured_variables() {
        assert!(ParamId::RRUsYa1.label().contains("A*"));
        assert!(ParamId::RRUsyA1.label().contains("Y*"));
        assert!(!ParamId::RRUsYA1.label().contains('*'));
    }
}
