use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Where a subject currently stands with respect to analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnalysisStep {
    WaitingInput,
    ReadyToRun,
    NotActive,
}

impl fmt::Display for AnalysisStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisStep::WaitingInput => "waiting_input",
            AnalysisStep::ReadyToRun => "ready_to_run",
            AnalysisStep::NotActive => "not_active",
        };
        write!(f, "{s}")
    }
}

impl FromStr for AnalysisStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting_input" => Ok(AnalysisStep::WaitingInput),
            "ready_to_run" => Ok(AnalysisStep::ReadyToRun),
            "not_active" => Ok(AnalysisStep::NotActive),
            other => Err(format!("unknown analysis step '{other}'")),
        }
    }
}

/// Per-subject persisted preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub min_diff: Decimal,
    pub max_sum: Decimal,
    pub step: AnalysisStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display_and_from_str() {
        for step in [
            AnalysisStep::WaitingInput,
            AnalysisStep::ReadyToRun,
            AnalysisStep::NotActive,
        ] {
            let s = step.to_string();
            assert_eq!(AnalysisStep::from_str(&s).unwrap(), step);
        }
    }

    #[test]
    fn rejects_unknown_step() {
        assert!(AnalysisStep::from_str("bogus").is_err());
    }
}
