use serde::Serialize;

use crate::estimator::EstimatorOutput;
use crate::model::estimate::ProbabilityEstimate;
use crate::model::profile::AnalysisProfile;

#[derive(Debug, Serialize)]
pub struct SummaryJson {
    pub tool: &'static str,
    pub version: &'static str,
    pub focus_team: &'static str,
    pub composite_score: f32,
    pub dimensions: Vec<DimensionSummary>,
    pub probability: ProbabilityEstimate,
    pub sensitivity: Vec<CaseSummary>,
    pub scenarios: Vec<CaseSummary>,
}

#[derive(Debug, Serialize)]
pub struct DimensionSummary {
    pub name: &'static str,
    pub score: f32,
    pub weight: f32,
}

#[derive(Debug, Serialize)]
pub struct CaseSummary {
    pub label: &'static str,
    pub multiplier: f32,
    pub probability: f32,
}

pub fn build_summary(
    profile: &AnalysisProfile,
    output: &EstimatorOutput,
    sensitivity_values: &[f32],
    scenario_values: &[f32],
) -> SummaryJson {
    SummaryJson {
        tool: "wcq-outlook",
        version: env!("CARGO_PKG_VERSION"),
        focus_team: profile.focus_team,
        composite_score: output.composite_score,
        dimensions: profile
            .dimensions
            .iter()
            .map(|d| DimensionSummary {
                name: d.name,
                score: d.score,
                weight: d.weight,
            })
            .collect(),
        probability: output.estimate,
        sensitivity: profile
            .sensitivity
            .iter()
            .zip(sensitivity_values)
            .map(|(case, &probability)| CaseSummary {
                label: case.label,
                multiplier: case.multiplier,
                probability,
            })
            .collect(),
        scenarios: profile
            .scenarios
            .iter()
            .zip(scenario_values)
            .map(|(case, &probability)| CaseSummary {
                label: case.label,
                multiplier: case.multiplier,
                probability,
            })
            .collect(),
    }
}

pub fn render_summary_json(summary: &SummaryJson) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
