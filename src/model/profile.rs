use crate::error::ProfileError;
use crate::model::dimensions::DimensionScore;

/// A what-if case applied to the final probability on the chart panels.
#[derive(Debug, Clone)]
pub struct WhatIfCase {
    pub label: &'static str,
    pub multiplier: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct Competitor {
    pub name: &'static str,
    pub rank: u32,
}

/// Every constant the estimator and the chart panels read. The source model
/// is hand-authored; nothing here is configurable at runtime.
#[derive(Debug, Clone)]
pub struct AnalysisProfile {
    pub dimensions: Vec<DimensionScore>,

    /// Current continental rank of the focus team.
    pub current_rank: u32,
    /// Qualification slots for the confederation (half-slot from the
    /// inter-confederation playoff).
    pub available_slots: f32,
    /// Member associations competing for those slots.
    pub total_candidates: u32,
    /// Teams assumed to take a slot regardless of the model.
    pub strong_teams: u32,

    /// Ranking sub-model: base = max(0, ceiling - gap * penalty).
    pub rank_prob_ceiling: f32,
    pub rank_penalty_per_slot: f32,
    /// Composite sub-model: score_prob = composite * scale.
    pub score_prob_scale: f32,

    /// Blend weights for the three sub-models.
    pub blend_base: f32,
    pub blend_score: f32,
    pub blend_competition: f32,

    /// Clamp band for the blended probability, in percent.
    pub prob_floor: f32,
    pub prob_cap: f32,

    /// Five single-factor improvement cases for the sensitivity panel.
    pub sensitivity: Vec<WhatIfCase>,
    /// Four development scenarios for the comparison panel.
    pub scenarios: Vec<WhatIfCase>,
    /// Display cap for scenario bars, in percent.
    pub scenario_display_cap: f32,

    /// Pie-chart weights for the three sub-models. Presentational only;
    /// these do not match the blend weights in the source model.
    pub model_pie_weights: [f32; 3],

    pub competitors: Vec<Competitor>,
    pub focus_team: &'static str,
}

impl AnalysisProfile {
    pub fn default_v1() -> Self {
        Self {
            dimensions: vec![
                DimensionScore {
                    name: "Youth development",
                    label: "Youth",
                    score: 5.2,
                    weight: 0.40,
                    color: "#FF6B6B",
                },
                DimensionScore {
                    name: "National-team status",
                    label: "Nat. team",
                    score: 5.8,
                    weight: 0.20,
                    color: "#4ECDC4",
                },
                DimensionScore {
                    name: "League quality",
                    label: "League",
                    score: 6.1,
                    weight: 0.30,
                    color: "#45B7D1",
                },
                DimensionScore {
                    name: "External environment",
                    label: "External",
                    score: 4.9,
                    weight: 0.20,
                    color: "#96CEB4",
                },
            ],
            current_rank: 14,
            available_slots: 8.5,
            total_candidates: 46,
            strong_teams: 6,
            rank_prob_ceiling: 50.0,
            rank_penalty_per_slot: 8.0,
            score_prob_scale: 7.0,
            blend_base: 0.4,
            blend_score: 0.4,
            blend_competition: 0.2,
            prob_floor: 2.0,
            prob_cap: 35.0,
            sensitivity: vec![
                WhatIfCase {
                    label: "Youth boost",
                    multiplier: 1.25,
                    color: "#FF6B6B",
                },
                WhatIfCase {
                    label: "Ranking climb",
                    multiplier: 1.20,
                    color: "#4ECDC4",
                },
                WhatIfCase {
                    label: "League reform",
                    multiplier: 1.15,
                    color: "#45B7D1",
                },
                WhatIfCase {
                    label: "Naturalization",
                    multiplier: 1.30,
                    color: "#96CEB4",
                },
                WhatIfCase {
                    label: "Management",
                    multiplier: 1.10,
                    color: "#FFD166",
                },
            ],
            scenarios: vec![
                WhatIfCase {
                    label: "Current level",
                    multiplier: 1.0,
                    color: "#D3D3D3",
                },
                WhatIfCase {
                    label: "Youth improved",
                    multiplier: 1.25,
                    color: "#4CAF50",
                },
                WhatIfCase {
                    label: "Naturalization push",
                    multiplier: 1.30,
                    color: "#2196F3",
                },
                WhatIfCase {
                    label: "Best case",
                    multiplier: 1.5,
                    color: "#FF9800",
                },
            ],
            scenario_display_cap: 40.0,
            model_pie_weights: [35.0, 40.0, 25.0],
            competitors: vec![
                Competitor { name: "Japan", rank: 1 },
                Competitor { name: "Iran", rank: 2 },
                Competitor { name: "South Korea", rank: 3 },
                Competitor { name: "Australia", rank: 4 },
                Competitor { name: "Saudi Arabia", rank: 5 },
                Competitor { name: "Qatar", rank: 6 },
                Competitor { name: "Iraq", rank: 7 },
                Competitor { name: "UAE", rank: 8 },
                Competitor { name: "Oman", rank: 9 },
                Competitor { name: "Uzbekistan", rank: 11 },
                Competitor { name: "China", rank: 14 },
            ],
            focus_team: "China",
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.dimensions.len() != 4 {
            return Err(ProfileError::DimensionCount(self.dimensions.len()));
        }
        for dim in &self.dimensions {
            if !(0.0..=10.0).contains(&dim.score) {
                return Err(ProfileError::ScoreRange {
                    name: dim.name,
                    score: dim.score,
                });
            }
            if !(0.0..=1.0).contains(&dim.weight) {
                return Err(ProfileError::WeightRange {
                    name: dim.name,
                    weight: dim.weight,
                });
            }
        }
        let sum: f32 = self.dimensions.iter().map(|d| d.weight).sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ProfileError::WeightSum { sum });
        }

        if self.current_rank == 0 {
            return Err(ProfileError::Ranking("current_rank must be >= 1".into()));
        }
        if self.total_candidates <= self.strong_teams {
            return Err(ProfileError::Ranking(format!(
                "total_candidates ({}) must exceed strong_teams ({})",
                self.total_candidates, self.strong_teams
            )));
        }
        if self.available_slots <= 0.0 {
            return Err(ProfileError::Ranking(format!(
                "available_slots ({}) must be positive",
                self.available_slots
            )));
        }
        if self.prob_floor >= self.prob_cap {
            return Err(ProfileError::Ranking(format!(
                "prob_floor ({}) must be below prob_cap ({})",
                self.prob_floor, self.prob_cap
            )));
        }

        for case in self.sensitivity.iter().chain(self.scenarios.iter()) {
            if case.multiplier <= 0.0 {
                return Err(ProfileError::Multiplier {
                    label: case.label,
                    multiplier: case.multiplier,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = AnalysisProfile::default_v1();
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_weight_sum_precondition() {
        let mut profile = AnalysisProfile::default_v1();
        profile.dimensions[0].weight = 0.5;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ProfileError::WeightSum { .. }));
    }

    #[test]
    fn test_score_range_precondition() {
        let mut profile = AnalysisProfile::default_v1();
        profile.dimensions[2].score = 11.0;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ProfileError::ScoreRange { .. }));
    }

    #[test]
    fn test_degenerate_candidate_pool_rejected() {
        let mut profile = AnalysisProfile::default_v1();
        profile.total_candidates = 6;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ProfileError::Ranking(_)));
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let mut profile = AnalysisProfile::default_v1();
        profile.scenarios[1].multiplier = 0.0;
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ProfileError::Multiplier { .. }));
    }
}
