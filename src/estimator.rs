use crate::model::dimensions::composite_score;
use crate::model::estimate::{ProbabilityEstimate, clamp_pct};
use crate::model::profile::AnalysisProfile;

#[derive(Debug)]
pub struct EstimatorOutput {
    /// Weighted sum of the four dimension scores, on the 0..=10 scale.
    pub composite_score: f32,
    pub estimate: ProbabilityEstimate,
}

/// Blends the three heuristic sub-models into one clamped percentage.
pub fn run_estimator(profile: &AnalysisProfile) -> EstimatorOutput {
    let composite = composite_score(&profile.dimensions);

    let ranking_gap = profile.current_rank as f32 - profile.available_slots;
    let base_prob =
        (profile.rank_prob_ceiling - ranking_gap * profile.rank_penalty_per_slot).max(0.0);

    let score_prob = composite * profile.score_prob_scale;

    let remaining_slots = profile.available_slots - profile.strong_teams as f32;
    let open_field = (profile.total_candidates - profile.strong_teams) as f32;
    let competition_prob = remaining_slots / open_field * 100.0;

    let blended = base_prob * profile.blend_base
        + score_prob * profile.blend_score
        + competition_prob * profile.blend_competition;
    let final_prob = clamp_pct(blended, profile.prob_floor, profile.prob_cap);

    EstimatorOutput {
        composite_score: composite,
        estimate: ProbabilityEstimate {
            base_prob,
            score_prob,
            competition_prob,
            final_prob,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_models_default_profile() {
        let profile = AnalysisProfile::default_v1();
        let out = run_estimator(&profile);

        // rank 14, slots 8.5 -> gap 5.5 -> 50 - 44
        assert!((out.estimate.base_prob - 6.0).abs() < 1e-4);
        // 5.61 * 7
        assert!((out.estimate.score_prob - 39.27).abs() < 1e-3);
        // (8.5 - 6) / (46 - 6) * 100
        assert!((out.estimate.competition_prob - 6.25).abs() < 1e-4);
    }

    #[test]
    fn test_final_probability_default_profile() {
        let profile = AnalysisProfile::default_v1();
        let out = run_estimator(&profile);
        assert!((out.estimate.final_prob - 19.36).abs() < 0.01);
        assert!((out.composite_score - 5.61).abs() < 0.01);
    }

    #[test]
    fn test_final_probability_clamped_high() {
        let mut profile = AnalysisProfile::default_v1();
        for dim in &mut profile.dimensions {
            dim.score = 10.0;
        }
        profile.current_rank = 1;
        let out = run_estimator(&profile);
        assert_eq!(out.estimate.final_prob, profile.prob_cap);
    }

    #[test]
    fn test_final_probability_clamped_low() {
        let mut profile = AnalysisProfile::default_v1();
        for dim in &mut profile.dimensions {
            dim.score = 0.0;
        }
        profile.current_rank = 40;
        let out = run_estimator(&profile);
        assert_eq!(out.estimate.final_prob, profile.prob_floor);
    }

    #[test]
    fn test_final_probability_always_in_band() {
        // Clamp invariant under constant perturbation.
        let base = AnalysisProfile::default_v1();
        for rank in [1u32, 5, 14, 25, 40] {
            for score in [0.0f32, 2.5, 5.0, 7.5, 10.0] {
                let mut profile = base.clone();
                profile.current_rank = rank;
                for dim in &mut profile.dimensions {
                    dim.score = score;
                }
                let out = run_estimator(&profile);
                assert!(out.estimate.final_prob >= profile.prob_floor);
                assert!(out.estimate.final_prob <= profile.prob_cap);
            }
        }
    }

    #[test]
    fn test_base_prob_never_negative() {
        let mut profile = AnalysisProfile::default_v1();
        profile.current_rank = 46;
        let out = run_estimator(&profile);
        assert!(out.estimate.base_prob >= 0.0);
    }
}
