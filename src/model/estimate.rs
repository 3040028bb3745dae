use serde::Serialize;

/// Output of the estimator. All fields are percentages; `final_prob` is
/// clamped to the profile's floor/cap band.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProbabilityEstimate {
    pub base_prob: f32,
    pub score_prob: f32,
    pub competition_prob: f32,
    pub final_prob: f32,
}

pub fn clamp_pct(x: f32, floor: f32, cap: f32) -> f32 {
    if x < floor {
        floor
    } else if x > cap {
        cap
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_pct() {
        assert_eq!(clamp_pct(19.358, 2.0, 35.0), 19.358);
        assert_eq!(clamp_pct(-4.0, 2.0, 35.0), 2.0);
        assert_eq!(clamp_pct(80.0, 2.0, 35.0), 35.0);
        assert_eq!(clamp_pct(2.0, 2.0, 35.0), 2.0);
        assert_eq!(clamp_pct(35.0, 2.0, 35.0), 35.0);
    }
}
