pub mod overview;
pub mod scenarios;

use std::error::Error;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use plotters::style::RGBColor;

use crate::estimator::EstimatorOutput;
use crate::model::profile::{AnalysisProfile, WhatIfCase};

/// Renders both figures into `out_dir`.
pub fn render_all(
    profile: &AnalysisProfile,
    output: &EstimatorOutput,
    out_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    overview::render_overview(profile, output, &out_dir.join("overview.png"))?;
    scenarios::render_scenarios(
        profile,
        output.estimate.final_prob,
        &out_dir.join("scenarios.png"),
    )?;
    Ok(())
}

/// Sensitivity bars: final probability scaled by each case multiplier.
pub fn sensitivity_values(final_prob: f32, cases: &[WhatIfCase]) -> Vec<f32> {
    cases.iter().map(|c| final_prob * c.multiplier).collect()
}

/// Scenario bars: scaled final probability, capped for display.
pub fn scenario_values(final_prob: f32, cases: &[WhatIfCase], display_cap: f32) -> Vec<f32> {
    cases
        .iter()
        .map(|c| (final_prob * c.multiplier).min(display_cap))
        .collect()
}

/// Parses `#RRGGBB`; malformed hints fall back to a neutral gray.
pub fn hex_color(hex: &str) -> RGBColor {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return RGBColor(128, 128, 128);
    }
    let parse = |s: &str| u8::from_str_radix(s, 16);
    match (
        parse(&digits[0..2]),
        parse(&digits[2..4]),
        parse(&digits[4..6]),
    ) {
        (Ok(r), Ok(g), Ok(b)) => RGBColor(r, g, b),
        _ => RGBColor(128, 128, 128),
    }
}

/// Closed radar polygon on the unit disc, first vertex at the top,
/// counterclockwise. Returns n + 1 points with the first repeated at the end.
pub fn radar_polygon(scores: &[f32], max_score: f32) -> Vec<(f32, f32)> {
    let n = scores.len();
    let mut points = Vec::with_capacity(n + 1);
    for (i, &score) in scores.iter().enumerate() {
        let theta = FRAC_PI_2 + i as f32 * TAU / n as f32;
        let r = score / max_score;
        points.push((r * theta.cos(), r * theta.sin()));
    }
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cases(multipliers: &[f32]) -> Vec<WhatIfCase> {
        multipliers
            .iter()
            .map(|&multiplier| WhatIfCase {
                label: "case",
                multiplier,
                color: "#808080",
            })
            .collect()
    }

    #[test]
    fn test_sensitivity_values_scale_final_prob() {
        let profile = AnalysisProfile::default_v1();
        let values = sensitivity_values(19.36, &profile.sensitivity);
        for (case, value) in profile.sensitivity.iter().zip(&values) {
            assert!((value - 19.36 * case.multiplier).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sensitivity_strictly_increasing_with_multiplier() {
        let values = sensitivity_values(19.36, &cases(&[1.10, 1.15, 1.20, 1.25, 1.30]));
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_scenario_values_respect_display_cap() {
        let profile = AnalysisProfile::default_v1();
        let values = scenario_values(35.0, &profile.scenarios, profile.scenario_display_cap);
        for value in &values {
            assert!(*value <= profile.scenario_display_cap);
        }
        // best case (x1.5) must hit the cap from a 35% final probability
        assert_eq!(values[3], profile.scenario_display_cap);
    }

    #[test]
    fn test_hex_color_parses_dimension_hints() {
        let c = hex_color("#FF6B6B");
        assert_eq!((c.0, c.1, c.2), (255, 107, 107));
        let gray = hex_color("not-a-color");
        assert_eq!((gray.0, gray.1, gray.2), (128, 128, 128));
    }

    #[test]
    fn test_radar_polygon_closes_at_top() {
        let poly = radar_polygon(&[10.0, 5.0, 5.0, 5.0], 10.0);
        assert_eq!(poly.len(), 5);
        assert_eq!(poly[0], poly[4]);
        // first vertex straight up at full radius
        assert!(poly[0].0.abs() < 1e-5);
        assert!((poly[0].1 - 1.0).abs() < 1e-5);
    }
}
