pub mod json;
pub mod text;

use crate::model::estimate::ProbabilityEstimate;

#[derive(Debug, Clone)]
pub struct DimensionRow {
    pub name: &'static str,
    pub score: f32,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub dimensions: Vec<DimensionRow>,
    pub composite_score: f32,
    pub estimate: ProbabilityEstimate,
    pub focus_team: &'static str,
}

/// The five recommendation strings shown on the chart text panel and in the
/// report's conclusions.
pub const KEY_RECOMMENDATIONS: [&str; 5] = [
    "1. Strengthen the youth training system",
    "2. Push the continental ranking into the top 12",
    "3. Use naturalized players for key positions only",
    "4. Improve league competitiveness for domestic players",
    "5. Optimize qualifier preparation and scheduling",
];

pub fn format_pct(v: f32) -> String {
    format!("{:.1}%", v)
}

/// One filled star per whole point of a 0..=10 score.
pub fn star_bar(score: f32) -> String {
    "\u{2605}".repeat(score.max(0.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(19.358), "19.4%");
        assert_eq!(format_pct(6.0), "6.0%");
    }

    #[test]
    fn test_star_bar() {
        assert_eq!(star_bar(5.2), "\u{2605}".repeat(5));
        assert_eq!(star_bar(0.4), "");
        assert_eq!(star_bar(-1.0), "");
    }
}
