/// One of the four fixed evaluation categories.
#[derive(Debug, Clone)]
pub struct DimensionScore {
    pub name: &'static str,
    /// Short label used on chart axes.
    pub label: &'static str,
    /// Rating on a 0..=10 scale.
    pub score: f32,
    /// Share of the composite; the four weights sum to 1.0.
    pub weight: f32,
    /// Hex color used by the chart panels.
    pub color: &'static str,
}

pub fn composite_score(dimensions: &[DimensionScore]) -> f32 {
    dimensions.iter().map(|d| d.score * d.weight).sum()
}
