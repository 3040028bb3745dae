use thiserror::Error;

/// Precondition violations caught by `AnalysisProfile::validate`.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("expected 4 evaluation dimensions, got {0}")]
    DimensionCount(usize),
    #[error("dimension weights sum to {sum:.6}, expected 1.0")]
    WeightSum { sum: f32 },
    #[error("dimension '{name}' score {score} is outside 0..=10")]
    ScoreRange { name: &'static str, score: f32 },
    #[error("dimension '{name}' weight {weight} is outside 0..=1")]
    WeightRange { name: &'static str, weight: f32 },
    #[error("ranking constants are degenerate: {0}")]
    Ranking(String),
    #[error("case '{label}' has non-positive multiplier {multiplier}")]
    Multiplier { label: &'static str, multiplier: f32 },
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid profile: {0}")]
    Profile(#[from] ProfileError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("summary serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart rendering failed: {0}")]
    Chart(String),
}
