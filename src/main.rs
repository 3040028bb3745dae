mod charts;
mod error;
mod estimator;
mod model;
mod report;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::AnalysisError;
use crate::estimator::{EstimatorOutput, run_estimator};
use crate::model::profile::AnalysisProfile;
use crate::report::text::render_report_text;
use crate::report::{DimensionRow, ReportContext};

#[derive(Parser, Debug)]
#[command(
    name = "wcq-outlook",
    version,
    about = "Heuristic 2030 World Cup qualification outlook with chart export"
)]
struct Cli {
    /// Output directory for chart images and the JSON summary
    #[arg(long, default_value = "wcq-out")]
    out: PathBuf,
    /// Skip chart rendering; still print the report and write the summary
    #[arg(long)]
    no_charts: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    // Single error boundary: report the failure and exit normally.
    if let Err(err) = run(&cli) {
        error!("analysis failed: {err}");
    }
}

fn run(cli: &Cli) -> Result<(), AnalysisError> {
    let profile = AnalysisProfile::default_v1();
    profile.validate()?;

    let output = run_estimator(&profile);
    let ctx = build_report_context(&profile, &output);
    print!("{}", render_report_text(&ctx));

    fs::create_dir_all(&cli.out)?;

    let sensitivity = charts::sensitivity_values(output.estimate.final_prob, &profile.sensitivity);
    let scenarios = charts::scenario_values(
        output.estimate.final_prob,
        &profile.scenarios,
        profile.scenario_display_cap,
    );
    let summary = report::json::build_summary(&profile, &output, &sensitivity, &scenarios);
    let json_path = cli.out.join("summary.json");
    fs::write(&json_path, report::json::render_summary_json(&summary)?)?;
    info!("wrote {}", json_path.display());

    if cli.no_charts {
        info!("chart rendering skipped (--no-charts)");
        return Ok(());
    }
    charts::render_all(&profile, &output, &cli.out)
        .map_err(|e| AnalysisError::Chart(e.to_string()))?;
    info!("charts written to {}", cli.out.display());
    Ok(())
}

fn build_report_context(profile: &AnalysisProfile, output: &EstimatorOutput) -> ReportContext {
    ReportContext {
        dimensions: profile
            .dimensions
            .iter()
            .map(|d| DimensionRow {
                name: d.name,
                score: d.score,
            })
            .collect(),
        composite_score: output.composite_score,
        estimate: output.estimate,
        focus_team: profile.focus_team,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["wcq-outlook"]).unwrap();
        assert_eq!(cli.out, PathBuf::from("wcq-out"));
        assert!(!cli.no_charts);
    }

    #[test]
    fn test_cli_out_and_no_charts() {
        let cli = Cli::try_parse_from(["wcq-outlook", "--out", "/tmp/x", "--no-charts"]).unwrap();
        assert_eq!(cli.out, PathBuf::from("/tmp/x"));
        assert!(cli.no_charts);
    }

    #[test]
    fn test_cli_rejects_unknown_argument() {
        assert!(Cli::try_parse_from(["wcq-outlook", "--bogus"]).is_err());
    }

    #[test]
    fn test_report_context_carries_estimate() {
        let profile = AnalysisProfile::default_v1();
        let output = run_estimator(&profile);
        let ctx = build_report_context(&profile, &output);
        assert_eq!(ctx.dimensions.len(), 4);
        assert!((ctx.estimate.final_prob - 19.36).abs() < 0.01);
    }
}
