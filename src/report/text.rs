use crate::report::{KEY_RECOMMENDATIONS, ReportContext, format_pct, star_bar};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("============================================================\n");
    out.push_str(&format!(
        "2030 World Cup Qualification Outlook: {}\n",
        ctx.focus_team
    ));
    out.push_str("============================================================\n\n");

    out.push_str("1. Dimension assessment\n");
    out.push_str("----------------------------------------\n");
    for dim in &ctx.dimensions {
        out.push_str(&format!(
            "{:<24} {:>4.1}  {}\n",
            dim.name,
            dim.score,
            star_bar(dim.score)
        ));
    }
    out.push_str(&format!(
        "\nComposite competitiveness score: {:.2}/10\n\n",
        ctx.composite_score
    ));

    out.push_str("2. Probability models\n");
    out.push_str("----------------------------------------\n");
    out.push_str(&format!(
        "Ranking baseline:        {}\n",
        format_pct(ctx.estimate.base_prob)
    ));
    out.push_str(&format!(
        "Composite score model:   {}\n",
        format_pct(ctx.estimate.score_prob)
    ));
    out.push_str(&format!(
        "Competition environment: {}\n",
        format_pct(ctx.estimate.competition_prob)
    ));
    out.push_str(&format!(
        "Final estimate:          {}\n\n",
        format_pct(ctx.estimate.final_prob)
    ));

    out.push_str("3. Conclusions\n");
    out.push_str("----------------------------------------\n");
    out.push_str(&format!(
        "Under current conditions the 2030 qualification probability is about {}.\n",
        format_pct(ctx.estimate.final_prob)
    ));
    out.push_str(&format!("{}\n", outlook_statement(ctx.estimate.final_prob)));
    out.push_str(&format!(
        "Strongest dimension: {}. Weakest dimension: {}.\n\n",
        strongest(ctx),
        weakest(ctx)
    ));

    out.push_str("4. Key recommendations\n");
    out.push_str("----------------------------------------\n");
    for line in KEY_RECOMMENDATIONS {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("5. Strategy outlook\n");
    out.push_str("----------------------------------------\n");
    out.push_str("Short term (1-2 years):\n");
    out.push_str("  - Fill key positions with naturalized players\n");
    out.push_str("  - Take full points against lower-table qualifier opponents\n");
    out.push_str("  - Target a favorable qualifier draw\n");
    out.push_str("Long term (3-5 years):\n");
    out.push_str("  - Reform youth training; lift the dimension above 6.5\n");
    out.push_str("  - Sustain the league and grow domestic competitiveness\n");
    out.push_str("  - Climb steadily into the continental top 12\n\n");

    out.push_str("============================================================\n");
    out.push_str("Heuristic estimate from public data; actual odds depend on many variables.\n");
    out.push_str("============================================================\n");

    out
}

fn outlook_statement(final_prob: f32) -> &'static str {
    if final_prob >= 30.0 {
        "Qualification is a realistic target."
    } else if final_prob >= 15.0 {
        "Qualification is possible but depends on sustained improvement."
    } else {
        "Qualification is unlikely without structural change."
    }
}

fn strongest(ctx: &ReportContext) -> &'static str {
    ctx.dimensions
        .iter()
        .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
        .map(|d| d.name)
        .unwrap_or("n/a")
}

fn weakest(ctx: &ReportContext) -> &'static str {
    ctx.dimensions
        .iter()
        .min_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
        .map(|d| d.name)
        .unwrap_or("n/a")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::estimate::ProbabilityEstimate;
    use crate::report::DimensionRow;

    fn dummy_ctx() -> ReportContext {
        ReportContext {
            dimensions: vec![
                DimensionRow { name: "Youth development", score: 5.2 },
                DimensionRow { name: "National-team status", score: 5.8 },
                DimensionRow { name: "League quality", score: 6.1 },
                DimensionRow { name: "External environment", score: 4.9 },
            ],
            composite_score: 5.61,
            estimate: ProbabilityEstimate {
                base_prob: 6.0,
                score_prob: 39.27,
                competition_prob: 6.25,
                final_prob: 19.36,
            },
            focus_team: "China",
        }
    }

    #[test]
    fn test_report_contains_final_probability() {
        let text = render_report_text(&dummy_ctx());
        assert!(text.contains("Final estimate:          19.4%"));
        assert!(text.contains("Composite competitiveness score: 5.61/10"));
    }

    #[test]
    fn test_report_sections_present() {
        let text = render_report_text(&dummy_ctx());
        for header in [
            "1. Dimension assessment",
            "2. Probability models",
            "3. Conclusions",
            "4. Key recommendations",
            "5. Strategy outlook",
        ] {
            assert!(text.contains(header), "missing section: {header}");
        }
    }

    #[test]
    fn test_strongest_and_weakest() {
        let ctx = dummy_ctx();
        assert_eq!(strongest(&ctx), "League quality");
        assert_eq!(weakest(&ctx), "External environment");
    }

    #[test]
    fn test_outlook_statement_bands() {
        assert_eq!(
            outlook_statement(35.0),
            "Qualification is a realistic target."
        );
        assert_eq!(
            outlook_statement(19.4),
            "Qualification is possible but depends on sustained improvement."
        );
        assert_eq!(
            outlook_statement(5.0),
            "Qualification is unlikely without structural change."
        );
    }
}
