use std::error::Error;
use std::iter::once;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{hex_color, scenario_values};
use crate::model::profile::AnalysisProfile;
use crate::report::KEY_RECOMMENDATIONS;

type Panel<'b> = DrawingArea<BitMapBackend<'b>, Shift>;

/// Figure 2: scenario comparison bars next to the recommendations panel.
pub fn render_scenarios(
    profile: &AnalysisProfile,
    final_prob: f32,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, (1200, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_scenario_bars(&panels[0], profile, final_prob)?;
    draw_recommendations(&panels[1], final_prob)?;

    root.present()?;
    Ok(())
}

fn draw_scenario_bars(
    area: &Panel<'_>,
    profile: &AnalysisProfile,
    final_prob: f32,
) -> Result<(), Box<dyn Error>> {
    let values = scenario_values(final_prob, &profile.scenarios, profile.scenario_display_cap);
    let n = profile.scenarios.len();
    let y_max = profile.scenario_display_cap + 5.0;
    let mut chart = ChartBuilder::on(area)
        .caption("Development scenarios", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(20)
        .y_label_area_size(40)
        .build_cartesian_2d(0f32..n as f32, 0f32..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("qualification probability (%)")
        .draw()?;

    for (i, (case, &value)) in profile.scenarios.iter().zip(&values).enumerate() {
        let (x0, x1) = (i as f32 + 0.15, i as f32 + 0.85);
        chart.draw_series(once(Rectangle::new(
            [(x0, 0.0), (x1, value)],
            hex_color(case.color).filled(),
        )))?;
        chart.draw_series(once(Text::new(
            format!("{value:.1}%"),
            (x0 + 0.1, value + y_max * 0.05),
            ("sans-serif", 14),
        )))?;
        chart.draw_series(once(Text::new(
            case.label.to_string(),
            (x0, y_max * 0.05),
            ("sans-serif", 12),
        )))?;
    }
    Ok(())
}

fn draw_recommendations(area: &Panel<'_>, final_prob: f32) -> Result<(), Box<dyn Error>> {
    let area = area.titled("Key recommendations", ("sans-serif", 20))?;
    let body = TextStyle::from(("sans-serif", 16).into_font());
    for (i, line) in KEY_RECOMMENDATIONS.iter().enumerate() {
        area.draw_text(line, &body, (40, 50 + 45 * i as i32))?;
    }

    let footer = format!("Current estimate: {final_prob:.1}%");
    let footer_style = TextStyle::from(("sans-serif", 18).into_font()).color(&RGBColor(0, 128, 0));
    area.draw_text(
        &footer,
        &footer_style,
        (40, 50 + 45 * KEY_RECOMMENDATIONS.len() as i32 + 20),
    )?;
    Ok(())
}
