use std::error::Error;
use std::f32::consts::{FRAC_PI_2, TAU};
use std::iter::once;
use std::path::Path;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

use crate::charts::{hex_color, radar_polygon, sensitivity_values};
use crate::estimator::EstimatorOutput;
use crate::model::profile::AnalysisProfile;

const GUIDE_GRAY: RGBColor = RGBColor(205, 205, 205);

type Panel<'b> = DrawingArea<BitMapBackend<'b>, Shift>;

/// Figure 1: radar, weights, rankings, model pie, gauge and sensitivity in a
/// 2x3 grid.
pub fn render_overview(
    profile: &AnalysisProfile,
    output: &EstimatorOutput,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, (1500, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("2030 World Cup Qualification Outlook", ("sans-serif", 26))?;
    let panels = root.split_evenly((2, 3));

    draw_radar(&panels[0], profile)?;
    draw_weight_bars(&panels[1], profile)?;
    draw_competitors(&panels[2], profile)?;
    draw_model_pie(&panels[3], profile)?;
    draw_gauge(&panels[4], output.estimate.final_prob)?;
    draw_sensitivity(&panels[5], profile, output.estimate.final_prob)?;

    root.present()?;
    Ok(())
}

fn draw_radar(area: &Panel<'_>, profile: &AnalysisProfile) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption("Dimension assessment", ("sans-serif", 18))
        .margin(10)
        .build_cartesian_2d(-1.45f32..1.45f32, -1.45f32..1.45f32)?;

    for ring in [0.25f32, 0.5, 0.75, 1.0] {
        let circle = (0..=72).map(|k| {
            let t = k as f32 / 72.0 * TAU;
            (ring * t.cos(), ring * t.sin())
        });
        chart.draw_series(LineSeries::new(circle, &GUIDE_GRAY))?;
    }

    let n = profile.dimensions.len();
    for (i, dim) in profile.dimensions.iter().enumerate() {
        let theta = FRAC_PI_2 + i as f32 * TAU / n as f32;
        chart.draw_series(LineSeries::new(
            vec![(0.0, 0.0), (theta.cos(), theta.sin())],
            &GUIDE_GRAY,
        ))?;
        let (lx, ly) = (1.12 * theta.cos(), 1.12 * theta.sin());
        // nudge left-side labels so they stay inside the panel
        let anchor_x = if lx < -0.1 {
            lx - 0.45
        } else if lx < 0.1 {
            lx - 0.2
        } else {
            lx
        };
        chart.draw_series(once(Text::new(
            dim.label.to_string(),
            (anchor_x, ly),
            ("sans-serif", 14),
        )))?;
    }

    let scores: Vec<f32> = profile.dimensions.iter().map(|d| d.score).collect();
    let poly = radar_polygon(&scores, 10.0);
    chart.draw_series(once(Polygon::new(poly.clone(), BLUE.mix(0.25))))?;
    chart.draw_series(LineSeries::new(poly.clone(), BLUE.stroke_width(2)))?;
    chart.draw_series(
        poly.iter()
            .take(n)
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;
    Ok(())
}

fn draw_weight_bars(area: &Panel<'_>, profile: &AnalysisProfile) -> Result<(), Box<dyn Error>> {
    let n = profile.dimensions.len();
    let mut chart = ChartBuilder::on(area)
        .caption("Dimension weights", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(20)
        .y_label_area_size(40)
        .build_cartesian_2d(0f32..n as f32, 0f32..0.45f32)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("weight")
        .draw()?;

    for (i, dim) in profile.dimensions.iter().enumerate() {
        let (x0, x1) = (i as f32 + 0.15, i as f32 + 0.85);
        chart.draw_series(once(Rectangle::new(
            [(x0, 0.0), (x1, dim.weight)],
            hex_color(dim.color).filled(),
        )))?;
        chart.draw_series(once(Rectangle::new([(x0, 0.0), (x1, dim.weight)], &BLACK)))?;
        chart.draw_series(once(Text::new(
            format!("{:.2}", dim.weight),
            (x0 + 0.1, dim.weight + 0.03),
            ("sans-serif", 13),
        )))?;
        chart.draw_series(once(Text::new(
            dim.label.to_string(),
            (x0, 0.035),
            ("sans-serif", 12),
        )))?;
    }
    Ok(())
}

fn draw_competitors(area: &Panel<'_>, profile: &AnalysisProfile) -> Result<(), Box<dyn Error>> {
    let n = profile.competitors.len();
    let max_rank = profile
        .competitors
        .iter()
        .map(|c| c.rank)
        .max()
        .unwrap_or(1) as f32
        + 2.0;
    let mut chart = ChartBuilder::on(area)
        .caption("Continental rankings", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(10)
        .build_cartesian_2d(0f32..max_rank, 0f32..n as f32)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("rank")
        .draw()?;

    for (i, team) in profile.competitors.iter().enumerate() {
        // best-ranked team on top
        let y = (n - 1 - i) as f32;
        let highlight = team.name == profile.focus_team;
        let fill = if highlight {
            RED.mix(0.8)
        } else {
            RGBColor(150, 150, 150).mix(0.8)
        };
        chart.draw_series(once(Rectangle::new(
            [(0.0, y + 0.15), (team.rank as f32, y + 0.85)],
            fill.filled(),
        )))?;
        chart.draw_series(once(Text::new(
            team.name.to_string(),
            (0.3, y + 0.65),
            ("sans-serif", 12).into_font().color(&WHITE),
        )))?;
        chart.draw_series(once(Text::new(
            format!("#{}", team.rank),
            (team.rank as f32 + 0.3, y + 0.65),
            ("sans-serif", 12),
        )))?;
    }
    Ok(())
}

fn draw_model_pie(area: &Panel<'_>, profile: &AnalysisProfile) -> Result<(), Box<dyn Error>> {
    let area = area.titled("Model weights", ("sans-serif", 18))?;
    let (w, h) = area.dim_in_pixel();
    let center = ((w / 2) as i32, (h / 2) as i32);
    let radius = f64::from(w.min(h)) * 0.3;
    let sizes: Vec<f64> = profile
        .model_pie_weights
        .iter()
        .map(|&v| f64::from(v))
        .collect();
    let colors = vec![
        RGBColor(255, 153, 153),
        RGBColor(102, 179, 255),
        RGBColor(153, 255, 153),
    ];
    let labels = vec!["Ranking base", "Composite score", "Competition"];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 13).into_font().color(&BLACK));
    area.draw(&pie)?;
    Ok(())
}

fn draw_gauge(area: &Panel<'_>, final_prob: f32) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Final probability: {final_prob:.1}%"),
            ("sans-serif", 18),
        )
        .margin(10)
        .x_label_area_size(24)
        .build_cartesian_2d(0f32..100f32, 0f32..1f32)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .y_labels(0)
        .x_desc("probability (%)")
        .draw()?;

    chart.draw_series(once(Rectangle::new(
        [(0.0, 0.35), (100.0, 0.65)],
        RGBColor(211, 211, 211).mix(0.4).filled(),
    )))?;
    chart.draw_series(once(Rectangle::new(
        [(0.0, 0.35), (final_prob, 0.65)],
        GREEN.mix(0.7).filled(),
    )))?;
    chart.draw_series(once(Text::new(
        format!("{final_prob:.1}%"),
        (final_prob / 2.0 - 3.0, 0.56),
        ("sans-serif", 15).into_font().color(&WHITE),
    )))?;
    Ok(())
}

fn draw_sensitivity(
    area: &Panel<'_>,
    profile: &AnalysisProfile,
    final_prob: f32,
) -> Result<(), Box<dyn Error>> {
    let values = sensitivity_values(final_prob, &profile.sensitivity);
    let y_max = values.iter().copied().fold(final_prob, f32::max) * 1.25;
    let n = profile.sensitivity.len();
    let mut chart = ChartBuilder::on(area)
        .caption("Single-factor sensitivity", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(20)
        .y_label_area_size(40)
        .build_cartesian_2d(0f32..n as f32, 0f32..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("probability (%)")
        .draw()?;

    for (i, (case, &value)) in profile.sensitivity.iter().zip(&values).enumerate() {
        let (x0, x1) = (i as f32 + 0.15, i as f32 + 0.85);
        chart.draw_series(once(Rectangle::new(
            [(x0, 0.0), (x1, value)],
            hex_color(case.color).filled(),
        )))?;
        chart.draw_series(once(Text::new(
            format!("+{:.1}%", value - final_prob),
            (x0, value + y_max * 0.05),
            ("sans-serif", 12),
        )))?;
        chart.draw_series(once(Text::new(
            case.label.to_string(),
            (x0, y_max * 0.06),
            ("sans-serif", 11),
        )))?;
    }

    chart.draw_series(LineSeries::new(
        vec![(0.0, final_prob), (n as f32, final_prob)],
        RGBColor(120, 120, 120).stroke_width(1),
    ))?;
    chart.draw_series(once(Text::new(
        "current".to_string(),
        (0.05, final_prob + y_max * 0.05),
        ("sans-serif", 11).into_font().color(&RGBColor(120, 120, 120)),
    )))?;
    Ok(())
}
