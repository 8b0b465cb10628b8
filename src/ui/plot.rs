use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::color::ValueRamp;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trend line chart (annual emissions for the selection)
// ---------------------------------------------------------------------------

/// Render the annual-emissions line chart for the current slice.
pub fn trend_plot(ui: &mut Ui, state: &AppState) {
    let points: Vec<[f64; 2]> = state
        .series
        .iter()
        .map(|obs| [obs.year as f64, obs.co2])
        .collect();
    let name = state.selection.entity.label().to_string();

    Plot::new("trend_plot")
        .height(260.0)
        .x_axis_label("Year")
        .y_axis_label("CO₂ Emissions (Million Tonnes)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(points.clone()))
                .name(&name)
                .width(1.5);
            plot_ui.line(line);
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .name(&name)
                    .radius(2.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Ranking bar chart (top emitters in the end year)
// ---------------------------------------------------------------------------

/// Render the top-emitters bar chart for the selection's end year. Bars are
/// shaded by value through the sequential red ramp.
pub fn ranking_plot(ui: &mut Ui, state: &AppState) {
    let ramp = ValueRamp::fit(&state.ranking);

    let bars: Vec<Bar> = state
        .ranking
        .iter()
        .enumerate()
        .map(|(i, obs)| {
            Bar::new(i as f64, obs.co2)
                .name(&obs.country)
                .fill(ramp.color_for(obs.co2))
                .width(0.7)
        })
        .collect();

    // X axis shows entity names instead of bar indices.
    let labels: Vec<String> = state.ranking.iter().map(|o| o.country.clone()).collect();

    Plot::new("ranking_plot")
        .height(260.0)
        .y_axis_label("CO₂ Emissions (Million Tonnes)")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as usize;
            if (mark.value - idx as f64).abs() < 1e-6 {
                labels.get(idx).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
