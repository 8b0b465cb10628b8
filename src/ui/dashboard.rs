use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;
use crate::ui::plot;

/// Rows shown in the raw-data preview table.
const TABLE_PREVIEW_ROWS: usize = 20;

// ---------------------------------------------------------------------------
// Central dashboard: metrics, charts, raw-data table
// ---------------------------------------------------------------------------

/// Render the dashboard sections for the current selection.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data loaded. Check the log, or use File → Open CSV…");
        });
        return;
    }

    let sel = &state.selection;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Global CO₂ Emission Analysis");
            ui.label(format!(
                "Viewing data for: {} from {} to {}",
                sel.entity.label(),
                sel.start_year,
                sel.end_year
            ));
            ui.separator();

            metrics_section(ui, state);
            ui.separator();

            ui.strong(format!(
                "Annual CO₂ Emissions Trend: {}",
                sel.entity.label()
            ));
            if state.series.is_empty() {
                ui.label("Please select a valid entity and year range to view the trend.");
            } else {
                plot::trend_plot(ui, state);
            }
            ui.separator();

            ui.strong(format!("Top 10 CO₂ Emitters in {}", sel.end_year));
            if state.ranking.is_empty() {
                ui.label(format!(
                    "No ranking data available for the year {}.",
                    sel.end_year
                ));
            } else {
                plot::ranking_plot(ui, state);
            }
            ui.separator();

            ui.strong("Filtered Raw Data Preview");
            if state.series.is_empty() {
                ui.label("No rows to show.");
            } else {
                raw_data_table(ui, state);
            }
        });
}

// ---------------------------------------------------------------------------
// Metric tiles
// ---------------------------------------------------------------------------

fn metrics_section(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        ui.label("No data available for the selected filters.");
        return;
    };
    let sel = &state.selection;

    ui.horizontal(|ui: &mut Ui| {
        metric_tile(
            ui,
            &format!("Total CO₂ Emissions ({}–{})", sel.start_year, sel.end_year),
            &format!("{:.0} Mt", summary.total),
            None,
        );
        metric_tile(
            ui,
            "Average Annual CO₂ Emissions",
            &format!("{:.0} Mt", summary.mean),
            None,
        );
        metric_tile(
            ui,
            "Year of Peak Emissions (in Range)",
            &summary.peak_year.to_string(),
            Some(&format!("{:.0} Mt", summary.peak_value)),
        );
        if let Some(change) = summary.change_percent {
            metric_tile(
                ui,
                &format!("Change from {} to {}", sel.start_year, sel.end_year),
                &format!("{change:.1}%"),
                None,
            );
        }
    });
}

/// A label-over-value tile in the style of a dashboard metric.
fn metric_tile(ui: &mut Ui, label: &str, value: &str, delta: Option<&str>) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(label).small().weak());
            ui.label(RichText::new(value).heading());
            if let Some(delta) = delta {
                ui.label(RichText::new(delta).weak());
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Raw-data table
// ---------------------------------------------------------------------------

fn raw_data_table(ui: &mut Ui, state: &AppState) {
    let rows = &state.series[..state.series.len().min(TABLE_PREVIEW_ROWS)];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(90.0), 4)
        .header(20.0, |mut header| {
            for title in ["Country", "Year", "CO₂ (Mt)", "CO₂ per Capita", "Population"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let obs = &rows[row.index()];
                row.col(|ui| {
                    ui.label(&obs.country);
                });
                row.col(|ui| {
                    ui.label(obs.year.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", obs.co2));
                });
                row.col(|ui| {
                    ui.label(
                        obs.co2_per_capita
                            .map(|v| format!("{v:.2}"))
                            .unwrap_or_else(|| "–".to_string()),
                    );
                });
                row.col(|ui| {
                    ui.label(
                        obs.population
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "–".to_string()),
                    );
                });
            });
        });
}
