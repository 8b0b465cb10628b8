mod app;
mod color;
mod data;
mod state;
mod ui;

use app::CarbonLensApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // One fetch per process; the UI only ever sees the memoized result.
    let mut state = AppState::default();
    match data::loader::load() {
        Ok(dataset) if dataset.is_empty() => {
            state.status_message =
                Some("Could not fetch the emissions dataset (see log)".to_string());
        }
        Ok(dataset) => {
            log::info!(
                "Loaded {} observations for {} entities ({}–{})",
                dataset.len(),
                dataset.entities.len(),
                dataset.min_year,
                dataset.max_year
            );
            state.set_dataset(dataset.clone());
        }
        Err(e) => {
            log::error!("Dataset rejected: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Carbon Lens – CO₂ Emissions Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(CarbonLensApp::new(state)))),
    )
}
