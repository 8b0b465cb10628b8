use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::data::model::{EntityChoice, WORLD_ENTITY};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets. The
    // combo box lists Global first; the World entity itself is hidden.
    let entities: Vec<String> = dataset
        .entities
        .iter()
        .filter(|name| name.as_str() != WORLD_ENTITY)
        .cloned()
        .collect();
    let (min_year, max_year) = (dataset.min_year, dataset.max_year);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Country or Entity");
            let current = state.selection.entity.clone();
            egui::ComboBox::from_id_salt("entity_select")
                .selected_text(current.label().to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(current == EntityChoice::Global, "Global")
                        .clicked()
                    {
                        state.set_entity(EntityChoice::Global);
                    }
                    for name in &entities {
                        let choice = EntityChoice::Entity(name.clone());
                        if ui.selectable_label(current == choice, name).clicked() {
                            state.set_entity(choice);
                        }
                    }
                });
            ui.separator();

            ui.strong("Year Range");
            let mut start = state.selection.start_year;
            let mut end = state.selection.end_year;
            let mut changed = false;
            changed |= ui
                .add(egui::Slider::new(&mut start, min_year..=max_year).text("From"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut end, min_year..=max_year).text("To"))
                .changed();
            if changed {
                state.set_year_range(start, end);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(
                RichText::new("Data Source: Our World in Data (Global Carbon Project)")
                    .small()
                    .weak(),
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} observations, {} entities, {}–{}",
                ds.len(),
                ds.entities.len(),
                ds.min_year,
                ds.max_year
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open emissions data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_path(&path) {
            Ok(dataset) if dataset.is_empty() => {
                state.status_message = Some("File contained no rows".to_string());
            }
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations for {} entities",
                    dataset.len(),
                    dataset.entities.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
