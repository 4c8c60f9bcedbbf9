use std::path::Path;

use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::to_color32;
use crate::data::aggregate::parse_description;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the provider / specialty multi-selects and the colour legend.
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(view) = &state.view else {
        ui.heading("Filters");
        ui.separator();
        ui.label(no_view_message(state));
        return;
    };

    // Clone what we need so we can mutate state inside the loop.
    let providers = view.provider_options.clone();
    let specialties = view.specialty_options.clone();
    let legend = view.colors.clone();

    ScrollArea::vertical()
        .id_salt("filter_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Filter Providers");
            multi_select(ui, "providers", "Select Providers", &providers, state, Dimension::Provider);
            ui.add_space(8.0);

            ui.heading("Filter by Specialty");
            multi_select(ui, "specialties", "Select Specialties", &specialties, state, Dimension::Specialty);

            if state.selection.is_unrestricted() {
                ui.weak("No filter applied: showing every provider.");
            }
            ui.separator();

            if !legend.is_empty() {
                ui.strong("Legend");
                for (provider, color) in legend.entries() {
                    ui.label(RichText::new(format!("● {provider}")).color(to_color32(*color)));
                }
            }
        });
}

/// Placeholder for the filter panel when there is nothing to filter.
fn no_view_message(state: &AppState) -> &'static str {
    if state.upload.is_some() {
        "Upload could not be read."
    } else {
        "No file loaded."
    }
}

#[derive(Clone, Copy)]
enum Dimension {
    Provider,
    Specialty,
}

fn multi_select(
    ui: &mut Ui,
    id: &str,
    title: &str,
    options: &[String],
    state: &mut AppState,
    dim: Dimension,
) {
    let n_selected = match dim {
        Dimension::Provider => state.selection.providers.len(),
        Dimension::Specialty => state.selection.specialties.len(),
    };
    let header_text = format!("{title}  ({n_selected}/{})", options.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(id)
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Clear").clicked() {
                match dim {
                    Dimension::Provider => state.clear_providers(),
                    Dimension::Specialty => state.clear_specialties(),
                }
            }

            for value in options {
                let mut checked = match dim {
                    Dimension::Provider => state.selection.providers.contains(value),
                    Dimension::Specialty => state.selection.specialties.contains(value),
                };
                if ui.checkbox(&mut checked, value.as_str()).changed() {
                    match dim {
                        Dimension::Provider => state.toggle_provider(value),
                        Dimension::Specialty => state.toggle_specialty(value),
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Right side panel – per-state breakdown
// ---------------------------------------------------------------------------

/// One heading per state followed by its coloured provider lines.
pub fn details_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Provider Details");
    ui.separator();

    let Some(view) = &state.view else {
        return;
    };
    if view.aggregates.is_empty() {
        ui.label("No licenses match the current filters.");
        return;
    }

    ScrollArea::vertical()
        .id_salt("details_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for agg in &view.aggregates {
                ui.label(RichText::new(agg.title()).size(16.0).strong());
                for line in &agg.descriptions {
                    match parse_description(line) {
                        Some((color, text)) => {
                            ui.label(RichText::new(text).color(to_color32(color)));
                        }
                        None => {
                            ui.label(line.as_str());
                        }
                    }
                }
                ui.separator();
            }
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

        if let Some(upload) = &state.upload {
            ui.label(upload.name.as_str());
        }
        if let Some(view) = &state.view {
            ui.label(format!(
                "{} records selected, {} states",
                view.matching_records,
                view.aggregates.len()
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
        .set_title("Open provider licenses")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match read_upload(&path) {
            Ok((name, bytes)) => state.set_upload(name, bytes),
            Err(e) => {
                log::error!("Failed to open file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn read_upload(path: &Path) -> anyhow::Result<(String, Vec<u8>)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_upload_adds_path_context() {
        let err = read_upload(Path::new("/nonexistent/providers.csv")).unwrap_err();
        assert!(format!("{err:#}").starts_with("reading /nonexistent/providers.csv"));
    }

    #[test]
    fn failed_parse_is_not_reported_as_missing_file() {
        let mut state = AppState::default();
        assert_eq!(no_view_message(&state), "No file loaded.");

        state.set_upload("bad.csv".into(), b"Provider\nDr. A\n".to_vec());
        assert!(state.view.is_none());
        assert_eq!(no_view_message(&state), "Upload could not be read.");
    }
}
