use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::data::aggregate::parse_description;
use crate::data::model::StateAggregate;
use crate::geo;
use crate::state::AppState;

const MARKER_COLOR: Color32 = Color32::from_rgb(0xAD, 0xD8, 0xE6);

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// One plotted state.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub code: String,
    pub position: [f64; 2],
    /// Display name followed by the plain provider lines.
    pub hover: String,
}

/// Markers for every aggregate whose code has a map position.
pub fn markers(aggregates: &[StateAggregate]) -> Vec<Marker> {
    aggregates
        .iter()
        .filter_map(|agg| {
            let Some(position) = geo::map_position(&agg.code) else {
                log::warn!("No map position for {:?}; listed in details only", agg.code);
                return None;
            };
            let mut hover = agg.title().to_string();
            for line in &agg.descriptions {
                hover.push('\n');
                hover.push_str(parse_description(line).map_or(line.as_str(), |(_, text)| text));
            }
            Some(Marker {
                code: agg.code.clone(),
                position,
                hover,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Map plot (central panel)
// ---------------------------------------------------------------------------

/// Render the state scatter map in the central panel.
pub fn license_map(ui: &mut Ui, state: &AppState) {
    let view = match &state.view {
        Some(v) => v,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a CSV file to map provider licenses  (File → Open CSV…)");
            });
            return;
        }
    };

    ui.heading("Provider Licenses by State");
    let markers = markers(&view.aggregates);

    Plot::new("license_map")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .include_x(-126.0)
        .include_x(-66.0)
        .include_y(23.0)
        .include_y(50.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, _| name.to_string())
        .show(ui, |plot_ui| {
            for m in &markers {
                let point = Points::new(PlotPoints::new(vec![m.position]))
                    .name(&m.hover)
                    .color(MARKER_COLOR)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(6.0);
                plot_ui.points(point);

                let label = Text::new(
                    PlotPoint::new(m.position[0], m.position[1] + 0.9),
                    RichText::new(&m.code).small(),
                )
                .color(Color32::GRAY);
                plot_ui.text(label);
            }
        });
}
