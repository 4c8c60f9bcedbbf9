use eframe::egui;

use crate::state::AppState;
use crate::ui::{map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LicenseMapApp {
    pub state: AppState,
}

impl eframe::App for LicenseMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::filter_panel(ui, &mut self.state);
            });

        // ---- Right side panel: per-state details ----
        egui::SidePanel::right("details_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::details_panel(ui, &self.state);
            });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::license_map(ui, &self.state);
        });
    }
}
