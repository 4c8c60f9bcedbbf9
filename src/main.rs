mod app;
mod color;
mod data;
mod geo;
mod state;
mod ui;

use app::LicenseMapApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Provider License and Specialty Map",
        options,
        Box::new(|_cc| Ok(Box::new(LicenseMapApp::default()))),
    )
}
