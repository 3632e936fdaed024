use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::FinanceDashboardApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Finance Dashboard egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0]) // Room for the full table width
            .with_min_inner_size([960.0, 640.0])
            .with_title("Monthly Finance Dashboard")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Monthly Finance Dashboard",
        options,
        Box::new(|_cc| match FinanceDashboardApp::new() {
            Ok(app) => {
                info!("Successfully initialized dashboard app");
                Ok(Box::new(app) as Box<dyn eframe::App>)
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
