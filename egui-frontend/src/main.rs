use eframe::egui;
use log::{error, info};

use employee_roster_egui::config::AppConfig;
use employee_roster_egui::ui::EmployeeRosterApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging; RUST_LOG controls verbosity
    env_logger::init();
    info!("Starting Employee Roster egui application");

    let config = AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 400.0])
            .with_title(config.window_title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            match EmployeeRosterApp::new(cc, config) {
                Ok(app) => {
                    info!("Successfully initialized Employee Roster app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    // Convert anyhow::Error to eframe::Error
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
