use eframe::egui;

use fitquest::config::AppConfig;

mod app;
mod ui;

use app::FitApp;

fn main() {
    env_logger::init();

    let config = AppConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([320.0, 560.0]),
        ..Default::default()
    };

    log::info!("starting FitQuest ({:?} window)", config.window_size);
    if let Err(e) = eframe::run_native(
        "FitQuest",
        options,
        Box::new(move |_cc| Ok(Box::new(FitApp::new(config)))),
    ) {
        log::error!("failed to start FitQuest: {}", e);
        std::process::exit(1);
    }
}
