#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use triage_ui::state::State;

fn main() -> eframe::Result {
    // Log to stderr (run with `RUST_LOG=debug` to trace backend calls).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Triage",
        native_options,
        Box::new(|cc| {
            // Uploaded images in the detail popup render through the http
            // image loader.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let state = State::default();
            let app = triage_ui::TriageApp::new(state);
            Ok(Box::new(app))
        }),
    )
}
