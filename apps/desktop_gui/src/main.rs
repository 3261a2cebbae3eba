mod backend_bridge;
mod controller;
mod ui;

use crossbeam_channel::bounded;
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::PdfGeneratorApp,
};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = client_core::load_settings();
    tracing::info!(
        server_url = %settings.server_url,
        output_dir = %settings.output_dir.display(),
        save_dialog = settings.save_dialog,
        "starting desktop generator"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI PDF Generator")
            .with_inner_size([560.0, 720.0])
            .with_min_inner_size([420.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "AI PDF Generator",
        options,
        Box::new(|_cc| Ok(Box::new(PdfGeneratorApp::new(cmd_tx, ui_rx)))),
    )
}
